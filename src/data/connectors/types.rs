/// Columns a price history must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Timestamp,
    Close,
}

impl RequiredColumn {
    /// Name the column is normalized to
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Close => "close",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Timestamp, Self::Close]
    }

    /// Common alternative column names, in lookup order
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Timestamp => vec![
                "timestamp", "Timestamp", "date", "Date", "datetime", "Datetime", "DateTime", "time", "Time",
            ],
            Self::Close => vec!["close", "Close", "CLOSE", "adj_close", "Adj Close", "c"],
        }
    }
}
