use chrono::NaiveDate;
use maevo::AppConfig;
use std::path::PathBuf;

/// Command-line arguments. Anything given here overrides the config file.
#[derive(Debug)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub population: Option<usize>,
    pub history: Option<PathBuf>,
    pub save_config: Option<PathBuf>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

impl Args {
    pub fn parse() -> Self {
        let matches = clap::Command::new("maevo")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Genetic search for moving-average crossover windows")
            .arg(
                clap::Arg::new("config")
                    .short('c')
                    .long("config")
                    .help("Path to a TOML configuration file")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                clap::Arg::new("data")
                    .short('d')
                    .long("data")
                    .help("CSV file with a date and close column")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                clap::Arg::new("start")
                    .long("start")
                    .help("First date to use (YYYY-MM-DD)")
                    .value_parser(parse_date),
            )
            .arg(
                clap::Arg::new("end")
                    .long("end")
                    .help("Last date to use (YYYY-MM-DD)")
                    .value_parser(parse_date),
            )
            .arg(
                clap::Arg::new("seed")
                    .long("seed")
                    .help("Random seed for a reproducible run")
                    .value_parser(clap::value_parser!(u64)),
            )
            .arg(
                clap::Arg::new("generations")
                    .short('g')
                    .long("generations")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                clap::Arg::new("population")
                    .short('p')
                    .long("population")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                clap::Arg::new("history")
                    .long("history")
                    .help("Write per-generation statistics to this JSON file")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                clap::Arg::new("save-config")
                    .long("save-config")
                    .help("Write the effective configuration to this TOML file")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .get_matches();

        Args {
            config: matches.get_one::<PathBuf>("config").cloned(),
            data: matches.get_one::<PathBuf>("data").cloned(),
            start: matches.get_one::<NaiveDate>("start").copied(),
            end: matches.get_one::<NaiveDate>("end").copied(),
            seed: matches.get_one::<u64>("seed").copied(),
            generations: matches.get_one::<usize>("generations").copied(),
            population: matches.get_one::<usize>("population").copied(),
            history: matches.get_one::<PathBuf>("history").cloned(),
            save_config: matches.get_one::<PathBuf>("save-config").cloned(),
        }
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(data) = &self.data {
            config.data.csv_path = Some(data.clone());
        }
        if self.start.is_some() {
            config.data.start = self.start;
        }
        if self.end.is_some() {
            config.data.end = self.end;
        }
        if self.seed.is_some() {
            config.evolution.seed = self.seed;
        }
        if let Some(generations) = self.generations {
            config.evolution.generations = generations;
        }
        if let Some(population) = self.population {
            config.evolution.population_size = population;
        }
    }
}
