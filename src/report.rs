use crate::engines::generation::GenerationStats;
use crate::error::Result;
use crate::types::ScoredCandidate;
use std::path::Path;

pub fn format_best(best: &ScoredCandidate) -> String {
    format!(
        "Best strategy: Short Window = {}, Long Window = {}",
        best.candidate.short_window, best.candidate.long_window
    )
}

pub fn format_summary(best: &ScoredCandidate) -> String {
    format!("{}\nFitness (summed strategy returns): {:.6}", format_best(best), best.fitness)
}

/// Dump per-generation statistics as pretty JSON.
pub fn write_history_json<P: AsRef<Path>>(path: P, history: &[GenerationStats]) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json)?;
    Ok(())
}
