mod cli;

use maevo::{
    engines::generation::{run_search, LogProgressCallback},
    report, ConfigManager, PriceSeries,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();

    let mut manager = ConfigManager::new();
    manager.load(args.config.as_deref())?;
    manager.update(|config| args.apply_overrides(config))?;

    if let Some(path) = &args.save_config {
        manager.save_to_file(path)?;
        log::info!("Saved effective configuration to {}", path.display());
    }

    let config = manager.get();
    let prices = PriceSeries::load_csv(&config.data)?;
    let result = run_search(&prices, &config.evolution, LogProgressCallback)?;

    if let Some(path) = &args.history {
        report::write_history_json(path, &result.outcome.history)?;
        log::info!("Wrote generation history to {}", path.display());
    }

    println!("{}", report::format_best(&result.best));
    log::debug!("{}", report::format_summary(&result.best));
    Ok(())
}
