use hospital_dashboard::{SimulationConfig, run};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimulationConfig::default();
    let report = run(&config)?;

    info!("{}", report.kpis);
    info!("{}", report.export);
    info!("Generated {} chart images", report.charts.len());
    Ok(())
}
