use data_runtime::configs::telemetry::{self, TelemetryCfg};
use greenwold::platform_winit;

fn main() {
    // Log config comes from data/config/telemetry.toml; LOG_LEVEL overrides.
    let cfg = telemetry::load_default().unwrap_or_else(|e| {
        eprintln!("telemetry config: {e:#}; using defaults");
        TelemetryCfg::default()
    });
    client_core::telemetry::init(&cfg);
    if let Err(e) = platform_winit::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
