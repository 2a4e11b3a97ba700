use anyhow::Result;
use clap::Parser;
use shopping_cart_cli::{
    cli::{Args, CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()
        .and_then(|config| config.with_overrides(args.audit_log.clone(), args.store_name.clone()))?;

    // Logs go to stderr; stdout belongs to the shop console.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Configuration loaded, audit log at {}",
        config.audit_log_path.display()
    );

    let mut app = CliApp::from_config(&config).map_err(|e| {
        tracing::error!("Failed to start shopping session: {}", e);
        e
    })?;
    app.run()?;

    tracing::info!("Shopping session closed");
    Ok(())
}
