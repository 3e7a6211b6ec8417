use box_demo::utils::{logger, validation::Validate};
use box_demo::{CliConfig, DemoEngine};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level());
    tracing::info!("Starting box-demo");
    tracing::debug!("Resolved config: {:?}", config);

    let engine = DemoEngine::new(config);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = engine.run(&mut stdout.lock(), &mut stderr.lock())?;

    if let Some(e) = outcome {
        tracing::info!("Demo finished after rejecting a {} value of {}", e.dimension(), e.rejected_value());
    }

    Ok(())
}
