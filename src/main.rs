use anyhow::Context;
use clap::Parser;
use delim_print::utils::{logger, validation::Validate};
use delim_print::{join_to_string, CliConfig, PrintError};

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate().context("Invalid command line")?;

    let resolved = config
        .resolve()
        .context("Failed to resolve values and delimiter")?;
    let line = join_to_string(&resolved.values, &resolved.delimiter)
        .context("Failed to render values")?;
    tracing::debug!(
        count = resolved.values.len(),
        delimiter = ?resolved.delimiter,
        "Printing {}",
        line
    );

    delim_print::print(&resolved.values, &resolved.delimiter)
        .context("Failed to write to stdout")?;
    Ok(())
}

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("{:#}", e);
        match e.downcast_ref::<PrintError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }

    tracing::debug!("Done");
}
