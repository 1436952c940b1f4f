use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use towermind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = ServeOptions::parse();

    // Set the logger to write-and-flush so that it doesn't compete with the command stream.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .start()?;

    // Display the server package information.
    print_header();

    // Run the main command loop.
    if let Err(e) = Server::new(options)?.run()
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}

fn print_header()
{
    log::info!("starting {} server v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
