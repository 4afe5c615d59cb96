use bounds_header::cli::commands::{cmd_generate, cmd_serve};
use bounds_header::cli::config::{Cli, Commands, build_generator_options, load_config};
use clap::Parser;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            input,
            output,
            prefix,
            guard,
            manifest,
        } => {
            let options = build_generator_options(&config, prefix.as_deref(), guard.as_deref());
            let mut stdout = std::io::stdout().lock();
            cmd_generate(
                &input,
                output.as_deref(),
                manifest.as_deref(),
                &options,
                cli.verbose,
                &mut stdout,
            )?;
        }
        Commands::Serve {
            input,
            prefix,
            guard,
        } => {
            let options = build_generator_options(&config, prefix.as_deref(), guard.as_deref());
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            cmd_serve(&input, &options, stdin, stdout)?;
        }
    }

    Ok(())
}

/// Log to stderr; `-v` steps from warn up to trace.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
