use std::process::ExitCode;

use asset_tidy::{Args, run};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = ConfigBuilder::new().set_time_level(simplelog::LevelFilter::Off).build();
    if let Err(e) = TermLogger::init(
        args.log_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger unavailable: {e}");
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {e}");
            ExitCode::FAILURE
        }
    }
}
