use berlin_uhr::cli::Cli;
use berlin_uhr::config::Config;
use berlin_uhr::error_report;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Logging depends on the config, so a config failure is reported directly.
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", error_report(&err));
            std::process::exit(1);
        }
    };

    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    berlin_uhr::init_logger(level);

    if let Err(err) = berlin_uhr::run(&cli, &config) {
        eprintln!("{}", error_report(&err));
        std::process::exit(1);
    }
}
