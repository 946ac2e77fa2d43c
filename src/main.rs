use anyhow::Result;
use chrono::Local;
use clap::Parser;
use leadmap::cli::{Cli, Commands};
use leadmap::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            path,
            format,
            output,
            top,
            as_of,
            no_parallel,
            config,
        } => {
            let score_config = commands::ScoreConfig {
                input: path,
                format: format.into(),
                output,
                top,
                // The clock is read only here, so every record in the
                // batch is evaluated as of the same date.
                as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
                parallel: !no_parallel,
                config_path: config,
            };
            commands::handle_score(score_config)
        }
        Commands::Explore { path } => commands::handle_explore(&path),
        Commands::Validate { path, top } => {
            commands::handle_validate(commands::ValidateConfig { input: path, top })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
