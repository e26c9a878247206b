#![deny(missing_docs)]

//! # Docket CLI
//!
//! Command line front end of the documentation pipeline.
//!
//! Supported Commands:
//! - `generate`: Handler metadata + configuration -> OpenAPI JSON/YAML.
//! - `serve`: HTTP endpoint serving every group, rewritten per request.

use clap::{Parser, Subcommand};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::error::{CliError, CliResult};

mod error;
mod generate;
#[cfg(feature = "server")]
mod server;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI documentation pipeline")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Writes the OpenAPI document of one group.
    Generate(generate::GenerateArgs),
    /// Serves the OpenAPI documents over HTTP.
    #[cfg(feature = "server")]
    Serve(server::ServeArgs),
}

fn init_log() -> CliResult<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| CliError::General(format!("error initializing logging: {}", e)))
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_log()?;

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        #[cfg(feature = "server")]
        Commands::Serve(args) => actix_web::rt::System::new().block_on(server::execute(args))?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "docket", "generate", "-i", "handlers.yaml", "--format", "yaml", "-g", "pets",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.format, generate::Format::Yaml);
                assert_eq!(args.group.as_deref(), Some("pets"));
            }
            #[cfg(feature = "server")]
            Commands::Serve(_) => panic!("expected generate"),
        }
    }
}
