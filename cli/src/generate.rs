#![deny(missing_docs)]

//! # Generate Command
//!
//! Runs the pipeline once over a handler file and writes the document of
//! one group as JSON or YAML.

use crate::error::{CliError, CliResult};
use docket_core::{document_service, ApiSource, DocsProperties};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output encoding.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Handler metadata (YAML or JSON).
    #[clap(long, short = 'i')]
    pub handlers: PathBuf,

    /// Documentation configuration; defaults apply when absent.
    #[clap(long, short = 'c', env = "DOCKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Group to write. The default group when omitted.
    #[clap(long, short = 'g')]
    pub group: Option<String>,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Destination file. Standard output when omitted.
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Loads the configuration, or the defaults when no file is given.
pub fn load_properties(path: Option<&Path>) -> CliResult<DocsProperties> {
    match path {
        Some(path) => Ok(DocsProperties::from_path(path)?),
        None => Ok(DocsProperties::default()),
    }
}

/// Renders the requested group.
pub fn render(args: &GenerateArgs) -> CliResult<String> {
    ensure_exists(&args.handlers)?;
    let source = ApiSource::from_path(&args.handlers)?;
    let properties = load_properties(args.config.as_deref())?;
    let service = document_service(source, properties)?;
    let specification = service.specification(args.group.as_deref(), None)?;
    let rendered = match args.format {
        Format::Json => specification.to_json()?,
        Format::Yaml => specification.to_yaml()?,
    };
    Ok(rendered)
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let rendered = render(args)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!(output = %path.display(), "Wrote documentation");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Fails unless the handler file exists, so the error names the path.
pub fn ensure_exists(path: &Path) -> CliResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::General(format!(
            "Handler file not found: {}",
            path.display()
        )))
    }
}
