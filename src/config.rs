use crate::bundle::gather;
use crate::cli::Cli;
use anyhow::Result;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered source paths: positional arguments first, then manifest entries.
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn new(
        sources: Vec<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Config {
            sources,
            output: output.into(),
            verbose: false,
        }
    }

    /// Resolve an already parsed `Cli`, loading the manifest if one was given.
    pub fn from_parsed(cli: Cli) -> Result<Self> {
        let mut sources = cli.paths;
        if let Some(manifest) = &cli.manifest {
            sources.extend(gather::load_manifest(manifest)?);
        }
        Ok(Config {
            sources,
            output: cli.output,
            verbose: cli.verbose,
        })
    }
}
