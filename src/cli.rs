use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "file-bundle")]
#[command(
    about = "Concatenate text files into one output file, each block labeled with its \
                   source path."
)]
pub struct Cli {
    /// Source files, written to the output in the order given.
    #[arg(num_args(0..))]
    pub paths: Vec<PathBuf>,

    /// Destination file; created or truncated on every run.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Read additional source paths (one per line) from this file, or stdin with "-".
    #[arg(short = 'm', long = "manifest")]
    pub manifest: Option<PathBuf>,

    /// Log every block as it is written.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
