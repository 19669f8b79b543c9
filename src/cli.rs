//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "multidoc",
    version,
    about = "Split a Kubernetes YAML list response into a YAML multi-document stream."
)]
pub struct Cli {
    /// The YAML list response to split. [default: reads from stdin]
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// Write the multidoc stream to a file instead of stdout.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,
}
