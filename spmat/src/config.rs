//! Command-line configuration

use clap::{Parser, Subcommand, ValueEnum};
use spmat_core::ParseOptions;
use std::path::PathBuf;

/// Left operand loaded by the interactive menu when no path is given
pub const DEFAULT_LEFT_FILE: &str = "matrixfile1.txt";

/// Right operand loaded by the interactive menu when no path is given
pub const DEFAULT_RIGHT_FILE: &str = "matrixfile3.txt";

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "SPMAT - Add, subtract, multiply and transpose sparse coordinate matrices")]
pub struct Cli {
    /// How result matrices are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Reject files that list the same coordinate twice
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parser options selected by the flags
    pub fn parse_options(&self) -> ParseOptions {
        if self.strict {
            ParseOptions::strict()
        } else {
            ParseOptions::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load two matrices and pick operations from a numbered menu
    Menu {
        /// First matrix file
        #[arg(long, env = "SPMAT_LEFT", default_value = DEFAULT_LEFT_FILE)]
        left: PathBuf,

        /// Second matrix file
        #[arg(long, env = "SPMAT_RIGHT", default_value = DEFAULT_RIGHT_FILE)]
        right: PathBuf,
    },
    /// Print LEFT + RIGHT
    Add { left: PathBuf, right: PathBuf },
    /// Print LEFT - RIGHT
    Sub { left: PathBuf, right: PathBuf },
    /// Print LEFT * RIGHT
    Mul { left: PathBuf, right: PathBuf },
    /// Print the transpose of MATRIX
    Transpose { matrix: PathBuf },
}

/// Rendering of result matrices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The `rows=`/`cols=` coordinate text the tool reads
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Grid of all cells, for small matrices
    Dense,
}
