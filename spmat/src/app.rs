//! Command dispatch shared by the binary and its tests

use anyhow::{Context, Result};
use log::debug;
use spmat_core::{add, multiply, subtract, transpose, SparseMatrix};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use crate::config::{Cli, Commands};
use crate::loader::load_matrix;
use crate::render::{banner, render_result};
use crate::session::Session;

/// Execute the parsed command line, reading menu input from `input`
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let options = cli.parse_options();
    let load = |path: &PathBuf| load_matrix(path, &options);
    let start_time = Instant::now();

    match &cli.command {
        Commands::Menu { left, right } => {
            writeln!(out, "{}", banner())?;
            writeln!(out, "\nReading matrix data files...")?;
            let session = Session::new(load(left)?, load(right)?);
            writeln!(out, "Matrices loaded successfully!")?;
            session.run(input, out, cli.format)?;
        }
        Commands::Add { left, right } => {
            let result = add(&load(left)?, &load(right)?).context("Addition failed")?;
            print_result(out, "Addition", &result, cli)?;
        }
        Commands::Sub { left, right } => {
            let result = subtract(&load(left)?, &load(right)?).context("Subtraction failed")?;
            print_result(out, "Subtraction", &result, cli)?;
        }
        Commands::Mul { left, right } => {
            let result = multiply(&load(left)?, &load(right)?).context("Multiplication failed")?;
            print_result(out, "Multiplication", &result, cli)?;
        }
        Commands::Transpose { matrix } => {
            let result = transpose(&load(matrix)?);
            print_result(out, "Transpose", &result, cli)?;
        }
    }

    debug!("Command completed in {:.2?}", start_time.elapsed());
    Ok(())
}

fn print_result<W: Write>(
    out: &mut W,
    operation: &str,
    matrix: &SparseMatrix,
    cli: &Cli,
) -> Result<()> {
    let rendered = render_result(operation, matrix, cli.format)?;
    write!(out, "{rendered}")?;
    Ok(())
}
