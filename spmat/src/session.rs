//! Interactive menu session over two loaded matrices

use log::{debug, warn};
use spmat_core::{add, multiply, subtract, transpose, SparseMatrix};
use std::io::{self, BufRead, Write};

use crate::config::OutputFormat;
use crate::render::{closing_rule, divider, render_result};

/// Operation offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Addition,
    Subtraction,
    /// First matrix times the transpose of the second
    Multiplication,
    /// Transpose of the second matrix
    Transpose,
}

impl Action {
    /// Name printed in the result block
    pub fn label(self) -> &'static str {
        match self {
            Action::Addition => "Addition",
            Action::Subtraction => "Subtraction",
            Action::Multiplication => "Multiplication",
            Action::Transpose => "Transpose",
        }
    }
}

/// One parsed line of menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order, numbered from 1
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Run(Action::Addition),
        MenuChoice::Run(Action::Subtraction),
        MenuChoice::Run(Action::Multiplication),
        MenuChoice::Run(Action::Transpose),
        MenuChoice::Exit,
    ];

    /// Parse a menu number, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    fn description(self) -> &'static str {
        match self {
            MenuChoice::Run(Action::Addition) => "Matrix Addition",
            MenuChoice::Run(Action::Subtraction) => "Matrix Subtraction",
            MenuChoice::Run(Action::Multiplication) => {
                "Matrix Multiplication (first x transposed second)"
            }
            MenuChoice::Run(Action::Transpose) => "Transpose of Second Matrix",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// The two operands of a menu session and the cached transpose of the second
#[derive(Debug, Clone)]
pub struct Session {
    left: SparseMatrix,
    right: SparseMatrix,
    right_transposed: SparseMatrix,
}

impl Session {
    pub fn new(left: SparseMatrix, right: SparseMatrix) -> Self {
        let right_transposed = transpose(&right);
        Self {
            left,
            right,
            right_transposed,
        }
    }

    pub fn left(&self) -> &SparseMatrix {
        &self.left
    }

    pub fn right(&self) -> &SparseMatrix {
        &self.right
    }

    pub fn right_transposed(&self) -> &SparseMatrix {
        &self.right_transposed
    }

    /// Compute the result of one menu action
    pub fn execute(&self, action: Action) -> spmat_core::Result<SparseMatrix> {
        debug!("Executing {action:?}");
        match action {
            Action::Addition => add(&self.left, &self.right),
            Action::Subtraction => subtract(&self.left, &self.right),
            Action::Multiplication => multiply(&self.left, &self.right_transposed),
            Action::Transpose => Ok(self.right_transposed.clone()),
        }
    }

    /// Run the menu loop until Exit is chosen or `input` is exhausted
    ///
    /// Invalid choices and failed operations are reported to `out` and the
    /// loop continues.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        out: &mut W,
        format: OutputFormat,
    ) -> io::Result<()> {
        let mut line = String::new();

        loop {
            writeln!(out, "{}", divider())?;
            write_menu(out)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("Menu input closed");
                return Ok(());
            }

            writeln!(out, "{}", divider())?;

            match MenuChoice::parse(&line) {
                None => {
                    warn!("Invalid menu input {:?}", line.trim());
                    writeln!(
                        out,
                        "Invalid input. Please enter a number between 1 and {}.",
                        MenuChoice::ALL.len()
                    )?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(out, "Exiting the Matrix Tool. Goodbye!")?;
                    writeln!(out, "{}", closing_rule())?;
                    return Ok(());
                }
                Some(MenuChoice::Run(action)) => {
                    writeln!(out, "Calculating result...")?;
                    match self.execute(action) {
                        Ok(result) => {
                            let rendered = render_result(action.label(), &result, format)?;
                            write!(out, "{rendered}")?;
                        }
                        Err(err) => writeln!(out, "Error: {err}")?,
                    }
                }
            }
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAvailable Operations:")?;
    for (number, choice) in (1..).zip(MenuChoice::ALL) {
        writeln!(out, "{number}. {}", choice.description())?;
    }
    write!(out, "Please select an option (1-{}): ", MenuChoice::ALL.len())
}
