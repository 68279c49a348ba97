// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod solution;
pub mod solver;
pub mod state;

mod parser;

pub use crate::parser::ParserErr;

use crate::config::Limits;
use crate::solver::{SolverErr, SolverOk};

pub trait Solve {
    fn solve(&self, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr>;
}
