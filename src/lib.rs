//! Normalize numeric text, sum it, and square the sum.
//!
//! The [`calculator`] module is the whole computation; everything else is the
//! command-line front-end around it.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod io;
pub mod logging;

pub use calculator::{
    Argument, Calculation, Calculator, CalculatorError, CalculatorResult, ValidationMode,
    normalize, square_of_sum, sum,
};
pub use config::Settings;
