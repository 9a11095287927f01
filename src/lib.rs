//! Reverse Polish Notation calculator: an operand stack, a fixed table of
//! named operations and a history of successful evaluations.

#![allow(nonstandard_style)]

pub mod error_handling;
pub mod evaluating;
pub mod history;
pub mod operations;
pub mod scanning;
pub mod stack;

pub use error_handling::{CalcError, Result};
pub use evaluating::Calculator;
