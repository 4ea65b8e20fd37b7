//! Interpreter module
//! Tree-walking evaluation of a validated program
//!
//! Submodules:
//! - value: the runtime value union and literal conversion
//! - interpreter: the statement walker and expression evaluator
pub mod interpreter;
pub mod value;

#[cfg(test)]
mod tests;
