//! Validator module
//! Post-parse semantic validation of a fully resolved tree
pub mod validator;

#[cfg(test)]
mod tests;
