//! Unit tests for the validator module, driven through parsed source so
//! the trees carry real symbols and positions.

use super::validator::validate_stmt;
use crate::{
    errors::errors::Error,
    lexer::{cursor::Cursor, scanner::Scanner},
    parser::parser::Parser,
};

fn validate_source(source: &str) -> Result<(), Error> {
    let scanner = Scanner::new(Cursor::new(source));
    let mut parser = Parser::new(scanner).unwrap();
    let program = parser.parse().unwrap();
    validate_stmt(&program)
}

#[test]
fn test_valid_arithmetic_assignment() {
    assert!(validate_source("{ int x; x = 2 + 3; }").is_ok());
}

#[test]
fn test_float_widening_assignment() {
    assert!(validate_source("{ float f; f = 1 + 2.5; }").is_ok());
}

#[test]
fn test_bool_from_int_is_not_assignable() {
    let error = validate_source("{ bool b; b = 1; }").unwrap_err();

    assert_eq!(error.get_error_name(), "NotAssignable");
    assert_eq!(
        error.get_tip().to_string(),
        "Type `bool` is not assignable from `int`"
    );
}

#[test]
fn test_int_from_float_is_not_assignable() {
    // Widening only goes one way.
    let error = validate_source("{ int x; x = 1.5; }").unwrap_err();
    assert_eq!(error.get_error_name(), "NotAssignable");
}

#[test]
fn test_string_concatenation() {
    assert!(validate_source("{ string s; s = 'a' + 'b'; }").is_ok());
}

#[test]
fn test_string_minus_is_type_mismatch() {
    let error = validate_source("{ string s; s = 'a' - 'b'; }").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_mixed_operands_are_type_mismatch() {
    let error = validate_source("{ string s; s = 'a' + 1; }").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_if_condition_must_be_boolean() {
    let error = validate_source("{ int x; if(x + 1) { } }").unwrap_err();

    assert_eq!(error.get_error_name(), "BooleanRequired");
    assert_eq!(
        error.get_tip().to_string(),
        "A boolean is required in a if condition, found `int`"
    );
}

#[test]
fn test_while_condition_must_be_boolean() {
    let error = validate_source("{ int x; while(x) { } }").unwrap_err();
    assert_eq!(error.get_error_name(), "BooleanRequired");
}

#[test]
fn test_relational_condition_is_accepted() {
    assert!(validate_source("{ int x; while(x < 10) { x++; } }").is_ok());
}

#[test]
fn test_logical_operands_must_be_boolean() {
    let error = validate_source("{ bool b; int x; b = b && x; }").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_not_requires_boolean() {
    let error = validate_source("{ bool b; int x; b = !x; }").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_foreach_over_list() {
    assert!(
        validate_source("{ list<int> numbers; int n; foreach(n in numbers) { } }").is_ok()
    );
}

#[test]
fn test_foreach_over_scalar_is_not_iterable() {
    let error = validate_source("{ int x; int n; foreach(n in x) { } }").unwrap_err();

    assert_eq!(error.get_error_name(), "NotIterable");
    assert_eq!(error.get_tip().to_string(), "Type `int` is not iterable");
}

#[test]
fn test_foreach_element_type_must_match_variable() {
    let error =
        validate_source("{ list<string> names; int n; foreach(n in names) { } }").unwrap_err();
    assert_eq!(error.get_error_name(), "NotAssignable");
}

#[test]
fn test_increment_requires_numeric() {
    let error = validate_source("{ bool b; b++; }").unwrap_err();

    assert_eq!(error.get_error_name(), "NotNumeric");
    assert_eq!(
        error.get_tip().to_string(),
        "Cannot increment or decrement type `bool`"
    );
}

#[test]
fn test_decrement_on_float_is_valid() {
    assert!(validate_source("{ float f; f--; }").is_ok());
}

#[test]
fn test_call_arguments_are_validated() {
    let error = validate_source("{ Console.WriteLine('a' - 'b'); }").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMismatch");
}

#[test]
fn test_date_assignment() {
    assert!(validate_source("{ datetime d; d = date(1/2/2024); }").is_ok());
}

#[test]
fn test_class_body_is_validated() {
    let error = validate_source("{ class Foo { bool b; b = 1; } }").unwrap_err();
    assert_eq!(error.get_error_name(), "NotAssignable");
}

#[test]
fn test_error_position_points_at_operator() {
    let error = validate_source("{ string s; s = 'a' - 'b'; }").unwrap_err();
    assert_eq!(error.get_position().column, 21);
}
