//! Unit tests for the interpreter module, driven through the full
//! pipeline so programs run exactly as users would run them.

use crate::interpret;

#[test]
fn test_arithmetic_and_output() {
    let output = interpret("{ int x; x = 2 + 3 * 4; Console.WriteLine(x); }").unwrap();
    assert_eq!(output, vec!["14"]);
}

#[test]
fn test_declaration_default_values() {
    let output = interpret(
        "{ int x; float f; string s; bool b; \
         Console.WriteLine(x); Console.WriteLine(f); \
         Console.WriteLine(s); Console.WriteLine(b); }",
    )
    .unwrap();
    assert_eq!(output, vec!["0", "0", "", "false"]);
}

#[test]
fn test_string_concatenation() {
    let output = interpret("{ string s; s = 'foo' + 'bar'; Console.WriteLine(s); }").unwrap();
    assert_eq!(output, vec!["foobar"]);
}

#[test]
fn test_integer_division_truncates() {
    let output = interpret("{ int x; x = 7 / 2; Console.WriteLine(x); }").unwrap();
    assert_eq!(output, vec!["3"]);
}

#[test]
fn test_modulo() {
    let output = interpret("{ int x; x = 7 % 3; Console.WriteLine(x); }").unwrap();
    assert_eq!(output, vec!["1"]);
}

#[test]
fn test_division_by_zero() {
    let error = interpret("{ int x; int y; x = 1 / y; }").unwrap_err();
    assert_eq!(error.get_error_name(), "DivisionByZero");
}

#[test]
fn test_modulo_by_zero() {
    let error = interpret("{ int x; int y; x = 1 % y; }").unwrap_err();
    assert_eq!(error.get_error_name(), "DivisionByZero");
}

#[test]
fn test_mixed_arithmetic_widens_to_float() {
    let output = interpret("{ float f; f = 1 + 2.5; Console.WriteLine(f); }").unwrap();
    assert_eq!(output, vec!["3.5"]);
}

#[test]
fn test_int_expression_into_float_variable_is_rejected() {
    let error = interpret("{ float f; f = 1 + 2; }").unwrap_err();
    assert_eq!(error.get_error_name(), "NotAssignable");
}

#[test]
fn test_if_takes_then_branch() {
    let output =
        interpret("{ int x; x = 5; if(x > 3) { Console.WriteLine('big'); } else { Console.WriteLine('small'); } }")
            .unwrap();
    assert_eq!(output, vec!["big"]);
}

#[test]
fn test_if_takes_else_branch() {
    let output =
        interpret("{ int x; x = 1; if(x > 3) { Console.WriteLine('big'); } else { Console.WriteLine('small'); } }")
            .unwrap();
    assert_eq!(output, vec!["small"]);
}

#[test]
fn test_while_counts_down() {
    let output =
        interpret("{ int x; x = 3; while(x > 0) { Console.WriteLine(x); x--; } }").unwrap();
    assert_eq!(output, vec!["3", "2", "1"]);
}

#[test]
fn test_single_statement_loop_body_runs() {
    let output = interpret("{ int x; while(x < 3) x++; Console.WriteLine(x); }").unwrap();
    assert_eq!(output, vec!["3"]);
}

#[test]
fn test_foreach_iterates_in_order() {
    let output = interpret(
        "{ list<string> names; string n; n = ''; names = list<string>('ana','bob','cat'); \
         foreach(n in names) { Console.WriteLine(n); } }",
    )
    .unwrap();
    assert_eq!(output, vec!["ana", "bob", "cat"]);
}

#[test]
fn test_foreach_over_empty_list_runs_zero_times() {
    let output = interpret(
        "{ list<int> numbers; int n; foreach(n in numbers) { Console.WriteLine(n); } }",
    )
    .unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_logical_operators() {
    let output = interpret(
        "{ bool a; bool b; a = true; b = a && !a; Console.WriteLine(b); b = a || !a; Console.WriteLine(b); }",
    )
    .unwrap();
    assert_eq!(output, vec!["false", "true"]);
}

#[test]
fn test_equality_across_int_and_float() {
    let output = interpret("{ bool b; b = 2 == 2.0; Console.WriteLine(b); }").unwrap();
    assert_eq!(output, vec!["true"]);
}

#[test]
fn test_increment_in_loop() {
    let output = interpret(
        "{ int i; int total; while(i < 4) { total = total + i; i++; } Console.WriteLine(total); }",
    )
    .unwrap();
    assert_eq!(output, vec!["6"]);
}

#[test]
fn test_shadowed_variable_keeps_outer_value() {
    let output = interpret(
        "{ int x; x = 1; { string x; x = 'inner'; Console.WriteLine(x); } Console.WriteLine(x); }",
    )
    .unwrap();
    assert_eq!(output, vec!["inner", "1"]);
}

#[test]
fn test_multiple_arguments_join_with_spaces() {
    let output = interpret("{ Console.WriteLine('a', 1 + 1, true); }").unwrap();
    assert_eq!(output, vec!["a 2 true"]);
}

#[test]
fn test_list_prints_bracketed() {
    let output =
        interpret("{ list<int> l; l = list<int>(1,2,3); Console.WriteLine(l); }").unwrap();
    assert_eq!(output, vec!["[1, 2, 3]"]);
}

#[test]
fn test_read_line_is_inert() {
    let output = interpret("{ Console.ReadLine(); }").unwrap();
    assert!(output.is_empty());
}
