//! Utility macros for the front end.
//!
//! `MK_RULES!` builds the operator type-rule tables: each entry maps a pair
//! of operand types to the type of the result. Keeping the rules in tables
//! means adding an allowed pair is a table edit, not new control flow.

/// Builds a `HashMap<(Type, Type), Type>` from rule entries.
///
/// # Example
///
/// ```ignore
/// let rules = MK_RULES!(
///     (Int, Int) => Int,
///     (Int, Float) => Float,
/// );
/// ```
#[macro_export]
macro_rules! MK_RULES {
    ($(($left:ident, $right:ident) => $result:ident),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(map.insert((Type::$left, Type::$right), Type::$result);)*
        map
    }};
}
