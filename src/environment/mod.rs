//! The symbol environment: an ordered stack of lexical scopes owned and
//! mutated exclusively by the parser during one compilation. Tree nodes
//! only read `Rc<Symbol>` handles captured at parse time; there is no
//! late re-resolution.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Variable,
    /// A host-provided callable: `target` is the name emitted in the
    /// generated output (e.g. `console.log`).
    Builtin {
        target: String,
        parameters: Vec<(String, Type)>,
    },
}

/// The compile-time record binding a declared name to its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new_variable(name: &str, ty: Type) -> Symbol {
        Symbol {
            name: String::from(name),
            ty,
            kind: SymbolKind::Variable,
        }
    }

    /// The name this symbol carries into generated output.
    pub fn generated_name(&self) -> &str {
        match &self.kind {
            SymbolKind::Variable => &self.name,
            SymbolKind::Builtin { target, .. } => target,
        }
    }
}

#[derive(Debug, Default)]
pub struct Environment {
    scopes: Vec<HashMap<String, Rc<Symbol>>>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment { scopes: vec![] }
    }

    /// Block entry pushes, block exit pops; the two must be paired.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Inserts into the innermost scope. Re-declaring a name already
    /// present in that scope is rejected; shadowing an outer scope is
    /// allowed.
    pub fn declare(&mut self, symbol: Symbol, position: Position) -> Result<Rc<Symbol>, Error> {
        let scope = self
            .scopes
            .last_mut()
            .expect("declare called with no scope pushed");

        if scope.contains_key(&symbol.name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: symbol.name,
                },
                position,
            ));
        }

        let symbol = Rc::new(symbol);
        scope.insert(symbol.name.clone(), Rc::clone(&symbol));
        Ok(symbol)
    }

    /// Searches scopes innermost-to-outermost, including the builtin
    /// registrations seeded in the outermost scope.
    pub fn resolve(&self, name: &str, position: Position) -> Result<Rc<Symbol>, Error> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(name) {
                return Ok(Rc::clone(symbol));
            }
        }

        Err(Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: String::from(name),
            },
            position,
        ))
    }

    /// Pre-populates the current (outermost) scope with a host callable
    /// signature before parsing begins.
    pub fn register_builtin(
        &mut self,
        name: &str,
        target: &str,
        return_type: Type,
        parameters: Vec<(String, Type)>,
    ) {
        let symbol = Rc::new(Symbol {
            name: String::from(name),
            ty: return_type,
            kind: SymbolKind::Builtin {
                target: String::from(target),
                parameters,
            },
        });

        self.scopes
            .first_mut()
            .expect("register_builtin called with no scope pushed")
            .insert(String::from(name), symbol);
    }
}
