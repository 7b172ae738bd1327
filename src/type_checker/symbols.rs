use std::collections::BTreeMap;

use serde::Serialize;

use crate::{ast::types::ValueType, errors::errors::SemanticError};

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Variable type, or the return type of a function
    pub declared_type: ValueType,
    pub initialized: bool,
    pub is_function: bool,
    /// Parameter types in declaration order, empty for variables
    pub param_types: Vec<ValueType>,
}

impl Symbol {
    pub fn variable(declared_type: ValueType, initialized: bool) -> Self {
        Symbol {
            declared_type,
            initialized,
            is_function: false,
            param_types: vec![],
        }
    }

    pub fn function(return_type: ValueType, param_types: Vec<ValueType>) -> Self {
        Symbol {
            declared_type: return_type,
            initialized: true,
            is_function: true,
            param_types,
        }
    }

    pub fn to_record(&self) -> SymbolRecord {
        SymbolRecord {
            symbol_type: self.declared_type,
            initialized: self.initialized,
        }
    }
}

/// Exported view of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRecord {
    #[serde(rename = "type")]
    pub symbol_type: ValueType,
    pub initialized: bool,
}

/// Function whose body is being analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionContext {
    pub name: String,
    pub return_type: ValueType,
}

#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub symbol_lookup: BTreeMap<String, Symbol>,
    /// Set for function activations, `None` for the global environment
    pub function: Option<FunctionContext>,
}

impl Environment {
    pub fn for_function(name: &str, return_type: ValueType) -> Self {
        Environment {
            symbol_lookup: BTreeMap::new(),
            function: Some(FunctionContext {
                name: String::from(name),
                return_type,
            }),
        }
    }

    /// Adds `symbol` under `name`. An existing entry is left untouched.
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> Result<(), SemanticError> {
        if self.symbol_lookup.contains_key(name) {
            let name = String::from(name);
            return Err(if symbol.is_function {
                SemanticError::FunctionAlreadyDeclared { name }
            } else {
                SemanticError::VariableAlreadyDeclared { name }
            });
        }

        self.symbol_lookup.insert(String::from(name), symbol);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbol_lookup.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbol_lookup.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbol_lookup.contains_key(name)
    }

    pub fn export(&self) -> BTreeMap<String, SymbolRecord> {
        self.symbol_lookup
            .iter()
            .map(|(name, symbol)| (name.clone(), symbol.to_record()))
            .collect()
    }
}
