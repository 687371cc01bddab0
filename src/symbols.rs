use rustc_hash::FxHashMap;

use crate::error::Error;

/// Maximum number of distinct variables in one expression.
pub const MAX_SYMBOLS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: bool,
}

/// Insertion-ordered mapping from variable name to its current assignment.
///
/// The insertion order is the canonical column order of the truth table.
/// Distinct names always hold independent values; re-inserting an existing
/// name overwrites its value in place without disturbing the order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.index.get(name).map(|&i| self.symbols[i].value)
    }

    pub fn insert(&mut self, name: &str, value: bool) -> Result<(), Error> {
        if let Some(&i) = self.index.get(name) {
            self.symbols[i].value = value;
            return Ok(());
        }

        if self.symbols.len() == MAX_SYMBOLS {
            return Err(Error::SymbolCapacity {
                limit: MAX_SYMBOLS,
            });
        }

        self.index.insert(name.to_string(), self.symbols.len());
        self.symbols.push(Symbol {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    /// Removes a symbol. Returns false if the name was not present.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(removed) = self.index.remove(name) else {
            return false;
        };

        self.symbols.remove(removed);
        for slot in self.index.values_mut() {
            if *slot > removed {
                *slot -= 1;
            }
        }
        true
    }

    /// Restores every symbol to `value`, keeping names and order.
    pub fn reset_all_to(&mut self, value: bool) {
        for symbol in &mut self.symbols {
            symbol.value = value;
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }
}
