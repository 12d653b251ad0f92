//! Symbol table that maps variable names to integer values for the lifetime of
//! an interpreter run.

use std::collections::HashMap;
use std::fmt::Display;

use thiserror::Error;

/// Integer type that every expression evaluates to.
pub type Value = i64;

/// A single named variable.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Symbol {
    pub var_name: String,
    pub value: Value,
}

/// Returned when a new symbol would exceed the table's capacity.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
#[error("Symbol table is full (capacity {capacity}).")]
pub struct SymbolTableFull {
    pub capacity: usize,
}

/// Represents a symbol table loader error, naming the offending line.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum SymbolTableLoadError {
    #[error("Malformed symbol table line {line_num}: {line_text:?}.")]
    MalformedLine { line_num: usize, line_text: String },

    #[error("Unable to load symbol table line {line_num}: {source}")]
    Full {
        line_num: usize,
        source: SymbolTableFull,
    },
}

/// Mapping from variable names to values. Symbols are kept in creation order and
/// are never removed; `symbol_idx_map` maps each name to its slot in `symbols`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    symbol_idx_map: HashMap<String, usize>,
    capacity: Option<usize>,
}

impl SymbolTable {
    /// Creates an empty, unbounded table.
    pub fn new() -> Self {
        return Self {
            symbols: Vec::new(),
            symbol_idx_map: HashMap::new(),
            capacity: None,
        };
    }

    /// Creates an empty table that refuses to hold more than `capacity` symbols.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        return Self {
            symbols: Vec::new(),
            symbol_idx_map: HashMap::new(),
            capacity: Some(capacity),
        };
    }

    /// Looks up the current value of `var_name`.
    pub fn lookup(&self, var_name: &str) -> Option<Value> {
        return self
            .symbol_idx_map
            .get(var_name)
            .map(|&symbol_idx| self.symbols[symbol_idx].value);
    }

    /// Updates `var_name` in place if it exists, otherwise creates it. Returns
    /// the stored value.
    pub fn create_or_update(
        &mut self,
        var_name: &str,
        value: Value,
    ) -> Result<Value, SymbolTableFull> {
        if let Some(&symbol_idx) = self.symbol_idx_map.get(var_name) {
            self.symbols[symbol_idx].value = value;
            return Ok(value);
        }

        if let Some(capacity) = self.capacity {
            if self.len() >= capacity {
                return Err(SymbolTableFull { capacity });
            }
        }

        self.symbol_idx_map
            .insert(String::from(var_name), self.symbols.len());
        self.symbols.push(Symbol {
            var_name: String::from(var_name),
            value: value,
        });

        return Ok(value);
    }

    pub fn len(&self) -> usize {
        return self.symbols.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.symbols.is_empty();
    }

    /// Iterates over symbols, most recently created first.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        return self.symbols.iter().rev();
    }

    /// Loads `<name> <integer>` lines into the table. Blank lines and lines whose
    /// first non-blank character is `#` are skipped; fields after the value are
    /// ignored.
    pub fn load_from_str(&mut self, table_str: &str) -> Result<(), SymbolTableLoadError> {
        for (line_idx, line_text) in table_str.lines().enumerate() {
            let trimmed_line = line_text.trim_start_matches([' ', '\t']);

            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            let mut fields = trimmed_line.split_whitespace();

            let parsed_fields = match (fields.next(), fields.next()) {
                (Some(var_name), Some(value_text)) => value_text
                    .parse::<Value>()
                    .ok()
                    .map(|value| (var_name, value)),
                _ => None,
            };

            match parsed_fields {
                Some((var_name, value)) => {
                    self.create_or_update(var_name, value).map_err(|source| {
                        SymbolTableLoadError::Full {
                            line_num: line_idx + 1,
                            source: source,
                        }
                    })?;
                }

                None => {
                    return Err(SymbolTableLoadError::MalformedLine {
                        line_num: line_idx + 1,
                        line_text: String::from(line_text),
                    });
                }
            }
        }

        return Ok(());
    }
}

/// Dumps the table. An empty table renders as nothing.
impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f, "SYMBOL TABLE:")?;

        for symbol in self.iter() {
            writeln!(f, "\tName: {}, Value: {}", symbol.var_name, symbol.value)?;
        }

        return Ok(());
    }
}
