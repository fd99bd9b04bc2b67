use std::fmt::Display;

use ordermap::OrderMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Float,
    Char,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Float => write!(f, "float"),
            DataType::Char => write!(f, "char"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    pub data_type: Option<DataType>,
    pub line: usize,
}

/// Identifiers in first-seen order. Entries are written once and never
/// replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable(OrderMap<String, SymbolTableEntry>);

impl SymbolTable {
    pub fn new() -> Self {
        Self(OrderMap::new())
    }

    /// Records `name` unless it is already present. Returns whether a new
    /// entry was created.
    pub fn register(&mut self, name: &str, data_type: Option<DataType>, line: usize) -> bool {
        if self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), SymbolTableEntry { data_type, line });
        true
    }

    pub fn get(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SymbolTableEntry)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
