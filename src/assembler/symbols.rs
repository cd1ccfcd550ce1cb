//! Symbol table shared by labels, variables and the predefined names.
use std::collections::HashMap;
use super::error::ErrorKind;

pub type Address = u32;

/// First RAM slot handed out to variables; 0-15 belong to R0-R15.
pub const VARIABLE_BASE: Address = 16;
pub const SCREEN: Address = 0x4000;
pub const KBD: Address = 0x6000;

const PREDEFINED: [(&str, Address); 23] = [
    ("SP",   0),
    ("LCL",  1),
    ("ARG",  2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0",   0),
    ("R1",   1),
    ("R2",   2),
    ("R3",   3),
    ("R4",   4),
    ("R5",   5),
    ("R6",   6),
    ("R7",   7),
    ("R8",   8),
    ("R9",   9),
    ("R10",  10),
    ("R11",  11),
    ("R12",  12),
    ("R13",  13),
    ("R14",  14),
    ("R15",  15),
    ("SCREEN", SCREEN),
    ("KBD",    KBD),
];

#[derive(Clone, Debug)]
pub struct SymbolTable {
    values: HashMap<String, Address>,
}

impl SymbolTable {
    /// A table holding only the predefined hardware names.
    pub fn seed() -> Self {
        let mut values = HashMap::with_capacity(64);
        for (name, address) in PREDEFINED.iter() {
            values.insert((*name).to_owned(), *address);
        }
        SymbolTable { values }
    }

    /// Binds `name` to `address`. A name may be bound only once.
    pub fn bind(&mut self, name: &str, address: Address) -> Result<(), ErrorKind> {
        if self.values.contains_key(name) {
            return Err(ErrorKind::DuplicateSymbol(name.to_owned()));
        }
        self.values.insert(name.to_owned(), address);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<Address, ErrorKind> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| ErrorKind::UnboundSymbol(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
