use indexmap::IndexMap;

use crate::error::Error;

/// Label addresses collected by the first pass, kept in definition order.
///
/// Built exclusively during pass 1 and read-only afterwards.
#[derive(Debug)]
pub struct Symbols(IndexMap<String, Entry>);

#[derive(Debug, Clone, Copy)]
struct Entry {
    /// 1-based line of the definition.
    line: usize,
    addr: u16,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols(IndexMap::new())
    }

    /// Record a label at `addr`. Redefining a label is an error naming
    /// the line of the first definition.
    pub fn insert(&mut self, name: String, line: usize, addr: u16) -> Result<(), Error> {
        if let Some(prev) = self.0.get(&name) {
            return Err(Error::DuplicateSymbol {
                name,
                first: prev.line,
            });
        }
        self.0.insert(name, Entry { line, addr });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|entry| entry.addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry.addr))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}
