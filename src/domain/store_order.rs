/// Fixed mapping from 1-based store position to canonical screenshot name.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOrder {
    names: Vec<String>,
    extension: String,
}

/// One slot of the store ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSlot<'a> {
    pub position: usize,
    pub source_name: &'a str,
    pub target_name: String,
}

impl StoreOrder {
    /// `extension` is given without the leading dot.
    pub fn new(names: Vec<String>, extension: impl Into<String>) -> Self {
        StoreOrder {
            names,
            extension: extension.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Slots in position order, position 1 first.
    pub fn slots(&self) -> impl Iterator<Item = StoreSlot<'_>> {
        self.names.iter().enumerate().map(|(i, name)| StoreSlot {
            position: i + 1,
            source_name: name.as_str(),
            target_name: format!("{}.{}", i + 1, self.extension),
        })
    }
}
