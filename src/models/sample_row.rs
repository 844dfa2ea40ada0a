use crate::models::resource::ResourceKind;

/// One record of a sample CSV, with values in the fixed column order of its
/// resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    kind: ResourceKind,
    values: Vec<String>,
}

impl SampleRow {
    /// Returns `None` when the number of values does not match the schema.
    pub fn new(kind: ResourceKind, values: Vec<String>) -> Option<Self> {
        if values.len() != kind.columns().len() {
            return None;
        }
        Some(Self { kind, values })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Value of a named column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.kind
            .columns()
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values[i].as_str())
    }

    /// (column, value) pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.kind
            .columns()
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    pub(crate) fn value_at(&self, index: usize) -> &str {
        &self.values[index]
    }
}
