use crate::HeaderField;

/// Represents all errors that can be encountered while looking up a field by
/// its index.
#[derive(PartialEq, Copy, Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LookupError {
    /// Static indices run from 1 to 61. Index 0 is reserved by HPACK and
    /// never refers to a table entry.
    #[error("Static table index {0} out of bounds")]
    IndexOutOfBounds(usize),
}

/// Outcome of [HeaderLookup::search].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    /// `true` if both name and value matched, `false` if only the name did.
    pub value_matched: bool,
}

/// Read-only lookups into the HPACK static table.
///
/// Implementations never mutate anything, so they can be queried from any
/// number of threads at once.
pub trait HeaderLookup {
    /// Returns the field at the given 1-based static index.
    fn by_index(&self, index: usize) -> Result<HeaderField<'_>, LookupError>;

    /// Returns the lowest static index among entries named `name`.
    fn by_name(&self, name: &str) -> Option<usize>;

    /// Returns the static index of the exact `(name, value)` pair.
    fn by_name_value(&self, name: &str, value: &str) -> Option<usize>;

    /// Finds the best static entry an encoder can reference for `field`:
    /// the exact pair if there is one, otherwise an entry with the same name.
    ///
    /// Sensitive fields only ever match by name, their value must not be
    /// sent as a table reference.
    fn search(&self, field: &HeaderField<'_>) -> Option<Match> {
        if !field.sensitive {
            if let Some(index) = self.by_name_value(field.name, field.value) {
                return Some(Match {
                    index,
                    value_matched: true,
                });
            }
        }

        self.by_name(field.name).map(|index| Match {
            index,
            value_matched: false,
        })
    }
}
