//! Builds the lookup structures of the HPACK static table out of its ordered
//! list of entries.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{HeaderField, HeaderLookup, LookupError};

/// Number of entries in the HPACK static table (RFC 7541, Appendix A).
pub const STATIC_TABLE_LEN: usize = 61;

/// A field together with its permanent, 1-based static index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEntry<'a> {
    pub index: usize,
    pub field: HeaderField<'a>,
}

/// Represents all errors that can be encountered while building a [Table].
///
/// Any of these means the input list is not the static table: a wrong static
/// index breaks interoperability, so no table is produced at all.
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("Static table must have {expected} entries, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Duplicate static table entry {name:?} = {value:?} at indices {first} and {second}")]
    DuplicatePair {
        name: String,
        value: String,
        first: usize,
        second: usize,
    },
}

/// The HPACK static table: its entries in index order, plus the name and
/// name/value indices encoders use to find them.
///
/// A `Table` is never mutated once built.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    entries: Vec<StaticEntry<'a>>,
    by_name: HashMap<&'a str, usize>,
    by_name_value: HashMap<(&'a str, &'a str), usize>,
}

impl<'a> Table<'a> {
    /// Builds a table out of the static entries, in protocol order: the
    /// field at position `k` gets index `k + 1`.
    ///
    /// Several entries share a name (`:method`, `:path`, `:status`...), a
    /// name-only lookup yields the first of them.
    pub fn build(fields: &[HeaderField<'a>]) -> Result<Self, BuildError> {
        if fields.len() != STATIC_TABLE_LEN {
            return Err(BuildError::WrongLength {
                expected: STATIC_TABLE_LEN,
                actual: fields.len(),
            });
        }

        let mut entries = Vec::with_capacity(fields.len());
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut by_name_value = HashMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            let index = position + 1;
            trace!(index, %field, "static entry");

            // lowest index wins
            by_name.entry(field.name).or_insert(index);

            if let Some(first) = by_name_value.insert((field.name, field.value), index) {
                return Err(BuildError::DuplicatePair {
                    name: field.name.to_owned(),
                    value: field.value.to_owned(),
                    first,
                    second: index,
                });
            }

            entries.push(StaticEntry {
                index,
                field: *field,
            });
        }

        debug!(
            "Built static table: {} entries, {} distinct names",
            entries.len(),
            by_name.len()
        );

        Ok(Self {
            entries,
            by_name,
            by_name_value,
        })
    }

    /// All entries, in index order.
    pub fn entries(&self) -> &[StaticEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name index, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.by_name.iter().map(|(&name, &index)| (name, index))
    }

    /// Name/value index, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = ((&'a str, &'a str), usize)> + '_ {
        self.by_name_value.iter().map(|(&pair, &index)| (pair, index))
    }
}

impl HeaderLookup for Table<'_> {
    fn by_index(&self, index: usize) -> Result<HeaderField<'_>, LookupError> {
        index
            .checked_sub(1)
            .and_then(|position| self.entries.get(position))
            .map(|entry| entry.field)
            .ok_or(LookupError::IndexOutOfBounds(index))
    }

    fn by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    fn by_name_value(&self, name: &str, value: &str) -> Option<usize> {
        // shorten the key lifetime so borrowed arguments can be used as a key
        let by_name_value: &HashMap<(&str, &str), usize> = &self.by_name_value;
        by_name_value.get(&(name, value)).copied()
    }
}
