use crate::{generated, HeaderField, HeaderLookup, LookupError};

/// The static table as compiled-in constants, see [crate::generated].
///
/// Unlike [crate::STATIC_TABLE], nothing is built at runtime and no lookup
/// allocates or hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Embedded;

impl HeaderLookup for Embedded {
    fn by_index(&self, index: usize) -> Result<HeaderField<'_>, LookupError> {
        index
            .checked_sub(1)
            .and_then(|position| generated::ENTRIES.get(position))
            .copied()
            .ok_or(LookupError::IndexOutOfBounds(index))
    }

    fn by_name(&self, name: &str) -> Option<usize> {
        generated::by_name(name)
    }

    fn by_name_value(&self, name: &str, value: &str) -> Option<usize> {
        generated::by_name_value(name, value)
    }
}
