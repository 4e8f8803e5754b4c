use std::fmt;

/// Bytes added to the length of a field's name and value when accounting for
/// its size in a header table (RFC 7541, Section 4.1).
pub const ENTRY_OVERHEAD: usize = 32;

/// A header field, as seen by an HPACK encoder or decoder.
///
/// Sensitive fields must never be inserted into a dynamic table, and an
/// encoder must always send them as never-indexed literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderField<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub sensitive: bool,
}

impl<'a> HeaderField<'a> {
    /// Creates a field that may be indexed.
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            sensitive: false,
        }
    }

    /// Creates a field that must never be indexed.
    pub const fn new_sensitive(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            sensitive: true,
        }
    }

    /// Size of this field when stored in a header table.
    pub fn size(&self) -> usize {
        self.name.len() + self.value.len() + ENTRY_OVERHEAD
    }

    /// Whether this is a pseudo-header field (`:method`, `:path`, etc.)
    pub fn is_pseudo(&self) -> bool {
        self.name.starts_with(':')
    }
}

impl fmt::Display for HeaderField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sensitive {
            write!(f, "{}: <sensitive>", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.value)
        }
    }
}
