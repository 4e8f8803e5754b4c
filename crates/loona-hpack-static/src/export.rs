//! Renders a [Table] as Rust source, so it can be compiled in as constant
//! data (see [crate::generated]).
//!
//! The name and name/value indices are hash maps, whose iteration order
//! changes from one run to the next. They are sorted by index before being
//! emitted, so rendering the same table always yields the same bytes.

use std::fmt::Write;

use tracing::debug;

use crate::Table;

/// Represents all errors that can be encountered while rendering a table.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("Could not render static table: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// The name index of `table`, sorted by index.
pub fn names_by_index<'a>(table: &Table<'a>) -> Vec<(&'a str, usize)> {
    let mut names: Vec<_> = table.names().collect();
    names.sort_by_key(|&(_, index)| index);
    names
}

/// The name/value index of `table`, sorted by index.
pub fn pairs_by_index<'a>(table: &Table<'a>) -> Vec<((&'a str, &'a str), usize)> {
    let mut pairs: Vec<_> = table.pairs().collect();
    pairs.sort_by_key(|&(_, index)| index);
    pairs
}

/// Renders `table` as the source of the `generated` module.
///
/// Strings are emitted with their `Debug` representation, which is always a
/// valid Rust string literal.
pub fn render(table: &Table<'_>) -> Result<String, ExportError> {
    let names = names_by_index(table);
    let pairs = pairs_by_index(table);

    let mut out = String::with_capacity(8 * 1024);

    macro_rules! w {
        ($($arg:tt)*) => {
            writeln!(out, $($arg)*)?
        };
    }

    w!("//! HPACK static table (RFC 7541, Appendix A) as constant data.");
    w!("");
    w!("// This file is automatically @generated by hpack-static-gen");
    w!("// It is not intended for manual editing");
    w!("");
    w!("use crate::HeaderField;");
    w!("");
    w!("/// Number of entries in the static table.");
    w!("pub const LEN: usize = {};", table.len());
    w!("");
    w!("/// Static table entries in index order: index `i` is `ENTRIES[i - 1]`.");
    w!("pub static ENTRIES: [HeaderField<'static>; LEN] = [");
    for entry in table.entries() {
        let field = &entry.field;
        let ctor = if field.sensitive { "new_sensitive" } else { "new" };
        w!("    HeaderField::{ctor}({:?}, {:?}),", field.name, field.value);
    }
    w!("];");
    w!("");
    w!("/// Lowest static index among entries named `name`.");
    w!("pub fn by_name(name: &str) -> Option<usize> {{");
    w!("    match name {{");
    for (name, index) in &names {
        w!("        {name:?} => Some({index}),");
    }
    w!("        _ => None,");
    w!("    }}");
    w!("}}");
    w!("");
    w!("/// Static index of the exact `(name, value)` pair.");
    w!("pub fn by_name_value(name: &str, value: &str) -> Option<usize> {{");
    w!("    match (name, value) {{");
    for ((name, value), index) in &pairs {
        w!("        ({name:?}, {value:?}) => Some({index}),");
    }
    w!("        _ => None,");
    w!("    }}");
    w!("}}");

    debug!(
        "Rendered static table: {} entries, {} names, {} pairs, {} bytes",
        table.len(),
        names.len(),
        pairs.len(),
        out.len()
    );

    Ok(out)
}
