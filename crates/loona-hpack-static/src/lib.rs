//! The HPACK static table (RFC 7541, Appendix A): 61 header fields with
//! permanent indices, known to every HTTP/2 implementation.
//!
//! Encoders and decoders use it through [HeaderLookup], either on the
//! process-wide [STATIC_TABLE] (built once, on first use) or on [Embedded],
//! which reads the constants of the [generated] module.
//!
//! # Example
//!
//! Both live behind the `embedded` feature (on by default). Without it, the
//! crate only provides the builder, the lookup trait and the exporter.
//!
//! ```rust
//! # #[cfg(feature = "embedded")] {
//! use loona_hpack_static::{Embedded, HeaderLookup, STATIC_TABLE};
//!
//! assert_eq!(STATIC_TABLE.by_name_value(":method", "POST"), Some(3));
//! assert_eq!(STATIC_TABLE.by_name(":method"), Some(2));
//! assert_eq!(Embedded.by_name("nonexistent-header"), None);
//!
//! let field = Embedded.by_index(1).unwrap();
//! assert_eq!((field.name, field.value), (":authority", ""));
//! # }
//! ```

#[cfg(feature = "embedded")]
use std::sync::LazyLock;

#[cfg(feature = "embedded")]
mod embedded;
pub mod export;
mod field;
#[cfg(feature = "embedded")]
pub mod generated;
mod lookup;
mod table;

#[cfg(feature = "embedded")]
pub use embedded::Embedded;
pub use field::{HeaderField, ENTRY_OVERHEAD};
pub use lookup::{HeaderLookup, LookupError, Match};
pub use table::{BuildError, StaticEntry, Table, STATIC_TABLE_LEN};

/// The static table, shared by every encoder and decoder in the process.
#[cfg(feature = "embedded")]
pub static STATIC_TABLE: LazyLock<Table<'static>> = LazyLock::new(|| {
    Table::build(&generated::ENTRIES)
        .unwrap_or_else(|err| panic!("generated static table is malformed: {err}"))
});
