//! The HPACK static table, as listed in RFC 7541, Appendix A.
//!
//! This list is the input of the generator. Order matters: the entry at
//! position `k` is static index `k + 1`, and every HPACK implementation
//! agrees on these indices.

use loona_hpack_static::{HeaderField, STATIC_TABLE_LEN};

pub(crate) static ENTRIES: [HeaderField<'static>; STATIC_TABLE_LEN] = [
    HeaderField::new(":authority", ""),
    HeaderField::new(":method", "GET"),
    HeaderField::new(":method", "POST"),
    HeaderField::new(":path", "/"),
    HeaderField::new(":path", "/index.html"),
    HeaderField::new(":scheme", "http"),
    HeaderField::new(":scheme", "https"),
    HeaderField::new(":status", "200"),
    HeaderField::new(":status", "204"),
    HeaderField::new(":status", "206"),
    HeaderField::new(":status", "304"),
    HeaderField::new(":status", "400"),
    HeaderField::new(":status", "404"),
    HeaderField::new(":status", "500"),
    HeaderField::new("accept-charset", ""),
    HeaderField::new("accept-encoding", "gzip, deflate"),
    HeaderField::new("accept-language", ""),
    HeaderField::new("accept-ranges", ""),
    HeaderField::new("accept", ""),
    HeaderField::new("access-control-allow-origin", ""),
    HeaderField::new("age", ""),
    HeaderField::new("allow", ""),
    HeaderField::new("authorization", ""),
    HeaderField::new("cache-control", ""),
    HeaderField::new("content-disposition", ""),
    HeaderField::new("content-encoding", ""),
    HeaderField::new("content-language", ""),
    HeaderField::new("content-length", ""),
    HeaderField::new("content-location", ""),
    HeaderField::new("content-range", ""),
    HeaderField::new("content-type", ""),
    HeaderField::new("cookie", ""),
    HeaderField::new("date", ""),
    HeaderField::new("etag", ""),
    HeaderField::new("expect", ""),
    HeaderField::new("expires", ""),
    HeaderField::new("from", ""),
    HeaderField::new("host", ""),
    HeaderField::new("if-match", ""),
    HeaderField::new("if-modified-since", ""),
    HeaderField::new("if-none-match", ""),
    HeaderField::new("if-range", ""),
    HeaderField::new("if-unmodified-since", ""),
    HeaderField::new("last-modified", ""),
    HeaderField::new("link", ""),
    HeaderField::new("location", ""),
    HeaderField::new("max-forwards", ""),
    HeaderField::new("proxy-authenticate", ""),
    HeaderField::new("proxy-authorization", ""),
    HeaderField::new("range", ""),
    HeaderField::new("referer", ""),
    HeaderField::new("refresh", ""),
    HeaderField::new("retry-after", ""),
    HeaderField::new("server", ""),
    HeaderField::new("set-cookie", ""),
    HeaderField::new("strict-transport-security", ""),
    HeaderField::new("transfer-encoding", ""),
    HeaderField::new("user-agent", ""),
    HeaderField::new("vary", ""),
    HeaderField::new("via", ""),
    HeaderField::new("www-authenticate", ""),
];
