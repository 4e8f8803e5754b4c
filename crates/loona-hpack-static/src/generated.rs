//! HPACK static table (RFC 7541, Appendix A) as constant data.

// This file is automatically @generated by hpack-static-gen
// It is not intended for manual editing

use crate::HeaderField;

/// Number of entries in the static table.
pub const LEN: usize = 61;

/// Static table entries in index order: index `i` is `ENTRIES[i - 1]`.
pub static ENTRIES: [HeaderField<'static>; LEN] = [
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

/// Lowest static index among entries named `name`.
pub fn by_name(name: &str) -> Option<usize> {
    match name {
        ":authority" => Some(1),
        ":method" => Some(2),
        ":path" => Some(4),
        ":scheme" => Some(6),
        ":status" => Some(8),
        "accept-charset" => Some(15),
        "accept-encoding" => Some(16),
        "accept-language" => Some(17),
        "accept-ranges" => Some(18),
        "accept" => Some(19),
        "access-control-allow-origin" => Some(20),
        "age" => Some(21),
        "allow" => Some(22),
        "authorization" => Some(23),
        "cache-control" => Some(24),
        "content-disposition" => Some(25),
        "content-encoding" => Some(26),
        "content-language" => Some(27),
        "content-length" => Some(28),
        "content-location" => Some(29),
        "content-range" => Some(30),
        "content-type" => Some(31),
        "cookie" => Some(32),
        "date" => Some(33),
        "etag" => Some(34),
        "expect" => Some(35),
        "expires" => Some(36),
        "from" => Some(37),
        "host" => Some(38),
        "if-match" => Some(39),
        "if-modified-since" => Some(40),
        "if-none-match" => Some(41),
        "if-range" => Some(42),
        "if-unmodified-since" => Some(43),
        "last-modified" => Some(44),
        "link" => Some(45),
        "location" => Some(46),
        "max-forwards" => Some(47),
        "proxy-authenticate" => Some(48),
        "proxy-authorization" => Some(49),
        "range" => Some(50),
        "referer" => Some(51),
        "refresh" => Some(52),
        "retry-after" => Some(53),
        "server" => Some(54),
        "set-cookie" => Some(55),
        "strict-transport-security" => Some(56),
        "transfer-encoding" => Some(57),
        "user-agent" => Some(58),
        "vary" => Some(59),
        "via" => Some(60),
        "www-authenticate" => Some(61),
        _ => None,
    }
}

/// Static index of the exact `(name, value)` pair.
pub fn by_name_value(name: &str, value: &str) -> Option<usize> {
    match (name, value) {
        (":authority", "") => Some(1),
        (":method", "GET") => Some(2),
        (":method", "POST") => Some(3),
        (":path", "/") => Some(4),
        (":path", "/index.html") => Some(5),
        (":scheme", "http") => Some(6),
        (":scheme", "https") => Some(7),
        (":status", "200") => Some(8),
        (":status", "204") => Some(9),
        (":status", "206") => Some(10),
        (":status", "304") => Some(11),
        (":status", "400") => Some(12),
        (":status", "404") => Some(13),
        (":status", "500") => Some(14),
        ("accept-charset", "") => Some(15),
        ("accept-encoding", "gzip, deflate") => Some(16),
        ("accept-language", "") => Some(17),
        ("accept-ranges", "") => Some(18),
        ("accept", "") => Some(19),
        ("access-control-allow-origin", "") => Some(20),
        ("age", "") => Some(21),
        ("allow", "") => Some(22),
        ("authorization", "") => Some(23),
        ("cache-control", "") => Some(24),
        ("content-disposition", "") => Some(25),
        ("content-encoding", "") => Some(26),
        ("content-language", "") => Some(27),
        ("content-length", "") => Some(28),
        ("content-location", "") => Some(29),
        ("content-range", "") => Some(30),
        ("content-type", "") => Some(31),
        ("cookie", "") => Some(32),
        ("date", "") => Some(33),
        ("etag", "") => Some(34),
        ("expect", "") => Some(35),
        ("expires", "") => Some(36),
        ("from", "") => Some(37),
        ("host", "") => Some(38),
        ("if-match", "") => Some(39),
        ("if-modified-since", "") => Some(40),
        ("if-none-match", "") => Some(41),
        ("if-range", "") => Some(42),
        ("if-unmodified-since", "") => Some(43),
        ("last-modified", "") => Some(44),
        ("link", "") => Some(45),
        ("location", "") => Some(46),
        ("max-forwards", "") => Some(47),
        ("proxy-authenticate", "") => Some(48),
        ("proxy-authorization", "") => Some(49),
        ("range", "") => Some(50),
        ("referer", "") => Some(51),
        ("refresh", "") => Some(52),
        ("retry-after", "") => Some(53),
        ("server", "") => Some(54),
        ("set-cookie", "") => Some(55),
        ("strict-transport-security", "") => Some(56),
        ("transfer-encoding", "") => Some(57),
        ("user-agent", "") => Some(58),
        ("vary", "") => Some(59),
        ("via", "") => Some(60),
        ("www-authenticate", "") => Some(61),
        _ => None,
    }
}
