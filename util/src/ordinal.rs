use std::cmp::Ordering;

/// Compares two strings by their UTF-16 code units, the order a browser
/// uses for `<` on strings. Case-sensitive and locale-independent.
pub fn ordinal_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// An owned string ordered with [`ordinal_cmp`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrdinalStr(pub String);

impl PartialOrd for OrdinalStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdinalStr {
    fn cmp(&self, other: &Self) -> Ordering {
        ordinal_cmp(&self.0, &other.0)
    }
}

impl From<&str> for OrdinalStr {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for OrdinalStr {
    fn from(s: String) -> Self {
        Self(s)
    }
}
