mod ordinal;
mod parse_int;
mod trim;

pub use ordinal::{ordinal_cmp, OrdinalStr};
pub use parse_int::parse_leading_int;
pub use trim::{is_js_whitespace, trim};
