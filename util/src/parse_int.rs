use num::{NumCast, PrimInt, Signed};

use crate::is_js_whitespace;

/// Parses a base-10 integer prefix the way `parseInt(s, 10)` does.
///
/// Leading whitespace is skipped, one optional sign is accepted and the
/// longest run of ASCII digits after it is taken; anything following the
/// digits is ignored. Returns `None` when no digit is found. Values that
/// do not fit in `T` saturate at `T::min_value()` / `T::max_value()`.
pub fn parse_leading_int<T>(s: &str) -> Option<T>
where
    T: PrimInt + Signed,
{
    let s = s.trim_start_matches(is_js_whitespace);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let ten = <T as NumCast>::from(10)?;
    let mut value = T::zero();
    let mut found = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        found = true;
        let digit = <T as NumCast>::from(b - b'0')?;
        let next = value.checked_mul(&ten).and_then(|v| {
            if negative {
                v.checked_sub(&digit)
            } else {
                v.checked_add(&digit)
            }
        });
        value = match next {
            Some(next) => next,
            None if negative => return Some(T::min_value()),
            None => return Some(T::max_value()),
        };
    }
    if found {
        Some(value)
    } else {
        None
    }
}
