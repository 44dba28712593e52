use crate::{CountPolicy, Error, Item, Result};
use std::cmp::Ordering;
use topicsort_util::{ordinal_cmp, parse_leading_int, trim, OrdinalStr};
use tracing::warn;

/// Trimmed visible text of an item, ordered by UTF-16 code units.
pub type TextKey = OrdinalStr;

/// Parsed count of an item. `CountKey(None)` ranks below every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountKey(pub Option<i64>);

impl CountKey {
    pub fn parse(label: &str) -> Self {
        CountKey(parse_leading_int(trim(label)))
    }
}

pub fn compare_text(a: &str, b: &str) -> Ordering {
    ordinal_cmp(trim(a), trim(b))
}

/// Higher counts first, malformed counts after all others.
pub fn compare_count_descending(a: &CountKey, b: &CountKey) -> Ordering {
    b.cmp(a)
}

pub(crate) fn text_key<I: Item>(item: &I) -> TextKey {
    match item.text() {
        Some(text) => trim(&text).into(),
        None => TextKey::default(),
    }
}

pub(crate) fn count_key<I: Item>(index: usize, item: &I, policy: CountPolicy) -> Result<CountKey> {
    let label = match item.count_label()? {
        Some(label) => label,
        None => {
            return match policy {
                CountPolicy::Strict => Err(Error::MissingCount { index }),
                CountPolicy::SortLast => {
                    warn!(index, "item has no count label, sorting it last");
                    Ok(CountKey(None))
                }
            }
        }
    };
    let key = CountKey::parse(&label);
    match (key, policy) {
        (CountKey(None), CountPolicy::Strict) => Err(Error::InvalidCount { index, label }),
        (CountKey(None), CountPolicy::SortLast) => {
            warn!(index, label = %label, "unparsable count label, sorting it last");
            Ok(key)
        }
        _ => Ok(key),
    }
}
