use crate::Result;
use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".topic-list";
pub const DEFAULT_ITEM_SELECTOR: &str = "li";
pub const DEFAULT_COUNT_SELECTOR: &str = ".til-tag-count";

/// What to do with an item whose count label is missing or does not start
/// with an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountPolicy {
    /// Rank the item below every parsable count.
    SortLast,
    /// Fail the whole sort before anything is moved.
    Strict,
}

impl Default for CountPolicy {
    fn default() -> Self {
        CountPolicy::SortLast
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
    pub container_selector: String,
    pub item_selector: String,
    pub count_selector: String,
    pub count_policy: CountPolicy,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.into(),
            item_selector: DEFAULT_ITEM_SELECTOR.into(),
            count_selector: DEFAULT_COUNT_SELECTOR.into(),
            count_policy: CountPolicy::default(),
        }
    }
}

impl SorterConfig {
    /// Reads a config from a JSON object. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
