use crate::Error;
use serde_derive::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Alphabetical,
    CountDescending,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Alphabetical => write!(f, "alphabetical"),
            SortOrder::CountDescending => write!(f, "count-descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" | "alphabetical" => Ok(SortOrder::Alphabetical),
            "count" | "count-desc" | "count-descending" => Ok(SortOrder::CountDescending),
            _ => Err(Error::UnknownOrder(s.into())),
        }
    }
}
