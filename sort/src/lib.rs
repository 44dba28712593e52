pub mod config;
pub mod container;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod key;
pub mod memory;
pub mod order;
pub mod sorter;

pub use config::{CountPolicy, SorterConfig};
pub use container::{Item, ListContainer};
#[cfg(target_arch = "wasm32")]
pub use dom::{document, DomContainer, DomItem};
pub use error::{Error, Result};
pub use key::{compare_count_descending, compare_text, CountKey, TextKey};
pub use memory::{MemoryItem, MemoryList, MemoryPage};
pub use order::SortOrder;
pub use sorter::{order_alphabetically, order_by_count_descending, ListSorter};
