use crate::Result;

/// One sortable entry.
pub trait Item {
    /// Visible text of the whole entry, `None` when the entry has none.
    fn text(&self) -> Option<String>;
    /// Text of the entry's count label, `Ok(None)` when it has no label.
    fn count_label(&self) -> Result<Option<String>>;
}

/// Ordered access to the items of a list.
///
/// `set_items` appends every given item to the end of the container in
/// sequence. Items already in the container are moved, not copied, so
/// passing a permutation of [`ListContainer::items`] reorders the list.
pub trait ListContainer {
    type Item: Item;
    fn items(&self) -> Result<Vec<Self::Item>>;
    fn set_items(&mut self, items: Vec<Self::Item>) -> Result<()>;
}
