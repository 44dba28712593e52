//! A list kept in memory, for driving the sorter without a browser.

use crate::{Error, Item, ListContainer, Result};
use std::{collections::HashMap, iter::FromIterator};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryItem {
    id: usize,
    text: Option<String>,
    count: Option<String>,
}

impl MemoryItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: Some(text.into()),
            count: None,
        }
    }

    /// An item without any text content.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, label: impl Into<String>) -> Self {
        self.count = Some(label.into());
        self
    }

    /// Position the item had when it was added to its list.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text_str(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Item for MemoryItem {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }
    fn count_label(&self) -> Result<Option<String>> {
        Ok(self.count.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryList {
    items: Vec<MemoryItem>,
    next_id: usize,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut item: MemoryItem) -> usize {
        let id = self.next_id;
        item.id = id;
        self.next_id += 1;
        self.items.push(item);
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[MemoryItem] {
        &self.items
    }

    /// Texts in current order; items without text show as `""`.
    pub fn texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.text_str().unwrap_or(""))
            .collect()
    }

    pub fn ids(&self) -> Vec<usize> {
        self.items.iter().map(MemoryItem::id).collect()
    }
}

impl ListContainer for MemoryList {
    type Item = MemoryItem;

    fn items(&self) -> Result<Vec<MemoryItem>> {
        Ok(self.items.clone())
    }

    fn set_items(&mut self, items: Vec<MemoryItem>) -> Result<()> {
        for item in items {
            if let Some(index) = self.items.iter().position(|i| i.id == item.id) {
                self.items.remove(index);
            }
            self.items.push(item);
        }
        Ok(())
    }
}

impl FromIterator<MemoryItem> for MemoryList {
    fn from_iter<T: IntoIterator<Item = MemoryItem>>(iter: T) -> Self {
        let mut list = MemoryList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

/// Named lists standing in for a page, looked up by marker selector.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    lists: HashMap<String, MemoryList>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: impl Into<String>, list: MemoryList) {
        self.lists.insert(selector.into(), list);
    }

    pub fn container(&mut self, selector: &str) -> Result<&mut MemoryList> {
        self.lists
            .get_mut(selector)
            .ok_or_else(|| Error::ContainerNotFound {
                selector: selector.into(),
            })
    }
}

#[cfg(test)]
mod test {
    use super::{MemoryItem, MemoryList, MemoryPage};
    use crate::{Error, ListContainer};

    fn list() -> MemoryList {
        vec!["a", "b", "c"].into_iter().map(MemoryItem::new).collect()
    }

    #[test]
    fn ids_follow_insertion() {
        let list = list();
        assert_eq!(list.ids(), vec![0, 1, 2]);
        assert_eq!(list.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn append_moves() {
        let mut list = list();
        let mut items = list.items().unwrap();
        items.reverse();
        list.set_items(items).unwrap();
        assert_eq!(list.texts(), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn partial_append_keeps_rest_in_front() {
        let mut list = list();
        let first = list.items().unwrap().remove(0);
        list.set_items(vec![first]).unwrap();
        assert_eq!(list.texts(), vec!["b", "c", "a"]);
    }

    #[test]
    fn page_lookup() {
        let mut page = MemoryPage::new();
        page.insert(".topic-list", list());
        assert_eq!(page.container(".topic-list").unwrap().len(), 3);
        assert!(matches!(
            page.container(".missing"),
            Err(Error::ContainerNotFound { selector }) if selector == ".missing"
        ));
    }
}
