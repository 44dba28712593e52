use crate::{
    key::{count_key, text_key},
    compare_count_descending, CountKey, CountPolicy, Item, ListContainer, Result, SortOrder,
};
use tracing::debug;

/// Stable alphabetical order over trimmed text.
pub fn order_alphabetically<I: Item>(mut items: Vec<I>) -> Vec<I> {
    items.sort_by_cached_key(text_key);
    items
}

/// Stable descending order over parsed counts.
///
/// All keys are read before anything is reordered, so under
/// [`CountPolicy::Strict`] a bad label fails the call without side effects.
pub fn order_by_count_descending<I: Item>(items: Vec<I>, policy: CountPolicy) -> Result<Vec<I>> {
    let mut keyed = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| count_key(index, &item, policy).map(|key| (key, item)))
        .collect::<Result<Vec<(CountKey, I)>>>()?;
    keyed.sort_by(|(a, _), (b, _)| compare_count_descending(a, b));
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Reorders the items of a [`ListContainer`].
///
/// Every call reads the container, computes the new order and writes it
/// back. Nothing is remembered between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSorter {
    policy: CountPolicy,
}

impl ListSorter {
    pub fn new(policy: CountPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CountPolicy {
        self.policy
    }

    pub fn sort<C: ListContainer>(&self, container: &mut C, order: SortOrder) -> Result<()> {
        let items = container.items()?;
        debug!(len = items.len(), %order, "sorting list");
        let items = match order {
            SortOrder::Alphabetical => order_alphabetically(items),
            SortOrder::CountDescending => order_by_count_descending(items, self.policy)?,
        };
        container.set_items(items)
    }

    pub fn sort_alphabetically<C: ListContainer>(&self, container: &mut C) -> Result<()> {
        self.sort(container, SortOrder::Alphabetical)
    }

    pub fn sort_by_count_descending<C: ListContainer>(&self, container: &mut C) -> Result<()> {
        self.sort(container, SortOrder::CountDescending)
    }
}
