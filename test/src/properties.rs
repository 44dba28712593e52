#[cfg(test)]
mod test {
    use crate::permutation::permutations;
    use std::cmp::Ordering;
    use topicsort_sort::{
        compare_count_descending, compare_text, CountKey, CountPolicy, Item, ListSorter,
        MemoryItem, MemoryList, SortOrder,
    };

    const TEXTS: &[&str] = &["banana", "Apple", " cherry", "apple", "banana ", "", "Zed"];
    const COUNTS: &[&str] = &["3", "10", "1", "10", "x", " 7 posts", "-2"];

    fn text_list(texts: &[&str]) -> MemoryList {
        texts.iter().map(|&text| MemoryItem::new(text)).collect()
    }

    fn count_list(counts: &[&str]) -> MemoryList {
        counts
            .iter()
            .map(|&count| MemoryItem::new(count).with_count(count))
            .collect()
    }

    fn count_of(item: &MemoryItem) -> CountKey {
        CountKey::parse(&item.count_label().unwrap().unwrap_or_default())
    }

    fn sorted(mut list: MemoryList, order: SortOrder) -> MemoryList {
        ListSorter::new(CountPolicy::SortLast)
            .sort(&mut list, order)
            .unwrap();
        list
    }

    // Adjacent pairs must be ordered, and equal pairs must keep their
    // insertion order.
    fn assert_sorted_stable<F>(list: &MemoryList, cmp: F)
    where
        F: Fn(&MemoryItem, &MemoryItem) -> Ordering,
    {
        for pair in list.as_slice().windows(2) {
            match cmp(&pair[0], &pair[1]) {
                Ordering::Less => {}
                Ordering::Equal => assert!(pair[0].id() < pair[1].id(), "{:?}", list),
                Ordering::Greater => panic!("out of order: {:?}", list),
            }
        }
    }

    fn assert_same_items(list: &MemoryList, len: usize) {
        let mut ids = list.ids();
        ids.sort();
        assert_eq!(ids, (0..len).collect::<Vec<_>>());
    }

    fn by_text(a: &MemoryItem, b: &MemoryItem) -> Ordering {
        compare_text(a.text_str().unwrap_or(""), b.text_str().unwrap_or(""))
    }

    fn by_count(a: &MemoryItem, b: &MemoryItem) -> Ordering {
        compare_count_descending(&count_of(a), &count_of(b))
    }

    #[test]
    fn alphabetical_every_permutation() {
        for texts in permutations(TEXTS) {
            let list = sorted(text_list(&texts), SortOrder::Alphabetical);
            assert_sorted_stable(&list, by_text);
            assert_same_items(&list, texts.len());
        }
    }

    #[test]
    fn count_every_permutation() {
        for counts in permutations(COUNTS) {
            let list = sorted(count_list(&counts), SortOrder::CountDescending);
            assert_sorted_stable(&list, by_count);
            assert_same_items(&list, counts.len());
            let last = list.as_slice().last().unwrap();
            assert_eq!(count_of(last), CountKey(None));
        }
    }

    #[test]
    fn idempotent() {
        for order in [SortOrder::Alphabetical, SortOrder::CountDescending].iter() {
            let once = sorted(count_list(COUNTS), *order);
            let twice = sorted(once.clone(), *order);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn boundaries() {
        for order in [SortOrder::Alphabetical, SortOrder::CountDescending].iter() {
            assert!(sorted(MemoryList::new(), *order).is_empty());
            let single = sorted(count_list(&["4"]), *order);
            assert_eq!(single.texts(), vec!["4"]);
        }
    }

    #[test]
    fn scenario_alphabetical() {
        let list = sorted(
            text_list(&["banana", "Apple", "cherry"]),
            SortOrder::Alphabetical,
        );
        assert_eq!(list.texts(), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn scenario_count() {
        let list = sorted(count_list(&["3", "10", "1"]), SortOrder::CountDescending);
        assert_eq!(list.texts(), vec!["10", "3", "1"]);
    }

    #[test]
    fn scenario_count_tie() {
        let list: MemoryList = vec![
            MemoryItem::new("X").with_count("5"),
            MemoryItem::new("Y").with_count("5"),
        ]
        .into_iter()
        .collect();
        let list = sorted(list, SortOrder::CountDescending);
        assert_eq!(list.texts(), vec!["X", "Y"]);
    }
}
