/// Every ordering of `items`, by Heap's algorithm.
pub(crate) fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut items = items.to_vec();
    let mut result = vec![items.clone()];
    let mut c = vec![0; items.len()];
    let mut i = 1;
    while i < items.len() {
        if c[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(c[i], i);
            }
            result.push(items.clone());
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::permutations;

    #[test]
    fn counts() {
        assert_eq!(permutations::<u8>(&[]).len(), 1);
        assert_eq!(permutations(&[1]).len(), 1);
        assert_eq!(permutations(&[1, 2, 3, 4]).len(), 24);
    }

    #[test]
    fn distinct() {
        let mut all = permutations(&[1, 2, 3, 4, 5]);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 120);
    }
}
