//! Property tests for property inheritance.

use proptest::prelude::*;

use llmake::{resolve, Entry, PromptSet};

/// Parents `p0..pN` with the given retries, declared in shuffled order,
/// followed by a child depending on all of them.
fn family(retries: &[u32], order: &[usize], child_retry: u32) -> PromptSet {
    let mut entries: Vec<Entry> = order
        .iter()
        .map(|&i| Entry::new(format!("p{}", i), "parent").with_retry(retries[i]))
        .collect();
    let parents: Vec<String> = order.iter().map(|i| format!("p{}", i)).collect();
    entries.push(
        Entry::new("child", "child")
            .with_dependencies(parents)
            .with_retry(child_retry),
    );
    PromptSet::from_entries(entries).unwrap()
}

fn retries_and_order() -> impl Strategy<Value = (Vec<u32>, Vec<usize>)> {
    proptest::collection::vec(0u32..6, 1..6).prop_flat_map(|retries| {
        let order: Vec<usize> = (0..retries.len()).collect();
        (Just(retries), Just(order).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a child without its own retry gets the largest parent retry,
    /// whatever order the parents are declared in.
    #[test]
    fn property_inherited_retry_is_parent_maximum((retries, order) in retries_and_order()) {
        let mut prompts = family(&retries, &order, 0);

        resolve(&mut prompts).unwrap();

        let expected = retries.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(prompts.get("child").unwrap().retry(), expected);
    }

    /// PROPERTY: a positive retry on the child always wins.
    #[test]
    fn property_own_retry_wins(
        (retries, order) in retries_and_order(),
        own in 1u32..10,
    ) {
        let mut prompts = family(&retries, &order, own);

        resolve(&mut prompts).unwrap();

        prop_assert_eq!(prompts.get("child").unwrap().retry(), own);
    }

    /// PROPERTY: resolving an already resolved set changes nothing.
    #[test]
    fn property_resolve_is_idempotent((retries, order) in retries_and_order()) {
        let mut once = family(&retries, &order, 0);
        resolve(&mut once).unwrap();

        let mut twice = once.clone();
        resolve(&mut twice).unwrap();

        prop_assert_eq!(once, twice);
    }
}
