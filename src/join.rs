use std::hash::Hash;

use indexmap::IndexMap;

/// Groups `items` by the key returned from `key_of`.
///
/// Keys keep the order they were first seen and items keep their order
/// within each group, so everything built on top of this enumerates
/// deterministically.
pub fn group_by_key<I, K, F>(items: I, mut key_of: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for item in items {
        groups.entry(key_of(&item)).or_insert_with(Vec::new).push(item);
    }
    groups
}

/// Joins two sequences by key, handing each key's whole matching groups
/// to `combine`.
///
/// Every key present on either side is visited exactly once; a side with
/// no matches contributes an empty slice. Results follow first-encounter
/// key order, left-side keys before right-only keys.
pub fn full_outer_group_join<L, R, K, T, KL, KR, C>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    key_of_left: KL,
    key_of_right: KR,
    mut combine: C,
) -> Vec<T>
where
    K: Hash + Eq,
    KL: FnMut(&L) -> K,
    KR: FnMut(&R) -> K,
    C: FnMut(&[L], &[R], &K) -> T,
{
    let left_groups = group_by_key(left, key_of_left);
    let right_groups = group_by_key(right, key_of_right);

    let no_left: &[L] = &[];
    let no_right: &[R] = &[];

    let mut results = Vec::with_capacity(left_groups.len() + right_groups.len());
    for (key, left_group) in &left_groups {
        let right_group = right_groups.get(key).map_or(no_right, Vec::as_slice);
        results.push(combine(left_group.as_slice(), right_group, key));
    }
    for (key, right_group) in &right_groups {
        if left_groups.contains_key(key) {
            continue;
        }
        results.push(combine(no_left, right_group.as_slice(), key));
    }

    results
}

/// Joins two sequences by key, producing one combined row per pairing.
///
/// Within a key the output is the cross product of both matching groups,
/// so 3 left matches against 2 right matches yield 6 rows. A side with no
/// matches contributes `None` exactly once, which keeps unmatched keys
/// from either side in the output. An absent right sequence is treated as
/// empty. Row order follows first-encounter key order, left-side keys
/// before right-only keys.
pub fn full_outer_join<L, R, K, T, KL, KR, C>(
    left: impl IntoIterator<Item = L>,
    right: Option<impl IntoIterator<Item = R>>,
    key_of_left: KL,
    key_of_right: KR,
    mut combine: C,
) -> Vec<T>
where
    K: Hash + Eq,
    KL: FnMut(&L) -> K,
    KR: FnMut(&R) -> K,
    C: FnMut(Option<&L>, Option<&R>, &K) -> T,
{
    let left_groups = group_by_key(left, key_of_left);
    let right_groups = match right {
        Some(right) => group_by_key(right, key_of_right),
        None => IndexMap::new(),
    };

    let no_right: &[R] = &[];

    let mut results = Vec::new();
    for (key, left_group) in &left_groups {
        let right_group = right_groups.get(key).map_or(no_right, Vec::as_slice);
        combine_pairs(left_group, right_group, key, &mut combine, &mut results);
    }
    for (key, right_group) in &right_groups {
        if left_groups.contains_key(key) {
            continue;
        }
        combine_pairs(&[], right_group, key, &mut combine, &mut results);
    }

    results
}

fn combine_pairs<L, R, K, T, C>(
    left: &[L],
    right: &[R],
    key: &K,
    combine: &mut C,
    results: &mut Vec<T>,
) where
    C: FnMut(Option<&L>, Option<&R>, &K) -> T,
{
    if left.is_empty() {
        for r in right {
            results.push(combine(None, Some(r), key));
        }
        return;
    }

    if right.is_empty() {
        for l in left {
            results.push(combine(Some(l), None, key));
        }
        return;
    }

    for l in left {
        for r in right {
            results.push(combine(Some(l), Some(r), key));
        }
    }
}
