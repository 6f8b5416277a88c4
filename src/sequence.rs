/// Applies `action` to every element of `sequence`, in iteration order.
///
/// An absent sequence is a no-op, so callers can feed an optional lookup
/// result straight in without matching on it first.
pub fn for_each<I, F>(sequence: Option<I>, action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    let Some(sequence) = sequence else {
        return;
    };

    sequence.into_iter().for_each(action);
}

/// Appends every element of `source` to `target`, preserving source order.
///
/// Any collection implementing `Extend` works as the target. An absent
/// source is a no-op, matching `for_each`.
pub fn append_range<C, I>(target: &mut C, source: Option<I>)
where
    C: Extend<I::Item>,
    I: IntoIterator,
{
    let Some(source) = source else {
        return;
    };

    target.extend(source);
}
