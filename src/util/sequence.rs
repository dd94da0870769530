/// A finite, ordered source of values that can be materialized in one step.
pub trait Sequence<T> {
    fn collect<C>(self) -> C
    where
        C: FromIterator<T>;

    fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<T>;
}
