use std::{cell::RefCell, rc::Rc};

use crate::error::{CollectionError, Result};

/// A shared handle to a mutable list.
///
/// Cloning a `SharedList` does not copy the elements: both handles refer to
/// the same storage, and a change made through one is visible through the
/// other. Use [`SharedList::to_vec`] for an independent copy.
pub struct SharedList<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        SharedList {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.items.borrow().get(index).cloned()
    }

    pub fn push(&self, value: T) {
        self.items.borrow_mut().push(value);
    }

    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut items = self.items.borrow_mut();
        let len = items.len();
        *items
            .get_mut(index)
            .ok_or_else(|| CollectionError::new_index_out_of_bounds(index, len))? = value;
        Ok(())
    }

    pub fn remove(&self, index: usize) -> Result<T> {
        let mut items = self.items.borrow_mut();
        if index >= items.len() {
            return Err(CollectionError::new_index_out_of_bounds(index, items.len()));
        }
        Ok(items.remove(index))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.borrow().clone()
    }

    /// Returns true if both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Runs `f` against the current contents.
    ///
    /// The list is borrowed for the duration of the call, so `f` must not
    /// modify it through another handle; doing so panics.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.items.borrow())
    }

    /// Takes the elements out, cloning only if another handle still
    /// refers to the storage.
    pub(crate) fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match Rc::try_unwrap(self.items) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        }
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        SharedList {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SharedList<T> {
    fn from(items: Vec<T>) -> Self {
        SharedList {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        SharedList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> std::fmt::Debug for SharedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.items.borrow(), f)
    }
}

impl<T> PartialEq for SharedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.items.borrow() == *other.items.borrow()
    }
}

impl<T> PartialEq<[T]> for SharedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.items.borrow().as_slice() == other
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for SharedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.borrow().as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_alias_storage() {
        let list = SharedList::from(vec![1, 2]);
        let alias = list.clone();
        alias.push(3);
        assert!(list.ptr_eq(&alias));
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn to_vec_is_independent() {
        let list = SharedList::from(vec!["a", "b"]);
        let mut copy = list.to_vec();
        copy.push("c");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn set_replaces_element() -> anyhow::Result<()> {
        let list: SharedList<_> = (1..=3).collect();
        list.set(1, 20)?;
        assert_eq!(list.get(1), Some(20));
        Ok(())
    }

    #[test]
    fn set_out_of_bounds_fails() {
        let list = SharedList::from(vec![1]);
        let err = list.set(5, 0).unwrap_err();
        assert!(matches!(
            err,
            CollectionError::IndexOutOfBounds { index: 5, len: 1 }
        ));
        assert_eq!(list, [1]);
    }

    #[test]
    fn remove_shifts_remaining() -> anyhow::Result<()> {
        let list = SharedList::from(vec!['x', 'y', 'z']);
        assert_eq!(list.remove(0)?, 'x');
        assert_eq!(list, ['y', 'z']);
        assert!(list.remove(2).is_err());
        Ok(())
    }

    #[test]
    fn into_vec_clones_when_shared() {
        let list = SharedList::from(vec![1, 2]);
        let alias = list.clone();
        let mut owned = list.into_vec();
        owned.push(3);
        assert_eq!(alias, [1, 2]);
    }

    #[test]
    fn with_borrows_contents() {
        let list = SharedList::from(vec![3, 4, 5]);
        let sum: i32 = list.with(|items| items.iter().sum());
        assert_eq!(sum, 12);
    }

    #[test]
    fn new_list_is_empty() {
        let list = SharedList::<String>::default();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }
}
