//! A fluent wrapper over an ordered list of values.
//!
//! Every operation runs to completion before it returns: `filter` and `map`
//! materialize a new list and swap it in, the remaining operations read the
//! list in place.
//!
//! The list a container holds is a [`SharedList`], and [`Collection::unwrap`]
//! hands out that same list rather than a copy. Changes made through the
//! returned handle are seen by the container and the other way round.
//! `filter` and `map` never write to the list they read from; they replace
//! it, so a handle taken before one of them keeps its old contents.

use std::{fmt::Display, io::Write};

use crate::{error::Result, list::SharedList, util::sequence::Sequence};

pub struct Collection<T> {
    values: SharedList<T>,
}

impl<T> Collection<T> {
    /// Wraps an existing list. `None` gives an empty collection.
    pub fn from_sequence<S>(values: S) -> Self
    where
        S: Into<Option<Vec<T>>>,
    {
        Collection {
            values: values
                .into()
                .map(SharedList::from)
                .unwrap_or_default(),
        }
    }

    pub fn from_single(value: T) -> Self {
        Collection {
            values: SharedList::from(vec![value]),
        }
    }

    /// Adopts `list` as the collection's storage without copying it.
    pub fn from_shared(list: SharedList<T>) -> Self {
        Collection { values: list }
    }

    /// Keeps the elements for which `predicate` returns true, in their
    /// original order.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let filtered: Vec<T> = self
            .values
            .into_vec()
            .into_iter()
            .filter(|value| predicate(value))
            .collect();
        Collection {
            values: SharedList::from(filtered),
        }
    }

    /// Replaces every element with `mapper` applied to it.
    ///
    /// The current list stays borrowed while `mapper` runs.
    pub fn map<U, M>(self, mapper: M) -> Collection<U>
    where
        M: FnMut(&T) -> U,
    {
        let mapped: Vec<U> = self.values.with(|items| items.iter().map(mapper).collect());
        Collection {
            values: SharedList::from(mapped),
        }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the live list backing this collection.
    pub fn unwrap(&self) -> SharedList<T> {
        self.values.clone()
    }

    pub fn find_first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.values.get(0)
    }

    pub fn for_each<C>(&self, consumer: C)
    where
        C: FnMut(&T),
    {
        self.values.with(|items| items.iter().for_each(consumer));
    }

    /// Like [`Collection::for_each`], but returns the collection so the
    /// chain can continue. `consumer` must not modify the list; an attempt
    /// through an aliased [`SharedList`] panics.
    pub fn peek<C>(self, consumer: C) -> Self
    where
        C: FnMut(&T),
    {
        self.for_each(consumer);
        self
    }

    /// Prints each element on its own line to standard output.
    pub fn print(&self)
    where
        T: Display,
    {
        self.for_each(|value| println!("{value}"));
    }

    /// Writes each element on its own line to `sink`.
    pub fn write_lines<W>(&self, mut sink: W) -> Result<()>
    where
        W: Write,
        T: Display,
    {
        self.values.with(|items| -> Result<()> {
            for item in items {
                writeln!(sink, "{item}")?;
            }
            Ok(())
        })
    }

    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.into_vec()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            values: SharedList::new(),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(values: Vec<T>) -> Self {
        Collection::from_sequence(values)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Collection {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Collection<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> Sequence<T> for Collection<T>
where
    T: Clone,
{
    fn collect<C>(self) -> C
    where
        C: FromIterator<T>,
    {
        self.into_vec().into_iter().collect()
    }

    fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<T>,
    {
        target.extend(self.into_vec());
    }
}

impl<T> std::fmt::Debug for Collection<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("values", &self.values)
            .finish()
    }
}
