use std::iter::FusedIterator;

use crate::error::{error_if, Error, Result};

/// Lazily groups `items` into chunks of `max_items`, in order.
///
/// Every chunk holds `max_items` elements except the last, which holds
/// whatever is left. Each call to `next` pulls at most `max_items` elements
/// from the source, so unbounded iterators are fine.
///
/// # Examples
///
/// ```
/// # use typext::algorithms::batch;
/// let chunks: Vec<Vec<i32>> = batch(vec![1, 2, 3, 4, 5], 2).unwrap().collect();
/// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(batch(vec![1], 0).is_err());
/// ```
pub fn batch<I: IntoIterator>(items: I, max_items: usize) -> Result<Batch<I::IntoIter>> {
    error_if(max_items == 0, || {
        Error::invalid_argument("max_items", "must be greater than zero")
    })?;

    Ok(Batch { iter: items.into_iter(), max_items })
}

/// Iterator returned by [`batch`].
#[derive(Debug, Clone)]
pub struct Batch<I> {
    iter: I,
    max_items: usize,
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let hint = self.iter.size_hint().0.saturating_add(1);
        let mut chunk = Vec::with_capacity(self.max_items.min(hint));
        chunk.push(first);
        chunk.extend(self.iter.by_ref().take(self.max_items - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        let chunks = |n: usize| n / self.max_items + (n % self.max_items != 0) as usize;
        (chunks(low), high.map(chunks))
    }
}

impl<I: FusedIterator> FusedIterator for Batch<I> {}

pub trait BatchExt: Iterator + Sized {
    fn batched(self, max_items: usize) -> Result<Batch<Self>> {
        batch(self, max_items)
    }
}

impl<I: Iterator> BatchExt for I {}
