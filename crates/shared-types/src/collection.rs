//! Whole-collection updates for the in-memory stores.
//!
//! Collections are never edited in place: every change produces a new
//! `Vec` that replaces the old one wholesale.

use crate::error::AppError;

/// A record addressable by a string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// Copy of `items` with the record `id` rewritten by `update`.
pub fn replace_by_id<T, F>(items: &[T], id: &str, update: F) -> Result<Vec<T>, AppError>
where
    T: Record,
    F: FnOnce(&mut T),
{
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| AppError::not_found(format!("No record with id {id}")))?;
    let mut next = items.to_vec();
    update(&mut next[index]);
    Ok(next)
}

/// Copy of `items` with `item` added at the end.
pub fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

fn sequence(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}

/// Next sequential id for a prefix, e.g. `note-7` after `note-6`. Once the
/// counter is exhausted the lowest free number is reused.
pub fn next_id<T: Record>(items: &[T], prefix: &str) -> String {
    let taken: Vec<u64> = items.iter().filter_map(|item| sequence(item.id(), prefix)).collect();
    let highest = taken.iter().copied().max().unwrap_or(0);
    let next = highest
        .checked_add(1)
        .or_else(|| (1..).find(|n| !taken.contains(n)))
        .unwrap_or(1);
    format!("{prefix}-{next}")
}
