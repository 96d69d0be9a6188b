//! Differences between two published lists.
//!
//! List renderers use these to update only the rows that changed.

use std::collections::HashMap;

use crate::transaction::{Transaction, TransactionId};

/// Returns true if both values represent the same record.
#[must_use]
pub fn same_item(old: &Transaction, new: &Transaction) -> bool {
    old.id == new.id
}

/// Returns true if both values would render identically.
#[must_use]
pub fn same_contents(old: &Transaction, new: &Transaction) -> bool {
    old == new
}

/// Ids that appeared, disappeared or changed between two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewDiff {
    /// Present only in the new list, in new-list order.
    pub inserted: Vec<TransactionId>,
    /// Present only in the old list, in old-list order.
    pub removed: Vec<TransactionId>,
    /// Present in both with different contents, in new-list order.
    pub changed: Vec<TransactionId>,
}

impl ViewDiff {
    /// Returns true if the lists hold the same records with the same contents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare two lists by id.
///
/// With duplicate ids only the first occurrence on each side is compared.
#[must_use]
pub fn diff(old: &[Transaction], new: &[Transaction]) -> ViewDiff {
    let old_by_id = first_by_id(old);
    let new_by_id = first_by_id(new);

    let mut result = ViewDiff::default();
    for (position, transaction) in new.iter().enumerate() {
        if new_by_id.get(&transaction.id) != Some(&position) {
            continue;
        }
        match old_by_id.get(&transaction.id) {
            None => result.inserted.push(transaction.id),
            Some(&index) if !same_contents(&old[index], transaction) => {
                result.changed.push(transaction.id);
            }
            Some(_) => {}
        }
    }
    for (position, transaction) in old.iter().enumerate() {
        if old_by_id.get(&transaction.id) == Some(&position)
            && !new_by_id.contains_key(&transaction.id)
        {
            result.removed.push(transaction.id);
        }
    }
    result
}

fn first_by_id(list: &[Transaction]) -> HashMap<TransactionId, usize> {
    let mut index = HashMap::with_capacity(list.len());
    for (position, transaction) in list.iter().enumerate() {
        index.entry(transaction.id).or_insert(position);
    }
    index
}
