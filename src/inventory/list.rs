//! Insertion-ordered record collection and its sorting strategies.
//!
//! The collection is a plain owned vector; iteration order is insertion
//! order until a sort is applied. Both sort algorithms are quadratic,
//! stable, and interchangeable: for the same strict `less` comparator they
//! produce identical final orderings.

use super::types::AssetRecord;

/// Stable bubble sort: repeated adjacent swaps until a pass makes none.
///
/// Swaps happen only when the right element is strictly less than the left,
/// so equal elements are never exchanged.
pub fn bubble_sort_by<T, F>(items: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..items.len() {
            let out_of_order = match (items.get(i - 1), items.get(i)) {
                (Some(prev), Some(next)) => less(next, prev),
                _ => false,
            };
            if out_of_order {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
    }
}

/// Stable insertion sort: drains the input and places each element into a
/// growing sorted sequence.
///
/// The insertion point is the first already-placed element the new one is
/// strictly less than. Equal elements never satisfy `less`, so each lands
/// after the equals already placed and ties keep their input order.
pub fn insertion_sort_by<T, F>(items: &mut Vec<T>, less: F)
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }
    let mut sorted: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        let at = sorted
            .iter()
            .position(|placed| less(&item, placed))
            .unwrap_or(sorted.len());
        sorted.insert(at, item);
    }
    *items = sorted;
}

/// Insertion-ordered, mutable sequence of asset records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordList {
    records: Vec<AssetRecord>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the end, preserving insertion order.
    pub fn push(&mut self, record: AssetRecord) {
        self.records.push(record);
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AssetRecord> {
        self.records.iter_mut()
    }

    pub fn as_slice(&self) -> &[AssetRecord] {
        &self.records
    }

    /// Remove and return the record at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Option<AssetRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Reorder in place with [`bubble_sort_by`].
    pub fn bubble_sort_by<F>(&mut self, less: F)
    where
        F: Fn(&AssetRecord, &AssetRecord) -> bool,
    {
        bubble_sort_by(&mut self.records, less);
    }

    /// Reorder in place with [`insertion_sort_by`].
    pub fn insertion_sort_by<F>(&mut self, less: F)
    where
        F: Fn(&AssetRecord, &AssetRecord) -> bool,
    {
        insertion_sort_by(&mut self.records, less);
    }
}

impl From<Vec<AssetRecord>> for RecordList {
    fn from(records: Vec<AssetRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a AssetRecord;
    type IntoIter = std::slice::Iter<'a, AssetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordList {
    type Item = AssetRecord;
    type IntoIter = std::vec::IntoIter<AssetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
