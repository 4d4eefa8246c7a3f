//! A single keyed record collection with store-assigned ids.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::StorageError;

/// Keyed collection that remembers insertion order.
///
/// Ids handed out by [`Table::next_id`] start at 1 and strictly increase;
/// an id is never handed out twice, even if rows were to be removed.
#[derive(Debug)]
pub struct Table<K, V> {
    name: &'static str,
    last_id: u32,
    rows: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Table<K, V> {
    /// Create an empty table; `name` identifies it in errors and logs.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            last_id: 0,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<K, V> Table<K, V>
where
    K: Copy + Eq + Hash + From<u32>,
    V: Clone,
{
    /// Reserve a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::IdsExhausted`] once `u32::MAX` ids were handed out.
    pub fn next_id(&mut self) -> Result<K, StorageError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted { table: self.name })?;
        Ok(K::from(self.last_id))
    }

    /// Insert `value` under `id`, overwriting any existing row in place.
    pub fn put(&mut self, id: K, value: V) {
        if let Some(&position) = self.index.get(&id) {
            self.rows[position].1 = value;
        } else {
            self.index.insert(id, self.rows.len());
            self.rows.push((id, value));
        }
    }

    #[must_use]
    pub fn get(&self, id: K) -> Option<V> {
        self.index
            .get(&id)
            .map(|&position| self.rows[position].1.clone())
    }

    /// Every row in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<V> {
        self.values().cloned().collect()
    }

    /// Borrowing iterator over the rows in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.iter().map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
