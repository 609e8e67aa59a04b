//! A separately chained hash table mapping `String` keys to `f64` values.
//!
//! Every bucket owns a singly linked chain of the entries that hash to it,
//! and new entries are prepended at the chain head. The bucket count is
//! fixed at construction time; the chains simply grow as the table fills.
//!
//! # Examples
//!
//! ```
//! use treetable::table::HashTable;
//!
//! let mut table = HashTable::new();
//!
//! table.insert("pi", 3.14);
//! assert_eq!(table.get("pi"), Some(3.14));
//!
//! // Inserting a new value for the same key overwrites the value.
//! table.insert("pi", 3.14159);
//! assert_eq!(table.get("pi"), Some(3.14159));
//!
//! // Deleting an entry returns its value.
//! assert_eq!(table.delete("pi"), Some(3.14159));
//! assert_eq!(table.get("pi"), None);
//! ```

use thiserror::Error;

/// The bucket count used by [`HashTable::new`].
pub const DEFAULT_BUCKETS: usize = 101;

/// Errors from configuring a [`HashTable`].
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// The hash has no index to map keys into without at least one bucket.
    #[error("hash table needs at least one bucket")]
    NoBuckets,
}

/// An owning link to the rest of a bucket's chain.
type Chain = Option<Box<Entry>>;

#[derive(Debug)]
struct Entry {
    key: String,
    value: f64,
    next: Chain,
}

/// A fixed-size hash table with `String` keys and `f64` values, resolving
/// collisions by separate chaining. Keys are unique; inserting an existing
/// key overwrites its value in place.
#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Chain>,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        // Unlink the chains entry by entry rather than letting Box's drop
        // glue recurse once per chained entry.
        self.clear();
    }
}

impl HashTable {
    /// Generates a new, empty `HashTable` with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS).expect("default bucket count is nonzero")
    }

    /// Generates a new, empty `HashTable` with the given number of buckets.
    /// The bucket count is fixed for the table's lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::table::{HashTable, TableError};
    ///
    /// let table = HashTable::with_buckets(11).unwrap();
    /// assert!(table.is_empty());
    ///
    /// assert_eq!(HashTable::with_buckets(0).unwrap_err(), TableError::NoBuckets);
    /// ```
    pub fn with_buckets(buckets: usize) -> Result<Self, TableError> {
        if buckets == 0 {
            return Err(TableError::NoBuckets);
        }
        let mut slots = Vec::with_capacity(buckets);
        slots.resize_with(buckets, || None);
        Ok(Self { buckets: slots })
    }

    /// Maps a key to its bucket index: one plus the sum of the key's bytes,
    /// reduced modulo the bucket count.
    ///
    /// This hash is deliberately naive: permutations of the same bytes
    /// collide (`"abc"` and `"cba"` share a bucket) and short keys cluster
    /// in the low buckets. The chains absorb the collisions; a table meant
    /// for uniform spread would pick a real hash.
    fn bucket(&self, key: &str) -> usize {
        let sum = key
            .bytes()
            .fold(1usize, |sum, byte| sum.wrapping_add(usize::from(byte)));
        sum % self.buckets.len()
    }

    /// Scans the key's chain for its entry, comparing keys by content.
    fn find_entry(&self, key: &str) -> Option<&Entry> {
        let mut cur = self.buckets[self.bucket(key)].as_deref();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(entry);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    /// Like [`Self::find_entry`] but yields a mutable entry.
    fn find_entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let slot = self.bucket(key);
        let mut cur = self.buckets[slot].as_deref_mut();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(entry);
            }
            cur = entry.next.as_deref_mut();
        }
        None
    }

    /// Potentially finds the value associated with the given key. If no
    /// entry has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("one", 1.0);
    ///
    /// assert_eq!(table.get("one"), Some(1.0));
    /// assert_eq!(table.get("two"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<f64> {
        self.find_entry(key).map(|entry| entry.value)
    }

    /// Inserts the given value at the given key. Inserting a new value for
    /// an existing key overwrites its value in place; a new key gets a
    /// fresh entry prepended at the head of its bucket's chain, the `O(1)`
    /// insertion position.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::table::HashTable;
    ///
    /// let mut table = HashTable::new();
    ///
    /// table.insert("x", 1.0);
    /// table.insert("x", 2.0);
    ///
    /// assert_eq!(table.get("x"), Some(2.0));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: f64) {
        if let Some(entry) = self.find_entry_mut(key) {
            entry.value = value;
            return;
        }
        let slot = self.bucket(key);
        let entry = Box::new(Entry {
            key: key.to_owned(),
            value,
            next: self.buckets[slot].take(),
        });
        self.buckets[slot] = Some(entry);
    }

    /// Deletes the entry with the given key and returns its value, or
    /// returns `None` without touching the table if the key is absent.
    ///
    /// This walks the bucket's chain directly with a link cursor instead of
    /// going through [`Self::find_entry`]: unlinking needs the owning link,
    /// not the entry behind it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("x", 1.0);
    ///
    /// assert_eq!(table.delete("x"), Some(1.0));
    /// assert_eq!(table.get("x"), None);
    /// assert_eq!(table.delete("x"), None);
    /// ```
    pub fn delete(&mut self, key: &str) -> Option<f64> {
        let slot = self.bucket(key);
        let mut cur = &mut self.buckets[slot];
        while cur.as_ref().is_some_and(|entry| entry.key != key) {
            let entry = cur.as_mut().expect("loop condition saw an entry");
            cur = &mut entry.next;
        }

        let entry = *cur.take()?;
        *cur = entry.next;
        Some(entry.value)
    }

    /// Removes every entry from every bucket, returning the table to its
    /// freshly created state. The bucket count is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("x", 1.0);
    /// table.insert("y", 2.0);
    ///
    /// table.clear();
    ///
    /// assert!(table.is_empty());
    /// assert_eq!(table.get("x"), None);
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            let mut cur = slot.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
    }

    /// How many entries the table holds, counted by walking every chain.
    pub fn len(&self) -> usize {
        let mut count = 0;
        for slot in &self.buckets {
            let mut cur = slot.as_deref();
            while let Some(entry) = cur {
                count += 1;
                cur = entry.next.as_deref();
            }
        }
        count
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|slot| slot.is_none())
    }
}
