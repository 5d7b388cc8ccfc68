use core::borrow::Borrow;
use core::fmt::Debug;

/// A key-value pair stored in a [`ChainedHashTable`](crate::ChainedHashTable).
///
/// Entries live inside exactly one bucket of the table that created them.
/// Callers reach them through [`find`](crate::ChainedHashTable::find),
/// [`find_mut`](crate::ChainedHashTable::find_mut) and iteration. The key
/// cannot be changed through an entry; the value can be mutated in place.
///
/// # Examples
///
/// ```rust
/// use chain_hash::ChainedHashTable;
///
/// let mut table = ChainedHashTable::new();
/// table.insert("apples", 3).unwrap();
///
/// let entry = table.find_mut("apples").unwrap();
/// assert_eq!(entry.key(), &"apples");
/// *entry.value_mut() += 2;
///
/// assert_eq!(table.get("apples"), Ok(&5));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the entry's value.
    ///
    /// Writes through this reference update the value stored in the table.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the entry's value, returning the previous one.
    pub fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Returns the key and value as a pair of references.
    pub fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) fn matches<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.key.borrow() == key
    }

    /// Swaps in a new key and value. The new key must compare equal to the old
    /// one; only the table calls this, from `upsert`.
    pub(crate) fn replace(&mut self, key: K, value: V) -> V {
        self.key = key;
        core::mem::replace(&mut self.value, value)
    }
}

impl<K: Debug, V: Debug> Debug for Entry<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
