//! A generic hash table using separate chaining.
//!
//! The table owns `capacity` buckets. Each bucket is a `Vec` of [`Entry`]
//! values kept in insertion order. A key lives in bucket
//! `hash(key) % capacity`, and lookups scan that bucket comparing keys with
//! `Eq`.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use core::ops::Index;

use crate::DefaultHashBuilder;
use crate::entry::Entry;
use crate::error::Error;

/// Number of buckets a table starts with when none is requested.
pub const DEFAULT_CAPACITY: usize = 16;

// Maximum load factor of 3/4, compared in integer arithmetic.
const MAX_LOAD_NUMERATOR: u128 = 3;
const MAX_LOAD_DENOMINATOR: u128 = 4;

#[inline(always)]
fn exceeds_max_load(len: usize, capacity: usize) -> bool {
    len as u128 * MAX_LOAD_DENOMINATOR > capacity as u128 * MAX_LOAD_NUMERATOR
}

type Bucket<K, V> = Vec<Entry<K, V>>;

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// Statistics about the shape of the bucket chains.
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStats {
    /// Number of entries currently in the table
    pub populated: usize,
    /// Number of buckets
    pub buckets: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Buckets holding no entries
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// populated / buckets
    pub load_factor: f64,
    /// Mean chain length over occupied buckets
    pub mean_chain_length: f64,
}

#[cfg(feature = "stats")]
impl ChainStats {
    /// Pretty-print the chain statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Chained Hash Table Statistics ===");
        println!(
            "Population: {}/{} buckets ({:.2}% load factor)",
            self.populated,
            self.buckets,
            self.load_factor * 100.0
        );
        println!(
            "Bucket Usage: {} occupied, {} empty ({:.2}% occupied)",
            self.occupied_buckets,
            self.empty_buckets,
            if self.buckets == 0 {
                0.0
            } else {
                (self.occupied_buckets as f64 / self.buckets as f64) * 100.0
            }
        );
        println!(
            "Chains: longest {}, mean {:.02}",
            self.longest_chain, self.mean_chain_length
        );
    }
}

/// A hash table resolving collisions by separate chaining.
///
/// `ChainedHashTable<K, V>` maps keys implementing `Hash + Eq` to values. It
/// starts with [`DEFAULT_CAPACITY`] buckets unless told otherwise and doubles
/// its bucket count whenever placing a new entry would push the load factor
/// (`len / capacity`) above `0.75`.
///
/// Iteration visits buckets in index order and entries within a bucket in the
/// order they were placed there.
///
/// # Example
///
/// ```rust
/// use chain_hash::ChainedHashTable;
/// use chain_hash::Error;
///
/// let mut table = ChainedHashTable::new();
/// table.insert("a", 1).unwrap();
/// table.insert("b", 2).unwrap();
/// assert_eq!(table.insert("a", 3), Err(Error::DuplicateKey));
///
/// assert_eq!(table.get("a"), Ok(&1));
/// assert!(table.remove("a"));
/// assert_eq!(table.get("a"), Err(Error::KeyNotFound));
/// ```
#[derive(Clone)]
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,
    populated: usize,
    hash_builder: DefaultHashBuilder,
}

impl<K, V> Debug for ChainedHashTable<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter().map(Entry::pair)).finish()
    }
}

impl<K, V> ChainedHashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    /// use chain_hash::Error;
    ///
    /// let table: ChainedHashTable<u32, u32> = ChainedHashTable::with_capacity(4).unwrap();
    /// assert_eq!(table.capacity(), 4);
    ///
    /// assert_eq!(
    ///     ChainedHashTable::<u32, u32>::with_capacity(0).unwrap_err(),
    ///     Error::InvalidArgument { capacity: 0 }
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let capacity = NonZeroUsize::new(capacity).ok_or(Error::InvalidArgument { capacity })?;
        Ok(Self::with_nonzero_capacity(capacity))
    }

    /// Creates an empty table with `capacity` buckets.
    pub fn with_nonzero_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_bucket_count(capacity.get())
    }

    fn with_bucket_count(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buckets: empty_buckets(capacity),
            populated: 0,
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of buckets.
    ///
    /// This only changes when the table grows.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    ///
    /// Never above `0.75` once an insertion has completed.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.buckets.len() as f64
    }

    /// Removes all entries, keeping the current capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::new();
    /// for i in 0..20 {
    ///     table.insert(i, i).unwrap();
    /// }
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = empty_buckets(self.buckets.len());
        self.populated = 0;
    }

    /// Returns an iterator over the entries in bucket order.
    ///
    /// Each call starts a fresh traversal; cloning the iterator restarts from
    /// the clone's position.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys with mutable references to their
    /// values, in bucket order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            current: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys, in the same order as [`iter`].
    ///
    /// [`iter`]: ChainedHashTable::iter
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, in the same order as [`iter`].
    ///
    /// The i-th value belongs to the i-th key yielded by [`keys`].
    ///
    /// [`iter`]: ChainedHashTable::iter
    /// [`keys`]: ChainedHashTable::keys
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Removes and yields every entry as a `(key, value)` pair.
    ///
    /// The table is empty afterwards, even if the iterator is dropped early,
    /// and keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::new();
    /// table.insert(1, "one").unwrap();
    /// table.insert(2, "two").unwrap();
    ///
    /// let mut drained: Vec<_> = table.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, [(1, "one"), (2, "two")]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        let capacity = self.buckets.len();
        let buckets = core::mem::replace(&mut self.buckets, empty_buckets(capacity));
        let remaining = core::mem::take(&mut self.populated);
        Drain {
            inner: IntoIter {
                buckets: buckets.into_iter(),
                current: Vec::new().into_iter(),
                remaining,
            },
            marker: PhantomData,
        }
    }

    /// Returns statistics about the current chain lengths.
    ///
    /// Requires the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn chain_stats(&self) -> ChainStats {
        let occupied_buckets = self.buckets.iter().filter(|b| !b.is_empty()).count();
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);

        ChainStats {
            populated: self.populated,
            buckets: self.buckets.len(),
            occupied_buckets,
            empty_buckets: self.buckets.len() - occupied_buckets,
            longest_chain,
            load_factor: self.load_factor(),
            mean_chain_length: if occupied_buckets == 0 {
                0.0
            } else {
                self.populated as f64 / occupied_buckets as f64
            },
        }
    }

    /// Computes a histogram of chain lengths.
    ///
    /// Index `n` of the result holds the number of buckets containing exactly
    /// `n` entries. The result has `longest_chain + 1` bins.
    ///
    /// Requires the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn chain_length_histogram(&self) -> Vec<usize> {
        let longest = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let mut hist = alloc::vec![0usize; longest + 1];
        for bucket in &self.buckets {
            hist[bucket.len()] += 1;
        }
        hist
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    ///
    /// Requires the `stats` and `std` features.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_length_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.populated,
            self.buckets.len()
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => None,
            };
            if let Some(ch) = partial {
                bar.push(ch);
            }
            bar
        };

        for (len, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Hash + Eq,
{
    fn slot_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts a new key-value pair.
    ///
    /// Grows the table first if the new entry would push the load factor above
    /// `0.75`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if `key` is already present. The table
    /// is left untouched, including its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    /// use chain_hash::Error;
    ///
    /// let mut table = ChainedHashTable::new();
    /// assert_eq!(table.insert(37, "a"), Ok(()));
    /// assert_eq!(table.insert(37, "b"), Err(Error::DuplicateKey));
    /// assert_eq!(table.get(&37), Ok(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(), Error> {
        if self.contains_key(&key) {
            log::trace!("rejected duplicate key with {} entries", self.populated);
            return Err(Error::DuplicateKey);
        }

        self.push_new(key, value);
        Ok(())
    }

    /// Inserts a key-value pair, replacing the existing entry if the key is
    /// already present.
    ///
    /// On replacement both the stored key and the value are swapped for the
    /// ones passed in, the previous value is returned and the length does not
    /// change. Otherwise the pair is added exactly as by [`insert`] and `None`
    /// is returned.
    ///
    /// The growth check only runs when a new entry is added. Replacing an
    /// existing entry never changes the capacity, even when the table sits at
    /// the load factor limit.
    ///
    /// [`insert`]: ChainedHashTable::insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::new();
    /// assert_eq!(table.upsert("k", 1), None);
    /// assert_eq!(table.upsert("k", 2), Some(1));
    /// assert_eq!(table.get("k"), Ok(&2));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        let slot = self.slot_index(&key);
        if let Some(entry) = self.buckets[slot].iter_mut().find(|e| e.key == key) {
            return Some(entry.replace(key, value));
        }

        self.push_new(key, value);
        None
    }

    /// Places an entry known to be absent, growing first if needed.
    fn push_new(&mut self, key: K, value: V) {
        if exceeds_max_load(self.populated + 1, self.buckets.len()) {
            self.grow();
        }

        let slot = self.slot_index(&key);
        self.buckets[slot].push(Entry::new(key, value));
        self.populated += 1;
    }

    /// Doubles the bucket count and moves every entry into its new bucket.
    ///
    /// Old buckets are visited in index order and each chain front to back, so
    /// entries that land in the same new bucket keep their relative order.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .expect("chained hash table capacity overflow");

        let old_buckets = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for entry in old_buckets.into_iter().flatten() {
            let slot = self.slot_index(&entry.key);
            self.buckets[slot].push(entry);
        }

        log::debug!(
            "grew chained hash table from {old_capacity} to {new_capacity} buckets with {} entries",
            self.populated
        );
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is absent. Use [`try_get`] when
    /// absence is expected.
    ///
    /// [`try_get`]: ChainedHashTable::try_get
    pub fn get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.try_get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.try_get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a reference to the value for `key`, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table = ChainedHashTable::new();
    /// table.insert(String::from("hello"), 1).unwrap();
    /// assert_eq!(table.try_get("hello"), Some(&1));
    /// assert_eq!(table.try_get("world"), None);
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value for `key`, or `None` if it is
    /// absent.
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_mut(key).map(Entry::value_mut)
    }

    /// Returns the stored entry for `key`, or `None` if it is absent.
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_index(key);
        self.buckets[slot]
            .iter()
            .find(|entry| entry.matches(key))
    }

    /// Returns the stored entry for `key` mutably, or `None` if it is absent.
    ///
    /// Changes made through the returned entry are visible to later lookups.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_index(key);
        self.buckets[slot]
            .iter_mut()
            .find(|entry| entry.matches(key))
    }

    /// Returns `true` if the table contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).is_some()
    }

    /// Removes `key` from the table.
    ///
    /// Returns `true` if an entry was removed and `false` if the key was
    /// absent.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` from the table, returning its value if it was present.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the table, returning the stored key and value if it
    /// was present.
    ///
    /// The remaining entries of the bucket keep their relative order.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_index(key);
        let bucket = &mut self.buckets[slot];
        let position = bucket
            .iter()
            .position(|entry| entry.matches(key))?;

        self.populated -= 1;
        Some(bucket.remove(position).into_parts())
    }
}

impl<K, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for ChainedHashTable<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|entry| other.try_get(&entry.key) == Some(&entry.value))
    }
}

impl<K, V> Eq for ChainedHashTable<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V, Q> Index<&Q> for ChainedHashTable<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present. Use [`ChainedHashTable::get`] for a
    /// fallible lookup.
    fn index(&self, key: &Q) -> &V {
        match self.try_get(key) {
            Some(value) => value,
            None => panic!("key not found in chained hash table"),
        }
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashTable<K, V>
where
    K: Hash + Eq,
{
    /// Upserts every pair; later pairs win over earlier ones with an equal key.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashTable<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashTable<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = &'a Entry<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainedHashTable<K, V> {
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for ChainedHashTable<K, V> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_iter(),
            current: Vec::new().into_iter(),
            remaining: self.populated,
        }
    }
}

/// An iterator over the entries of a [`ChainedHashTable`].
///
/// This struct is created by the [`iter`] method on [`ChainedHashTable`].
/// It yields `&Entry<K, V>` in bucket order.
///
/// [`iter`]: ChainedHashTable::iter
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Bucket<K, V>>,
    current: core::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the entries of a [`ChainedHashTable`].
///
/// Yields `(&K, &mut V)` in bucket order.
pub struct IterMut<'a, K, V> {
    buckets: core::slice::IterMut<'a, Bucket<K, V>>,
    current: core::slice::IterMut<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some((&entry.key, &mut entry.value));
            }
            self.current = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`ChainedHashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`ChainedHashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a [`ChainedHashTable`].
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// A draining iterator over the entries of a [`ChainedHashTable`].
///
/// This struct is created by the [`drain`] method on [`ChainedHashTable`].
/// It yields owned `(K, V)` pairs in bucket order. The table is already empty
/// once the iterator exists, so leaking it only leaks the undrained entries.
///
/// [`drain`]: ChainedHashTable::drain
pub struct Drain<'a, K, V> {
    // The table is emptied when the drain is created; the old buckets live here.
    inner: IntoIter<K, V>,
    marker: PhantomData<&'a mut ChainedHashTable<K, V>>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
impl<K, V> FusedIterator for Drain<'_, K, V> {}

/// An owning iterator over the entries of a [`ChainedHashTable`].
///
/// Yields `(K, V)` in bucket order.
pub struct IntoIter<K, V> {
    buckets: alloc::vec::IntoIter<Bucket<K, V>>,
    current: alloc::vec::IntoIter<Entry<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some(entry.into_parts());
            }
            self.current = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
