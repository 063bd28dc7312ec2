//! Keyed unique set.
//!
//! This module provides [`KeyedUniqueSet`], a mutable container that stores
//! at most one element per projected key.
//!
//! # Overview
//!
//! The container is bound to a [`KeyProjector`] at construction. Every
//! operation projects its input element to a key and delegates to an
//! internal `HashMap` from key to element. The element type needs no trait
//! bounds; only the key type must implement `Hash` and `Eq`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity   |
//! |----------------|--------------|
//! | `insert`       | O(1) amortized |
//! | `remove`       | O(1) amortized |
//! | `remove_key`   | O(1) amortized |
//! | `contains`     | O(1)         |
//! | `get`          | O(1)         |
//! | `len`          | O(1)         |
//! | `is_empty`     | O(1)         |
//! | `clear`        | O(n)         |
//!
//! Each operation also runs the projector once.
//!
//! # Examples
//!
//! ```rust
//! use lambars_keyed::key_path;
//! use lambars_keyed::keyed::KeyedUniqueSet;
//!
//! struct Person { name: String }
//!
//! let mut people = KeyedUniqueSet::new(key_path!(Person, name));
//! assert!(people.is_empty());
//!
//! people.insert(Person { name: "John".to_string() });
//! people.insert(Person { name: "John".to_string() });
//! people.insert(Person { name: "Harris".to_string() });
//! assert_eq!(people.len(), 2);
//!
//! // Removal only looks at the key.
//! people.remove(&Person { name: "John".to_string() });
//! assert_eq!(people.len(), 1);
//! assert!(people.contains_key("Harris"));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{DefaultBuildHasher, Insertion, KeyProjector};

/// A container that stores elements uniquely by a projected key.
///
/// Two elements are considered the same when their projected keys compare
/// equal. Inserting an element whose key is already present replaces the
/// stored element (last write wins).
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash` and `Eq`.
/// * `E` - The element type. No bounds.
/// * `P` - The key projector, any [`KeyProjector<E, K>`] such as `Fn(&E) -> K`.
/// * `S` - The hasher builder for the internal map.
///
/// # Invariants
///
/// - Every stored element `e` is stored under `projector.project(&e)`.
/// - The projector is fixed for the container's lifetime.
///
/// Stored elements are never handed out mutably, since changing an element
/// in place could change its key.
///
/// # Examples
///
/// ```rust
/// use lambars_keyed::keyed::KeyedUniqueSet;
///
/// let mut set = KeyedUniqueSet::new(|value: &i64| value.abs());
/// set.insert(3);
/// set.insert(-3);
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.get(&3), Some(&-3));
/// ```
pub struct KeyedUniqueSet<K, E, P, S = DefaultBuildHasher> {
    projector: P,
    storage: HashMap<K, E, S>,
}

impl<K, E, P> KeyedUniqueSet<K, E, P, DefaultBuildHasher>
where
    P: KeyProjector<E, K>,
{
    /// Creates an empty container bound to `projector`.
    ///
    /// # Arguments
    ///
    /// * `projector` - Derives the uniqueness key of each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let set = KeyedUniqueSet::new(|word: &String| word.len());
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new(projector: P) -> Self {
        Self::with_hasher(projector, DefaultBuildHasher::default())
    }

    /// Creates an empty container with room for at least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let set = KeyedUniqueSet::with_capacity(|value: &u8| *value, 16);
    /// assert!(set.capacity() >= 16);
    /// assert_eq!(set.len(), 0);
    /// ```
    #[must_use]
    pub fn with_capacity(projector: P, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(projector, capacity, DefaultBuildHasher::default())
    }
}

impl<K, E, P, S> KeyedUniqueSet<K, E, P, S>
where
    P: KeyProjector<E, K>,
{
    /// Creates an empty container that hashes keys with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = KeyedUniqueSet::with_hasher(|value: &u32| value % 10, RandomState::new());
    /// set.insert(13);
    /// set.insert(23);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn with_hasher(projector: P, hasher: S) -> Self {
        Self {
            projector,
            storage: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty container with room for at least `capacity` keys,
    /// hashing keys with `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(projector: P, capacity: usize, hasher: S) -> Self {
        Self {
            projector,
            storage: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }
}

impl<K, E, P, S> KeyedUniqueSet<K, E, P, S> {
    /// Returns the number of distinct keys stored.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|value: &i32| value / 10);
    /// set.insert(11);
    /// set.insert(12);
    /// set.insert(21);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container stores no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of keys the container can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Removes every element, keeping the allocated storage.
    ///
    /// All removed elements are dropped.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the projector this container was built with.
    #[inline]
    #[must_use]
    pub const fn projector(&self) -> &P {
        &self.projector
    }

    /// Returns the hasher builder of the internal map.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.storage.hasher()
    }
}

impl<K, E, P, S> KeyedUniqueSet<K, E, P, S>
where
    K: Hash + Eq,
    P: KeyProjector<E, K>,
    S: BuildHasher,
{
    /// Computes the key `element` would be stored under.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let set = KeyedUniqueSet::new(|word: &String| word.len());
    /// assert_eq!(set.key_of(&"four".to_string()), 4);
    /// ```
    #[inline]
    pub fn key_of(&self, element: &E) -> K {
        self.projector.project(element)
    }

    /// Inserts `element`, replacing any element stored under the same key.
    ///
    /// The new element always wins. The returned [`Insertion`] reports
    /// whether the key was new and carries the displaced element otherwise.
    /// Ignoring it drops the displaced element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to store
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::{Insertion, KeyedUniqueSet};
    ///
    /// let mut set = KeyedUniqueSet::new(|entry: &(char, i32)| entry.0);
    ///
    /// assert_eq!(set.insert(('x', 1)), Insertion::Fresh);
    /// assert_eq!(set.insert(('x', 2)), Insertion::Replaced(('x', 1)));
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.get(&'x'), Some(&('x', 2)));
    /// ```
    pub fn insert(&mut self, element: E) -> Insertion<E> {
        let key = self.projector.project(&element);
        Insertion::from(self.storage.insert(key, element))
    }

    /// Removes the element stored under `element`'s key.
    ///
    /// The stored element does not have to be `element` itself; only the
    /// keys are compared. Removing an absent key is a no-op, so calling
    /// this repeatedly has the same effect as calling it once.
    ///
    /// # Returns
    ///
    /// The element that was stored under the key, or `None`.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|entry: &(u8, u32)| entry.0);
    /// set.insert((1, 100));
    ///
    /// assert_eq!(set.remove(&(1, 0)), Some((1, 100)));
    /// assert_eq!(set.remove(&(1, 0)), None);
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, element: &E) -> Option<E> {
        let key = self.projector.project(element);
        self.storage.remove(&key)
    }

    /// Removes the element stored under `key`.
    ///
    /// The key may be any borrowed form of the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|name: &String| name.clone());
    /// set.insert("alpha".to_string());
    ///
    /// assert_eq!(set.remove_key("alpha"), Some("alpha".to_string()));
    /// assert_eq!(set.remove_key("alpha"), None);
    /// ```
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.remove(key)
    }

    /// Returns `true` if an element with the same key as `element` is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|value: &f64| value.to_bits());
    /// set.insert(1.5);
    /// assert!(set.contains(&1.5));
    /// assert!(!set.contains(&2.5));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.storage.contains_key(&self.projector.project(element))
    }

    /// Returns `true` if an element is stored under `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.contains_key(key)
    }

    /// Returns the element stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|pair: &(String, u32)| pair.0.clone());
    /// set.insert(("apples".to_string(), 3));
    ///
    /// assert_eq!(set.get("apples").map(|pair| pair.1), Some(3));
    /// assert_eq!(set.get("pears"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.get(key)
    }

    /// Returns the stored element that shares `element`'s key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::KeyedUniqueSet;
    ///
    /// let mut set = KeyedUniqueSet::new(|entry: &(char, u32)| entry.0);
    /// set.insert(('k', 1));
    ///
    /// assert_eq!(set.find(&('k', 99)), Some(&('k', 1)));
    /// ```
    #[must_use]
    pub fn find(&self, element: &E) -> Option<&E> {
        self.storage.get(&self.projector.project(element))
    }

    /// Reserves room for at least `additional` more keys.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Shrinks the capacity of the internal map as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit();
    }
}

impl<K, E, P, S> Extend<E> for KeyedUniqueSet<K, E, P, S>
where
    K: Hash + Eq,
    P: KeyProjector<E, K>,
    S: BuildHasher,
{
    /// Inserts every element in order; later elements win key collisions.
    fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let elements = elements.into_iter();
        self.storage.reserve(elements.size_hint().0);
        for element in elements {
            self.insert(element);
        }
    }
}

impl<K, E, P, S> Clone for KeyedUniqueSet<K, E, P, S>
where
    K: Clone,
    E: Clone,
    P: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            projector: self.projector.clone(),
            storage: self.storage.clone(),
        }
    }
}

impl<K, E, P, S> fmt::Debug for KeyedUniqueSet<K, E, P, S>
where
    K: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.storage.iter()).finish()
    }
}

// Send/Sync follow the parts; Rc elements make the container thread-local.
static_assertions::assert_impl_all!(
    KeyedUniqueSet<String, String, fn(&String) -> String>: Send, Sync, Clone
);
static_assertions::assert_not_impl_any!(
    KeyedUniqueSet<u32, std::rc::Rc<u32>, fn(&std::rc::Rc<u32>) -> u32>: Send, Sync
);
