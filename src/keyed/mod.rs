//! Keyed unique containers.
//!
//! This module provides a set-like container whose notion of "the same
//! element" is a key derived from each element:
//!
//! - [`KeyedUniqueSet`]: Mutable container that uniques elements by a projected key
//! - [`KeyProjector`]: Derives the uniqueness key of an element
//! - [`FieldProjector`]: Projector that clones a single struct field
//! - [`Insertion`]: Outcome of an insert (fresh key or replacement)
//!
//! # Last Write Wins
//!
//! Two elements whose keys compare equal are indistinguishable to the
//! container. Inserting the second one replaces the first, and the displaced
//! element is handed back through [`Insertion::Replaced`].
//!
//! # Ownership
//!
//! Elements are moved into the container. Removal and replacement move them
//! back out to the caller. To keep an element alive outside the container,
//! store a shared handle such as `Rc<T>` or `Arc<T>`; dropping the
//! container's handle then leaves every other holder untouched.
//!
//! # Examples
//!
//! ## Projecting with a closure
//!
//! ```rust
//! use lambars_keyed::keyed::KeyedUniqueSet;
//!
//! // Deduplicate words case-insensitively.
//! let mut words = KeyedUniqueSet::new(|word: &String| word.to_lowercase());
//! words.insert("Hello".to_string());
//! words.insert("HELLO".to_string());
//! words.insert("world".to_string());
//!
//! assert_eq!(words.len(), 2);
//! assert_eq!(words.get("hello").map(String::as_str), Some("HELLO"));
//! ```
//!
//! ## Projecting a field
//!
//! ```rust
//! use lambars_keyed::key_path;
//! use lambars_keyed::keyed::{Insertion, KeyedUniqueSet};
//!
//! #[derive(Debug, PartialEq)]
//! struct Account { id: u64, balance: i64 }
//!
//! let mut accounts = KeyedUniqueSet::new(key_path!(Account, id));
//! assert!(accounts.insert(Account { id: 1, balance: 100 }).is_fresh());
//!
//! let outcome = accounts.insert(Account { id: 1, balance: 250 });
//! assert_eq!(outcome, Insertion::Replaced(Account { id: 1, balance: 100 }));
//! assert_eq!(accounts.get(&1).map(|account| account.balance), Some(250));
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher builder used by [`KeyedUniqueSet::new`] and [`KeyedUniqueSet::with_capacity`].
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is fast but not resistant to hash flooding.
///
/// When only the `ahash` feature is enabled, this is `ahash::RandomState`.
///
/// Otherwise (default), this is `std::collections::hash_map::RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// Hasher builder used by [`KeyedUniqueSet::new`] and [`KeyedUniqueSet::with_capacity`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hasher builder used by [`KeyedUniqueSet::new`] and [`KeyedUniqueSet::with_capacity`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

mod insertion;
mod projector;
mod set;

pub use insertion::Insertion;
pub use projector::FieldProjector;
pub use projector::KeyProjector;
pub use set::KeyedUniqueSet;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod default_build_hasher_tests {
    use super::DefaultBuildHasher;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_default_build_hasher_is_deterministic_per_instance() {
        let hasher = DefaultBuildHasher::default();
        assert_eq!(hasher.hash_one("key"), hasher.hash_one("key"));
    }

    #[rstest]
    fn test_default_build_hasher_clone_hashes_identically() {
        let hasher = DefaultBuildHasher::default();
        let hasher_clone = hasher.clone();
        assert_eq!(hasher.hash_one(42_u64), hasher_clone.hash_one(42_u64));
    }
}
