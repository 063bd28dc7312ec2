//! # lambars-keyed
//!
//! A keyed unique set for Rust: elements are deduplicated by a key projected
//! out of each element, not by the element's own equality.
//!
//! ## Overview
//!
//! The standard `HashSet` requires the element type to implement `Hash` and
//! `Eq`, and uses the whole value as its identity. Often the identity of a
//! value is only one of its fields (a name, an id), and the element type
//! either cannot or should not implement those traits. This library provides:
//!
//! - **[`KeyedUniqueSet`]**: a container that uniques elements by a projected key
//! - **[`KeyProjector`]**: the projection seam, implemented for every `Fn(&E) -> K`
//! - **[`FieldProjector`]** and [`key_path!`]: field-based projectors
//! - **[`Insertion`]**: the outcome of an upsert, carrying any displaced element
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//!
//! ## Example
//!
//! ```rust
//! use lambars_keyed::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut people = KeyedUniqueSet::new(key_path!(Person, name));
//! people.insert(Person { name: "John".to_string(), age: 30 });
//! people.insert(Person { name: "John".to_string(), age: 31 });
//! people.insert(Person { name: "Harris".to_string(), age: 45 });
//!
//! assert_eq!(people.len(), 2);
//! assert_eq!(people.get("John").map(|person| person.age), Some(31));
//! ```
//!
//! [`KeyedUniqueSet`]: keyed::KeyedUniqueSet
//! [`KeyProjector`]: keyed::KeyProjector
//! [`FieldProjector`]: keyed::FieldProjector
//! [`Insertion`]: keyed::Insertion

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its projectors and the [`key_path!`] macro.
///
/// # Usage
///
/// ```rust
/// use lambars_keyed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::key_path;
    pub use crate::keyed::*;
}

pub mod keyed;
