//! Key projectors for deriving uniqueness keys from elements.
//!
//! A key projector maps an element to the key that decides whether two
//! elements are "the same" for storage purposes.
//!
//! # Contract
//!
//! A projector must be pure and deterministic: the same element always
//! yields the same key, and projecting never changes observable state.
//! A container cannot verify this. With a non-deterministic projector,
//! lookups and removals may miss entries that were stored under a
//! different key.
//!
//! # Examples
//!
//! ```
//! use lambars_keyed::keyed::{FieldProjector, KeyProjector};
//! use lambars_keyed::key_path;
//!
//! struct Point { x: i32, y: i32 }
//!
//! // Any Fn(&E) -> K is a projector.
//! let by_sum = |point: &Point| point.x + point.y;
//! assert_eq!(by_sum.project(&Point { x: 1, y: 2 }), 3);
//!
//! // key_path! focuses a single field.
//! let by_x = key_path!(Point, x);
//! assert_eq!(by_x.project(&Point { x: 10, y: 20 }), 10);
//! ```

use std::marker::PhantomData;

/// Derives the uniqueness key of an element.
///
/// # Type Parameters
///
/// - `E`: The element type
/// - `K`: The key type
///
/// # Laws
///
/// **Determinism**: `projector.project(&element) == projector.project(&element)`
/// for every element, at every point in the container's lifetime.
pub trait KeyProjector<E, K> {
    /// Computes the key of `element`.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to project
    ///
    /// # Returns
    ///
    /// The key under which `element` is stored
    fn project(&self, element: &E) -> K;
}

impl<E, K, F> KeyProjector<E, K> for F
where
    F: Fn(&E) -> K,
{
    #[inline]
    fn project(&self, element: &E) -> K {
        self(element)
    }
}

/// A projector that focuses on one field and clones it as the key.
///
/// The `key_path!` macro generates a `FieldProjector` internally.
///
/// # Type Parameters
///
/// - `E`: The element type
/// - `K`: The field (key) type
/// - `G`: The getter function type
///
/// # Example
///
/// ```
/// use lambars_keyed::keyed::{FieldProjector, KeyProjector};
///
/// struct User { email: String, visits: u32 }
///
/// let by_email = FieldProjector::new(|user: &User| &user.email);
///
/// let user = User { email: "a@example.com".to_string(), visits: 3 };
/// assert_eq!(by_email.project(&user), "a@example.com");
/// assert_eq!(by_email.focus(&user), "a@example.com");
/// ```
pub struct FieldProjector<E, K, G>
where
    G: Fn(&E) -> &K,
{
    getter: G,
    _marker: PhantomData<fn(&E) -> K>,
}

impl<E, K, G> FieldProjector<E, K, G>
where
    G: Fn(&E) -> &K,
{
    /// Creates a new `FieldProjector` from a field getter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that borrows the key field from an element
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }

    /// Borrows the key field of `element` without cloning it.
    pub fn focus<'a>(&self, element: &'a E) -> &'a K {
        (self.getter)(element)
    }
}

impl<E, K, G> KeyProjector<E, K> for FieldProjector<E, K, G>
where
    K: Clone,
    G: Fn(&E) -> &K,
{
    #[inline]
    fn project(&self, element: &E) -> K {
        self.focus(element).clone()
    }
}

impl<E, K, G> Clone for FieldProjector<E, K, G>
where
    G: Fn(&E) -> &K + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, K, G> std::fmt::Debug for FieldProjector<E, K, G>
where
    G: Fn(&E) -> &K,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldProjector")
            .field("element", &std::any::type_name::<E>())
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

/// Creates a [`FieldProjector`] for a struct field.
///
/// The projected key is a clone of the field, so the field type must
/// implement `Clone`.
///
/// # Syntax
///
/// ```text
/// key_path!(StructType, field_name)
/// key_path!(StructType<T>, field_name)
/// key_path!(module::StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lambars_keyed::key_path;
/// use lambars_keyed::keyed::KeyedUniqueSet;
///
/// struct Tagged<T> { tag: u8, value: T }
///
/// let mut set = KeyedUniqueSet::new(key_path!(Tagged<char>, tag));
/// set.insert(Tagged { tag: 1, value: 'a' });
/// set.insert(Tagged { tag: 1, value: 'b' });
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.get(&1).map(|tagged| tagged.value), Some('b'));
/// ```
#[macro_export]
macro_rules! key_path {
    ($struct_type:ident, $field:ident) => {
        $crate::keyed::FieldProjector::new(|source: &$struct_type| &source.$field)
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::keyed::FieldProjector::new(|source: &$struct_type<$($generic),+>| &source.$field)
    };
    ($struct_type:path, $field:ident) => {
        $crate::keyed::FieldProjector::new(|source: &$struct_type| &source.$field)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        name: String,
        age: u32,
    }

    mod nested {
        pub struct Badge {
            pub code: u16,
        }
    }

    fn alice() -> Person {
        Person {
            name: "Alice".to_string(),
            age: 30,
        }
    }

    fn age_of(person: &Person) -> u32 {
        person.age
    }

    #[rstest]
    fn test_closure_is_projector() {
        let by_initial = |person: &Person| person.name.chars().next();
        assert_eq!(by_initial.project(&alice()), Some('A'));
    }

    #[rstest]
    fn test_function_item_is_projector() {
        assert_eq!(age_of.project(&alice()), 30);
    }

    #[rstest]
    fn test_function_pointer_is_projector() {
        let projector: fn(&Person) -> u32 = age_of;
        assert_eq!(projector.project(&alice()), 30);
    }

    #[rstest]
    fn test_field_projector_clones_field() {
        let projector = key_path!(Person, name);
        let person = alice();

        let key: String = projector.project(&person);

        assert_eq!(key, "Alice");
        assert_eq!(person.name, "Alice");
    }

    #[rstest]
    fn test_field_projector_focus_borrows_field() {
        let projector = key_path!(Person, age);
        let person = alice();
        assert!(std::ptr::eq(projector.focus(&person), &person.age));
    }

    #[rstest]
    fn test_key_path_with_module_path() {
        let projector = key_path!(nested::Badge, code);
        assert_eq!(projector.project(&nested::Badge { code: 7 }), 7);
    }

    #[rstest]
    fn test_field_projector_is_deterministic() {
        let projector = key_path!(Person, name);
        let person = alice();
        assert_eq!(projector.project(&person), projector.project(&person));
    }

    #[rstest]
    fn test_field_projector_clone_projects_identically() {
        let projector = key_path!(Person, name);
        let projector_clone = projector.clone();
        assert_eq!(
            projector.project(&alice()),
            projector_clone.project(&alice())
        );
    }

    #[rstest]
    fn test_field_projector_debug_names_types() {
        let projector = key_path!(Person, age);
        let rendered = format!("{projector:?}");
        assert!(rendered.starts_with("FieldProjector"));
        assert!(rendered.contains("u32"));
    }
}
