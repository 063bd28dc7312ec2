//! Outcome of an upsert into a [`KeyedUniqueSet`].
//!
//! [`KeyedUniqueSet`]: super::KeyedUniqueSet

/// The result of [`KeyedUniqueSet::insert`].
///
/// An insert always stores the new element. `Insertion` tells the caller
/// whether the projected key was new, and hands back the element that was
/// displaced when it was not.
///
/// # Type Parameters
///
/// * `E` - The element type of the container
///
/// # Examples
///
/// ```rust
/// use lambars_keyed::keyed::{Insertion, KeyedUniqueSet};
///
/// let mut set = KeyedUniqueSet::new(|pair: &(char, u32)| pair.0);
///
/// assert_eq!(set.insert(('a', 1)), Insertion::Fresh);
/// assert_eq!(set.insert(('a', 2)), Insertion::Replaced(('a', 1)));
/// ```
///
/// [`KeyedUniqueSet::insert`]: super::KeyedUniqueSet::insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion<E> {
    /// No element was stored under the key before this insert.
    Fresh,
    /// An element was stored under the key and has been replaced.
    Replaced(E),
}

impl<E> Insertion<E> {
    /// Returns `true` if the key was not present before the insert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::Insertion;
    ///
    /// assert!(Insertion::<i32>::Fresh.is_fresh());
    /// assert!(!Insertion::Replaced(1).is_fresh());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }

    /// Returns `true` if the insert displaced an existing element.
    #[inline]
    #[must_use]
    pub const fn is_replacement(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }

    /// Returns a reference to the displaced element, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::Insertion;
    ///
    /// assert_eq!(Insertion::Replaced("old").previous(), Some(&"old"));
    /// assert_eq!(Insertion::<&str>::Fresh.previous(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn previous(&self) -> Option<&E> {
        match self {
            Self::Fresh => None,
            Self::Replaced(previous) => Some(previous),
        }
    }

    /// Consumes the outcome and returns the displaced element, if any.
    #[inline]
    #[must_use]
    pub fn into_previous(self) -> Option<E> {
        match self {
            Self::Fresh => None,
            Self::Replaced(previous) => Some(previous),
        }
    }

    /// Splits the outcome into `(was_new_key, previous_element)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_keyed::keyed::Insertion;
    ///
    /// assert_eq!(Insertion::<i32>::Fresh.into_parts(), (true, None));
    /// assert_eq!(Insertion::Replaced(7).into_parts(), (false, Some(7)));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<E>) {
        let was_new_key = self.is_fresh();
        (was_new_key, self.into_previous())
    }
}

impl<E> From<Insertion<E>> for Option<E> {
    fn from(insertion: Insertion<E>) -> Self {
        insertion.into_previous()
    }
}

impl<E> From<Option<E>> for Insertion<E> {
    fn from(previous: Option<E>) -> Self {
        previous.map_or(Self::Fresh, Self::Replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Insertion::Fresh, true, false)]
    #[case(Insertion::Replaced(10), false, true)]
    fn test_predicates(
        #[case] insertion: Insertion<i32>,
        #[case] expected_fresh: bool,
        #[case] expected_replacement: bool,
    ) {
        assert_eq!(insertion.is_fresh(), expected_fresh);
        assert_eq!(insertion.is_replacement(), expected_replacement);
    }

    #[rstest]
    fn test_from_option_round_trip() {
        assert_eq!(Insertion::from(None::<i32>), Insertion::Fresh);
        assert_eq!(Insertion::from(Some(3)), Insertion::Replaced(3));
        assert_eq!(Option::<i32>::from(Insertion::Replaced(3)), Some(3));
        assert_eq!(Option::<i32>::from(Insertion::Fresh), None);
    }

    #[rstest]
    fn test_into_previous_moves_non_copy_element() {
        let insertion = Insertion::Replaced(String::from("displaced"));
        assert_eq!(insertion.previous().map(String::as_str), Some("displaced"));
        assert_eq!(insertion.into_previous(), Some(String::from("displaced")));
    }
}
