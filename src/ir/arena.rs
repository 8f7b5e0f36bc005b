//! Typed indices into the program arena.

use std::fmt;
use std::marker::PhantomData;

/// A type-safe index of an arena-allocated item.
///
/// The parameter keeps node ids and loop descriptor ids from being mixed up.
/// Traits are implemented by hand so `Id<T>` is `Copy`/`Eq`/`Hash` whatever `T` is.
pub struct Id<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> Id<T> {
    /// Panics past `u32::MAX` entries, like `Vec` past its capacity
    #[inline]
    pub(crate) fn from_usize(index: usize) -> Self {
        let index = u32::try_from(index).expect("arena holds more than u32::MAX entries");
        Id {
            index,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_display() {
        let id: Id<()> = Id::from_usize(7);
        assert_eq!(id.as_usize(), 7);
        assert_eq!(id.to_string(), "#7");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "u32::MAX")]
    fn test_index_past_u32_panics() {
        let _: Id<()> = Id::from_usize(u32::MAX as usize + 1);
    }
}
