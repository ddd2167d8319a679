//! Comparator policies.
//!
//! The tree routes every descent through a stateless [`Comparator`]. It must be
//! a strict total order: `Equal` means "same element", and the tree refuses to
//! hold two elements that compare `Equal`.

use std::cmp::Ordering;

/// Stateless ordering policy for tree elements.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(a: &T, b: &T) -> Ordering;
}

/// Orders elements with their own `==` and `<`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// The reverse of [`NaturalOrder`]; in-order traversal yields descending values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        NaturalOrder::compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder::compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder::compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder::compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_reverse_order() {
        assert_eq!(ReverseOrder::compare(&1, &2), Ordering::Greater);
        assert_eq!(ReverseOrder::compare(&2, &2), Ordering::Equal);
    }
}
