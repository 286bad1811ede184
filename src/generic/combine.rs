use super::hlist::{HCons, HList, HNil, Tuple};

/// Type-level concatenation of two heterogeneous lists.
pub trait Concat<T: HList>: HList {
    type Out: HList;

    fn concat(self, other: T) -> Self::Out;
}

impl<T: HList> Concat<T> for HNil {
    type Out = T;

    #[inline(always)]
    fn concat(self, other: T) -> Self::Out {
        other
    }
}

impl<H, T, U> Concat<U> for HCons<H, T>
where
    T: HList + Concat<U>,
    U: HList,
    HCons<H, T>: HList,
    HCons<H, <T as Concat<U>>::Out>: HList,
{
    type Out = HCons<H, <T as Concat<U>>::Out>;

    #[inline(always)]
    fn concat(self, other: U) -> Self::Out {
        HCons {
            head: self.head,
            tail: self.tail.concat(other),
        }
    }
}

/// The pairing rule used by sequencing: the two output tuples are
/// concatenated one level deep rather than nested into a pair.
pub trait Combine<T: Tuple>: Tuple {
    /// The flattened tuple type.
    type Out: Tuple;

    /// Consume both tuples and produce the flattened one.
    fn combine(self, other: T) -> Self::Out;
}

impl<H: Tuple, T: Tuple> Combine<T> for H
where
    H::HList: Concat<T::HList>,
{
    type Out = <<H::HList as Concat<T::HList>>::Out as HList>::Tuple;

    #[inline(always)]
    fn combine(self, other: T) -> Self::Out {
        self.into_hlist().concat(other.into_hlist()).into_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::Combine;

    #[test]
    fn test_unit_is_the_identity() {
        assert_eq!(().combine(()), ());
        assert_eq!((1,).combine(()), (1,));
        assert_eq!(().combine((1,)), (1,));
    }

    #[test]
    fn test_pairs_stay_flat() {
        assert_eq!((1,).combine(("two",)), (1, "two"));
        assert_eq!((1, 2).combine((3,)), (1, 2, 3));
        assert_eq!((1,).combine((2, 3)), (1, 2, 3));
        assert_eq!((1, 2).combine((3, 4)), (1, 2, 3, 4));
    }
}
