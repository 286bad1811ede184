#![allow(missing_docs)]

/// A tuple which has an isomorphic heterogeneous-list representation.
pub trait Tuple: Sized {
    type HList: HList<Tuple = Self>;

    fn into_hlist(self) -> Self::HList;
}

/// A heterogeneous list, the cons-cell form used to concatenate tuples.
pub trait HList: Sized {
    type Tuple: Tuple<HList = Self>;

    fn into_tuple(self) -> Self::Tuple;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HNil;

impl Tuple for () {
    type HList = HNil;

    #[inline(always)]
    fn into_hlist(self) -> Self::HList {
        HNil
    }
}

impl HList for HNil {
    type Tuple = ();

    #[inline(always)]
    fn into_tuple(self) -> Self::Tuple {}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HCons<H, T: HList> {
    pub head: H,
    pub tail: T,
}

macro_rules! hlist_val {
    ($H:expr) => {
        HCons { head: $H, tail: HNil }
    };
    ($H:expr, $($T:expr),*) => {
        HCons { head: $H, tail: hlist_val!($($T),*) }
    };
}

macro_rules! hlist_ty {
    ($H:ty) => { HCons<$H, HNil> };
    ($H:ty, $($T:ty),*) => { HCons<$H, hlist_ty!($($T),*)> };
}

macro_rules! hlist_pat {
    ($H:pat) => {
        HCons { head: $H, tail: HNil }
    };
    ($H:pat, $($T:pat),*) => {
        HCons { head: $H, tail: hlist_pat!($($T),*) }
    };
}

macro_rules! tuple_impls {
    ($T:ident) => {
        impl<$T> Tuple for ($T,) {
            type HList = hlist_ty!($T);

            #[inline(always)]
            fn into_hlist(self) -> Self::HList {
                hlist_val!(self.0)
            }
        }

        impl<$T> HList for hlist_ty!($T) {
            type Tuple = ($T,);

            #[inline(always)]
            fn into_tuple(self) -> Self::Tuple {
                (self.head,)
            }
        }
    };
    ($H:ident, $($T:ident),*) => {
        tuple_impls!($($T),*);

        impl<$H, $($T),*> Tuple for ($H, $($T),*) {
            type HList = hlist_ty!($H, $($T),*);

            #[inline(always)]
            fn into_hlist(self) -> Self::HList {
                #[allow(non_snake_case)]
                let ($H, $($T),*) = self;
                hlist_val!($H, $($T),*)
            }
        }

        impl<$H, $($T),*> HList for hlist_ty!($H, $($T),*) {
            type Tuple = ($H, $($T),*);

            #[inline(always)]
            fn into_tuple(self) -> Self::Tuple {
                #[allow(non_snake_case)]
                let hlist_pat!($H, $($T),*) = self;
                ($H, $($T),*)
            }
        }
    };
}

tuple_impls! { T7, T6, T5, T4, T3, T2, T1, T0 }
