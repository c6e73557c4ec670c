//! Storage type for suffix offsets.

mod private {
    use num::PrimInt;
    use std::fmt::Debug;

    pub trait Offset: PrimInt + Copy + Debug + Send + Sync + 'static {
        fn of_u(v: usize) -> Self;
        fn to_u(&self) -> usize;
    }

    macro_rules! impl_offset {
        ($uint:ty) => {
            impl Offset for $uint {
                #[inline]
                fn of_u(v: usize) -> Self {
                    v as $uint
                }
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    impl_offset!(u16);

    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    impl_offset!(u32);

    #[cfg(target_pointer_width = "64")]
    impl_offset!(u64);

    impl_offset!(usize);
}

/// Primitive unsigned integer type used to store suffix offsets.
///
/// Narrower types shrink the index: a `u32` suffix array takes half the
/// memory of a `usize` one on 64-bit targets.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Offset: private::Offset {}

macro_rules! impl_offset {
    ($uint:ty) => {
        impl Offset for $uint {}
    };
}

impl_offset!(u16);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_offset!(u32);

#[cfg(target_pointer_width = "64")]
impl_offset!(u64);

impl_offset!(usize);

/// Returns `true` if every offset of a text of length `len` fits into `I`.
pub(crate) fn fits<I: Offset>(len: usize) -> bool {
    len == 0 || I::max_value().to_usize().map_or(true, |max| max >= len - 1)
}
