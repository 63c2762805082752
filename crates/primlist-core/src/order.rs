//! Total ordering used by [`List::sort`](crate::List::sort).

use std::cmp::Ordering;

/// The natural ascending order of an element kind.
///
/// Unlike [`Ord`], this is implemented for `f32`, using the IEEE 754
/// total order (`-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`),
/// so sorting never depends on how NaNs happen to be compared.
pub trait NaturalOrd {
    /// Compare `self` with `other`.
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_ord_via_ord {
    ($($t:ty),*) => {
        $(
            impl NaturalOrd for $t {
                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

natural_ord_via_ord!(i32, u32, i64, u64, u8, bool);

impl NaturalOrd for f32 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
