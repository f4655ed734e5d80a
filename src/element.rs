//! Element trait for sequence algorithms
//!
//! Sequence routines are generic over the element type so the same code path
//! serves integer and floating-point inputs. Comparisons are exact: floats are
//! compared with `<`, with no tolerance.

use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

/// Trait for types that can be elements of an analyzed sequence
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Values are copied out of the input and may
///   cross rayon worker threads
/// - `PartialOrd` - Strict `<` defines "increasing"
/// - `Add + Zero` - Running sums for the maximum subarray, floored at zero
///
/// Implemented for all primitive integer and floating-point types. Signed types
/// are the interesting case for [`max_subarray_sum`](crate::algorithm::max_subarray_sum);
/// for unsigned types the whole sequence is always the best subarray.
pub trait Element:
    Copy + Debug + Send + Sync + 'static + PartialOrd + Add<Output = Self> + Zero
{
    /// Clamp a running sum to the non-negative floor used by Kadane's scan.
    ///
    /// Incomparable values (NaN) clamp to zero.
    #[inline]
    fn floor_at_zero(self) -> Self {
        if self > Self::zero() { self } else { Self::zero() }
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
