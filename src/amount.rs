use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, One, SaturatingSub, Zero};

/// A capacity/flow amount. Flow is antisymmetric, so the type must be signed.
pub trait Amount:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + CheckedAdd
    + SaturatingSub
    + Debug
    + Display
    + Default
{
}

impl Amount for i32 {}

impl Amount for i64 {}

impl Amount for i128 {}

impl Amount for isize {}
