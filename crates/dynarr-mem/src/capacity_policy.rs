//! Growth rules for [`DynamicArray`](crate::DynamicArray).

/// Decides how many slots a block gets when it is created or has to grow.
pub trait CapacityPolicy {

    /// Capacity of a fresh array and of an emptied array that grows again.
    const DEFAULT_CAPACITY: usize;

    /// Returns the next capacity for a block of `current` slots that must hold
    /// `required` elements, or `None` if the computation overflows.
    ///
    /// The array clamps the result to `current + 1` and `required` afterwards, so a
    /// policy may return a smaller value without breaking the array.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Multiplies capacity by 1.6, rounding up. Empty blocks jump to 8 slots.
pub struct Geometric {}

impl Geometric {

    pub const NUMERATOR: usize = 8;
    pub const DENOMINATOR: usize = 5;
}

impl CapacityPolicy for Geometric {

    const DEFAULT_CAPACITY: usize = 8;

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if current == 0 {
            return Some(Self::DEFAULT_CAPACITY.max(required))
        }
        let scaled = current
            .checked_mul(Self::NUMERATOR)?
            .checked_add(Self::DENOMINATOR - 1)?;
        Some(scaled / Self::DENOMINATOR)
    }
}

/// Applies the array-side clamp: the new capacity is strictly larger than `current`
/// and never below `required`.
#[inline]
pub(crate) fn next_capacity<Policy: CapacityPolicy>(
    current: usize,
    required: usize,
) -> Option<usize>
{
    let grown = Policy::grow(current, required)?;
    Some(grown.max(current.checked_add(1)?).max(required))
}
