//! Type-safe damage modifier.
//!
//! DPP applies every multiplier as an exact fraction and truncates the product,
//! so a modifier is a numerator/denominator pair rather than a 4096-scale value.

use super::formula::sat32;

/// `floor(value * num / den)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub num: u16,
    pub den: u16,
}

impl Modifier {
    pub const ONE: Self = Self::new(1, 1);
    pub const HALF: Self = Self::new(1, 2);
    pub const DOUBLE: Self = Self::new(2, 1);
    pub const TRIPLE: Self = Self::new(3, 1);
    pub const ONE_POINT_ONE: Self = Self::new(11, 10);
    pub const ONE_POINT_TWO: Self = Self::new(6, 5);
    pub const ONE_POINT_TWO_FIVE: Self = Self::new(5, 4);
    pub const ONE_POINT_THREE: Self = Self::new(13, 10);
    pub const ONE_POINT_FIVE: Self = Self::new(3, 2);
    pub const THREE_QUARTERS: Self = Self::new(3, 4);
    pub const TWO_THIRDS: Self = Self::new(2, 3);

    pub const fn new(num: u16, den: u16) -> Self {
        Self { num, den }
    }

    /// Multiply and truncate.
    #[inline]
    pub const fn apply(self, value: u32) -> u32 {
        sat32(value as u64 * self.num as u64 / self.den as u64)
    }

    pub const fn is_one(self) -> bool {
        self.num == self.den
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_truncates() {
        assert_eq!(Modifier::ONE_POINT_FIVE.apply(101), 151);
        assert_eq!(Modifier::ONE_POINT_TWO.apply(59), 70);
        assert_eq!(Modifier::TWO_THIRDS.apply(100), 66);
        assert_eq!(Modifier::THREE_QUARTERS.apply(7), 5);
        assert_eq!(Modifier::ONE_POINT_THREE.apply(99), 128);
    }

    #[test]
    fn test_sequential_truncation_differs_from_product() {
        // floor(floor(33 * 1.5) * 1.5) = floor(49 * 1.5) = 73, but 33 * 2.25 = 74.25
        let stepwise = Modifier::ONE_POINT_FIVE.apply(Modifier::ONE_POINT_FIVE.apply(33));
        let combined = Modifier::new(9, 4).apply(33);
        assert_eq!(stepwise, 73);
        assert_eq!(combined, 74);
    }

    #[test]
    fn test_is_one() {
        assert!(Modifier::ONE.is_one());
        assert!(Modifier::new(4, 4).is_one());
        assert!(!Modifier::HALF.is_one());
    }
}
