//! Arithmetic modulo [MODULUS].
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use derive_more::{Display, Into};

/// All path counts are reported modulo this prime.
pub const MODULUS: u32 = 1_000_000_007;

/// A value in `0..MODULUS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Into)]
pub struct Residue(u32);

impl Residue {
    /// The residue of zero.
    pub const ZERO: Residue = Residue(0);
    /// The residue of one.
    pub const ONE: Residue = Residue(1);

    /// Reduces `value` modulo [MODULUS].
    pub fn new(value: u64) -> Self {
        // The remainder is below MODULUS and thus fits.
        Self((value % MODULUS as u64) as u32)
    }

    /// The canonical representative in `0..MODULUS`.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Add for Residue {
    type Output = Residue;

    fn add(self, rhs: Residue) -> Residue {
        // Both summands are below MODULUS < 2^30, so the sum does not overflow.
        let sum = self.0 + rhs.0;
        if sum >= MODULUS {
            Residue(sum - MODULUS)
        } else {
            Residue(sum)
        }
    }
}

impl AddAssign for Residue {
    fn add_assign(&mut self, rhs: Residue) {
        *self = *self + rhs;
    }
}

impl Sum for Residue {
    fn sum<I: Iterator<Item = Residue>>(iter: I) -> Residue {
        iter.fold(Residue::ZERO, Add::add)
    }
}
