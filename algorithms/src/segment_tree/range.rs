use std::ops::RangeInclusive;

/// Helpers for the closed column ranges the trees operate on.
/// A range with `start > end` is empty.
pub trait RangeExt {
    fn is_splittable(&self) -> bool;

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized;

    fn intersects(&self, rhs: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool;
}

impl RangeExt for RangeInclusive<usize> {
    fn is_splittable(&self) -> bool {
        self.start() < self.end()
    }

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized,
    {
        if self.is_splittable() {
            let mid = self.start() + (self.end() - self.start()) / 2;
            Some((*self.start()..=mid, mid + 1..=*self.end()))
        } else {
            None
        }
    }

    fn intersects(&self, rhs: &Self) -> bool {
        if self.is_empty() || rhs.is_empty() {
            return false;
        }

        self.start() <= rhs.end() && rhs.start() <= self.end()
    }

    fn is_superset(&self, other: &Self) -> bool {
        other.is_empty() || (self.start() <= other.start() && other.end() <= self.end())
    }
}
