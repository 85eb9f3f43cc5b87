//! Affine mapping between two scalar intervals.

use std::ops::RangeInclusive;

/// An ordered pair of bounds.
///
/// `start <= end` is expected but not enforced; a reversed range maps values in reverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub start: f32,
    pub end: f32,
}

impl ValueRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Signed length `end - start`.
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Whether both bounds coincide, which makes the range unusable as a source interval.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn midpoint(&self) -> f32 {
        self.start + self.length() / 2.0
    }

    pub fn contains(&self, x: f32) -> bool {
        let (lo, hi) = self.ordered();
        (lo..=hi).contains(&x)
    }

    /// Clamps `x` into the range. Reversed ranges are clamped between their ordered bounds.
    pub fn clamp(&self, x: f32) -> f32 {
        let (lo, hi) = self.ordered();
        x.max(lo).min(hi)
    }

    fn ordered(&self) -> (f32, f32) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

impl From<RangeInclusive<f32>> for ValueRange {
    fn from(range: RangeInclusive<f32>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl From<(f32, f32)> for ValueRange {
    fn from((start, end): (f32, f32)) -> Self {
        Self::new(start, end)
    }
}

/// Maps `x` from `from` onto `to`, sending `from.start` to `to.start` and `from.end` to `to.end`.
///
/// No clamping is performed. A degenerate `from` has no unique affine map, so the midpoint
/// of `to` is returned instead of a non-finite value.
pub fn convert(x: f32, from: ValueRange, to: ValueRange) -> f32 {
    if from.is_degenerate() {
        return to.midpoint();
    }

    (x - from.start) / from.length() * to.length() + to.start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_between_ranges() {
        let value = ValueRange::new(0.0, 100.0);
        let pixels = ValueRange::new(0.0, 180.0);

        assert_eq!(convert(50.0, value, pixels), 90.0);
        assert_eq!(convert(180.0, pixels, value), 100.0);
        assert_eq!(convert(0.0, pixels, value), 0.0);
    }

    #[test]
    fn reversed_destination_flips_direction() {
        let from = ValueRange::new(0.0, 10.0);
        let to = ValueRange::new(10.0, 0.0);

        assert_eq!(convert(0.0, from, to), 10.0);
        assert_eq!(convert(10.0, from, to), 0.0);
        assert_eq!(convert(2.5, from, to), 7.5);
    }

    #[test]
    fn does_not_clamp() {
        let from = ValueRange::new(0.0, 1.0);
        let to = ValueRange::new(0.0, 10.0);

        assert_eq!(convert(2.0, from, to), 20.0);
        assert_eq!(convert(-1.0, from, to), -10.0);
    }

    #[test]
    fn degenerate_source_yields_destination_midpoint() {
        let from = ValueRange::new(3.0, 3.0);
        let to = ValueRange::new(0.0, 100.0);

        assert_eq!(convert(3.0, from, to), 50.0);
        assert_eq!(convert(-7.0, from, to), 50.0);
        assert!(convert(3.0, from, to).is_finite());
    }

    #[test]
    fn clamp_handles_reversed_range() {
        let range = ValueRange::new(10.0, 0.0);

        assert_eq!(range.clamp(-1.0), 0.0);
        assert_eq!(range.clamp(11.0), 10.0);
        assert!(range.contains(5.0));
        assert!(!range.contains(10.5));
    }

    #[test]
    fn from_inclusive_range() {
        assert_eq!(ValueRange::from(-1.0..=1.0), ValueRange::new(-1.0, 1.0));
    }
}
