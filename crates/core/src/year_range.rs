//! Inclusive model-year ranges.

/// A closed interval of model years, `start <= year <= end`.
///
/// A range whose `start` is after its `end` is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether `year` falls inside the range, bounds included.
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
