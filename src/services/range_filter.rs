use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RangeFilterError {
    #[error("range percentages must be within 0..=100, got {start}..{end}")]
    OutOfBounds { start: f64, end: f64 },
    #[error("range start {start} is after range end {end}")]
    Inverted { start: f64, end: f64 },
}

/// Display window expressed as percentages of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: f64,
    pub end: f64,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
        }
    }
}

impl DateRange {
    pub fn new(start: f64, end: f64) -> Result<Self, RangeFilterError> {
        let in_bounds = |value: f64| (0.0..=100.0).contains(&value);
        if !in_bounds(start) || !in_bounds(end) {
            return Err(RangeFilterError::OutOfBounds { start, end });
        }
        if start > end {
            return Err(RangeFilterError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Index window `[floor(start% * len), ceil(end% * len))`, clamped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let position = |percent: f64| percent / 100.0 * len as f64;
        let start = (position(self.start).floor() as usize).min(len);
        let end = (position(self.end).ceil() as usize).min(len);
        (start, end.max(start))
    }
}

pub fn filter_by_percent<T>(items: &[T], range: DateRange) -> &[T] {
    let (start, end) = range.bounds(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_keeps_everything() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(filter_by_percent(&items, DateRange::default()), &items);
    }

    #[test]
    fn start_rounds_down_and_end_rounds_up() {
        // len=7: 30% => 2.1 -> 2, 60% => 4.2 -> 5
        let items = [0, 1, 2, 3, 4, 5, 6];
        let range = DateRange::new(30.0, 60.0).unwrap();
        assert_eq!(filter_by_percent(&items, range), &[2, 3, 4]);
    }

    #[test]
    fn empty_window_at_the_end() {
        let items = [0, 1, 2];
        let range = DateRange::new(100.0, 100.0).unwrap();
        assert!(filter_by_percent(&items, range).is_empty());
    }

    #[test]
    fn empty_input_stays_empty() {
        let items: [u8; 0] = [];
        let range = DateRange::new(25.0, 75.0).unwrap();
        assert!(filter_by_percent(&items, range).is_empty());
    }

    #[test]
    fn rejects_out_of_bounds_and_inverted_ranges() {
        assert_eq!(
            DateRange::new(-1.0, 50.0),
            Err(RangeFilterError::OutOfBounds {
                start: -1.0,
                end: 50.0
            })
        );
        assert_eq!(
            DateRange::new(10.0, 101.0),
            Err(RangeFilterError::OutOfBounds {
                start: 10.0,
                end: 101.0
            })
        );
        assert_eq!(
            DateRange::new(60.0, 40.0),
            Err(RangeFilterError::Inverted {
                start: 60.0,
                end: 40.0
            })
        );
    }
}
