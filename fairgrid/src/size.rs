//! Container size descriptor.

use thiserror::Error;

/// Rejected container dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    /// Rows hold exactly 9 slots; anything else is not a container grid.
    #[error("slots per row must be 9, got {0}")]
    SlotsPerRow(u32),
    /// The row-by-row builder caps out below a full double chest.
    #[error("rows must be 5 or less, got {0}")]
    TooManyRows(u32),
}

/// The total slot count of a container, always a whole number of
/// 9-slot rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySize {
    size: u32,
}

impl InventorySize {
    /// Creates a size from a total slot count.
    #[must_use]
    pub fn size(size: u32) -> Self {
        Self { size }
    }

    /// Creates a size from a number of rows.
    ///
    /// # Panics
    /// Panics if `rows` is not in the range 1-6.
    #[must_use]
    pub fn rows(rows: u32) -> Self {
        assert!((1..=6).contains(&rows), "container rows must be 1-6");
        Self { size: rows * 9 }
    }

    /// Creates a size from rows and slots per row.
    ///
    /// `slots_per_row` must be 9 and `rows` at most 5.
    pub fn like(rows: u32, slots_per_row: u32) -> Result<Self, SizeError> {
        if slots_per_row != 9 {
            return Err(SizeError::SlotsPerRow(slots_per_row));
        }
        if rows > 5 {
            return Err(SizeError::TooManyRows(rows));
        }
        Ok(Self {
            size: rows * slots_per_row,
        })
    }

    /// Returns the total slot count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.size
    }

    /// Returns the number of rows, rounding partial rows up.
    #[must_use]
    pub fn get_rows(self) -> u32 {
        self.size.div_ceil(9)
    }

    /// Returns the number of slots in a row.
    #[must_use]
    pub fn slots_per_row(self) -> u32 {
        9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_times_nine() {
        assert_eq!(InventorySize::rows(3).get(), 27);
        assert_eq!(InventorySize::rows(6).get(), 54);
    }

    #[test]
    fn partial_rows_round_up() {
        assert_eq!(InventorySize::size(27).get_rows(), 3);
        assert_eq!(InventorySize::size(28).get_rows(), 4);
        assert_eq!(InventorySize::size(9).get_rows(), 1);
    }

    #[test]
    fn like_validates_dimensions() {
        assert_eq!(InventorySize::like(3, 9).map(InventorySize::get), Ok(27));
        assert_eq!(
            InventorySize::like(3, 8),
            Err(SizeError::SlotsPerRow(8))
        );
        assert_eq!(InventorySize::like(6, 9), Err(SizeError::TooManyRows(6)));
    }

    #[test]
    #[should_panic(expected = "container rows must be 1-6")]
    fn zero_rows_rejected() {
        let _ = InventorySize::rows(0);
    }
}
