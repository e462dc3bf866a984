use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    BoundsMismatch {
        resolution_size: u64,
        cells_size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                cells_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match cell count {}",
                    resolution_size, cells_size
                )
            }
        }
    }
}

impl Error for GridError {}

/// Escape-time counts in row-major order. Row `i` holds the samples taken at
/// the `i`th imaginary coordinate, counted up from `ymin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    resolution: Resolution,
    cells: Vec<u32>,
}

impl Grid {
    pub fn from_cells(resolution: Resolution, cells: Vec<u32>) -> Result<Self, GridError> {
        if resolution.size() != cells.len() as u64 {
            return Err(GridError::BoundsMismatch {
                resolution_size: resolution.size(),
                cells_size: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    /// For generators that produce exactly one cell per pixel.
    pub(crate) fn from_field(resolution: Resolution, cells: Vec<u32>) -> Self {
        debug_assert_eq!(resolution.size(), cells.len() as u64);

        Self { resolution, cells }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.resolution.height || col >= self.resolution.width {
            return None;
        }

        let index = row as usize * self.resolution.width as usize + col as usize;
        self.cells.get(index).copied()
    }

    /// Smallest and largest count, or `None` for an empty grid.
    #[must_use]
    pub fn value_range(&self) -> Option<(u32, u32)> {
        let min = self.cells.iter().copied().min()?;
        let max = self.cells.iter().copied().max()?;
        Some((min, max))
    }

    #[must_use]
    pub fn count_equal_to(&self, value: u32) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution { width, height }
    }

    #[test]
    fn test_from_cells_valid() {
        let cells = vec![1, 2, 3, 4, 5, 6];
        let grid = Grid::from_cells(resolution(3, 2), cells.clone()).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), cells.as_slice());
    }

    #[test]
    fn test_from_cells_too_small() {
        let result = Grid::from_cells(resolution(2, 2), vec![1, 2, 3]);

        assert_eq!(
            result.unwrap_err(),
            GridError::BoundsMismatch {
                resolution_size: 4,
                cells_size: 3
            }
        );
    }

    #[test]
    fn test_from_cells_too_large() {
        let result = Grid::from_cells(resolution(2, 2), vec![0; 8]);

        assert_eq!(
            result.unwrap_err(),
            GridError::BoundsMismatch {
                resolution_size: 4,
                cells_size: 8
            }
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let grid = Grid::from_cells(resolution(3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(0, 2), Some(3));
        assert_eq!(grid.get(1, 0), Some(4));
        assert_eq!(grid.get(1, 2), Some(6));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_value_range_and_counts() {
        let grid = Grid::from_cells(resolution(2, 2), vec![7, 1, 50, 50]).unwrap();

        assert_eq!(grid.value_range(), Some((1, 50)));
        assert_eq!(grid.count_equal_to(50), 2);
        assert_eq!(grid.count_equal_to(3), 0);
    }

    #[test]
    fn test_value_range_of_empty_grid() {
        let grid = Grid::from_cells(resolution(0, 0), vec![]).unwrap();

        assert_eq!(grid.value_range(), None);
    }
}
