use std::cell::Cell;
use std::rc::Rc;

use crate::controllers::viewport::events::click::ClickEvent;
use crate::core::data::region::Region;

/// Rows above the image: title and top border.
const HEADER_ROWS: u16 = 2;
/// Rows below the image: bottom border and axis line.
const FOOTER_ROWS: u16 = 2;

/// Cells that hold the image. Each cell shows two vertically stacked samples,
/// so the image is `cols` x `2 * rows` samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageArea {
    pub left: u16,
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
}

impl ImageArea {
    /// Largest area inside a `term_cols` x `term_rows` terminal that keeps
    /// the region's aspect ratio, centred horizontally. `None` when the
    /// terminal cannot fit a bordered image.
    #[must_use]
    pub fn fit(term_cols: u16, term_rows: u16, region: &Region) -> Option<Self> {
        let max_cols = term_cols.checked_sub(2)?;
        let max_rows = term_rows.checked_sub(HEADER_ROWS + FOOTER_ROWS)?;
        if max_cols == 0 || max_rows == 0 {
            return None;
        }

        let aspect = region.width() / region.height();
        let available = f64::from(max_cols) / (2.0 * f64::from(max_rows));

        let (cols, rows) = if available > aspect {
            let cols = (2.0 * f64::from(max_rows) * aspect).round() as u16;
            (cols.clamp(1, max_cols), max_rows)
        } else {
            let rows = (f64::from(max_cols) / aspect / 2.0).round() as u16;
            (max_cols, rows.clamp(1, max_rows))
        };

        Some(Self {
            left: 1 + (max_cols - cols) / 2,
            top: HEADER_ROWS,
            cols,
            rows,
        })
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.left
            && column < self.left + self.cols
            && row >= self.top
            && row < self.top + self.rows
    }

    /// Grid cell shown at sample (`x`, `y`) of the image, with `y` counted
    /// from the top. The top of the image is the region's `ymax`, i.e. the
    /// last grid row.
    #[must_use]
    pub fn grid_cell(&self, x: u16, y: u16, grid_width: u32, grid_height: u32) -> (u32, u32) {
        let sample_rows = 2 * u32::from(self.rows);

        let col = ((f64::from(x) + 0.5) * f64::from(grid_width) / f64::from(self.cols)) as u32;
        let from_top = ((f64::from(y) + 0.5) * f64::from(grid_height) / f64::from(sample_rows)) as u32;

        let col = col.min(grid_width.saturating_sub(1));
        let from_top = from_top.min(grid_height.saturating_sub(1));

        (grid_height.saturating_sub(1) - from_top, col)
    }
}

/// Where the last frame was drawn, so clicks can be mapped back onto the
/// plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenMapping {
    pub area: ImageArea,
    pub region: Region,
}

impl ScreenMapping {
    /// Plane coordinates of the centre of the clicked cell.
    #[must_use]
    pub fn click_at(&self, column: u16, row: u16) -> ClickEvent {
        if !self.area.contains(column, row) {
            return ClickEvent::Outside;
        }

        let u = (f64::from(column - self.area.left) + 0.5) / f64::from(self.area.cols);
        let v = (f64::from(row - self.area.top) + 0.5) / f64::from(self.area.rows);

        ClickEvent::Plane {
            x: self.region.xmin() + u * self.region.width(),
            y: self.region.ymax() - v * self.region.height(),
        }
    }
}

/// Written by the presenter, read by the event source.
pub type SharedMapping = Rc<Cell<Option<ScreenMapping>>>;
