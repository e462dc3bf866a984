use std::error::Error;
use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::controllers::viewport::data::frame::Frame;
use crate::controllers::viewport::events::render_event::RenderEvent;
use crate::controllers::viewport::ports::presenter::PresenterPort;
use crate::presenters::colour::colour::Colour;
use crate::presenters::colour::magma::MagmaColourMap;
use crate::presenters::terminal::layout::{ImageArea, ScreenMapping, SharedMapping};

const TITLE: &str = "Mandelbrot Set";
const UPPER_HALF_BLOCK: char = '\u{2580}';
const BORDER: Color = Color::Rgb {
    r: 128,
    g: 0,
    b: 128,
};

/// Draws frames as half-block images with a title, scale label, purple
/// border and axis line.
pub struct TerminalPresenter<W: Write> {
    out: W,
    mapping: SharedMapping,
    fixed_size: Option<(u16, u16)>,
    hint: String,
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout(mapping: SharedMapping) -> Self {
        Self::new(io::stdout(), mapping)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, mapping: SharedMapping) -> Self {
        Self {
            out,
            mapping,
            fixed_size: None,
            hint: String::new(),
        }
    }

    /// Draw for a terminal of this size instead of querying the real one.
    #[must_use]
    pub fn with_size(mut self, cols: u16, rows: u16) -> Self {
        self.fixed_size = Some((cols, rows));
        self
    }

    /// Key help appended to the axis line.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        match self.fixed_size {
            Some(size) => Ok(size),
            None => terminal::size(),
        }
    }

    fn draw_frame(&mut self, frame: &Frame) -> io::Result<()> {
        let (cols, rows) = self.size()?;

        queue!(self.out, ResetColor, Clear(ClearType::All))?;

        let Some(area) = ImageArea::fit(cols, rows, &frame.region) else {
            self.mapping.set(None);
            queue!(self.out, cursor::MoveTo(0, 0), Print("terminal too small"))?;
            return self.out.flush();
        };

        self.draw_header(frame, cols)?;
        self.draw_border(area)?;
        self.draw_image(frame, area)?;
        self.draw_axis_line(frame, rows.saturating_sub(1))?;
        self.out.flush()?;

        self.mapping.set(Some(ScreenMapping {
            area,
            region: frame.region,
        }));

        Ok(())
    }

    fn draw_header(&mut self, frame: &Frame, cols: u16) -> io::Result<()> {
        let title_col = cols.saturating_sub(TITLE.len() as u16) / 2;
        let label_col = cols.saturating_sub(frame.scale_label.len() as u16 + 1);

        queue!(
            self.out,
            cursor::MoveTo(title_col, 0),
            SetForegroundColor(Color::White),
            SetAttribute(Attribute::Bold),
            Print(TITLE),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(label_col, 0),
            SetForegroundColor(Color::White),
            Print(&frame.scale_label),
            ResetColor
        )
    }

    fn draw_border(&mut self, area: ImageArea) -> io::Result<()> {
        let left = area.left - 1;
        let right = area.left + area.cols;
        let top = area.top - 1;
        let bottom = area.top + area.rows;
        let horizontal = "\u{2500}".repeat(usize::from(area.cols));

        queue!(
            self.out,
            SetForegroundColor(BORDER),
            cursor::MoveTo(left, top),
            Print(format!("\u{250c}{}\u{2510}", horizontal)),
            cursor::MoveTo(left, bottom),
            Print(format!("\u{2514}{}\u{2518}", horizontal))
        )?;

        for row in area.top..bottom {
            queue!(
                self.out,
                cursor::MoveTo(left, row),
                Print('\u{2502}'),
                cursor::MoveTo(right, row),
                Print('\u{2502}')
            )?;
        }

        queue!(self.out, ResetColor)
    }

    fn draw_image(&mut self, frame: &Frame, area: ImageArea) -> io::Result<()> {
        let grid = &frame.grid;
        let colour_map = MagmaColourMap::for_grid(grid);
        let sample = |x: u16, y: u16| {
            let (row, col) = area.grid_cell(x, y, grid.width(), grid.height());
            colour_map.map(grid.get(row, col).unwrap_or(0))
        };

        for cell_row in 0..area.rows {
            queue!(self.out, cursor::MoveTo(area.left, area.top + cell_row))?;

            for cell_col in 0..area.cols {
                let upper = sample(cell_col, 2 * cell_row);
                let lower = sample(cell_col, 2 * cell_row + 1);

                queue!(
                    self.out,
                    SetForegroundColor(to_terminal_colour(upper)),
                    SetBackgroundColor(to_terminal_colour(lower)),
                    Print(UPPER_HALF_BLOCK)
                )?;
            }

            queue!(self.out, ResetColor)?;
        }

        Ok(())
    }

    fn draw_axis_line(&mut self, frame: &Frame, row: u16) -> io::Result<()> {
        let (min, max) = frame.grid.value_range().unwrap_or((0, 0));
        let region = frame.region;

        let mut line = format!(
            "Real [{:.6e}, {:.6e}]  Imaginary [{:.6e}, {:.6e}]  Iterations {}-{}",
            region.xmin(),
            region.xmax(),
            region.ymin(),
            region.ymax(),
            min,
            max
        );
        if !self.hint.is_empty() {
            line.push_str("  ");
            line.push_str(&self.hint);
        }

        queue!(
            self.out,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::White),
            Print(line),
            ResetColor
        )
    }

    fn draw_error(&mut self, message: &str) -> io::Result<()> {
        let (_, rows) = self.size()?;

        queue!(
            self.out,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(message),
            ResetColor
        )?;

        self.out.flush()
    }
}

fn to_terminal_colour(colour: Colour) -> Color {
    Color::Rgb {
        r: colour.r,
        g: colour.g,
        b: colour.b,
    }
}

impl<W: Write> PresenterPort for TerminalPresenter<W> {
    fn present(&mut self, event: RenderEvent) -> Result<(), Box<dyn Error>> {
        match event {
            RenderEvent::Frame(frame) => self.draw_frame(&frame)?,
            RenderEvent::Error(err) => self.draw_error(&format!("cannot zoom further: {}", err))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::errors::ViewportError;
    use crate::core::actions::generate_field::generate_field::generate;
    use crate::core::data::region::Region;
    use crate::core::fractals::mandelbrot::errors::FieldError;
    use crate::core::util::scale_label::scale_label;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn frame() -> Frame {
        let region = Region::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        Frame {
            generation: 1,
            step: None,
            region,
            grid: generate(&region, 40, 40, 30).unwrap(),
            max_iterations: 30,
            scale_label: scale_label(&region),
            generation_duration: Duration::ZERO,
        }
    }

    #[test]
    fn frame_output_has_title_scale_and_image() {
        let mapping: SharedMapping = Rc::new(Cell::new(None));
        let mut presenter =
            TerminalPresenter::new(Vec::new(), Rc::clone(&mapping)).with_size(60, 24);

        presenter.present(RenderEvent::Frame(frame())).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains(TITLE));
        assert!(output.contains("Scale: 6.00e-01"));
        assert!(output.contains(UPPER_HALF_BLOCK));
        assert!(output.contains('\u{250c}'));
        assert!(output.contains("Iterations 1-30"));
    }

    #[test]
    fn frame_output_records_screen_mapping() {
        let mapping: SharedMapping = Rc::new(Cell::new(None));
        let mut presenter =
            TerminalPresenter::new(Vec::new(), Rc::clone(&mapping)).with_size(60, 24);

        presenter.present(RenderEvent::Frame(frame())).unwrap();

        let recorded = mapping.get().expect("mapping is recorded after drawing");
        assert_eq!(recorded.region, frame().region);
        assert_eq!(recorded.area, ImageArea::fit(60, 24, &frame().region).unwrap());
    }

    #[test]
    fn tiny_terminal_clears_mapping() {
        let mapping: SharedMapping = Rc::new(Cell::new(None));
        let mut presenter =
            TerminalPresenter::new(Vec::new(), Rc::clone(&mapping)).with_size(3, 3);

        presenter.present(RenderEvent::Frame(frame())).unwrap();

        assert_eq!(mapping.get(), None);
        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("terminal too small"));
    }

    #[test]
    fn error_is_written_to_status_line() {
        let mapping: SharedMapping = Rc::new(Cell::new(None));
        let mut presenter =
            TerminalPresenter::new(Vec::new(), Rc::clone(&mapping)).with_size(60, 24);

        presenter
            .present(RenderEvent::Error(ViewportError::Field(
                FieldError::InvalidIterationBudget,
            )))
            .unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("cannot zoom further"));
    }
}
