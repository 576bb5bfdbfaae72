use std::io::Write;

use crossterm::{
    QueueableCommand, queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};

use crate::maze::{Grid, Paint};

pub struct Renderer<W: Write> {
    /// Output handle to draw to, normally stdout
    out: W,
    /// Terminal dimensions (columns, rows) to check against, if known
    term_size: Option<(u16, u16)>,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer that checks grids against the current terminal size.
    /// When the size cannot be determined (e.g. output is piped) no check is made.
    pub fn new(out: W) -> Self {
        Self {
            out,
            term_size: terminal::size().ok(),
        }
    }

    /// Creates a renderer with an explicit size budget, or none at all.
    pub fn with_term_size(out: W, term_size: Option<(u16, u16)>) -> Self {
        Self { out, term_size }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Check if the terminal is large enough to show a grid of the given dimensions
    /// below its title line. Prints a notice and returns Ok(false) if it is not.
    fn check_size(&mut self, width: usize, height: usize) -> std::io::Result<bool> {
        let Some((term_width, term_height)) = self.term_size else {
            return Ok(true);
        };
        let needed_width = width * Paint::CELL_WIDTH as usize;
        let needed_height = height + 1;
        if needed_width <= term_width as usize && needed_height <= term_height as usize {
            return Ok(true);
        }

        tracing::warn!(
            "[render] terminal {}x{} too small for a {}x{} grid",
            term_width,
            term_height,
            needed_width,
            needed_height
        );
        let msg = format!(
            "Terminal size ({}x{}) is too small to draw the maze ({}x{}). Skipping drawing.\n",
            term_width, term_height, needed_width, needed_height
        );
        queue!(
            self.out,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
        self.out.flush()?;
        Ok(false)
    }

    /// Draw a painted grid under a title line.
    /// Returns Ok(false) if the grid was skipped because it does not fit.
    pub fn draw(&mut self, title: &str, canvas: &Grid<Paint>) -> std::io::Result<bool> {
        self.out.queue(style::PrintStyledContent(
            format!("{}\n", title)
                .with(Color::Yellow)
                .attribute(Attribute::Bold),
        ))?;

        if !self.check_size(canvas.width(), canvas.height())? {
            return Ok(false);
        }

        for row in canvas.rows() {
            for paint in row {
                self.out.queue(style::Print(paint))?;
            }
            self.out.queue(style::Print("\n"))?;
        }
        self.out.flush()?;
        Ok(true)
    }

    /// Print a single summary line in the given color.
    pub fn line(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        queue!(
            self.out,
            style::PrintStyledContent(format!("{}\n", text).with(color))
        )?;
        self.out.flush()
    }
}
