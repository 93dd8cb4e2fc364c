//! Interactive viewer application state and rendering.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use image::RgbaImage;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use gt_core::Grid;

use crate::heatmap;

/// Viewer app: one grid, one heatmap, blocks until dismissed.
pub struct App {
    grid: Grid,
    title: String,
    should_quit: bool,
    /// Heatmap lines cached for the last seen inner area size.
    cache: Option<((u16, u16), Vec<Line<'static>>)>,
}

impl App {
    pub fn new(grid: Grid, title: String) -> Self {
        Self {
            grid,
            title,
            should_quit: false,
            cache: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// `q` or `Esc` dismisses the viewer. Resize events fall through; the
    /// next draw recomposes at the new size.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                self.should_quit = true;
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let size = (inner.width, inner.height);
        let rebuild = !matches!(&self.cache, Some((cached, _)) if *cached == size);
        if rebuild {
            // Two pixel rows per terminal row via upper-half blocks.
            let img = heatmap::render(
                &self.grid,
                u32::from(inner.width),
                u32::from(inner.height) * 2,
            );
            self.cache = Some((size, half_block_lines(&img)));
        }

        if let Some((_, lines)) = &self.cache {
            frame.render_widget(Paragraph::new(Text::from(lines.clone())), inner);
        }
    }
}

/// Convert an image to terminal lines, two pixel rows per line: the upper
/// half block glyph carries the top pixel as foreground and the bottom
/// pixel as background.
fn half_block_lines(img: &RgbaImage) -> Vec<Line<'static>> {
    let full_rows = img.height() / 2;
    let mut lines = Vec::with_capacity(full_rows as usize);

    for row in 0..full_rows {
        let y = row * 2;
        let mut spans = Vec::with_capacity(img.width() as usize);
        for x in 0..img.width() {
            let top = img.get_pixel(x, y);
            let bottom = img.get_pixel(x, y + 1);
            spans.push(Span::styled(
                "\u{2580}",
                Style::default()
                    .fg(Color::Rgb(top[0], top[1], top[2]))
                    .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}
