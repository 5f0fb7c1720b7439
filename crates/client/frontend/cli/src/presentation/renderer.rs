//! Overlay renderer drawing onto a ratatui terminal.
//!
//! The overlay lays itself out on a pixel surface; [`OverlayCanvas`] divides
//! that surface into terminal cells of [`CellSize`] pixels and paints each
//! draw command with [`RatatuiTheme`].

use std::io::{self, Write};

use client_frontend_core::{
    Cue, DrawCommand, ImageDraw, Indicator, OverlayError, OverlayRenderer, Point, TextAlign,
    TextDraw,
};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use thiserror::Error;

use crate::config::CellSize;
use crate::presentation::theme::{RatatuiTheme, Sprite};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw terminal frame")]
    Draw(#[source] io::Error),

    #[error("failed to ring terminal bell")]
    Bell(#[source] io::Error),
}

impl From<RenderError> for OverlayError {
    fn from(err: RenderError) -> Self {
        OverlayError::Render(io::Error::other(err))
    }
}

/// Widget painting one overlay frame.
pub struct OverlayCanvas<'a> {
    pub commands: &'a [DrawCommand],
    pub indicators: &'a [(Indicator, Point)],
    pub cell: CellSize,
    pub surface_width: i32,
    pub theme: RatatuiTheme,
}

impl Widget for OverlayCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for command in self.commands {
            match command {
                DrawCommand::Image(image) => self.render_image(image, area, buf),
                DrawCommand::Text(text) => self.render_text(text, area, buf),
            }
        }
        for (indicator, at) in self.indicators {
            let (glyph, style) = self.theme.indicator(*indicator);
            self.put(area, buf, *at, glyph, style);
        }
    }
}

impl OverlayCanvas<'_> {
    fn render_image(&self, image: &ImageDraw, area: Rect, buf: &mut Buffer) {
        match self.theme.sprite(image, self.surface_width) {
            Sprite::Fill {
                width,
                height,
                style,
            } => self.fill(area, buf, image.at, width, height, style),
            Sprite::Label { text, style } => self.put(area, buf, image.at, &text, style),
            Sprite::Hidden => {}
        }
    }

    fn render_text(&self, text: &TextDraw, area: Rect, buf: &mut Buffer) {
        let style = self.theme.text(text.colors, text.outline);
        let Some(wrap) = text.wrap else {
            let at = self.aligned(text.at, text.text.chars().count(), text.align);
            self.put(area, buf, at, &text.text, style);
            return;
        };

        // Wrapped lines take one terminal row each.
        let columns = usize::try_from(wrap.width / self.cell.width).unwrap_or(0).max(1);
        for (line_no, line) in wrap_words(&text.text, columns).iter().enumerate() {
            let at = Point::new(text.at.x, text.at.y + line_no as i32 * self.cell.height);
            let at = self.aligned(at, line.chars().count(), text.align);
            self.put(area, buf, at, line, style);
        }
    }

    fn aligned(&self, at: Point, chars: usize, align: TextAlign) -> Point {
        let width = chars as i32 * self.cell.width;
        match align {
            TextAlign::Left => at,
            TextAlign::Center => Point::new(at.x - width / 2, at.y),
            TextAlign::Right => Point::new(at.x - width, at.y),
        }
    }

    /// Terminal cell under a surface point, pulled onto the surface when
    /// slightly off its top or left edge.
    fn cell_at(&self, area: Rect, at: Point) -> Option<(u16, u16)> {
        let column = at.x.div_euclid(self.cell.width).max(0);
        let row = at.y.div_euclid(self.cell.height).max(0);
        let x = i32::from(area.x) + column;
        let y = i32::from(area.y) + row;
        if x >= i32::from(area.right()) || y >= i32::from(area.bottom()) {
            return None;
        }
        Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }

    fn put(&self, area: Rect, buf: &mut Buffer, at: Point, text: &str, style: Style) {
        if let Some((x, y)) = self.cell_at(area, at) {
            let room = usize::from(area.right() - x);
            buf.set_stringn(x, y, text, room, style);
        }
    }

    fn fill(&self, area: Rect, buf: &mut Buffer, at: Point, width: i32, height: i32, style: Style) {
        let left = at.x.div_euclid(self.cell.width).max(0);
        let right = (at.x + width).div_euclid(self.cell.width).max(left + 1);
        let top = at.y.div_euclid(self.cell.height).max(0);
        let bottom = (at.y + height).div_euclid(self.cell.height).max(top + 1);

        for row in top..bottom {
            for column in left..right {
                let (x, y) = (i32::from(area.x) + column, i32::from(area.y) + row);
                if x >= i32::from(area.right()) || y >= i32::from(area.bottom()) {
                    continue;
                }
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(style);
                }
            }
        }
    }
}

/// Greedy word wrap; words longer than a line are split.
fn wrap_words(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > columns {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(columns);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > columns {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// [`OverlayRenderer`] over any ratatui backend.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    theme: RatatuiTheme,
    cell: CellSize,
    surface_width: i32,
    commands: Vec<DrawCommand>,
    indicators: Vec<(Indicator, Point)>,
    pending_cues: Vec<Cue>,
    bell: Option<Box<dyn Write + Send>>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, cell: CellSize, surface_width: i32) -> Self {
        Self {
            terminal,
            theme: RatatuiTheme,
            cell,
            surface_width,
            commands: Vec::new(),
            indicators: Vec::new(),
            pending_cues: Vec::new(),
            bell: None,
        }
    }

    /// Rings a bell on `sink` for every flush that follows a cue.
    pub fn with_bell(mut self, sink: impl Write + Send + 'static) -> Self {
        self.bell = Some(Box::new(sink));
        self
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let canvas = OverlayCanvas {
            commands: &self.commands,
            indicators: &self.indicators,
            cell: self.cell,
            surface_width: self.surface_width,
            theme: self.theme,
        };
        self.terminal
            .draw(|frame| frame.render_widget(canvas, frame.area()))
            .map_err(RenderError::Draw)?;

        if self.pending_cues.is_empty() {
            return Ok(());
        }
        self.pending_cues.clear();
        if let Some(bell) = self.bell.as_mut() {
            bell.write_all(b"\x07")
                .and_then(|()| bell.flush())
                .map_err(RenderError::Bell)?;
        }
        Ok(())
    }
}

impl<B: Backend> OverlayRenderer for TerminalRenderer<B> {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        self.commands.extend_from_slice(commands);
    }

    fn set_indicator(&mut self, indicator: Indicator, visible: bool, at: Point) {
        self.indicators.retain(|(shown, _)| *shown != indicator);
        if visible {
            self.indicators.push((indicator, at));
        }
    }

    fn play(&mut self, cue: Cue) {
        tracing::debug!(%cue, "cue");
        self.pending_cues.push(cue);
    }

    fn flush(&mut self) -> client_frontend_core::Result<()> {
        self.present().map_err(OverlayError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use client_frontend_core::{Asset, ColorPair};
    use ratatui::{backend::TestBackend, style::Color};

    use super::*;

    fn renderer() -> TerminalRenderer<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(64, 24)).unwrap();
        TerminalRenderer::new(terminal, CellSize::default(), 512)
    }

    fn row_text(renderer: &TerminalRenderer<TestBackend>, y: u16) -> String {
        let buffer = renderer.terminal().backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn text_lands_on_the_cell_grid() {
        let mut renderer = renderer();
        renderer.draw(&[
            TextDraw::new("Eevee", 16, 32, TextAlign::Left, ColorPair::DARK).into(),
            TextDraw::new("abcd", 80, 48, TextAlign::Center, ColorPair::LIGHT).into(),
            TextDraw::new("end", 512, 64, TextAlign::Right, ColorPair::LIGHT).into(),
        ]);
        renderer.flush().unwrap();

        assert_eq!(&row_text(&renderer, 2)[2..7], "Eevee");
        assert_eq!(&row_text(&renderer, 3)[8..12], "abcd");
        assert!(row_text(&renderer, 4).ends_with("end"));
    }

    #[test]
    fn indicators_stay_on_screen_until_hidden() {
        let mut renderer = renderer();
        renderer.set_indicator(Indicator::LeftArrow, true, Point::new(-2, 71));
        renderer.set_indicator(Indicator::RightArrow, true, Point::new(474, 71));
        renderer.flush().unwrap();
        let row = row_text(&renderer, 4);
        assert!(row.starts_with('◀'));
        assert!(row.contains('▶'));

        renderer.set_indicator(Indicator::LeftArrow, false, Point::new(-2, 71));
        renderer.set_indicator(Indicator::RightArrow, false, Point::new(474, 71));
        renderer.flush().unwrap();
        assert!(!row_text(&renderer, 4).contains('◀'));
    }

    #[test]
    fn fills_cover_their_footprint() {
        let mut renderer = renderer();
        renderer.draw(&[ImageDraw::new(Asset::HpBar, 86, 86)
            .with_source(0, 0, 96, 6)
            .into()]);
        renderer.flush().unwrap();

        let buffer = renderer.terminal().backend().buffer();
        assert_eq!(buffer[(10, 5)].bg, Color::Green);
        assert_eq!(buffer[(21, 5)].bg, Color::Green);
        assert_eq!(buffer[(22, 5)].bg, Color::Reset);
        assert_eq!(buffer[(10, 6)].bg, Color::Reset);
    }

    #[test]
    fn clear_drops_the_previous_frame() {
        let mut renderer = renderer();
        renderer.draw(&[TextDraw::new("stale", 0, 0, TextAlign::Left, ColorPair::DARK).into()]);
        renderer.flush().unwrap();
        renderer.clear();
        renderer.flush().unwrap();
        assert!(!row_text(&renderer, 0).contains("stale"));
    }

    #[test]
    fn bell_rings_once_per_flush_after_a_cue() {
        #[derive(Clone, Default)]
        struct CountingBell(Arc<AtomicUsize>);

        impl Write for CountingBell {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.fetch_add(buf.len(), Ordering::SeqCst);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let bell = CountingBell::default();
        let mut renderer = renderer().with_bell(bell.clone());
        renderer.play(Cue::Cursor);
        renderer.play(Cue::Decision);
        renderer.flush().unwrap();
        renderer.flush().unwrap();
        assert_eq!(bell.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_words("Boosts Water moves and weakens Fire moves.", 16),
            vec!["Boosts Water", "moves and", "weakens Fire", "moves."]
        );
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_words("   ", 4).is_empty());
    }
}
