//! Indeterminate progress indicator.
//!
//! The spinner keeps its own start time; the frame drawn is derived from the
//! elapsed time so the animation advances on every redraw without extra state.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Animation state of a progress indicator
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    started_at: Option<Instant>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating. Calling this on a running spinner keeps the original start.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Frame symbol for the given instant. A stopped spinner shows the first frame.
    pub fn symbol_at(&self, now: Instant) -> &'static str {
        let Some(started_at) = self.started_at else {
            return FRAMES[0];
        };
        let ticks = now.saturating_duration_since(started_at).as_millis() / FRAME_INTERVAL.as_millis();
        FRAMES[(ticks % FRAMES.len() as u128) as usize]
    }
}

/// Widget drawing a spinner and a label centred in its area
pub struct SpinnerWidget<'a> {
    spinner: &'a Spinner,
    label: &'a str,
}

impl<'a> SpinnerWidget<'a> {
    pub fn new(spinner: &'a Spinner, label: &'a str) -> Self {
        Self { spinner, label }
    }
}

impl Widget for SpinnerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let t = theme();
        let line = Line::from(vec![
            Span::styled(self.spinner.symbol_at(Instant::now()), t.title_style()),
            Span::raw(" "),
            Span::styled(self.label, t.muted_style()),
        ]);

        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
