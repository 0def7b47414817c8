use crate::keymap::Action;
use crate::presentation::{DisplaySurface, ErrorRenderer, Renderer};
use crate::styles::theme;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Terminal surface of the campaign listing screen.
///
/// Holds the single installed renderer and lays its items out top to bottom,
/// starting at the current scroll offset.
#[derive(Debug, Default)]
pub struct CampaignListingView {
    renderer: Option<Renderer>,
    size: Size,
    area: Rect,
    scroll: usize,
}

impl DisplaySurface for CampaignListingView {
    fn install(&mut self, renderer: Renderer) {
        self.renderer = Some(renderer);
        self.scroll = 0;
    }

    fn size(&self) -> Size {
        self.size
    }
}

impl CampaignListingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    /// Index of the first visible item
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Record new geometry without drawing
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.size = Size::new(area.width, area.height);
        self.clamp_scroll();
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.resize(area);
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };

        if renderer.item_count() == 0 {
            let hint = Paragraph::new("No campaigns right now.")
                .style(theme().muted_style())
                .alignment(Alignment::Center);
            let row = Rect {
                y: area.y + area.height / 2,
                height: area.height.min(1),
                ..area
            };
            frame.render_widget(hint, row);
            return;
        }

        let mut y = area.y;
        for index in self.scroll..renderer.item_count() {
            if y >= area.bottom() {
                break;
            }
            let item = renderer.item_size(index, self.size);
            let height = item.height.min(area.bottom() - y);
            let item_area = Rect::new(area.x, y, item.width.min(area.width), height);
            renderer.render_item(frame, item_area, index);
            y += height;
        }
    }

    /// Apply a keymap action. Returns true if the view used it.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match (self.renderer.as_ref(), action) {
            (Some(Renderer::Error(error)), Action::Retry | Action::Confirm) => {
                error.retry();
                true
            }
            (Some(Renderer::Listing(_)), Action::MoveUp) => self.scroll_by(-1),
            (Some(Renderer::Listing(_)), Action::MoveDown) => self.scroll_by(1),
            (Some(Renderer::Listing(_)), Action::PageUp) => {
                self.scroll_by(-(self.visible_items() as isize))
            }
            (Some(Renderer::Listing(_)), Action::PageDown) => {
                self.scroll_by(self.visible_items() as isize)
            }
            (Some(Renderer::Listing(_)), Action::GoToTop) => self.scroll_by(isize::MIN),
            (Some(Renderer::Listing(_)), Action::GoToEnd) => self.scroll_by(isize::MAX),
            _ => false,
        }
    }

    /// Handle a mouse event. Returns true if the view used it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match (self.renderer.as_ref(), mouse.kind) {
            (Some(Renderer::Error(error)), MouseEventKind::Down(MouseButton::Left)) => {
                let button = ErrorRenderer::button_area(self.area);
                if button.contains(Position::new(mouse.column, mouse.row)) {
                    error.retry();
                    true
                } else {
                    false
                }
            }
            (Some(Renderer::Listing(_)), MouseEventKind::ScrollUp) => self.scroll_by(-1),
            (Some(Renderer::Listing(_)), MouseEventKind::ScrollDown) => self.scroll_by(1),
            _ => false,
        }
    }

    /// Number of whole items that fit on the surface
    fn visible_items(&self) -> usize {
        let Some(renderer) = self.renderer.as_ref() else {
            return 1;
        };
        let item_height = renderer.item_size(0, self.size).height.max(1);
        (self.size.height / item_height).max(1) as usize
    }

    fn max_scroll(&self) -> usize {
        let count = self.renderer.as_ref().map_or(0, Renderer::item_count);
        count.saturating_sub(self.visible_items())
    }

    fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        let changed = target != self.scroll;
        self.scroll = target;
        changed
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::Campaign;
    use crate::error::ErrorClass;
    use crate::presentation::{ListingRenderer, LoadingRenderer, RetryHandle, RetrySignal};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn listing(count: usize, item_height: u16) -> Renderer {
        let campaigns = (0..count)
            .map(|i| Campaign::new(format!("Campaign {}", i), "desc", format!("img{}.jpg", i)))
            .collect();
        Renderer::Listing(ListingRenderer::new(campaigns, item_height))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_install_replaces_and_resets_scroll() {
        let mut view = CampaignListingView::new();
        view.resize(Rect::new(0, 0, 40, 10));
        view.install(listing(10, 5));
        assert!(view.handle_action(Action::MoveDown));
        assert_eq!(view.scroll_offset(), 1);

        view.install(Renderer::Loading(LoadingRenderer::new()));
        assert_eq!(view.scroll_offset(), 0);
        assert_eq!(view.renderer().unwrap().kind(), "loading");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = CampaignListingView::new();
        view.resize(Rect::new(0, 0, 40, 10));
        view.install(listing(5, 5));

        assert!(!view.handle_action(Action::MoveUp));
        assert!(view.handle_action(Action::GoToEnd));
        // two items fit on the surface, so the last page starts at index 3
        assert_eq!(view.scroll_offset(), 3);
        assert!(!view.handle_action(Action::MoveDown));
        assert!(view.handle_action(Action::PageUp));
        assert_eq!(view.scroll_offset(), 1);
        assert!(view.handle_action(Action::GoToTop));
        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_render_draws_items_in_order() {
        let mut view = CampaignListingView::new();
        view.install(listing(3, 4));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|frame| view.render(frame, frame.area())).unwrap();

        let text = screen_text(&terminal);
        let first = text.find("Campaign 0").unwrap();
        let second = text.find("Campaign 1").unwrap();
        let third = text.find("Campaign 2").unwrap();
        assert!(first < second && second < third);
        assert_eq!(view.size(), Size::new(40, 12));
    }

    #[test]
    fn test_retry_key_and_click_on_error_screen() {
        let (retry, mut rx) = RetryHandle::channel();
        let mut view = CampaignListingView::new();
        view.resize(Rect::new(0, 0, 60, 20));
        view.install(Renderer::Error(ErrorRenderer::new(ErrorClass::Timeout, retry)));

        assert!(view.handle_action(Action::Retry));
        assert_eq!(rx.try_recv().unwrap(), RetrySignal);

        let button = ErrorRenderer::button_area(Rect::new(0, 0, 60, 20));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.x + 1,
            row: button.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert!(view.handle_mouse(click));
        assert_eq!(rx.try_recv().unwrap(), RetrySignal);

        let miss = MouseEvent {
            column: 0,
            row: 0,
            ..click
        };
        assert!(!view.handle_mouse(miss));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_retry_key_ignored_outside_error_screen() {
        let mut view = CampaignListingView::new();
        view.install(listing(2, 5));
        assert!(!view.handle_action(Action::Retry));
    }
}
