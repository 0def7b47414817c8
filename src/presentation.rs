//! Screen states and the renderers that present them.
//!
//! Exactly one [`Renderer`] is installed on a [`DisplaySurface`] at a time.
//! [`PresentationSwitch::apply`] picks the renderer for a [`ScreenState`] and
//! installs it, replacing whatever was there before.
//!
//! ```text
//!   ScreenState::Loading        -> LoadingRenderer   (1 item, fills surface)
//!   ScreenState::Content(list)  -> ListingRenderer   (n items, surface width x item height)
//!   ScreenState::Failed(class)  -> ErrorRenderer     (1 item, fills surface, retry button)
//! ```

use crate::campaign::{Campaign, CampaignList};
use crate::components::MessageBox;
use crate::error::ErrorClass;
use crate::styles::theme;
use crate::widgets::{Spinner, SpinnerWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;

/// Default number of rows used by a single campaign item
pub const DEFAULT_ITEM_HEIGHT: u16 = 7;

const RETRY_LABEL: &str = " Retry ";

/// What the listing screen is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Content(CampaignList),
    Failed(ErrorClass),
}

impl ScreenState {
    /// Number of items the matching renderer presents
    pub fn item_count(&self) -> usize {
        match self {
            ScreenState::Loading | ScreenState::Failed(_) => 1,
            ScreenState::Content(campaigns) => campaigns.len(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Loading => "loading",
            ScreenState::Content(_) => "content",
            ScreenState::Failed(_) => "failed",
        }
    }
}

/// Signal sent by the error renderer when retry is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySignal;

/// One-way route from the error renderer back to its controller.
///
/// Holding a handle does not keep the controller alive; once the controller is
/// gone, activation is silently dropped.
#[derive(Debug, Clone)]
pub struct RetryHandle {
    sender: mpsc::UnboundedSender<RetrySignal>,
}

impl RetryHandle {
    pub fn new(sender: mpsc::UnboundedSender<RetrySignal>) -> Self {
        Self { sender }
    }

    /// Create a handle together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RetrySignal>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    pub fn activate(&self) {
        let _ = self.sender.send(RetrySignal);
    }
}

/// Something a renderer can be installed on
pub trait DisplaySurface {
    /// Replace the installed renderer
    fn install(&mut self, renderer: Renderer);

    /// Current geometry of the surface
    fn size(&self) -> Size;
}

/// Renderer for the loading state
#[derive(Debug, Clone, Default)]
pub struct LoadingRenderer {
    indicator: Spinner,
}

impl LoadingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(&self) -> &Spinner {
        &self.indicator
    }

    /// Make sure the progress indicator is animating
    pub fn start_animating(&mut self) {
        self.indicator.start();
    }

    fn render_item(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            SpinnerWidget::new(&self.indicator, "Loading campaigns..."),
            area,
        );
    }
}

/// Renderer for a loaded campaign list
#[derive(Debug, Clone)]
pub struct ListingRenderer {
    campaigns: CampaignList,
    item_height: u16,
}

impl ListingRenderer {
    pub fn new(campaigns: CampaignList, item_height: u16) -> Self {
        Self {
            campaigns,
            item_height: item_height.max(1),
        }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn campaign(&self, index: usize) -> Option<&Campaign> {
        self.campaigns.get(index)
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    fn render_item(&self, frame: &mut Frame, area: Rect, index: usize) {
        let Some(campaign) = self.campaigns.get(index) else {
            return;
        };
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Span::styled(format!(" {} ", campaign.name), t.title_style()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let image = Line::from(vec![
            Span::styled("▣ ", t.emphasis_style()),
            Span::styled(campaign.mood_image.as_str(), t.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(image), chunks[0]);

        let description = Paragraph::new(campaign.description.as_str())
            .style(t.text_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);
    }
}

/// Renderer for a retryable network failure
#[derive(Debug, Clone)]
pub struct ErrorRenderer {
    class: ErrorClass,
    retry: RetryHandle,
}

impl ErrorRenderer {
    pub fn new(class: ErrorClass, retry: RetryHandle) -> Self {
        Self { class, retry }
    }

    pub fn class(&self) -> ErrorClass {
        self.class
    }

    /// Activate the retry affordance
    pub fn retry(&self) {
        self.retry.activate();
    }

    /// Where the retry button sits inside an item drawn at `area`
    pub fn button_area(area: Rect) -> Rect {
        let width = (RETRY_LABEL.len() as u16 + 2).min(area.width);
        let height = 3.min(area.height);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + (area.height / 2 + 1).min(area.height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    fn render_item(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let button = Self::button_area(area);

        let message_area = Rect {
            y: area.y,
            height: button.y.saturating_sub(area.y),
            ..area
        };
        let message = format!("Could not load campaigns.\n\n{}", self.class.message());
        MessageBox::render(
            frame,
            message_area,
            &message,
            Some("Network Error"),
            Some(t.error),
        );

        let button_widget = Paragraph::new(Span::styled(RETRY_LABEL, t.title_style()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_focused_style()),
            );
        frame.render_widget(button_widget, button);
    }
}

/// The single renderer installed on a surface
#[derive(Debug, Clone)]
pub enum Renderer {
    Loading(LoadingRenderer),
    Listing(ListingRenderer),
    Error(ErrorRenderer),
}

impl Renderer {
    pub fn item_count(&self) -> usize {
        match self {
            Renderer::Loading(_) | Renderer::Error(_) => 1,
            Renderer::Listing(listing) => listing.campaigns.len(),
        }
    }

    /// Size of item `index` on a surface of `surface` size
    pub fn item_size(&self, _index: usize, surface: Size) -> Size {
        match self {
            Renderer::Loading(_) | Renderer::Error(_) => surface,
            Renderer::Listing(listing) => Size::new(surface.width, listing.item_height),
        }
    }

    /// Draw item `index` into `area`
    pub fn render_item(&self, frame: &mut Frame, area: Rect, index: usize) {
        match self {
            Renderer::Loading(loading) => loading.render_item(frame, area),
            Renderer::Listing(listing) => listing.render_item(frame, area, index),
            Renderer::Error(error) => error.render_item(frame, area),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Renderer::Loading(_) => "loading",
            Renderer::Listing(_) => "listing",
            Renderer::Error(_) => "error",
        }
    }
}

/// Maps a [`ScreenState`] to the renderer that presents it
#[derive(Debug, Clone, Copy)]
pub struct PresentationSwitch {
    item_height: u16,
}

impl Default for PresentationSwitch {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_HEIGHT)
    }
}

impl PresentationSwitch {
    pub fn new(item_height: u16) -> Self {
        Self {
            item_height: item_height.max(1),
        }
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    /// Build the renderer for `state`
    pub fn renderer_for(&self, state: &ScreenState, retry: &RetryHandle) -> Renderer {
        match state {
            ScreenState::Loading => {
                let mut loading = LoadingRenderer::new();
                loading.start_animating();
                Renderer::Loading(loading)
            }
            ScreenState::Content(campaigns) => {
                Renderer::Listing(ListingRenderer::new(campaigns.clone(), self.item_height))
            }
            ScreenState::Failed(class) => {
                Renderer::Error(ErrorRenderer::new(*class, retry.clone()))
            }
        }
    }

    /// Install the renderer for `state` as the only renderer on `surface`
    pub fn apply<S: DisplaySurface + ?Sized>(
        &self,
        state: &ScreenState,
        surface: &mut S,
        retry: &RetryHandle,
    ) {
        surface.install(self.renderer_for(state, retry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[derive(Default)]
    struct FixedSurface {
        installed: Option<Renderer>,
        installs: usize,
    }

    impl DisplaySurface for FixedSurface {
        fn install(&mut self, renderer: Renderer) {
            self.installed = Some(renderer);
            self.installs += 1;
        }

        fn size(&self) -> Size {
            Size::new(60, 30)
        }
    }

    fn campaigns() -> CampaignList {
        vec![
            Campaign::new("Alpha", "First campaign", "https://img/alpha.jpg"),
            Campaign::new("Beta", "Second campaign", "https://img/beta.jpg"),
            Campaign::new("Gamma", "Third campaign", "https://img/gamma.jpg"),
        ]
    }

    #[test]
    fn test_item_count_matches_state() {
        let switch = PresentationSwitch::default();
        let (retry, _rx) = RetryHandle::channel();

        let states = [
            ScreenState::Loading,
            ScreenState::Content(Vec::new()),
            ScreenState::Content(campaigns()),
            ScreenState::Failed(ErrorClass::Timeout),
        ];
        for state in states {
            let mut surface = FixedSurface::default();
            switch.apply(&state, &mut surface, &retry);
            let renderer = surface.installed.as_ref().unwrap();
            assert_eq!(surface.installs, 1);
            assert_eq!(renderer.item_count(), state.item_count(), "{}", state.name());
        }
    }

    #[test]
    fn test_loading_fills_surface_and_animates() {
        let switch = PresentationSwitch::default();
        let (retry, _rx) = RetryHandle::channel();
        let mut surface = FixedSurface::default();

        switch.apply(&ScreenState::Loading, &mut surface, &retry);

        match surface.installed.as_ref().unwrap() {
            Renderer::Loading(loading) => assert!(loading.indicator().is_animating()),
            other => panic!("expected loading renderer, got {}", other.kind()),
        }
        let renderer = surface.installed.as_ref().unwrap();
        assert_eq!(renderer.item_size(0, surface.size()), surface.size());
    }

    #[test]
    fn test_listing_items_use_surface_width_and_fixed_height() {
        let switch = PresentationSwitch::new(5);
        let (retry, _rx) = RetryHandle::channel();
        let mut surface = FixedSurface::default();

        switch.apply(&ScreenState::Content(campaigns()), &mut surface, &retry);
        let renderer = surface.installed.as_ref().unwrap();

        for index in 0..3 {
            assert_eq!(renderer.item_size(index, Size::new(60, 30)), Size::new(60, 5));
            assert_eq!(renderer.item_size(index, Size::new(90, 12)), Size::new(90, 5));
        }
        match renderer {
            Renderer::Listing(listing) => {
                assert_eq!(listing.campaign(1).unwrap().name, "Beta");
                assert!(listing.campaign(3).is_none());
            }
            other => panic!("expected listing renderer, got {}", other.kind()),
        }
    }

    #[test]
    fn test_error_renderer_routes_retry() {
        let switch = PresentationSwitch::default();
        let (retry, mut rx) = RetryHandle::channel();
        let mut surface = FixedSurface::default();

        switch.apply(
            &ScreenState::Failed(ErrorClass::NoConnectivity),
            &mut surface,
            &retry,
        );

        match surface.installed.as_ref().unwrap() {
            Renderer::Error(error) => {
                assert_eq!(error.class(), ErrorClass::NoConnectivity);
                assert!(rx.try_recv().is_err());
                error.retry();
                assert_eq!(rx.try_recv().unwrap(), RetrySignal);
            }
            other => panic!("expected error renderer, got {}", other.kind()),
        }
    }

    #[test]
    fn test_apply_twice_replaces_renderer() {
        let switch = PresentationSwitch::default();
        let (retry, _rx) = RetryHandle::channel();
        let mut surface = FixedSurface::default();
        let state = ScreenState::Content(campaigns());

        switch.apply(&state, &mut surface, &retry);
        switch.apply(&state, &mut surface, &retry);

        assert_eq!(surface.installs, 2);
        assert_eq!(surface.installed.as_ref().unwrap().item_count(), 3);
    }

    #[test]
    fn test_retry_after_controller_gone_is_ignored() {
        let (retry, rx) = RetryHandle::channel();
        drop(rx);
        retry.activate();
    }

    #[test]
    fn test_button_area_inside_item() {
        let area = Rect::new(2, 3, 40, 20);
        let button = ErrorRenderer::button_area(area);
        assert!(button.x >= area.x && button.right() <= area.right());
        assert!(button.y >= area.y && button.bottom() <= area.bottom());
        assert_eq!(button.height, 3);
    }

    #[test]
    fn test_listing_item_draws_campaign_fields() {
        let renderer = Renderer::Listing(ListingRenderer::new(campaigns(), 6));
        let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();

        terminal
            .draw(|frame| renderer.render_item(frame, frame.area(), 1))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Beta"));
        assert!(text.contains("https://img/beta.jpg"));
        assert!(text.contains("Second campaign"));
        assert!(!text.contains("Alpha"));
    }
}
