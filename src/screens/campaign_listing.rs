//! Campaign listing screen.
//!
//! Wraps a [`ScreenController`] driving a [`CampaignListingView`] and maps
//! terminal input onto controller requests.

use crate::components::{CampaignListingView, Footer, Header};
use crate::config::Config;
use crate::controller::ScreenController;
use crate::keymap::Action;
use crate::presentation::{PresentationSwitch, ScreenState};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::CampaignSource;
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 2;

pub struct CampaignListingScreen {
    controller: ScreenController<CampaignListingView>,
}

impl CampaignListingScreen {
    pub fn new(source: Arc<dyn CampaignSource>, runtime: Handle, config: &Config) -> Self {
        let switch = PresentationSwitch::new(config.item_height);
        Self {
            controller: ScreenController::new(source, CampaignListingView::new(), runtime, switch),
        }
    }

    pub fn controller(&self) -> &ScreenController<CampaignListingView> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScreenController<CampaignListingView> {
        &mut self.controller
    }

    fn header_description(&self) -> String {
        match self.controller.state() {
            ScreenState::Loading => "Fetching the latest campaigns...".to_string(),
            ScreenState::Content(campaigns) => match campaigns.len() {
                1 => "1 campaign".to_string(),
                n => format!("{} campaigns", n),
            },
            ScreenState::Failed(_) => "Could not load campaigns".to_string(),
        }
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Quit | Action::Cancel => ScreenAction::Quit,
            Action::Refresh => {
                self.controller.on_refresh_requested();
                ScreenAction::None
            }
            other => {
                if !self.controller.surface_mut().handle_action(other) {
                    debug!("Ignoring {:?} on {} screen", other, self.controller.state().name());
                }
                ScreenAction::None
            }
        }
    }
}

impl Screen for CampaignListingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_chunk, content_chunk, footer_chunk) =
            create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);

        let description = self.header_description();
        Header::render(frame, header_chunk, "Campaigns", &description)?;

        self.controller.surface_mut().render(frame, content_chunk);

        let footer_text = match self.controller.state() {
            ScreenState::Failed(_) => ctx.config.keymap.footer_error(),
            _ => ctx.config.keymap.footer_listing(),
        };
        Footer::render(frame, footer_chunk, &footer_text)?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(ScreenAction::Quit);
                }
                match ctx.config.keymap.get_action(key.code, key.modifiers) {
                    Some(action) => Ok(self.handle_action(action)),
                    None => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) => {
                self.controller.surface_mut().handle_mouse(mouse);
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn tick(&mut self) {
        self.controller.poll();
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.controller.on_became_visible();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.controller.teardown();
        Ok(())
    }
}
