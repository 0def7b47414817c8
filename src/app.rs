use crate::config::Config;
use crate::screens::{
    CampaignListingScreen, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::services::CampaignSource;
use crate::tui::Tui;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// How long the loop waits for input before redrawing; also the spinner cadence
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(80);

/// Main application state
pub struct App {
    config: Config,
    tui: Tui,
    screen: CampaignListingScreen,
    // Runs the screen's fetches; must drop after `screen`
    #[allow(dead_code)]
    runtime: Runtime,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn CampaignSource>) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let tui = Tui::new()?;
        let screen = CampaignListingScreen::new(source, runtime.handle().clone(), &config);

        Ok(Self {
            config,
            tui,
            screen,
            runtime,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Campaign browser started");

        self.screen.on_enter(&ScreenContext::new(&self.config))?;

        let result = self.event_loop();
        if let Err(e) = &result {
            error!("Event loop failed: {:#}", e);
        }

        self.screen.on_exit(&ScreenContext::new(&self.config))?;
        self.tui.exit()?;
        info!("Campaign browser stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.screen.tick();
            self.draw()?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(event) = self.tui.poll_event(EVENT_POLL_INTERVAL)? {
                let ctx = ScreenContext::new(&self.config);
                if self.screen.handle_event(event, &ctx)? == ScreenAction::Quit {
                    self.should_quit = true;
                }
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            config, tui, screen, ..
        } = self;
        let mut render_result = Ok(());
        tui.terminal_mut()
            .draw(|frame| {
                let ctx = RenderContext::new(config);
                render_result = screen.render(frame, frame.area(), &ctx);
            })
            .context("Failed to draw frame")?;
        render_result
    }
}
