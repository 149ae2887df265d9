//! Application lifecycle: construction, the main loop and the health probe.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::client::{HttpConfig, MarketClient};
use crate::constants::{HERO_ROTATION_TICKS, TICK_RATE};
use crate::theme::Theme;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, BackendHealth, DataState, Route, StartupOptions, UiState};

impl App {
    /// Creates the app from the config file and command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base URL is unusable.
    pub fn new(options: StartupOptions) -> Result<Self> {
        let config = AppConfig::load();
        let (base, origin) =
            config.api_endpoint(options.api_base.as_deref(), options.api_origin.as_deref());
        let http = HttpConfig::with_timeout_secs(config.request_timeout_secs);
        let client = MarketClient::from_parts(&base, &origin, &http).map_err(|e| e.into_report())?;
        info!(base_url = client.base_url(), "market client ready");

        let route = options
            .route
            .as_deref()
            .map(Route::from_path)
            .unwrap_or_default();

        let mut app = Self::with_client(config, client, route);
        app.persist_config = true;
        if options.light {
            app.ui.theme = Theme::Light;
        }
        Ok(app)
    }

    /// Builds the app around an existing client without touching the disk.
    #[must_use]
    pub fn with_client(config: AppConfig, client: MarketClient, route: Route) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            route,
            history: Vec::new(),
            data: DataState::new(config.default_chain_filter),
            ui: UiState::new(config.theme),
            health: BackendHealth::Unknown,
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
            persist_config: false,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O fails.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_health_checks();
        self.load_current_route();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Advances timers: hero rotation on the cover and the toast countdown.
    pub(crate) fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if self.route == Route::Cover && self.animation_tick % HERO_ROTATION_TICKS == 0 {
            self.data.cover.advance_hero();
        }
        self.ui.tick_toast();
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    fn start_health_checks(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();
        let period = Duration::from_secs(self.config.health_check_secs.max(1));

        tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;
                let result = match client.health().await {
                    Ok(health) => {
                        debug!(status = %health.status, "health check");
                        Ok(health.status)
                    }
                    Err(err) => {
                        warn!("health check failed: {err}");
                        Err(err.to_string())
                    }
                };
                if message_tx.send(AppMessage::HealthChecked(result)).is_err() {
                    break;
                }
            }
        });
    }
}
