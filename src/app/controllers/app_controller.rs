//! # Application Controller
//!
//! Orchestrates the MVVM pieces on a single control thread: drains completed
//! network outcomes, maps key input to commands, applies both to the view
//! model, and re-renders when state changed.

use crate::app::commands::{command_for_key, AppCommand};
use crate::app::events::ApiEvent;
use crate::app::io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
use crate::app::services::PostService;
use crate::app::view_models::ViewModel;
use crate::app::views::{TerminalRenderer, ViewRenderer};
use crate::{cmd_args::CommandLineArgs, config, profile::ProfileStore};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one loop iteration waits for input before checking the service
/// channel again.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller.
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    renderer: TerminalRenderer<RS>,
    service: PostService,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<std::io::Stdout>> {
    /// Controller wired to the real terminal.
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        Self::with_io_streams(cmd_args, TerminalEventStream::new(), TerminalRenderStream::new())
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Controller with injected I/O streams.
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        let base_url = Self::resolve_base_url(profile_name, &profile_path)?;

        let service = PostService::new(base_url)?;
        let renderer = TerminalRenderer::with_render_stream(render_stream)?;

        let mut view_model = ViewModel::new();
        view_model.set_api_label(format!("{profile_name} @ {}", service.base_url()));

        Ok(Self {
            view_model,
            renderer,
            service,
            event_stream,
            should_quit: false,
        })
    }

    /// Base URL from the named profile, or the built-in default when the
    /// profile file or section is absent.
    fn resolve_base_url(profile_name: &str, profile_path: &str) -> Result<String> {
        let store = ProfileStore::new(profile_path);
        match store.get_profile(profile_name)? {
            Some(profile) => {
                tracing::debug!("Using profile '{profile_name}' from '{profile_path}'");
                Ok(profile.base_url().to_string())
            }
            None => {
                tracing::debug!(
                    "Profile '{profile_name}' not found in '{profile_path}', using default API"
                );
                Ok(config::DEFAULT_BASE_URL.to_string())
            }
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Sender half of the service channel; lets tests inject outcomes.
    pub fn api_sender(&self) -> mpsc::Sender<ApiEvent> {
        self.service.event_sender()
    }

    /// Run the application loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;

        // The one automatic load on startup.
        self.service.fetch_all();
        self.renderer.render_full(&self.view_model)?;

        while !self.should_quit {
            // Completed network outcomes first, in arrival order.
            while let Some(event) = self.service.poll_event() {
                self.view_model.apply_api_event(event);
            }

            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => {
                        self.renderer.update_size(width, height);
                        self.renderer.render_full(&self.view_model)?;
                    }
                    _ => {}
                }
            } else {
                // Let the spawned request tasks make progress.
                tokio::task::yield_now().await;
            }

            if self.view_model.take_dirty() {
                self.renderer.render_full(&self.view_model)?;
            }
        }

        self.renderer.cleanup()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let Some(command) = command_for_key(key, self.view_model.focus()) else {
            return;
        };
        tracing::debug!("Dispatching {command:?}");
        self.dispatch(command);
    }

    fn dispatch(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.should_quit = true,
            AppCommand::Reload => self.service.fetch_all(),
            AppCommand::CycleFocus => self.view_model.cycle_focus(),
            AppCommand::HighlightUp => self.view_model.highlight_up(),
            AppCommand::HighlightDown => self.view_model.highlight_down(),
            AppCommand::SelectHighlighted => self.view_model.select_highlighted(),
            AppCommand::SubmitDraft => {
                // Submitted as-is, empty fields included. The draft resets
                // only when the created echo arrives.
                self.service.create(self.view_model.draft().clone());
            }
            AppCommand::SubmitUpdate => {
                // No-op while nothing is selected.
                if let Some(post) = self.view_model.selection().cloned() {
                    self.service.update(post);
                }
            }
            AppCommand::DeleteSelected => {
                if let Some(post) = self.view_model.selection() {
                    self.service.delete(post.id);
                }
            }
            AppCommand::InsertChar(c) => self.view_model.insert_char(c),
            AppCommand::DeleteCharBack => self.view_model.delete_char_back(),
        }
    }
}
