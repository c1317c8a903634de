use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{render_state_surfaces, RenderState, SharedRenderState};
use super::text_input::TextInput;
use crate::engine::{Config, ConfigError, FrameQueue, PlaybackSession};
use crate::input::clipboard;
use log::{debug, warn};
use std::cell::Ref;

pub struct App {
    mode: AppMode,
    session: PlaybackSession<FrameQueue>,
    view: SharedRenderState,
    input: TextInput,
    status: Option<String>,
}

impl App {
    /// Starts in the text area with nothing loaded.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let view = SharedRenderState::default();
        let surfaces = render_state_surfaces(&view)?;
        Ok(Self {
            mode: AppMode::Editing,
            session: PlaybackSession::new(surfaces, FrameQueue::new(), config),
            view,
            input: TextInput::new(),
            status: None,
        })
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn session(&self) -> &PlaybackSession<FrameQueue> {
        &self.session
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn render_state(&self) -> Ref<'_, RenderState> {
        self.view.borrow()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TogglePlayback => self.session.toggle(),
            AppEvent::Seek(delta) => self.session.seek(delta),
            AppEvent::Faster => {
                let step = self.session.config().timing.wpm_step as i32;
                self.session.adjust_wpm(step);
            }
            AppEvent::Slower => {
                let step = self.session.config().timing.wpm_step as i32;
                self.session.adjust_wpm(-step);
            }
            AppEvent::Edit => {
                self.session.pause();
                self.mode = AppMode::Editing;
            }
            AppEvent::Load => {
                self.session.load(self.input.as_str());
                self.status = if self.session.is_empty() {
                    Some("Nothing to read".to_string())
                } else {
                    None
                };
                self.mode = AppMode::Reading;
            }
            AppEvent::InsertChar(c) => self.input.insert_char(c),
            AppEvent::InsertText(text) => self.input.insert_str(&text),
            AppEvent::Backspace => self.input.backspace(),
            AppEvent::ClearInput => self.input.clear(),
            AppEvent::PasteClipboard => match clipboard::read() {
                Ok(text) => self.input.insert_str(&text),
                Err(err) => {
                    warn!("paste failed: {err}");
                    self.status = Some(err.to_string());
                }
            },
            AppEvent::Warning(message) => self.status = Some(message),
            AppEvent::Quit => {
                self.session.pause();
                self.mode = AppMode::Quit;
                debug!("quit requested");
            }
            AppEvent::None => {}
        }
    }

    /// Delivers the frames the session asked for since the last call.
    pub fn run_frames(&mut self, now_ms: f64) {
        for request in self.session.scheduler_mut().take_pending() {
            self.session.tick(request.session, now_ms);
        }
    }
}
