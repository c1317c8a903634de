use crate::app::{App, AppMode};
use crate::ui::keymap::{key_to_event, paste_to_event};
use crate::ui::reader::view::{
    render_context_strip, render_editor, render_focus_marker, render_key_hints,
    render_progress_bar, render_status_line, render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crossterm::event::{self, Event};
use log::info;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Display refresh the playback frames are tied to.
const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    started: Instant,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            started: Instant::now(),
            _guard: guard,
        })
    }

    /// Runs until the app quits: draw, wait up to one frame for input, then
    /// deliver the frames the playback session requested.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        info!("terminal event loop started");
        loop {
            if app.mode() == AppMode::Quit {
                info!("terminal event loop finished");
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => app.handle_event(key_to_event(app.mode(), key)),
                    Event::Paste(text) => app.handle_event(paste_to_event(app.mode(), text)),
                    _ => {}
                }
            }

            app.run_frames(self.now_ms());
        }
    }

    /// Milliseconds since the manager started, as a frame timestamp.
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(colors::background())),
                area,
            );

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            match app.mode() {
                AppMode::Editing => draw_editor(frame, chunks[0], app),
                _ => draw_reader(frame, chunks[0], app),
            }

            let state = app.render_state();
            let progress = app.session().position();
            frame.render_widget(
                render_status_line(app.mode(), state.playback, state.wpm, progress, app.status()),
                chunks[1],
            );
            frame.render_widget(render_key_hints(app.mode()), chunks[2]);
        })?;

        Ok(())
    }
}

fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(render_editor(app.input().as_str()), area);
}

fn draw_reader(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let state = app.render_state();
    let width = area.width;

    frame.render_widget(render_focus_marker(width), rows[1]);
    frame.render_widget(render_word_display(state.word.as_ref(), width), rows[2]);
    frame.render_widget(render_focus_marker(width), rows[3]);
    frame.render_widget(render_context_strip(&state.context), rows[5]);

    let bar_width = (width as usize / 2).max(1);
    frame.render_widget(
        render_progress_bar(app.session().position(), bar_width),
        rows[7],
    );
}
