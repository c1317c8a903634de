//! The playback state machine.
//!
//! A [`PlaybackSession`] owns everything one reader widget needs: the token
//! sequence, the cursor, the play mode, the timing cursor and the frame it is
//! waiting on. Nothing is global, so any number of sessions can run side by
//! side, each with its own surfaces and scheduler.
//!
//! Playback is driven by the host calling [`PlaybackSession::tick`] with a
//! monotonic timestamp in milliseconds whenever a requested frame fires.
//! Punctuation marks never appear as the big word: while playing they only
//! move the context strip and hold the pace, and a seek or load landing on
//! one blanks the big word.

use super::config::Config;
use super::scheduler::{FrameHandle, FrameScheduler, SessionId};
use super::surface::{ContextWindow, Surfaces};
use crate::reading::{effective_wpm, parse_wpm, token_duration_ms, tokenize_text, OrpSpans, Token};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Nothing loaded.
    Idle,
    Playing,
    Paused,
}

impl PlaybackMode {
    pub fn is_playing(self) -> bool {
        self == PlaybackMode::Playing
    }
}

pub struct PlaybackSession<F: FrameScheduler> {
    tokens: Vec<Token>,
    index: usize,
    mode: PlaybackMode,
    /// Timestamp at which the next token is due; unset until the first tick
    /// of a play session.
    next_at: Option<f64>,
    wpm: f64,
    session: SessionId,
    pending_frame: Option<FrameHandle>,
    scheduler: F,
    surfaces: Surfaces,
    config: Config,
}

impl<F: FrameScheduler> PlaybackSession<F> {
    /// Creates an idle session and paints the initial state: blank word,
    /// empty context strip, the configured rate and idle controls.
    pub fn new(surfaces: Surfaces, scheduler: F, config: Config) -> Self {
        let mut session = Self {
            tokens: Vec::new(),
            index: 0,
            mode: PlaybackMode::Idle,
            next_at: None,
            wpm: effective_wpm(config.timing.wpm as f64),
            session: SessionId::default(),
            pending_frame: None,
            scheduler,
            surfaces,
            config,
        };
        session.surfaces.word.clear_word();
        session.surfaces.context.show_context(&ContextWindow::empty());
        session.surfaces.rate.show_rate(session.wpm);
        session.surfaces.controls.show_mode(session.mode);
        session
    }

    /// Replaces the token sequence with `text` and rewinds to its start.
    ///
    /// Playback stops; the session is `Paused` afterwards, or `Idle` if the
    /// text holds no tokens.
    pub fn load(&mut self, text: &str) {
        self.cancel_pending_frame();
        self.tokens = tokenize_text(text);
        self.index = 0;
        self.next_at = None;
        let mode = if self.tokens.is_empty() {
            PlaybackMode::Idle
        } else {
            PlaybackMode::Paused
        };
        self.set_mode(mode);
        self.render_word();
        self.render_context();
        debug!("loaded {} tokens", self.tokens.len());
    }

    /// Starts a new play session. Does nothing when no tokens are loaded.
    pub fn play(&mut self) {
        if self.tokens.is_empty() {
            debug!("play ignored: nothing loaded");
            return;
        }
        self.cancel_pending_frame();
        self.session = self.session.next();
        self.next_at = None;
        self.set_mode(PlaybackMode::Playing);
        self.pending_frame = Some(self.scheduler.request_frame(self.session));
        debug!("play from token {} ({:?})", self.index, self.session);
    }

    /// Stops playback and cancels the pending frame. Idempotent.
    pub fn pause(&mut self) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        self.cancel_pending_frame();
        self.set_mode(PlaybackMode::Paused);
        debug!("paused at token {}", self.index);
    }

    /// Pauses when playing, plays otherwise.
    pub fn toggle(&mut self) {
        if self.mode.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advances playback if the current token's time is up.
    ///
    /// `session` is the id the frame was requested with; ticks from an
    /// earlier play session, or arriving while not playing, are ignored.
    pub fn tick(&mut self, session: SessionId, now_ms: f64) {
        if self.mode != PlaybackMode::Playing || session != self.session {
            trace!("dropping tick for {session:?} (current {:?})", self.session);
            return;
        }
        self.pending_frame = None;

        let due = *self.next_at.get_or_insert(now_ms);
        if now_ms >= due && self.step(due) {
            return;
        }

        self.pending_frame = Some(self.scheduler.request_frame(self.session));
    }

    /// Presents the token under the cursor and moves on. Returns true when
    /// the end of the sequence was reached and playback stopped.
    fn step(&mut self, due: f64) -> bool {
        if self.index >= self.tokens.len() {
            self.set_mode(PlaybackMode::Paused);
            return true;
        }
        let duration = token_duration_ms(&self.tokens[self.index], self.wpm, &self.config.timing);

        self.render_word_if_not_punctuation();
        self.render_context();

        self.next_at = Some(due + duration);
        let last = self.tokens.len() - 1;
        self.index = (self.index + 1).min(last);

        if self.index == last {
            self.render_word_if_not_punctuation();
            self.render_context();
            self.set_mode(PlaybackMode::Paused);
            debug!("reached end of {} tokens", self.tokens.len());
            return true;
        }
        false
    }

    /// Moves the cursor by `delta` tokens, clamped to the sequence bounds.
    /// The play mode is left untouched.
    pub fn seek(&mut self, delta: isize) {
        if self.tokens.is_empty() {
            return;
        }
        let last = self.tokens.len() - 1;
        let target = if delta < 0 {
            self.index.saturating_sub(delta.unsigned_abs())
        } else {
            self.index.saturating_add(delta as usize)
        };
        self.index = target.min(last);
        self.render_word();
        self.render_context();
        trace!("seek {delta:+} -> {}", self.index);
    }

    /// Sets the reading rate; unusable values fall back to the default.
    pub fn set_wpm(&mut self, wpm: f64) {
        self.wpm = effective_wpm(wpm);
        self.surfaces.rate.show_rate(self.wpm);
    }

    /// Sets the reading rate from text typed into a rate control.
    pub fn set_wpm_text(&mut self, input: &str) {
        self.set_wpm(parse_wpm(input));
    }

    /// Nudges the rate by `delta`, clamped to the configured range.
    pub fn adjust_wpm(&mut self, delta: i32) {
        let range = &self.config.timing.wpm_range;
        let adjusted = (self.wpm.round() + delta as f64)
            .clamp(*range.start() as f64, *range.end() as f64);
        self.set_wpm(adjusted);
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `(cursor, token count)`.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.tokens.len())
    }

    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    /// When the next token is due, if a play session has started timing.
    pub fn next_due(&self) -> Option<f64> {
        self.next_at
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        self.surfaces.controls.show_mode(mode);
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn render_word(&mut self) {
        match self.tokens.get(self.index) {
            Some(token) if !token.is_punctuation() => {
                self.surfaces.word.show_word(&OrpSpans::split(&token.text));
            }
            _ => self.surfaces.word.clear_word(),
        }
    }

    fn render_word_if_not_punctuation(&mut self) {
        if let Some(token) = self.tokens.get(self.index) {
            if !token.is_punctuation() {
                self.surfaces.word.show_word(&OrpSpans::split(&token.text));
            }
        }
    }

    fn render_context(&mut self) {
        let window = ContextWindow::around(&self.tokens, self.index, &self.config.context);
        self.surfaces.context.show_context(&window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ContextConfig;
    use crate::engine::scheduler::FrameQueue;
    use crate::engine::surface::{ContextSurface, ControlsSurface, RateSurface, WordSurface};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Painted {
        Word(String, String, String),
        Blank,
        Context(Vec<String>, Option<usize>),
        Rate(f64),
        Mode(PlaybackMode),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Painted>>>);

    impl Recorder {
        fn take(&self) -> Vec<Painted> {
            std::mem::take(&mut *self.0.borrow_mut())
        }

        fn words(&self) -> Vec<Painted> {
            self.take()
                .into_iter()
                .filter(|p| matches!(p, Painted::Word(..) | Painted::Blank))
                .collect()
        }
    }

    impl WordSurface for Recorder {
        fn show_word(&mut self, spans: &OrpSpans<'_>) {
            self.0.borrow_mut().push(Painted::Word(
                spans.prefix.to_string(),
                spans.focus.to_string(),
                spans.suffix.to_string(),
            ));
        }

        fn clear_word(&mut self) {
            self.0.borrow_mut().push(Painted::Blank);
        }
    }

    impl ContextSurface for Recorder {
        fn show_context(&mut self, window: &ContextWindow<'_>) {
            let texts = window.tokens().iter().map(|t| t.text.clone()).collect();
            self.0
                .borrow_mut()
                .push(Painted::Context(texts, window.current()));
        }
    }

    impl RateSurface for Recorder {
        fn show_rate(&mut self, wpm: f64) {
            self.0.borrow_mut().push(Painted::Rate(wpm));
        }
    }

    impl ControlsSurface for Recorder {
        fn show_mode(&mut self, mode: PlaybackMode) {
            self.0.borrow_mut().push(Painted::Mode(mode));
        }
    }

    /// Scheduler whose cancellation silently does nothing.
    #[derive(Default)]
    struct LeakyScheduler {
        requested: Vec<SessionId>,
        next: u64,
    }

    impl FrameScheduler for LeakyScheduler {
        fn request_frame(&mut self, session: SessionId) -> FrameHandle {
            self.requested.push(session);
            self.next += 1;
            FrameHandle(self.next)
        }

        fn cancel_frame(&mut self, _handle: FrameHandle) {}
    }

    fn session() -> (PlaybackSession<FrameQueue>, Recorder) {
        session_with(Config::default())
    }

    fn session_with(config: Config) -> (PlaybackSession<FrameQueue>, Recorder) {
        let recorder = Recorder::default();
        let surfaces = Surfaces::builder()
            .word(recorder.clone())
            .context(recorder.clone())
            .rate(recorder.clone())
            .controls(recorder.clone())
            .build()
            .unwrap();
        let session = PlaybackSession::new(surfaces, FrameQueue::new(), config);
        (session, recorder)
    }

    /// Delivers every pending frame at `now`.
    fn frame(session: &mut PlaybackSession<FrameQueue>, now: f64) {
        for request in session.scheduler_mut().take_pending() {
            session.tick(request.session, now);
        }
    }

    fn word(prefix: &str, focus: &str, suffix: &str) -> Painted {
        Painted::Word(prefix.into(), focus.into(), suffix.into())
    }

    #[test]
    fn test_new_paints_initial_state() {
        let (session, recorder) = session();
        assert_eq!(session.mode(), PlaybackMode::Idle);
        assert_eq!(
            recorder.take(),
            vec![
                Painted::Blank,
                Painted::Context(vec![], None),
                Painted::Rate(300.0),
                Painted::Mode(PlaybackMode::Idle),
            ]
        );
    }

    #[test]
    fn test_load_renders_first_word_and_context() {
        let (mut session, recorder) = session();
        recorder.take();
        session.load("Hello, world!");

        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert_eq!(session.position(), (0, 4));
        assert_eq!(
            recorder.take(),
            vec![
                Painted::Mode(PlaybackMode::Paused),
                word("H", "e", "llo"),
                Painted::Context(
                    vec!["Hello".into(), ",".into(), "world".into(), "!".into()],
                    Some(0)
                ),
            ]
        );
    }

    #[test]
    fn test_load_empty_text() {
        let (mut session, recorder) = session();
        recorder.take();
        session.load("   ");

        assert!(session.is_empty());
        assert_eq!(session.mode(), PlaybackMode::Idle);
        assert_eq!(
            recorder.take(),
            vec![
                Painted::Mode(PlaybackMode::Idle),
                Painted::Blank,
                Painted::Context(vec![], None),
            ]
        );
    }

    #[test]
    fn test_load_starting_with_punctuation_blanks_word() {
        let (mut session, recorder) = session();
        session.load("\"Quoted\"");
        assert_eq!(recorder.words().last(), Some(&Painted::Blank));
    }

    #[test]
    fn test_play_on_empty_sequence_does_nothing() {
        let (mut session, recorder) = session();
        recorder.take();
        session.play();
        assert_eq!(session.mode(), PlaybackMode::Idle);
        assert!(session.scheduler().is_empty());
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_play_requests_one_frame() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        assert_eq!(session.mode(), PlaybackMode::Playing);
        assert_eq!(session.scheduler().len(), 1);
        assert_eq!(session.next_due(), None);
    }

    #[test]
    fn test_first_tick_initializes_timing_cursor_and_shows_word() {
        let (mut session, recorder) = session();
        session.load("one two three");
        session.play();
        recorder.take();

        frame(&mut session, 1_000.0);

        assert_eq!(session.index(), 1);
        assert_eq!(session.next_due(), Some(1_200.0));
        assert_eq!(recorder.words(), vec![word("o", "n", "e")]);
        assert_eq!(session.scheduler().len(), 1);
    }

    #[test]
    fn test_tick_before_due_only_rearms() {
        let (mut session, recorder) = session();
        session.load("one two three");
        session.play();
        frame(&mut session, 0.0);
        recorder.take();

        frame(&mut session, 199.0);

        assert_eq!(session.index(), 1);
        assert_eq!(session.next_due(), Some(200.0));
        assert!(recorder.take().is_empty());
        assert_eq!(session.scheduler().len(), 1);
    }

    #[test]
    fn test_playback_runs_to_end_and_pauses() {
        let (mut session, recorder) = session();
        session.load("one two three");
        session.play();
        recorder.take();

        frame(&mut session, 0.0);
        frame(&mut session, 200.0);

        assert_eq!(session.index(), 2);
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert!(session.scheduler().is_empty());
        let painted = recorder.take();
        assert_eq!(painted.last(), Some(&Painted::Mode(PlaybackMode::Paused)));
        let words: Vec<_> = painted
            .into_iter()
            .filter(|p| matches!(p, Painted::Word(..)))
            .collect();
        assert_eq!(
            words,
            vec![word("o", "n", "e"), word("t", "w", "o"), word("t", "h", "ree")]
        );
    }

    #[test]
    fn test_punctuation_is_skipped_but_paces() {
        let (mut session, recorder) = session();
        session.load("Hello, big world");
        session.play();
        recorder.take();

        frame(&mut session, 0.0); // Hello, due 200
        frame(&mut session, 200.0); // comma, due 200 + 300
        assert_eq!(recorder.words(), vec![word("H", "e", "llo")]);
        assert_eq!(session.next_due(), Some(500.0));
        assert_eq!(session.index(), 2);

        frame(&mut session, 499.0);
        assert_eq!(session.index(), 2);

        frame(&mut session, 500.0);
        assert_eq!(recorder.words(), vec![word("b", "i", "g"), word("w", "o", "rld")]);
        assert_eq!(session.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn test_punctuation_context_still_updates() {
        let (mut session, recorder) = session();
        session.load("Hi, you there");
        session.play();
        frame(&mut session, 0.0);
        recorder.take();

        frame(&mut session, 200.0);

        assert_eq!(
            recorder.take(),
            vec![Painted::Context(
                vec!["Hi".into(), ",".into(), "you".into(), "there".into()],
                Some(1)
            )]
        );
    }

    #[test]
    fn test_last_word_after_punctuation_is_shown() {
        let (mut session, recorder) = session();
        session.load("Hello, world");
        session.play();
        recorder.take();
        frame(&mut session, 0.0);
        frame(&mut session, 200.0);

        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert_eq!(
            recorder.words(),
            vec![word("H", "e", "llo"), word("w", "o", "rld")]
        );
    }

    #[test]
    fn test_trailing_punctuation_is_not_shown() {
        let (mut session, recorder) = session();
        session.load("Stop.");
        session.play();
        recorder.take();

        frame(&mut session, 0.0);

        assert_eq!(session.index(), 1);
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert_eq!(recorder.words(), vec![word("S", "t", "op")]);
    }

    #[test]
    fn test_single_token_plays_once_and_stops() {
        let (mut session, _) = session();
        session.load("solo");
        session.play();
        frame(&mut session, 10.0);
        assert_eq!(session.index(), 0);
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert!(session.scheduler().is_empty());
    }

    #[test]
    fn test_timing_cursor_never_moves_backward() {
        let (mut session, _) = session();
        session.load("a b c d e f g h");
        session.play();

        let mut last_due = f64::MIN;
        let mut now = 0.0;
        while session.mode().is_playing() {
            frame(&mut session, now);
            if let Some(due) = session.next_due() {
                assert!(due >= last_due);
                last_due = due;
            }
            now += 16.0;
        }
        assert_eq!(session.index(), 7);
    }

    #[test]
    fn test_one_token_per_frame_when_behind() {
        let (mut session, _) = session();
        session.load("a b c d e");
        session.play();
        frame(&mut session, 0.0);
        frame(&mut session, 10_000.0);
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_pause_cancels_pending_frame() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        session.pause();
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert!(session.scheduler().is_empty());
    }

    #[test]
    fn test_pause_when_paused_is_idempotent() {
        let (mut session, recorder) = session();
        session.load("one two");
        recorder.take();
        session.pause();
        session.pause();
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert_eq!(session.position(), (0, 2));
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_pause_when_idle_stays_idle() {
        let (mut session, _) = session();
        session.pause();
        assert_eq!(session.mode(), PlaybackMode::Idle);
    }

    #[test]
    fn test_stale_tick_is_ignored_even_if_not_cancelled() {
        let recorder = Recorder::default();
        let surfaces = Surfaces::builder()
            .word(recorder.clone())
            .context(recorder.clone())
            .rate(recorder.clone())
            .controls(recorder.clone())
            .build()
            .unwrap();
        let mut session =
            PlaybackSession::new(surfaces, LeakyScheduler::default(), Config::default());
        session.load("one two three four");

        session.play();
        let stale = session.scheduler().requested[0];
        session.pause();
        session.play();
        let live = session.session_id();
        assert_ne!(stale, live);

        session.tick(stale, 0.0);
        assert_eq!(session.index(), 0);
        assert_eq!(session.next_due(), None);

        session.tick(live, 0.0);
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_tick_while_paused_is_ignored() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        let id = session.session_id();
        session.pause();
        session.tick(id, 0.0);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_play_twice_keeps_single_frame_loop() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        session.play();
        assert_eq!(session.scheduler().len(), 1);
        assert_eq!(session.scheduler().pending()[0].session, session.session_id());
    }

    #[test]
    fn test_play_resets_timing_cursor() {
        let (mut session, _) = session();
        session.load("one two three four");
        session.play();
        frame(&mut session, 0.0);
        session.pause();
        session.play();
        assert_eq!(session.next_due(), None);
        frame(&mut session, 5_000.0);
        assert_eq!(session.next_due(), Some(5_200.0));
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_toggle() {
        let (mut session, _) = session();
        session.load("one two");
        session.toggle();
        assert_eq!(session.mode(), PlaybackMode::Playing);
        session.toggle();
        assert_eq!(session.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn test_load_while_playing_stops_playback() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        frame(&mut session, 0.0);
        session.load("fresh text");
        assert_eq!(session.mode(), PlaybackMode::Paused);
        assert_eq!(session.index(), 0);
        assert!(session.scheduler().is_empty());
    }

    #[test]
    fn test_seek_clamps() {
        let (mut session, _) = session();
        session.load("a b c d");
        session.seek(-100);
        assert_eq!(session.index(), 0);
        session.seek(isize::MAX);
        assert_eq!(session.index(), 3);
        session.seek(isize::MIN);
        assert_eq!(session.index(), 0);
        session.seek(2);
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_seek_zero_keeps_state() {
        let (mut session, _) = session();
        session.load("a b c d");
        session.seek(2);
        session.seek(0);
        assert_eq!(session.position(), (2, 4));
        assert_eq!(session.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn test_seek_on_empty_is_noop() {
        let (mut session, recorder) = session();
        recorder.take();
        session.seek(3);
        assert_eq!(session.index(), 0);
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_seek_onto_punctuation_blanks_word() {
        let (mut session, recorder) = session();
        session.load("Hello, world!");
        recorder.take();
        session.seek(1);
        assert_eq!(recorder.words(), vec![Painted::Blank]);
        session.seek(1);
        assert_eq!(recorder.words(), vec![word("w", "o", "rld")]);
    }

    #[test]
    fn test_seek_keeps_mode() {
        let (mut session, _) = session();
        session.load("a b c d");
        session.play();
        session.seek(1);
        assert_eq!(session.mode(), PlaybackMode::Playing);
    }

    #[test]
    fn test_seek_context_uses_configured_window() {
        let config = Config {
            context: ContextConfig {
                tokens_before: 1,
                tokens_after: 1,
            },
            ..Config::default()
        };
        let (mut session, recorder) = session_with(config);
        session.load("a b c d e");
        recorder.take();
        session.seek(2);
        assert_eq!(
            recorder.take().last(),
            Some(&Painted::Context(
                vec!["b".into(), "c".into(), "d".into()],
                Some(1)
            ))
        );
    }

    #[test]
    fn test_set_wpm_invalid_falls_back() {
        let (mut session, recorder) = session();
        recorder.take();
        session.set_wpm(-10.0);
        assert_eq!(session.wpm(), 300.0);
        session.set_wpm_text("not a number");
        assert_eq!(session.wpm(), 300.0);
        session.set_wpm_text("600");
        assert_eq!(session.wpm(), 600.0);
        assert_eq!(
            recorder.take(),
            vec![Painted::Rate(300.0), Painted::Rate(300.0), Painted::Rate(600.0)]
        );
    }

    #[test]
    fn test_adjust_wpm_clamps_to_range() {
        let (mut session, _) = session();
        session.adjust_wpm(50);
        assert_eq!(session.wpm(), 350.0);
        session.adjust_wpm(10_000);
        assert_eq!(session.wpm(), 1000.0);
        session.adjust_wpm(-10_000);
        assert_eq!(session.wpm(), 50.0);
    }

    #[test]
    fn test_wpm_change_applies_to_next_token() {
        let (mut session, _) = session();
        session.load("one two three");
        session.play();
        session.set_wpm(600.0);
        frame(&mut session, 0.0);
        assert_eq!(session.next_due(), Some(100.0));
    }
}
