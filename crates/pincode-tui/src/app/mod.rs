//! Demo host: drives the pad through choose, confirm and enter

pub mod config;
pub mod events;
mod state;

pub use config::{ConfigError, DemoConfig};
pub use events::{Event, EventHandler};
pub use state::{HostState, Screen};

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use pincode_core::{Digit, Key, Mode, PadEvent, PadProps, PadTexts, PinPad, Status};
use ratatui::prelude::*;

use crate::ui::{self, layout::PadLayout, renderers::Renderers, style::ResolvedStyle, Theme};

/// Redraw interval while something is moving
const FRAME: Duration = Duration::from_millis(16);

/// How long a key stays highlighted after a keyboard press
const UNDERLAY: Duration = Duration::from_millis(120);

/// What woke the run loop
enum Wake {
    Input(Option<io::Result<TermEvent>>),
    Host(Option<Event>),
    Timer,
}

/// Main application struct
pub struct App {
    /// Host state
    pub state: HostState,

    pub config: DemoConfig,
    pub theme: Theme,
    pub style: ResolvedStyle,

    /// Custom renderers handed to the pad
    pub renderers: Renderers,

    /// Whether the app should quit
    pub should_quit: bool,

    events: EventHandler,
    /// Pad layout from the last frame, for mouse hit-testing
    layout: Option<PadLayout>,
    /// Key held by the mouse
    pressed: Option<Key>,
    /// When a keyboard highlight ends
    underlay_until: Option<Instant>,
    /// Bells owed to the terminal
    bells: usize,
}

impl App {
    /// Create the host on the choose screen
    pub fn new(config: DemoConfig) -> Result<Self> {
        config.validate()?;
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };
        let style = ResolvedStyle::resolve(&config.style, &theme);
        let pad = PinPad::new(
            PadProps {
                mode: Mode::Choose,
                password_length: config.password_length,
                status: Status::Initial,
                texts: PadTexts::from(&config.texts.choose),
            },
            Instant::now(),
        )?;

        Ok(Self {
            state: HostState::new(pad),
            config,
            theme,
            style,
            renderers: Renderers::default(),
            should_quit: false,
            events: EventHandler::new(),
            layout: None,
            pressed: None,
            underlay_until: None,
            bells: 0,
        })
    }

    /// Replace the built-in renderers
    pub fn with_renderers(mut self, renderers: Renderers) -> Self {
        self.renderers = renderers;
        self
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut input = EventStream::new();

        while !self.should_quit {
            let now = Instant::now();
            self.update(now)?;
            self.ring_bells()?;

            let mut layout = None;
            terminal.draw(|frame| layout = ui::render(frame, self, now))?;
            self.layout = layout;

            let timeout = self.poll_timeout(Instant::now());
            let wake = tokio::select! {
                event = input.next() => Wake::Input(event),
                event = self.events.recv() => Wake::Host(event),
                _ = tokio::time::sleep(timeout) => Wake::Timer,
            };

            match wake {
                Wake::Input(Some(event)) => self.handle_terminal_event(event?, Instant::now()),
                Wake::Input(None) => self.should_quit = true,
                Wake::Host(Some(event)) => self.handle_event(event, Instant::now())?,
                Wake::Host(None) | Wake::Timer => {}
            }
        }

        self.state.pad.unmount();
        Ok(())
    }

    /// Advance timers and handle everything that came due
    pub fn update(&mut self, now: Instant) -> Result<()> {
        if self.underlay_until.is_some_and(|until| now >= until) {
            self.underlay_until = None;
            self.state.pad.hide_underlay();
        }

        self.state.pad.tick(now);
        for event in self.state.pad.take_events() {
            match event {
                PadEvent::Completed(code) => self.on_completed(code, now)?,
                PadEvent::Vibrate(duration) => {
                    tracing::debug!(?duration, "Vibrate");
                    self.bells += 1;
                }
            }
        }

        while let Some(event) = self.events.try_recv() {
            self.handle_event(event, now)?;
        }
        Ok(())
    }

    /// How long the loop may sleep before the next redraw
    fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(self.config.tick_rate_ms);
        let base = if self.state.pad.is_animating(now) || self.underlay_until.is_some() {
            FRAME
        } else {
            idle
        };
        match self.state.pad.next_deadline() {
            Some(deadline) => base.min(deadline.saturating_duration_since(now)),
            None => base,
        }
    }

    fn ring_bells(&mut self) -> io::Result<()> {
        if self.bells == 0 {
            return Ok(());
        }
        self.bells = 0;
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }

    fn handle_terminal_event(&mut self, event: TermEvent, now: Instant) {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            TermEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global quit handler
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if !self.state.screen.shows_pad() {
            if key.code == KeyCode::Char('r') {
                self.lock(now);
            }
            return;
        }

        let pressed = match key.code {
            KeyCode::Char(c) => Digit::from_char(c).ok().map(Key::Digit),
            KeyCode::Backspace | KeyCode::Delete => Some(Key::Delete),
            _ => None,
        };
        if let Some(key) = pressed {
            if self.press(key, now) {
                self.state.pad.show_underlay(key);
                self.underlay_until = Some(now + UNDERLAY);
            }
        }
    }

    /// Handle mouse events against the last drawn layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if !self.state.screen.shows_pad() {
            return;
        }
        let hit = self
            .layout
            .as_ref()
            .and_then(|layout| layout.key_at(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(key) = hit {
                    self.pressed = Some(key);
                    self.underlay_until = None;
                    self.state.pad.show_underlay(key);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(key) = self.pressed.take() {
                    self.state.pad.hide_underlay();
                    if hit == Some(key) {
                        self.press(key, now);
                    }
                }
            }
            _ => {}
        }
    }

    fn press(&mut self, key: Key, now: Instant) -> bool {
        match key {
            Key::Digit(digit) => self.state.pad.press_digit(digit, now),
            Key::Delete => self.state.pad.press_delete(now),
        }
    }

    /// Handle a host event
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        match event {
            Event::Verified { accepted } => self.on_verified(accepted, now),
        }
    }

    fn on_completed(&mut self, code: String, now: Instant) -> Result<()> {
        match self.state.screen {
            Screen::Choose => {
                tracing::info!("PIN chosen, asking for confirmation");
                self.state.chosen_pin = Some(code);
                self.state.clear_status();
                self.switch_to(Screen::Confirm, now)?;
            }
            Screen::Confirm if code.is_empty() => {
                tracing::info!("Confirmation did not match, starting over");
                self.state.chosen_pin = None;
                self.state.set_status("Entries did not match, choose a new PIN");
                self.switch_to(Screen::Choose, now)?;
            }
            Screen::Confirm => {
                tracing::info!("PIN confirmed");
                self.state.chosen_pin = Some(code);
                self.state.set_status("PIN set, enter it to unlock");
                self.switch_to(Screen::Enter, now)?;
            }
            Screen::Enter => {
                // A repeated failure has to be a fresh transition
                self.state.pad.update_status(Status::Initial, now);
                self.state.verifying = true;
                self.state.set_status("Checking…");
                events::spawn_verification(
                    self.events.sender(),
                    code,
                    self.state.chosen_pin.clone(),
                    Duration::from_millis(self.config.verify_latency_ms),
                );
            }
            Screen::Unlocked => {}
        }
        Ok(())
    }

    fn on_verified(&mut self, accepted: bool, now: Instant) -> Result<()> {
        if !self.state.verifying || self.state.screen != Screen::Enter {
            tracing::debug!("Dropping stale verification result");
            return Ok(());
        }
        self.state.verifying = false;

        if accepted {
            tracing::info!(failed_attempts = self.state.failed_attempts, "Unlocked");
            self.state.pad.update_status(Status::Success, now);
            self.state.clear_status();
            self.switch_to(Screen::Unlocked, now)?;
        } else {
            self.state.failed_attempts += 1;
            tracing::info!(failed_attempts = self.state.failed_attempts, "PIN rejected");
            self.state.pad.update_status(Status::Failure, now);
            self.state.set_status(match self.state.failed_attempts {
                1 => "1 failed attempt".to_string(),
                n => format!("{} failed attempts", n),
            });
        }
        Ok(())
    }

    /// Back to the enter screen after an unlock
    fn lock(&mut self, now: Instant) {
        self.state.failed_attempts = 0;
        if let Err(e) = self.switch_to(Screen::Enter, now) {
            tracing::warn!("Could not lock: {}", e);
        }
    }

    fn switch_to(&mut self, screen: Screen, now: Instant) -> Result<()> {
        tracing::debug!(from = ?self.state.screen, to = ?screen, "Switching screen");
        self.state.pad.unmount();
        self.pressed = None;
        self.underlay_until = None;
        self.layout = None;

        let texts = &self.config.texts;
        let (mode, texts) = match screen {
            Screen::Choose => (Mode::Choose, &texts.choose),
            Screen::Confirm => (
                Mode::confirm(self.state.chosen_pin.clone().unwrap_or_default()),
                &texts.confirm,
            ),
            Screen::Enter => (Mode::Enter, &texts.enter),
            Screen::Unlocked => {
                self.state.screen = screen;
                return Ok(());
            }
        };

        self.state.pad = PinPad::new(
            PadProps {
                mode,
                password_length: self.config.password_length,
                status: Status::Initial,
                texts: PadTexts::from(texts),
            },
            now,
        )?;
        self.state.screen = screen;
        Ok(())
    }
}
