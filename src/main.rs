//! Terminal game runner (default binary).
//!
//! Crossterm input, the framebuffer renderer, and a `Session` driven by the
//! wall clock. Settings and high scores live under `AUTOTRIS_DATA_DIR`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{info, warn};

use autotris::engine::{Request, Session, SessionEvent};
use autotris::input::{InputCommand, KeyMap};
use autotris::storage::{FileStore, GameSettings, HighScore, Storage, StorageConfig};
use autotris::term::{FrameBuffer, GameView, TerminalRenderer, ViewOptions, Viewport};

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    // The alternate screen owns stdout; only log when explicitly asked to.
    if std::env::var_os("RUST_LOG").is_some() {
        let _ = env_logger::Builder::from_default_env().try_init();
    }

    let config = StorageConfig::from_env();
    let mut storage = Storage::new(FileStore::new(&config.data_dir));
    let settings = storage.load_settings();
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("data dir {}, seed {}", config.data_dir.display(), seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut storage, settings, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct App {
    session: Session,
    keymap: KeyMap,
    high_scores: Vec<HighScore>,
}

impl App {
    fn view_options(&self) -> ViewOptions {
        let settings = self.session.settings();
        ViewOptions {
            theme: settings.theme,
            shadow: settings.enable_shadow,
            ai_enabled: self.session.ai_enabled(),
            best_score: self.high_scores.first().map(|entry| entry.score),
        }
    }

    fn record(&mut self, storage: &mut Storage<FileStore>, event: Option<SessionEvent>) {
        let Some(SessionEvent::GameOver { score, level, lines }) = event else {
            return;
        };
        match storage.save_high_score(score, level, lines) {
            Ok(table) => self.high_scores = table,
            Err(err) => warn!("failed to save high score: {}", err),
        }
    }

    /// Change settings in place and persist them.
    fn update_settings(
        &mut self,
        storage: &mut Storage<FileStore>,
        change: impl FnOnce(&mut GameSettings),
    ) {
        let mut settings = self.session.settings().clone();
        change(&mut settings);
        if let Err(err) = storage.save_settings(&settings) {
            warn!("failed to save settings: {}", err);
        }
        self.session.apply_settings(settings);
    }

    /// Returns false when the player quits.
    fn handle(&mut self, storage: &mut Storage<FileStore>, command: InputCommand) -> bool {
        let event = match command {
            InputCommand::Quit => return false,
            InputCommand::Action(action) => self.session.dispatch(Request::Action(action)),
            InputCommand::TogglePause => self.session.dispatch(Request::TogglePause),
            InputCommand::ToggleAi => {
                let enabled = !self.session.ai_enabled();
                self.session.dispatch(Request::ToggleAi(enabled))
            }
            InputCommand::Restart => {
                let settings = self.session.settings().clone();
                self.session.dispatch(Request::Restart(settings))
            }
            InputCommand::NewGame => {
                let settings = storage.load_settings();
                self.keymap.set_controls(settings.controls.clone());
                self.session.dispatch(Request::NewGame(settings))
            }
            InputCommand::CycleTheme => {
                self.update_settings(storage, |s| s.theme = s.theme.next());
                None
            }
            InputCommand::ToggleGhost => {
                self.update_settings(storage, |s| s.show_ghost_piece = !s.show_ghost_piece);
                None
            }
        };
        self.record(storage, event);
        true
    }
}

fn run(
    term: &mut TerminalRenderer,
    storage: &mut Storage<FileStore>,
    settings: GameSettings,
    seed: u32,
) -> Result<()> {
    let mut app = App {
        keymap: KeyMap::new(settings.controls.clone()),
        session: Session::new(settings, seed),
        high_scores: storage.load_high_scores(),
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &app.session.snapshot(),
            &app.view_options(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = app.keymap.resolve(key) {
                        if !app.handle(storage, command) {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance gravity and the autopilot by the real elapsed time.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let event = app.session.advance(elapsed.as_millis() as u64);
            app.record(storage, event);
        }
    }
}
