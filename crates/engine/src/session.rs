//! Session - the single dispatch path for players, the autopilot and gravity.
//!
//! The session owns the live `GameState` and the settings it was started with.
//! Drivers feed it requests (keys, menu commands) and call [`Session::advance`]
//! with the elapsed wall time; the session runs gravity ticks and autopilot
//! actions on their own cadences and reports the end of a game exactly once.
//!
//! Nothing here sleeps or spawns: the caller owns the clock.

use log::{debug, info};

use autotris_core::{tick_interval_ms, GameSnapshot, GameState, PieceBag};
use autotris_storage::GameSettings;
use autotris_types::GameAction;

use crate::autopilot::Autopilot;
use crate::planner::AiWeights;

/// Commands accepted by [`Session::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Action(GameAction),
    /// Pause when playing, resume when paused.
    TogglePause,
    Restart(GameSettings),
    NewGame(GameSettings),
    ToggleAi(bool),
}

/// Notifications for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    GameOver { score: u32, level: u32, lines: u32 },
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    settings: GameSettings,
    autopilot: Autopilot,
    gravity_elapsed_ms: u64,
    ai_elapsed_ms: u64,
    game_over_reported: bool,
}

impl Session {
    pub fn new(settings: GameSettings, seed: u32) -> Self {
        let state = GameState::new(settings.start_level, PieceBag::new(seed));
        let autopilot = Autopilot::new(AiWeights::from(&settings.ai));
        info!(
            "new session: level {}, seed {}, ai {}",
            settings.start_level, seed, settings.ai.enabled
        );

        Self {
            state,
            settings,
            autopilot,
            gravity_elapsed_ms: 0,
            ai_elapsed_ms: 0,
            game_over_reported: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn ai_enabled(&self) -> bool {
        self.settings.ai.enabled
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(self.settings.show_ghost_piece)
    }

    /// Current gravity interval for the state's level.
    pub fn tick_interval_ms(&self) -> u64 {
        tick_interval_ms(self.state.level(), self.settings.drop_speed)
    }

    /// Apply one request. Returns the game-over event if this request ended the game.
    pub fn dispatch(&mut self, request: Request) -> Option<SessionEvent> {
        match request {
            Request::Action(action) => {
                self.state.apply_action(action);
            }
            Request::TogglePause if self.state.game_over() => {}
            Request::TogglePause => {
                let action = if self.state.paused() {
                    GameAction::Resume
                } else {
                    GameAction::Pause
                };
                self.state.apply_action(action);
            }
            Request::Restart(settings) | Request::NewGame(settings) => {
                self.reset(settings);
            }
            Request::ToggleAi(enabled) => {
                info!("autopilot {}", if enabled { "on" } else { "off" });
                self.settings.ai.enabled = enabled;
                self.autopilot.reset();
                self.ai_elapsed_ms = 0;
            }
        }
        self.check_game_over()
    }

    /// Run gravity and the autopilot for `elapsed_ms` of wall time.
    ///
    /// Time spent paused or after game over is discarded.
    pub fn advance(&mut self, elapsed_ms: u64) -> Option<SessionEvent> {
        if !self.state.playable() {
            return None;
        }

        self.gravity_elapsed_ms += elapsed_ms;
        loop {
            let interval = self.tick_interval_ms();
            if self.gravity_elapsed_ms < interval || !self.state.playable() {
                break;
            }
            self.gravity_elapsed_ms -= interval;
            self.state.apply_action(GameAction::Tick);
        }

        if self.settings.ai.enabled {
            let delay = self.settings.ai.move_delay.max(1);
            self.ai_elapsed_ms += elapsed_ms;
            while self.ai_elapsed_ms >= delay && self.state.playable() {
                self.ai_elapsed_ms -= delay;
                let action = self.autopilot.next_action(&self.state);
                self.state.apply_action(action);
            }
        }

        self.check_game_over()
    }

    /// Replace the settings without restarting the game.
    ///
    /// Display and autopilot settings take effect immediately; the start level
    /// applies from the next restart.
    pub fn apply_settings(&mut self, settings: GameSettings) {
        if settings.ai != self.settings.ai {
            self.autopilot.set_weights(AiWeights::from(&settings.ai));
            self.ai_elapsed_ms = 0;
        }
        self.settings = settings;
    }

    fn reset(&mut self, settings: GameSettings) {
        self.state = self.state.restart(settings.start_level);
        self.autopilot.set_weights(AiWeights::from(&settings.ai));
        self.settings = settings;
        self.gravity_elapsed_ms = 0;
        self.ai_elapsed_ms = 0;
        self.game_over_reported = false;
    }

    fn check_game_over(&mut self) -> Option<SessionEvent> {
        if !self.state.game_over() || self.game_over_reported {
            return None;
        }
        self.game_over_reported = true;
        debug!("reporting game over");
        Some(SessionEvent::GameOver {
            score: self.state.score(),
            level: self.state.level(),
            lines: self.state.lines(),
        })
    }
}
