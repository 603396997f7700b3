//! Player settings record.
//!
//! Stored as camelCase JSON. Loading is lenient: each stored value is laid
//! over the defaults on its own, and values that do not fit are dropped with
//! a warning instead of discarding the whole record.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use autotris_types::{GameAction, MAX_START_LEVEL, MIN_START_LEVEL};

/// Visual palette selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Space,
    Desert,
    Nature,
    City,
    Sea,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Space,
        Theme::Desert,
        Theme::Nature,
        Theme::City,
        Theme::Sea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Space => "space",
            Theme::Desert => "desert",
            Theme::Nature => "nature",
            Theme::City => "city",
            Theme::Sea => "sea",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
    }

    /// Next theme in cycle order (wraps).
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Key bindings, by key name ("ArrowLeft", "Space", "KeyA", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub move_left: String,
    pub move_right: String,
    pub rotate: String,
    pub soft_drop: String,
    pub hard_drop: String,
    pub pause: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_left: "ArrowLeft".to_string(),
            move_right: "ArrowRight".to_string(),
            rotate: "ArrowUp".to_string(),
            soft_drop: "ArrowDown".to_string(),
            hard_drop: "Space".to_string(),
            pause: "Escape".to_string(),
        }
    }
}

impl Controls {
    /// Action bound to a key name. The pause binding always reports `Pause`;
    /// callers turn it into `Resume` when the game is already paused.
    pub fn action_for(&self, key: &str) -> Option<GameAction> {
        [
            (&self.move_left, GameAction::MoveLeft),
            (&self.move_right, GameAction::MoveRight),
            (&self.rotate, GameAction::Rotate),
            (&self.soft_drop, GameAction::SoftDrop),
            (&self.hard_drop, GameAction::HardDrop),
            (&self.pause, GameAction::Pause),
        ]
        .into_iter()
        .find(|(binding, _)| binding.as_str() == key)
        .map(|(_, action)| action)
    }

    /// Key name bound to an action, if any.
    pub fn binding_for(&self, action: GameAction) -> Option<&str> {
        let binding = match action {
            GameAction::MoveLeft => &self.move_left,
            GameAction::MoveRight => &self.move_right,
            GameAction::Rotate => &self.rotate,
            GameAction::SoftDrop => &self.soft_drop,
            GameAction::HardDrop => &self.hard_drop,
            GameAction::Pause | GameAction::Resume => &self.pause,
            GameAction::Tick => return None,
        };
        Some(binding)
    }
}

/// Autoplayer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub enabled: bool,
    /// Milliseconds between autoplayer actions
    pub move_delay: u64,
    pub lines_cleared_weight: f64,
    pub holes_weight: f64,
    pub height_weight: f64,
    pub bumpiness_weight: f64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            move_delay: 300,
            lines_cleared_weight: 0.8,
            holes_weight: 0.7,
            height_weight: 0.3,
            bumpiness_weight: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub start_level: u32,
    pub show_ghost_piece: bool,
    /// Gravity base speed multiplier
    pub drop_speed: f64,
    pub enable_shadow: bool,
    pub theme: Theme,
    /// 0.0 - 1.0; carried for front-ends with audio
    pub volume: f64,
    pub controls: Controls,
    pub ai: AiSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            start_level: 1,
            show_ghost_piece: true,
            drop_speed: 1.0,
            enable_shadow: true,
            theme: Theme::Space,
            volume: 0.5,
            controls: Controls::default(),
            ai: AiSettings::default(),
        }
    }
}

impl GameSettings {
    /// Parse stored JSON leniently over the defaults.
    pub fn from_json_lenient(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(stored) => Self::default().merged_with(&stored),
            Err(err) => {
                warn!("stored settings are not valid JSON, using defaults: {}", err);
                Self::default()
            }
        }
    }

    /// Lay the values of `patch` (any subset of the record) over `self`.
    ///
    /// Unknown keys are ignored; values of the wrong type are skipped.
    pub fn merged_with(&self, patch: &Value) -> Self {
        let mut merged = match serde_json::to_value(self) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to encode settings: {}", err);
                return self.clone();
            }
        };

        if patch.is_object() {
            overlay(&mut merged, patch, "");
        } else {
            warn!("ignoring settings patch that is not an object");
        }

        serde_json::from_value::<GameSettings>(merged)
            .map(GameSettings::normalized)
            .unwrap_or_else(|err| {
                warn!("merged settings failed to decode, keeping previous: {}", err);
                self.clone()
            })
    }

    /// Clamp values into their documented ranges.
    pub fn normalized(mut self) -> Self {
        self.start_level = self.start_level.clamp(MIN_START_LEVEL, MAX_START_LEVEL);
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            0.5
        };
        if !self.drop_speed.is_finite() || self.drop_speed <= 0.0 {
            self.drop_speed = 1.0;
        }
        self
    }
}

fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn overlay(target: &mut Value, patch: &Value, path: &str) {
    let Some(fields) = patch.as_object() else {
        return;
    };

    for (key, value) in fields {
        let pointer = format!("{}/{}", path, escape_pointer(key));
        let Some(current) = target.pointer(&pointer) else {
            debug!("ignoring unknown settings key {}", pointer);
            continue;
        };

        if current.is_object() && value.is_object() {
            overlay(target, value, &pointer);
            continue;
        }

        let mut candidate = target.clone();
        if let Some(slot) = candidate.pointer_mut(&pointer) {
            *slot = value.clone();
        }
        match serde_json::from_value::<GameSettings>(candidate.clone()) {
            Ok(_) => *target = candidate,
            Err(err) => warn!("ignoring stored setting {}: {}", pointer, err),
        }
    }
}
