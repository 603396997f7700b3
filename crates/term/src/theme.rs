//! Color palettes, one per settings theme.

use autotris_storage::Theme;

use crate::fb::Rgb;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub board_bg: Rgb,
    pub grid_dot: Rgb,
    pub border: Rgb,
    pub label: Rgb,
    pub text: Rgb,
    pub ghost: Rgb,
    /// Indexed by `PieceKind as usize` (I, O, T, S, Z, J, L).
    pub pieces: [Rgb; 7],
}

impl Palette {
    pub fn piece(&self, kind: PieceKind) -> Rgb {
        self.pieces[kind as usize]
    }
}

const SPACE: Palette = Palette {
    board_bg: Rgb::new(14, 14, 32),
    grid_dot: Rgb::new(60, 60, 96),
    border: Rgb::new(150, 150, 220),
    label: Rgb::new(230, 230, 255),
    text: Rgb::new(190, 190, 220),
    ghost: Rgb::new(130, 130, 170),
    pieces: [
        Rgb::new(80, 220, 220),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(220, 80, 80),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
    ],
};

const DESERT: Palette = Palette {
    board_bg: Rgb::new(48, 34, 20),
    grid_dot: Rgb::new(110, 84, 54),
    border: Rgb::new(222, 184, 135),
    label: Rgb::new(250, 235, 205),
    text: Rgb::new(230, 210, 170),
    ghost: Rgb::new(170, 140, 100),
    pieces: [
        Rgb::new(244, 164, 96),
        Rgb::new(238, 214, 120),
        Rgb::new(205, 133, 63),
        Rgb::new(189, 183, 107),
        Rgb::new(178, 34, 34),
        Rgb::new(160, 82, 45),
        Rgb::new(255, 140, 0),
    ],
};

const NATURE: Palette = Palette {
    board_bg: Rgb::new(16, 36, 20),
    grid_dot: Rgb::new(56, 90, 60),
    border: Rgb::new(140, 200, 140),
    label: Rgb::new(220, 245, 220),
    text: Rgb::new(180, 220, 180),
    ghost: Rgb::new(110, 160, 110),
    pieces: [
        Rgb::new(120, 200, 180),
        Rgb::new(230, 210, 90),
        Rgb::new(170, 120, 200),
        Rgb::new(90, 190, 80),
        Rgb::new(200, 90, 70),
        Rgb::new(70, 130, 110),
        Rgb::new(210, 150, 60),
    ],
};

const CITY: Palette = Palette {
    board_bg: Rgb::new(24, 24, 28),
    grid_dot: Rgb::new(70, 70, 78),
    border: Rgb::new(200, 200, 210),
    label: Rgb::new(245, 245, 245),
    text: Rgb::new(200, 200, 205),
    ghost: Rgb::new(140, 140, 150),
    pieces: [
        Rgb::new(0, 200, 255),
        Rgb::new(255, 230, 0),
        Rgb::new(255, 0, 200),
        Rgb::new(0, 255, 120),
        Rgb::new(255, 50, 50),
        Rgb::new(60, 90, 255),
        Rgb::new(255, 130, 0),
    ],
};

const SEA: Palette = Palette {
    board_bg: Rgb::new(8, 28, 48),
    grid_dot: Rgb::new(40, 80, 110),
    border: Rgb::new(120, 190, 230),
    label: Rgb::new(220, 240, 255),
    text: Rgb::new(170, 210, 235),
    ghost: Rgb::new(100, 150, 190),
    pieces: [
        Rgb::new(64, 224, 208),
        Rgb::new(240, 230, 140),
        Rgb::new(147, 112, 219),
        Rgb::new(60, 179, 113),
        Rgb::new(250, 128, 114),
        Rgb::new(30, 144, 255),
        Rgb::new(255, 160, 122),
    ],
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Space => &SPACE,
        Theme::Desert => &DESERT,
        Theme::Nature => &NATURE,
        Theme::City => &CITY,
        Theme::Sea => &SEA,
    }
}
