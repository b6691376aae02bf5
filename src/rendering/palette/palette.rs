//! Ball color palette, one entry per cradle ball in creation order.

use bevy::prelude::*;

pub const CRADLE_COLORS: [Color; 7] = [
    Color::srgb(1.0, 0.0, 0.0),             // red
    Color::srgb(0.0, 1.0, 0.0),             // green
    Color::srgb(0.0, 0.0, 1.0),             // blue
    Color::srgb(1.0, 1.0, 0.0),             // yellow
    Color::srgb(1.0, 0.0, 1.0),             // magenta
    Color::srgb(0.0, 1.0, 1.0),             // cyan
    Color::srgb(1.0, 165.0 / 255.0, 0.0),   // orange (0xffa500)
];

/// Number of balls in the cradle; one per palette entry.
pub const BALL_COUNT: usize = CRADLE_COLORS.len();

#[inline]
pub fn color_for_index(i: usize) -> Color {
    CRADLE_COLORS[i % CRADLE_COLORS.len()]
}
