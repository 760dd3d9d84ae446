//! Pure cell-to-pixel mapping for the presentation layer.
//!
//! The engine draws nothing itself. A front end reads the current grid once
//! per frame, between completed steps, & asks a [`Palette`] for each cell's
//! colour, or fills a reusable pixel buffer with
//! [`render_into`](Palette::render_into).

use crate::{Automaton, Cell};

/// An RGBA colour with 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// How cell values map to pixel colours.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub struct Palette {
    /// The colour of a living cell.
    pub live: Rgba,
    /// The colour of a fully dead cell.
    pub dead: Rgba,
    /// Whether fading cells are drawn as the live colour with its alpha
    /// scaled by the remaining intensity. When false, anything not alive
    /// snaps straight to the dead colour.
    pub fade: bool,
}

impl Default for Palette {
    /// White cells on black, fading enabled.
    fn default() -> Self {
        Self {
            live: Rgba::WHITE,
            dead: Rgba::BLACK,
            fade: true,
        }
    }
}

impl Palette {
    /// The colour for a single cell value.
    pub fn colour(&self, cell: Cell) -> Rgba {
        if cell.is_alive() {
            self.live
        } else if self.fade {
            Rgba {
                a: cell.value(),
                ..self.live
            }
        } else {
            self.dead
        }
    }

    /// Fills `pixels` with one colour per cell, row-major, one pixel per
    /// cell. The buffer is cleared first so its allocation can be reused
    /// across frames.
    pub fn render_into(&self, automaton: &Automaton, pixels: &mut Vec<Rgba>) {
        pixels.clear();
        pixels.extend(automaton.cells().map(|cell| self.colour(cell)));
    }
}
