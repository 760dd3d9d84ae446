//! A Conway-style cellular automaton on a fixed-size toroidal grid, with
//! configurable birth/survival rules & a fading afterglow on dead cells.
//!
//! The [`Automaton`] owns all simulation state. A front end drives it by
//! calling [`Automaton::step`] once per frame, forwarding user input as
//! [`Intent`]s & reading the current grid back out for rendering:
//!
//! ```
//! use gol_fade::{Automaton, Config, Intent, Palette};
//!
//! let mut automaton = Automaton::new(64, 48, Config::default());
//! automaton.apply(Intent::ToggleRunning);
//! automaton.step();
//! assert_eq!(automaton.generation(), 1);
//!
//! let mut pixels = Vec::new();
//! Palette::default().render_into(&automaton, &mut pixels);
//! assert_eq!(pixels.len(), 64 * 48);
//! ```

mod automaton;
mod cell;
mod config;
mod intent;
mod position;
mod render;
mod rule;

pub use automaton::Automaton;
pub use cell::Cell;
pub use config::{Config, ConfigError, SeedMode};
pub use intent::Intent;
pub use position::GridPosition;
pub use render::{Palette, Rgba};
pub use rule::{RuleParseError, Ruleset};
