/// The intensity of a single cell on the grid.
///
/// A cell at full intensity (255) is alive. A cell at 0 is fully dead.
/// Anything in between is a dead cell that is still fading out; the rules
/// treat it as dead, only the renderer cares about its remaining intensity.
#[derive(
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Clone,
    Copy,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Cell(pub(crate) u8);

impl Cell {
    /// A cell at full intensity.
    pub const ALIVE: Cell = Cell(255);
    /// A cell with no remaining intensity.
    pub const DEAD: Cell = Cell(0);

    /// Whether the rules treat this cell as alive.
    ///
    /// Only full intensity counts; fading cells are dead to the rules.
    pub fn is_alive(self) -> bool {
        self.0 == 255
    }

    /// The raw intensity of this cell.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The intensity as a fraction of full brightness.
    pub fn brightness(self) -> f32 {
        self.0 as f32 / 255.0
    }

    /// The toggle marker written into the buffer when a cell is born or
    /// begins dying.
    ///
    /// A value below 255 flips up to 255, a value already at 255 flips down
    /// to 254. The 254 marker means a cell that died this generation spends
    /// one frame at near-full brightness before fading takes over, and a
    /// fading cell that is reborn always lands back on exactly 255.
    pub(crate) fn flip(self) -> Cell {
        if self.0 < 255 { Cell(255) } else { Cell(254) }
    }

    /// Fades towards fully dead by `amount`, stopping at 0.
    pub(crate) fn fade(self, amount: u8) -> Cell {
        Cell(self.0.saturating_sub(amount))
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Cell(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Only full intensity counts as alive.
    fn alive_at_full_intensity_only() {
        assert!(Cell::ALIVE.is_alive());
        assert!(!Cell::DEAD.is_alive());
        assert!(!Cell(254).is_alive());
        assert!(!Cell(1).is_alive());
    }

    #[test]
    /// The flip alternates between 255 & 254.
    fn flip_alternates() {
        assert_eq!(Cell::DEAD.flip(), Cell::ALIVE);
        assert_eq!(Cell(200).flip(), Cell::ALIVE);
        assert_eq!(Cell::ALIVE.flip(), Cell(254));
        assert_eq!(Cell(254).flip(), Cell::ALIVE);
    }

    #[test]
    /// Fading can never push a cell below 0.
    fn fade_floors_at_zero() {
        assert_eq!(Cell(100).fade(30), Cell(70));
        assert_eq!(Cell(10).fade(30), Cell::DEAD);
        assert_eq!(Cell::DEAD.fade(255), Cell::DEAD);
    }
}
