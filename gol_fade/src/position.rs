use derive_more::{Display, From};

/// The x & y positions of a cell on the grid.
///
/// To move "right" on the grid, the x must be increased.
/// To move "down" on the grid, the y must be increased.
/// The opposites also apply.
#[derive(
    Eq,
    Hash,
    PartialEq,
    Clone,
    Copy,
    Debug,
    From,
    Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("({x}, {y})")]
pub struct GridPosition {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl GridPosition {
    /// Creates a new [`GridPosition`] at the given x & y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Gets the represented x position.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Gets the represented y position.
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl<T: Into<GridPosition>> std::ops::Add<T> for GridPosition {
    type Output = Self;

    fn add(self, other_position: T) -> Self::Output {
        let other_position: GridPosition = other_position.into();
        GridPosition::new(self.x + other_position.x, self.y + other_position.y)
    }
}

impl<T: Into<GridPosition>> std::ops::Sub<T> for GridPosition {
    type Output = Self;

    fn sub(self, other_position: T) -> Self::Output {
        let other_position: GridPosition = other_position.into();
        GridPosition::new(self.x - other_position.x, self.y - other_position.y)
    }
}
