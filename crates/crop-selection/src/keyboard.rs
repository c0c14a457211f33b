use serde::{Deserialize, Serialize};

/// Pixels moved per arrow key press while shift is held.
pub const FAST_NUDGE: i32 = 10;

/// Arrow keys that nudge the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowKey {
    /// Moves towards `x = 0`.
    Left,
    /// Moves towards `y = 0`.
    Up,
    /// Moves towards the right edge.
    Right,
    /// Moves towards the bottom edge.
    Down,
}

impl ArrowKey {
    /// Offset for one press, ten pixels when `fast`.
    pub fn offset(self, fast: bool) -> (i32, i32) {
        let (dx, dy) = match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        };

        let step = if fast { FAST_NUDGE } else { 1 };
        (dx * step, dy * step)
    }
}
