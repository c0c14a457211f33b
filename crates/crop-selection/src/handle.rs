use serde::{Deserialize, Serialize};

use crate::{Constraints, Sign};

/// Resize grip on the selection, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Handle {
    /// Top edge.
    N,
    /// Top right corner.
    NE,
    /// Right edge.
    E,
    /// Bottom right corner.
    SE,
    /// Bottom edge.
    S,
    /// Bottom left corner.
    SW,
    /// Left edge.
    W,
    /// Top left corner.
    NW,
}

impl Handle {
    /// Every handle, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// The x edge this handle drags, `Positive` for `x2`.
    pub fn horizontal(self) -> Option<Sign> {
        match self {
            Self::NE | Self::E | Self::SE => Some(Sign::Positive),
            Self::NW | Self::W | Self::SW => Some(Sign::Negative),
            Self::N | Self::S => None,
        }
    }

    /// The y edge this handle drags, `Positive` for `y2`.
    pub fn vertical(self) -> Option<Sign> {
        match self {
            Self::SE | Self::S | Self::SW => Some(Sign::Positive),
            Self::NE | Self::N | Self::NW => Some(Sign::Negative),
            Self::E | Self::W => None,
        }
    }

    /// If the handle drags an edge on both axes.
    pub fn is_corner(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    /// Whether the handle can be used under `constraints`.
    ///
    /// Handles that would change a fixed axis are hidden, corners are hidden as
    /// soon as either axis is fixed.
    pub fn is_active(self, constraints: &Constraints) -> bool {
        if constraints.fixed_width && constraints.fixed_height {
            return false;
        }

        if !constraints.fixed_width && !constraints.fixed_height {
            return true;
        }

        if self.is_corner() {
            return false;
        }

        if constraints.fixed_width {
            self.horizontal().is_none()
        } else {
            self.vertical().is_none()
        }
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };

        f.write_str(name)
    }
}
