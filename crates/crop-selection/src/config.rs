use serde::{Deserialize, Serialize};

use crate::{Bounds, Dimensions, Rect};

/// Width to height ratio the selection is locked to. Zero on either side means
/// no lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    /// Width part.
    pub x: i32,
    /// Height part.
    pub y: i32,
}

impl Ratio {
    /// The 1:1 ratio used while squaring.
    pub const SQUARE: Self = Self { x: 1, y: 1 };

    /// Creates a ratio of `x:y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// If both sides of the ratio are positive.
    pub fn is_set(&self) -> bool {
        self.x > 0 && self.y > 0
    }

    /// The ratio in lowest terms, or the unset ratio if either side is not positive.
    pub fn reduced(self) -> Self {
        if !self.is_set() {
            return Self::default();
        }

        let divisor = gcd(self.x, self.y);
        Self {
            x: self.x / divisor,
            y: self.y / divisor,
        }
    }
}

/// Greatest common divisor, `gcd(a, 0) == a`.
pub fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

/// Selection shown when the engine is created or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initial {
    /// Start from these coordinates.
    Rect(Rect),

    /// Start from a rectangle the size of the configured ratio, centered in the image.
    CenteredRatio,
}

/// Cropper configuration as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aspect ratio lock, unset for none.
    pub ratio: Ratio,
    /// Minimum width, 0 for none.
    pub min_width: i32,
    /// Minimum height, 0 for none.
    pub min_height: i32,
    /// Maximum width, 0 for none.
    pub max_width: i32,
    /// Maximum height, 0 for none.
    pub max_height: i32,
    /// Selection placed when the engine is created or reset.
    pub initial: Option<Initial>,

    /// Emit a completion as soon as an initial selection is placed.
    pub display_on_init: bool,

    /// Accept arrow key nudges.
    pub capture_keyboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratio: Ratio::default(),
            min_width: 0,
            min_height: 0,
            max_width: 0,
            max_height: 0,
            initial: None,
            display_on_init: false,
            capture_keyboard: true,
        }
    }
}

impl Config {
    /// The initial selection for an image of `bounds`, before clamping.
    pub fn initial_rect(&self, bounds: Bounds) -> Option<Rect> {
        match self.initial? {
            Initial::Rect(rect) => Some(rect),

            Initial::CenteredRatio => {
                // Uses the ratio as given, so `16:9` places a 16x9 rectangle.
                if !self.ratio.is_set() {
                    return None;
                }

                let x1 = ceil_half(bounds.width - self.ratio.x);
                let y1 = ceil_half(bounds.height - self.ratio.y);

                Some(Rect::new(x1, y1, x1 + self.ratio.x, y1 + self.ratio.y))
            }
        }
    }
}

fn ceil_half(value: i32) -> i32 {
    value.div_euclid(2) + value.rem_euclid(2)
}

/// Normalized constraints the engine enforces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Ratio in lowest terms.
    pub ratio: Ratio,
    /// Minimum dimensions, 0 for none.
    pub min: Dimensions,
    /// Maximum dimensions, 0 for none.
    pub max: Dimensions,
    /// The width can not change.
    pub fixed_width: bool,
    /// The height can not change.
    pub fixed_height: bool,
}

impl Constraints {
    /// Resolves a host config, negative values are treated as unconstrained.
    pub fn from_config(config: &Config) -> Self {
        let min = Dimensions {
            width: config.min_width.max(0),
            height: config.min_height.max(0),
        };
        let max = Dimensions {
            width: config.max_width.max(0),
            height: config.max_height.max(0),
        };

        Self {
            ratio: config.ratio.reduced(),
            min,
            max,
            fixed_width: max.width > 0 && min.width >= max.width,
            fixed_height: max.height > 0 && min.height >= max.height,
        }
    }

    /// If any min or max dimension is set.
    pub fn has_dimension_limits(&self) -> bool {
        self.min.width > 0 || self.min.height > 0 || self.max.width > 0 || self.max.height > 0
    }

    /// The min and max dimensions to enforce, mirrored across axes when squaring.
    pub fn limits(&self, square: bool) -> (Dimensions, Dimensions) {
        let mut min = self.min;
        let mut max = self.max;

        if !square {
            return (min, max);
        }

        if min.width > 0 {
            min.height = min.width;
        } else if min.height > 0 {
            min.width = min.height;
        }

        // The smaller maximum applies to both axes.
        if max.width > 0 && (max.height == 0 || max.width <= max.height) {
            max.height = max.width;
        } else if max.height > 0 {
            max.width = max.height;
        }

        (min, max)
    }
}
