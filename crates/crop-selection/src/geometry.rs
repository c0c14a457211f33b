use serde::{Deserialize, Serialize};

/// A pointer position in image-local pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: i32,
    /// Pixels from the top edge.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamps the point so it lies inside `bounds`.
    pub fn clamp_to(self, bounds: Bounds) -> Self {
        Self {
            x: self.x.clamp(0, bounds.width),
            y: self.y.clamp(0, bounds.height),
        }
    }
}

/// The size of the image the selection lives on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels.
    pub height: i32,
}

impl Bounds {
    /// Creates new bounds, negative sizes are treated as empty.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// The extent of the bounds along `axis`.
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Width and height of a selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Selection rectangle in image-local pixels.
///
/// At rest `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge, exclusive.
    pub x2: i32,
    /// Bottom edge, exclusive.
    pub y2: i32,
}

impl Rect {
    /// Creates a rectangle from its edges.
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A zero-size rectangle at `point`.
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Builds the rectangle spanned by two points, in either order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    /// Swaps inverted edges so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> Self {
        Self::from_points(self.origin(), Point::new(self.x2, self.y2))
    }

    /// `x2 - x1`.
    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    /// `y2 - y1`.
    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Width and height together.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Top left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// A selection with no width is treated as nothing selected.
    pub fn is_empty(&self) -> bool {
        self.x1 == self.x2
    }

    /// If the point lies inside the rectangle, edges included.
    pub fn contains(&self, point: Point) -> bool {
        (self.x1..=self.x2).contains(&point.x) && (self.y1..=self.y2).contains(&point.y)
    }

    /// If the rectangle is ordered and lies inside `bounds`.
    pub fn is_within(&self, bounds: Bounds) -> bool {
        0 <= self.x1
            && self.x1 <= self.x2
            && self.x2 <= bounds.width
            && 0 <= self.y1
            && self.y1 <= self.y2
            && self.y2 <= bounds.height
    }

    /// Moves the rectangle without resizing it.
    ///
    /// Offsets that would overflow stop at the numeric limit, the size is kept.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        let (x1, x2) = shift(self.x1, self.x2, dx);
        let (y1, y2) = shift(self.y1, self.y2, dy);

        Self { x1, y1, x2, y2 }
    }

    pub(crate) fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::X => Span {
                a1: self.x1,
                a2: self.x2,
            },
            Axis::Y => Span {
                a1: self.y1,
                a2: self.y2,
            },
        }
    }

    pub(crate) fn set_span(&mut self, axis: Axis, span: Span) {
        match axis {
            Axis::X => {
                self.x1 = span.a1;
                self.x2 = span.a2;
            }
            Axis::Y => {
                self.y1 = span.a1;
                self.y2 = span.a2;
            }
        }
    }
}

/// One of the two image axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Which edge of an axis is travelling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The low edge (`x1`/`y1`) moves.
    Negative,

    /// The high edge (`x2`/`y2`) moves.
    #[default]
    Positive,
}

impl Sign {
    /// `Negative` if `current` lies before `base`.
    pub fn of(current: i32, base: i32) -> Self {
        if current < base {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// `-1` or `1`.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }
}

/// Per-axis travel direction of a gesture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Travel along x.
    pub x: Sign,
    /// Travel along y.
    pub y: Sign,
}

impl Direction {
    /// The sign along `axis`.
    pub fn on(&self, axis: Axis) -> Sign {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Moves both edges of an axis by `delta`, saturating the leading edge.
fn shift(a1: i32, a2: i32, delta: i32) -> (i32, i32) {
    let extent = a2.saturating_sub(a1);

    if delta >= 0 {
        let a2 = a2.saturating_add(delta);
        (a2.saturating_sub(extent), a2)
    } else {
        let a1 = a1.saturating_add(delta);
        (a1, a1.saturating_add(extent))
    }
}

/// One axis of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub a1: i32,
    pub a2: i32,
}

impl Span {
    pub fn extent(&self) -> i32 {
        self.a2 - self.a1
    }
}
