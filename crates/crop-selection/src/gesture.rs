use crate::{Bounds, Direction, Handle, Point, Rect, Sign, constrain::Mode};

/// The pointer gesture currently driving the selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,

    /// Drawing a new selection from `anchor`.
    Dragging {
        /// Where the pointer went down, clamped into the image.
        anchor: Point,
    },

    /// Dragging `handle` of the selection that was `start_rect` when the gesture began.
    Resizing {
        /// The handle being dragged.
        handle: Handle,
        /// The selection when the resize began.
        start_rect: Rect,
    },

    /// Moving the whole selection, `grab` is where the pointer went down.
    Moving {
        /// Where the pointer went down, clamped into the image.
        grab: Point,
        /// The selection when the move began.
        start_rect: Rect,
    },
}

impl Gesture {
    /// If no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
            Self::Resizing { .. } => "Resizing",
            Self::Moving { .. } => "Moving",
        }
    }

    /// Maps the pointer onto the unconstrained candidate for this gesture.
    pub(crate) fn candidate(
        &self,
        point: Point,
        bounds: Bounds,
        square: bool,
    ) -> Option<(Rect, Mode)> {
        match *self {
            Self::Idle => None,

            Self::Dragging { anchor } => {
                let point = point.clamp_to(bounds);
                let direction = Direction {
                    x: Sign::of(point.x, anchor.x),
                    y: Sign::of(point.y, anchor.y),
                };

                let mode = Mode::Resizing {
                    direction,
                    handle: None,
                    square,
                };

                Some((Rect::from_points(point, anchor), mode))
            }

            Self::Resizing { handle, start_rect } => {
                let point = point.clamp_to(bounds);
                let mut rect = start_rect;
                let mut direction = Direction::default();

                // The edge opposite the dragged one stays put.
                if let Some(edge) = handle.horizontal() {
                    let fixed = match edge {
                        Sign::Positive => start_rect.x1,
                        Sign::Negative => start_rect.x2,
                    };
                    rect.x1 = point.x.min(fixed);
                    rect.x2 = point.x.max(fixed);
                    direction.x = Sign::of(point.x, fixed);
                }

                if let Some(edge) = handle.vertical() {
                    let fixed = match edge {
                        Sign::Positive => start_rect.y1,
                        Sign::Negative => start_rect.y2,
                    };
                    rect.y1 = point.y.min(fixed);
                    rect.y2 = point.y.max(fixed);
                    direction.y = Sign::of(point.y, fixed);
                }

                let mode = Mode::Resizing {
                    direction,
                    handle: Some(handle),
                    square,
                };

                Some((rect, mode))
            }

            Self::Moving { grab, start_rect } => {
                let point = point.clamp_to(bounds);
                let rect = start_rect.translate(point.x - grab.x, point.y - grab.y);
                Some((rect, Mode::Moving))
            }
        }
    }
}
