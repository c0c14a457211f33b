//! Geometry that keeps a candidate selection inside the image and within the
//! configured ratio and dimension limits.
//!

use crate::{Axis, Bounds, Constraints, Dimensions, Direction, Handle, Ratio, Rect, Sign, Span};

/// How a candidate rectangle was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The whole selection is being translated, its size must not change.
    Moving,

    /// The selection is being drawn or resized.
    Resizing {
        /// Which edge moves on each axis.
        direction: Direction,
        /// The handle being dragged, `None` while drawing a new selection.
        handle: Option<Handle>,
        /// The square modifier is held.
        square: bool,
    },
}

/// Applies the constraints for `mode` to `rect`.
pub fn constrain(rect: Rect, bounds: Bounds, constraints: &Constraints, mode: Mode) -> Rect {
    let Mode::Resizing {
        direction,
        handle,
        square,
    } = mode
    else {
        return clamp_moving(rect, bounds);
    };

    let mut rect = clamp_to_bounds(rect, bounds);

    if constraints.ratio.is_set() {
        rect = apply_ratio(rect, constraints.ratio, direction, handle, bounds);
    } else if square {
        rect = apply_ratio(rect, Ratio::SQUARE, direction, handle, bounds);
    }

    if constraints.has_dimension_limits() {
        let (min, max) = constraints.limits(square);
        rect = apply_dimension_limits(rect, min, max, direction, bounds);
    }

    rect
}

/// Shifts the rectangle back inside `bounds` without changing its size.
pub fn clamp_moving(mut rect: Rect, bounds: Bounds) -> Rect {
    let width = rect.width();
    let height = rect.height();

    if rect.x1 < 0 {
        rect.x1 = 0;
        rect.x2 = width;
    }
    if rect.y1 < 0 {
        rect.y1 = 0;
        rect.y2 = height;
    }
    if rect.x2 > bounds.width {
        rect.x2 = bounds.width;
        rect.x1 = bounds.width - width;
    }
    if rect.y2 > bounds.height {
        rect.y2 = bounds.height;
        rect.y1 = bounds.height - height;
    }

    rect
}

/// Clamps every edge into `bounds` independently, this may shrink the rectangle.
pub fn clamp_to_bounds(rect: Rect, bounds: Bounds) -> Rect {
    Rect {
        x1: rect.x1.clamp(0, bounds.width),
        y1: rect.y1.clamp(0, bounds.height),
        x2: rect.x2.clamp(0, bounds.width),
        y2: rect.y2.clamp(0, bounds.height),
    }
}

/// Locks the rectangle to `ratio`.
///
/// The lone north and south handles drive the height and derive the width,
/// everything else drives the width and derives the height.
pub fn apply_ratio(
    mut rect: Rect,
    ratio: Ratio,
    direction: Direction,
    handle: Option<Handle>,
    bounds: Bounds,
) -> Rect {
    if !ratio.is_set() {
        return rect;
    }

    let primary = match handle {
        Some(Handle::N | Handle::S) => Axis::Y,
        _ => Axis::X,
    };
    let derived = primary.other();

    let (ratio_primary, ratio_derived) = match primary {
        Axis::X => (ratio.x, ratio.y),
        Axis::Y => (ratio.y, ratio.x),
    };

    let (primary_span, derived_span) = ratio_to_axis(
        rect.span(primary),
        rect.span(derived),
        (ratio_primary, ratio_derived),
        (direction.on(primary), direction.on(derived)),
        bounds.extent(derived),
    );

    rect.set_span(primary, primary_span);
    rect.set_span(derived, derived_span);
    rect
}

fn ratio_to_axis(
    mut primary: Span,
    mut derived: Span,
    (ratio_primary, ratio_derived): (i32, i32),
    (direction_primary, direction_derived): (Sign, Sign),
    derived_bound: i32,
) -> (Span, Span) {
    let target_extent =
        i64::from(primary.extent()) * i64::from(ratio_derived) / i64::from(ratio_primary);

    // Extent of the derived axis after it had to be pulled back inside the bounds.
    let mut reduced_extent = None;

    match direction_derived {
        Sign::Positive => {
            let target = i64::from(derived.a1) + target_extent;
            if target > i64::from(derived_bound) {
                derived.a2 = derived_bound;
                reduced_extent = Some(derived.extent());
            } else {
                derived.a2 = saturate(target);
            }
        }

        Sign::Negative => {
            let target = i64::from(derived.a2) - target_extent;
            if target < 0 {
                derived.a1 = 0;
                reduced_extent = Some(derived.extent());
            } else {
                derived.a1 = saturate(target);
            }
        }
    }

    if let Some(reduced_extent) = reduced_extent {
        let primary_extent = saturate(
            i64::from(reduced_extent) * i64::from(ratio_primary) / i64::from(ratio_derived),
        );

        match direction_primary {
            Sign::Positive => primary.a2 = primary.a1 + primary_extent,
            Sign::Negative => primary.a1 = primary.a2 - primary_extent,
        }
    }

    (primary, derived)
}

/// Enforces min then max dimensions, x before y.
pub fn apply_dimension_limits(
    mut rect: Rect,
    min: Dimensions,
    max: Dimensions,
    direction: Direction,
    bounds: Bounds,
) -> Rect {
    let steps = [
        (Axis::X, min.width, Limit::Min),
        (Axis::Y, min.height, Limit::Min),
        (Axis::X, max.width, Limit::Max),
        (Axis::Y, max.height, Limit::Max),
    ];

    for (axis, value, limit) in steps {
        if value <= 0 {
            continue;
        }

        let span = restrict(
            rect.span(axis),
            value,
            limit,
            direction.on(axis),
            bounds.extent(axis),
        );
        rect.set_span(axis, span);
    }

    rect
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limit {
    Min,
    Max,
}

fn restrict(mut span: Span, value: i32, limit: Limit, direction: Sign, bound: i32) -> Span {
    // The image bounds win over the requested dimension.
    let value = value.min(bound);

    let violated = match limit {
        Limit::Min => span.extent() < value,
        Limit::Max => span.extent() > value,
    };
    if !violated {
        return span;
    }

    match direction {
        Sign::Positive => span.a2 = span.a1 + value,
        Sign::Negative => span.a1 = span.a2 - value,
    }

    if span.a1 < 0 {
        span.a1 = 0;
        span.a2 = value;
    } else if span.a2 > bound {
        span.a1 = bound - value;
        span.a2 = bound;
    }

    span
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
