use crate::{Bounds, Config, Dimensions, Rect, SelectionEvent, SelectionListener};

/// Where to draw the full image inside a fixed-size preview so that only the
/// selection shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFrame {
    /// Scaled image width.
    pub width: i32,
    /// Scaled image height.
    pub height: i32,
    /// How far the scaled image is shifted left.
    pub offset_x: i32,
    /// How far the scaled image is shifted up.
    pub offset_y: i32,
}

/// Listener that keeps a live preview of the selection at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    size: Dimensions,
    frame: Option<PreviewFrame>,
}

impl Preview {
    /// A preview of `size` with no frame yet.
    pub fn new(size: Dimensions) -> Self {
        Self { size, frame: None }
    }

    /// A preview the size of the minimum dimensions, if both are set.
    pub fn for_config(config: &Config) -> Option<Self> {
        if config.min_width <= 0 || config.min_height <= 0 {
            return None;
        }

        Some(Self::new(Dimensions {
            width: config.min_width,
            height: config.min_height,
        }))
    }

    /// The fixed preview size.
    pub fn size(&self) -> Dimensions {
        self.size
    }

    /// The frame for the most recent selection.
    pub fn frame(&self) -> Option<PreviewFrame> {
        self.frame
    }

    /// Computes the frame, `None` for an empty selection.
    pub fn compute(size: Dimensions, rect: Rect, bounds: Bounds) -> Option<PreviewFrame> {
        let width = rect.width();
        let height = rect.height();
        if width <= 0 || height <= 0 {
            return None;
        }

        Some(PreviewFrame {
            width: scale(size.width, bounds.width, width),
            height: scale(size.height, bounds.height, height),
            offset_x: scale(rect.x1, size.width, width),
            offset_y: scale(rect.y1, size.height, height),
        })
    }
}

impl SelectionListener for Preview {
    fn on_event(&mut self, event: &SelectionEvent, bounds: Bounds) {
        self.frame = Self::compute(self.size, event.rect(), bounds);
    }
}

/// `ceil(a * b / divisor)` for non-negative inputs.
fn scale(a: i32, b: i32, divisor: i32) -> i32 {
    let numerator = i64::from(a.max(0)) * i64::from(b.max(0));
    let divisor = i64::from(divisor);

    i32::try_from((numerator + divisor - 1) / divisor).unwrap_or(i32::MAX)
}
