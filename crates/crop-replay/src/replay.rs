use core::fmt;

use crop_selection::{Bounds, PreviewFrame, Rect, Selection, SelectionEvent, Shared};
use tracing::{debug, info, info_span};

use crate::{Cropper, Script, ScriptEvent, TimeRange, ZoomListener};

/// Outcome of replaying a script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Every completion the engine reported, in order.
    pub completed: Vec<Selection>,
    /// The selection after the last event.
    pub final_rect: Option<Rect>,
    /// The final preview frame, if a preview was enabled.
    pub preview: Option<PreviewFrame>,
    /// Time ranges zoomed into, when the script has a graph zoom.
    pub zoom_ranges: Vec<TimeRange>,
    /// Events the host or engine ignored.
    pub ignored: usize,
}

/// Feeds every event of `script` through a fresh cropper.
pub fn replay(script: &Script) -> Report {
    let _span = info_span!("[Replay]").entered();
    info!(
        "Replaying {} events on {}x{}",
        script.events.len(),
        script.image.width,
        script.image.height
    );

    let mut cropper = Cropper::new(script.image, script.cropper, script.host);

    let completed = Shared::new(Vec::new());
    {
        let completed = completed.clone();
        cropper.add_listener(move |event: &SelectionEvent, _bounds: Bounds| {
            if let SelectionEvent::Completed(selection) = event {
                completed.borrow_mut().push(*selection);
            }
        });
    }

    let zoom = script.zoom.map(|zoom| Shared::new(ZoomListener::new(zoom)));
    if let Some(zoom) = zoom.as_ref() {
        cropper.add_listener(zoom.clone());
    }

    let mut viewport = script.host.viewport;
    let mut ignored = 0;

    for (index, event) in script.events.iter().enumerate() {
        let handled = match *event {
            ScriptEvent::Attach => cropper.attach(),
            ScriptEvent::Detach => cropper.detach(),

            ScriptEvent::Scroll { x, y } => {
                viewport.scroll.x = x;
                viewport.scroll.y = y;
                cropper.set_viewport(viewport);
                true
            }

            ScriptEvent::Key { key, shift } => cropper.handle_key(key, shift),

            ScriptEvent::Down { .. } | ScriptEvent::Move { .. } | ScriptEvent::Up => event
                .pointer()
                .is_some_and(|pointer| cropper.handle_pointer(pointer)),
        };

        if !handled {
            debug!("Event {index} ignored: {event:?}");
            ignored += 1;
        }
    }

    let completed = completed.borrow().clone();
    let zoom_ranges = zoom
        .map(|zoom| zoom.borrow().ranges().to_vec())
        .unwrap_or_default();

    info!("Replay finished with {} completed selections", completed.len());

    Report {
        completed,
        final_rect: cropper.engine().rect(),
        preview: cropper.preview(),
        zoom_ranges,
        ignored,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, selection) in self.completed.iter().enumerate() {
            let Rect { x1, y1, x2, y2 } = selection.rect;
            writeln!(
                f,
                "#{index}: ({x1}, {y1}) -> ({x2}, {y2}) [{}x{}]",
                selection.dimensions.width, selection.dimensions.height
            )?;
        }

        match self.final_rect {
            Some(rect) => writeln!(f, "Final selection: {rect:?}")?,
            None => writeln!(f, "Final selection: none")?,
        }

        if let Some(preview) = self.preview {
            writeln!(
                f,
                "Preview: {}x{} offset ({}, {})",
                preview.width, preview.height, preview.offset_x, preview.offset_y
            )?;
        }

        for range in &self.zoom_ranges {
            writeln!(f, "Zoom: {} - {}", range.start, range.end)?;
        }

        write!(f, "Ignored events: {}", self.ignored)
    }
}
