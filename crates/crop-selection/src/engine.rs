use alloc::boxed::Box;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::{
    ArrowKey, Bounds, Config, Constraints, Gesture, Handle, Point, Rect, Selection,
    SelectionEvent, SelectionListener,
    constrain::{Mode, clamp_to_bounds, constrain},
};

/// Owns the selection on one image and applies pointer and keyboard gestures to it.
///
/// Operations that are not valid in the current gesture state are ignored and
/// reported through their return value.
pub struct SelectionEngine {
    bounds: Bounds,
    config: Config,
    constraints: Constraints,
    rect: Option<Rect>,
    gesture: Gesture,
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl SelectionEngine {
    /// Creates an engine for an image of `bounds`, placing the configured initial selection.
    pub fn new(bounds: Bounds, config: Config) -> Self {
        let mut engine = Self {
            bounds: Bounds::new(bounds.width, bounds.height),
            constraints: Constraints::from_config(&config),
            config,
            rect: None,
            gesture: Gesture::Idle,
            listeners: Vec::new(),
        };

        engine.place(None);
        engine
    }

    /// Reports the initial selection when the config asks for it to be displayed.
    ///
    /// Called by the host once its listeners are attached.
    pub fn show_initial(&mut self) -> Option<Selection> {
        if !self.config.display_on_init {
            return None;
        }

        let rect = self.rect?;
        let selection = Selection::from(rect);
        self.notify(SelectionEvent::Changed(rect));
        self.notify(SelectionEvent::Completed(selection));

        Some(selection)
    }

    /// Registers a listener for every following event.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Drops every registered listener.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// The image size.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The configuration as supplied.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The normalized constraints being enforced.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// The current selection, `None` while hidden.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// The gesture in progress.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// If no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.gesture.is_idle()
    }

    /// If `handle` may start a resize under the current constraints.
    pub fn is_handle_active(&self, handle: Handle) -> bool {
        handle.is_active(&self.constraints)
    }

    /// The handles the host should show and wire up.
    pub fn visible_handles(&self) -> impl Iterator<Item = Handle> + '_ {
        Handle::ALL
            .into_iter()
            .filter(|handle| self.is_handle_active(*handle))
    }

    /// Starts drawing a new selection at `point`.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        if !self.begin("drag") {
            return false;
        }

        let anchor = point.clamp_to(self.bounds);
        let rect = Rect::at(anchor);

        debug!("Drag started at {anchor:?}");
        self.gesture = Gesture::Dragging { anchor };
        self.rect = Some(rect);
        self.notify(SelectionEvent::Changed(rect));

        true
    }

    /// Starts resizing `current` by dragging `handle`.
    pub fn begin_resize(&mut self, handle: Handle, current: Rect) -> bool {
        if !self.begin("resize") {
            return false;
        }

        if !self.is_handle_active(handle) {
            debug!("Ignoring resize: handle {handle} is hidden");
            return false;
        }

        let start_rect = clamp_to_bounds(current.normalized(), self.bounds);

        debug!("Resize started on handle {handle} from {start_rect:?}");
        self.gesture = Gesture::Resizing { handle, start_rect };
        self.rect = Some(start_rect);

        true
    }

    /// Starts moving the current selection, the pointer went down at `point`.
    pub fn begin_move(&mut self, point: Point) -> bool {
        if !self.begin("move") {
            return false;
        }

        let Some(start_rect) = self.rect else {
            debug!("Ignoring move: there is no selection");
            return false;
        };

        let grab = point.clamp_to(self.bounds);

        debug!("Move started at {grab:?}");
        self.gesture = Gesture::Moving {
            grab,
            start_rect,
        };

        true
    }

    /// Applies a pointer position to the active gesture.
    ///
    /// `square` is the square modifier (shift while dragging).
    pub fn update(&mut self, point: Point, square: bool) -> Option<Rect> {
        let Some((candidate, mode)) = self.gesture.candidate(point, self.bounds, square) else {
            trace!("Ignoring update while idle");
            return None;
        };

        let rect = constrain(candidate, self.bounds, &self.constraints, mode);
        trace!("{} {point:?}: {candidate:?} -> {rect:?}", self.gesture.name());

        self.rect = Some(rect);
        self.notify(SelectionEvent::Changed(rect));

        Some(rect)
    }

    /// Finishes the active gesture and reports the final selection.
    pub fn end_gesture(&mut self) -> Option<Selection> {
        if self.gesture.is_idle() {
            trace!("Ignoring end while idle");
            return None;
        }

        let gesture = core::mem::take(&mut self.gesture);
        let selection = Selection::from(self.rect.unwrap_or_default());

        debug!(
            "{} finished: {:?} ({}x{})",
            gesture.name(),
            selection.rect,
            selection.dimensions.width,
            selection.dimensions.height
        );
        self.notify(SelectionEvent::Completed(selection));

        Some(selection)
    }

    /// Abandons the active gesture without reporting a selection.
    pub fn cancel_gesture(&mut self) -> bool {
        if self.gesture.is_idle() {
            return false;
        }

        debug!("{} cancelled", self.gesture.name());
        self.gesture = Gesture::Idle;

        true
    }

    /// Translates the selection, shifting it back inside the image instead of shrinking it.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> Option<Rect> {
        if !self.gesture.is_idle() {
            debug!("Ignoring move by ({dx}, {dy}): {} in progress", self.gesture.name());
            return None;
        }

        let current = self.rect?;
        let rect = constrain(
            current.translate(dx, dy),
            self.bounds,
            &self.constraints,
            Mode::Moving,
        );

        trace!("Moved by ({dx}, {dy}): {current:?} -> {rect:?}");
        self.rect = Some(rect);
        self.notify(SelectionEvent::Changed(rect));

        Some(rect)
    }

    /// Nudges the selection with an arrow key, `fast` moves ten pixels.
    pub fn nudge(&mut self, key: ArrowKey, fast: bool) -> Option<Rect> {
        if !self.config.capture_keyboard {
            return None;
        }

        let (dx, dy) = key.offset(fast);
        self.move_by(dx, dy)
    }

    /// Replaces bounds and configuration, dropping any active gesture.
    ///
    /// The selection becomes `initial`, or the configured initial selection, or is hidden.
    /// Listeners are told the resulting selection has completed.
    pub fn reset(&mut self, bounds: Bounds, config: Config, initial: Option<Rect>) -> Selection {
        if !self.gesture.is_idle() {
            debug!("Reset dropped an active {} gesture", self.gesture.name());
        }

        self.bounds = Bounds::new(bounds.width, bounds.height);
        self.constraints = Constraints::from_config(&config);
        self.config = config;
        self.gesture = Gesture::Idle;
        self.place(initial);

        let selection = Selection::from(self.rect.unwrap_or_default());
        self.notify(SelectionEvent::Completed(selection));

        selection
    }

    fn place(&mut self, initial: Option<Rect>) {
        self.rect = initial
            .or_else(|| self.config.initial_rect(self.bounds))
            .map(|rect| clamp_to_bounds(rect.normalized(), self.bounds));

        debug!(
            "Placed selection {:?} in {}x{}",
            self.rect, self.bounds.width, self.bounds.height
        );
    }

    fn begin(&self, kind: &str) -> bool {
        if self.gesture.is_idle() {
            return true;
        }

        debug!("Ignoring {kind}: {} in progress", self.gesture.name());
        false
    }

    fn notify(&mut self, event: SelectionEvent) {
        let bounds = self.bounds;
        for listener in &mut self.listeners {
            listener.on_event(&event, bounds);
        }
    }
}

impl core::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("bounds", &self.bounds)
            .field("constraints", &self.constraints)
            .field("rect", &self.rect)
            .field("gesture", &self.gesture)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
