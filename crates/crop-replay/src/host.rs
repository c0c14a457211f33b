use crop_selection::{
    ArrowKey, Bounds, Config, Handle, Point, Preview, PreviewFrame, Rect, Selection,
    SelectionEngine, SelectionEvent, SelectionListener, Shared,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the image sits on the page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Page position of the image's top left corner.
    pub offset: Point,
    /// Total scroll of the containers around the image.
    pub scroll: Point,
}

impl Viewport {
    /// Converts a page position into image-local pixels.
    pub fn to_local(&self, page: Point) -> Point {
        Point::new(
            page.x - self.offset.x + self.scroll.x,
            page.y - self.offset.y + self.scroll.y,
        )
    }
}

/// Host options that are not part of the selection constraints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostOptions {
    /// Keep a preview the size of the minimum dimensions.
    pub preview: bool,
    /// Where the image sits on the page.
    pub viewport: Viewport,
}

/// The element a pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Anywhere on the image outside the selection, starts a new selection.
    Area,
    /// Inside the selection, moves it.
    Selection,
    /// One of the resize handles.
    Handle(Handle),
}

/// Pointer input in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A button went down.
    Down {
        /// The element under the pointer.
        target: Target,
        /// Page position.
        position: Point,
    },
    /// The pointer moved.
    Move {
        /// Page position.
        position: Point,
        /// Shift is held, squares the selection.
        shift: bool,
    },
    /// The button was released.
    Up,
}

/// The host's preview, swapped out when the config changes.
#[derive(Debug, Default)]
struct PreviewSlot(Option<Preview>);

impl SelectionListener for PreviewSlot {
    fn on_event(&mut self, event: &SelectionEvent, bounds: Bounds) {
        if let Some(preview) = self.0.as_mut() {
            preview.on_event(event, bounds);
        }
    }
}

/// Owns a selection engine and the input wiring around it.
///
/// Input is only accepted between [`attach`](Self::attach) and [`detach`](Self::detach).
pub struct Cropper {
    engine: SelectionEngine,
    options: HostOptions,
    attached: bool,
    handles: Vec<Handle>,
    preview: Shared<PreviewSlot>,
}

impl Cropper {
    /// Creates a detached cropper for an image of `bounds`.
    pub fn new(bounds: Bounds, config: Config, options: HostOptions) -> Self {
        let (config, preview) = Self::with_preview(config, options);
        let preview = Shared::new(PreviewSlot(preview));

        let mut engine = SelectionEngine::new(bounds, config);
        engine.add_listener(preview.clone());

        Self {
            engine,
            options,
            attached: false,
            handles: Vec::new(),
            preview,
        }
    }

    /// A preview also displays the initial selection.
    fn with_preview(mut config: Config, options: HostOptions) -> (Config, Option<Preview>) {
        if !options.preview {
            return (config, None);
        }

        let preview = Preview::for_config(&config);
        if preview.is_some() {
            config.display_on_init = true;
        }

        (config, preview)
    }

    /// Registers a listener on the engine.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.engine.add_listener(listener);
    }

    /// The engine being driven.
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// If input is being accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The handles currently wired to start a resize.
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// The preview frame for the latest selection, if a preview is enabled.
    pub fn preview(&self) -> Option<PreviewFrame> {
        self.preview.borrow().0.as_ref().and_then(Preview::frame)
    }

    /// Updates the page offset and scroll used to translate pointer positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.options.viewport = viewport;
    }

    /// Starts accepting input and reports the initial selection if configured.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }

        self.handles = self.engine.visible_handles().collect();
        self.attached = true;
        info!("Attached with handles {:?}", self.handles);

        self.engine.show_initial();
        true
    }

    /// Stops accepting input, abandoning any gesture in progress.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }

        self.engine.cancel_gesture();
        self.handles.clear();
        self.attached = false;
        info!("Detached");

        true
    }

    /// Replaces the image and configuration, attaching if needed.
    pub fn reset(&mut self, bounds: Bounds, config: Config, initial: Option<Rect>) -> Selection {
        let (config, preview) = Self::with_preview(config, self.options);
        *self.preview.borrow_mut() = PreviewSlot(preview);

        let selection = self.engine.reset(bounds, config, initial);

        if self.attached {
            self.handles = self.engine.visible_handles().collect();
        } else {
            self.attach();
        }

        selection
    }

    /// Routes a pointer event to the engine, returns `false` if it was ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.attached {
            debug!("Ignoring {event:?}: not attached");
            return false;
        }

        match event {
            PointerEvent::Down { target, position } => {
                let point = self.options.viewport.to_local(position);

                match target {
                    Target::Area => self.engine.begin_drag(point),
                    Target::Selection => self.engine.begin_move(point),
                    Target::Handle(handle) => {
                        if !self.handles.contains(&handle) {
                            debug!("Ignoring press on hidden handle {handle}");
                            return false;
                        }

                        let Some(current) = self.engine.rect() else {
                            debug!("Ignoring press on handle {handle}: no selection");
                            return false;
                        };

                        self.engine.begin_resize(handle, current)
                    }
                }
            }

            PointerEvent::Move { position, shift } => {
                let point = self.options.viewport.to_local(position);
                self.engine.update(point, shift).is_some()
            }

            PointerEvent::Up => self.engine.end_gesture().is_some(),
        }
    }

    /// Routes an arrow key press to the engine, returns `false` if it was ignored.
    pub fn handle_key(&mut self, key: ArrowKey, shift: bool) -> bool {
        if !self.attached {
            return false;
        }

        self.engine.nudge(key, shift).is_some()
    }
}
