use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};

use crate::{Bounds, Dimensions, Rect};

/// A finished selection as reported to listeners.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The selected rectangle.
    pub rect: Rect,
    /// Its width and height.
    pub dimensions: Dimensions,
}

impl From<Rect> for Selection {
    fn from(rect: Rect) -> Self {
        Self {
            rect,
            dimensions: rect.dimensions(),
        }
    }
}

/// Notifications emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The selection changed during a gesture or a nudge.
    Changed(Rect),

    /// A gesture finished, or the engine was reset.
    Completed(Selection),
}

impl SelectionEvent {
    /// The rectangle carried by the event.
    pub fn rect(&self) -> Rect {
        match self {
            Self::Changed(rect) => *rect,
            Self::Completed(selection) => selection.rect,
        }
    }
}

/// Observer attached to a [`SelectionEngine`](crate::SelectionEngine).
pub trait SelectionListener {
    /// Called for every event, `bounds` are the engine's current bounds.
    fn on_event(&mut self, event: &SelectionEvent, bounds: Bounds);
}

impl<F> SelectionListener for F
where
    F: FnMut(&SelectionEvent, Bounds),
{
    fn on_event(&mut self, event: &SelectionEvent, bounds: Bounds) {
        self(event, bounds);
    }
}

/// A listener the host can still read after handing a clone to the engine.
#[derive(Debug, Default)]
pub struct Shared<L>(Rc<RefCell<L>>);

impl<L> Shared<L> {
    /// Wraps `listener` so it can be shared.
    pub fn new(listener: L) -> Self {
        Self(Rc::new(RefCell::new(listener)))
    }

    /// Borrows the listener, panics if the engine is notifying it right now.
    pub fn borrow(&self) -> Ref<'_, L> {
        self.0.borrow()
    }

    /// Mutably borrows the listener, panics if it is already borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, L> {
        self.0.borrow_mut()
    }
}

impl<L> Clone for Shared<L> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<L: SelectionListener> SelectionListener for Shared<L> {
    fn on_event(&mut self, event: &SelectionEvent, bounds: Bounds) {
        self.0.borrow_mut().on_event(event, bounds);
    }
}
