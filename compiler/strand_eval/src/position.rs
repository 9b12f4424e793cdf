//! Position notifications for call expressions.
//!
//! Immediately before every call-expression invocation the interpreter
//! publishes the call's source position. Consumers (debuggers, step
//! highlighters, tests) observe the stream through a handler:
//! - `Silent`: discards events (default)
//! - `Buffer`: records events for later inspection
//! - `Listeners`: forwards each event to subscribed callbacks
//!
//! Uses enum dispatch rather than trait objects for the handler itself;
//! only the subscribed callbacks are boxed.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use strand_ir::Position;

/// Event published before a call expression is invoked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionEvent {
    pub line: u32,
    pub column: u32,
}

impl From<Position> for PositionEvent {
    fn from(position: Position) -> Self {
        PositionEvent {
            line: position.line,
            column: position.column,
        }
    }
}

/// Handler that captures events in order.
#[derive(Default)]
pub struct BufferPositionHandler {
    events: Mutex<Vec<PositionEvent>>,
}

impl BufferPositionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, event: PositionEvent) {
        self.events.lock().push(event);
    }

    /// All events captured so far.
    pub fn events(&self) -> Vec<PositionEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

/// Callback invoked for every event.
pub type PositionListener = Box<dyn Fn(PositionEvent) + Send + Sync>;

/// Handler that fans events out to subscribers, in subscription order.
#[derive(Default)]
pub struct ListenerPositionHandler {
    listeners: RwLock<Vec<PositionListener>>,
}

impl ListenerPositionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(PositionEvent) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    pub fn notify(&self, event: PositionEvent) {
        for listener in self.listeners.read().iter() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

/// Position handler implementation using enum dispatch.
pub enum PositionHandlerImpl {
    /// Discards all events.
    Silent,
    /// Captures events (testing, replay).
    Buffer(BufferPositionHandler),
    /// Forwards events to subscribed callbacks.
    Listeners(ListenerPositionHandler),
}

impl PositionHandlerImpl {
    /// Publish one event.
    #[inline]
    pub fn notify(&self, event: PositionEvent) {
        match self {
            Self::Silent => {}
            Self::Buffer(h) => h.notify(event),
            Self::Listeners(h) => h.notify(event),
        }
    }

    /// Captured events; empty for handlers that don't capture.
    pub fn events(&self) -> Vec<PositionEvent> {
        match self {
            Self::Buffer(h) => h.events(),
            Self::Silent | Self::Listeners(_) => Vec::new(),
        }
    }

    /// Clear captured events. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }

    /// Add a subscriber. Returns `false` if this handler does not accept
    /// subscribers.
    pub fn subscribe(&self, listener: impl Fn(PositionEvent) + Send + Sync + 'static) -> bool {
        match self {
            Self::Listeners(h) => {
                h.subscribe(listener);
                true
            }
            Self::Silent | Self::Buffer(_) => false,
        }
    }
}

/// Shared position handler that can be passed around.
pub type SharedPositionHandler = Arc<PositionHandlerImpl>;

/// Create a handler that discards events.
pub fn silent_handler() -> SharedPositionHandler {
    Arc::new(PositionHandlerImpl::Silent)
}

/// Create a handler that records events.
pub fn buffer_handler() -> SharedPositionHandler {
    Arc::new(PositionHandlerImpl::Buffer(BufferPositionHandler::new()))
}

/// Create a handler that forwards events to subscribers.
pub fn listener_handler() -> SharedPositionHandler {
    Arc::new(PositionHandlerImpl::Listeners(ListenerPositionHandler::new()))
}
