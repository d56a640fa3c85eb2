//! Binding primitives shared by components
//!
//! An owner pushes values into an owned component through an [`Input`] slot,
//! and the owned component notifies its owner through an [`EventEmitter`].
//! The emitter never touches owner state: it maps the payload into one of the
//! owner's messages and hands it back, and the owner dispatches it.

use std::fmt;

/// Input slot receiving a value from the owning component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Input<T> {
    value: T,
}

impl<T: PartialEq> Input<T> {
    pub fn new(value: T) -> Self {
        Input { value }
    }

    /// Replace the bound value, returns true if it changed
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

type Handler<T, M> = Box<dyn Fn(T) -> M + Send>;

/// Output event carrying a `T` payload to the owner as an `M` message
pub struct EventEmitter<T, M> {
    handler: Option<Handler<T, M>>,
}

impl<T, M> EventEmitter<T, M> {
    pub fn new() -> Self {
        EventEmitter { handler: None }
    }

    /// Bind the owner's handler, replacing any previous one
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(T) -> M + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    pub fn is_bound(&self) -> bool {
        self.handler.is_some()
    }

    /// Deliver `payload` to the owner. `None` when nobody is subscribed.
    pub fn emit(&self, payload: T) -> Option<M> {
        self.handler.as_ref().map(|handler| handler(payload))
    }
}

impl<T, M> Default for EventEmitter<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> fmt::Debug for EventEmitter<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("bound", &self.is_bound())
            .finish()
    }
}
