//! Listener registration with an owned, revocable subscription.
//!
//! An [`InputSource`] registers platform listeners that forward into an
//! [`InputSink`]. It hands back a [`Subscription`] whose drop unregisters
//! every listener it installed, so repeated init/teardown cycles never
//! stack listeners.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::event::InputEvent;
use super::processor::InputProcessor;
use crate::error::EditorError;

/// Shared handle to an [`InputProcessor`], cloned into every listener.
#[derive(Clone, Default)]
pub struct InputSink {
    processor: Rc<RefCell<InputProcessor>>,
}

impl InputSink {
    /// Wrap a processor.
    #[must_use]
    pub fn new(processor: InputProcessor) -> Self {
        Self {
            processor: Rc::new(RefCell::new(processor)),
        }
    }

    /// Forward one event. Returns `false` if the processor was busy (an
    /// event fired while the frame update held it) and the event was
    /// dropped.
    pub fn push(&self, event: InputEvent) -> bool {
        if let Ok(mut processor) = self.processor.try_borrow_mut() {
            processor.handle_event(event);
            true
        } else {
            log::warn!("input processor busy, dropping {event:?}");
            false
        }
    }

    /// Run `f` against the processor. `None` if it is already borrowed.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut InputProcessor) -> R,
    ) -> Option<R> {
        self.processor
            .try_borrow_mut()
            .ok()
            .map(|mut processor| f(&mut processor))
    }

    /// Number of live handles, including this one.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.processor)
    }
}

impl fmt::Debug for InputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSink")
            .field("handles", &self.handle_count())
            .finish_non_exhaustive()
    }
}

/// A platform event surface that can feed an [`InputSink`].
pub trait InputSource {
    /// Install listeners forwarding into `sink`.
    ///
    /// The listeners stay installed until the returned [`Subscription`] is
    /// dropped.
    fn subscribe(&self, sink: InputSink) -> Result<Subscription, EditorError>;
}

/// Guard over installed listeners. Dropping it unregisters them.
#[must_use = "dropping a Subscription immediately unregisters its listeners"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Build a guard that runs `release` exactly once when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregister now rather than at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
