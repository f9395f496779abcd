use std::iter::FusedIterator;

use crate::input::Event;
use crate::native::{NativeBackend, OwnedNativeEvent};

/// Lazy drain of the native event queue.
///
/// Each `next()` fetches one record, copies it out and releases it before
/// returning. Iteration ends the first time the queue reports empty and does
/// not resume afterwards. Records with an unknown tag are released and
/// skipped.
pub struct EventDrain<'a, B: NativeBackend> {
    backend: &'a mut B,
    done: bool,
}

impl<'a, B: NativeBackend> EventDrain<'a, B> {
    pub(crate) fn new(backend: &'a mut B) -> Self {
        Self { backend, done: false }
    }

    /// A drain that yields nothing and never touches the backend.
    pub(crate) fn finished(backend: &'a mut B) -> Self {
        Self { backend, done: true }
    }
}

impl<B: NativeBackend> Iterator for EventDrain<'_, B> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        while !self.done {
            let Some(owned) = OwnedNativeEvent::poll(&mut *self.backend) else {
                self.done = true;
                break;
            };

            let raw = owned.raw();
            drop(owned);

            match raw.decode() {
                Some(ev) => {
                    log::trace!("event: {ev}");
                    return Some(ev);
                }
                None => log::warn!("skipping native event with unknown type {}", raw.kind),
            }
        }
        None
    }
}

impl<B: NativeBackend> FusedIterator for EventDrain<'_, B> {}
