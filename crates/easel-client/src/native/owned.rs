use std::ptr::NonNull;

use crate::input::Event;

use super::backend::NativeBackend;
use super::records::RawEvent;

/// A polled native event record, released on drop.
///
/// Fields are copied out with [`decode`](Self::decode); the native allocation
/// goes back to the backend when this value leaves scope, on every path.
pub struct OwnedNativeEvent<'b, B: NativeBackend + ?Sized> {
    ptr: NonNull<RawEvent>,
    backend: &'b mut B,
}

impl<'b, B: NativeBackend + ?Sized> OwnedNativeEvent<'b, B> {
    /// Fetches the next record, if any.
    pub fn poll(backend: &'b mut B) -> Option<Self> {
        let ptr = backend.poll_event()?;
        Some(Self { ptr, backend })
    }

    /// Copy of the raw record.
    pub fn raw(&self) -> RawEvent {
        // SAFETY: `ptr` came from `poll_event` and is released only in `drop`.
        // The record may not be 4-byte aligned if the native allocator is odd;
        // an unaligned read covers both cases.
        unsafe { self.ptr.as_ptr().read_unaligned() }
    }

    pub fn decode(&self) -> Option<Event> {
        self.raw().decode()
    }
}

impl<B: NativeBackend + ?Sized> Drop for OwnedNativeEvent<'_, B> {
    fn drop(&mut self) {
        // SAFETY: ownership of `ptr` is exclusive to this value and it is
        // released exactly once, here.
        unsafe { self.backend.release_event(self.ptr) };
    }
}
