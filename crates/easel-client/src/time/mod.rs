//! Frame timing.
//!
//! One [`FrameClock`] per run loop: `pace()` before a frame to honour a
//! throttle interval, `tick()` to obtain the frame's [`FrameTime`].

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
