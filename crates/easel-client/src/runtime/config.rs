use std::time::Duration;

/// How the loop paces iterations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventPollMode {
    /// Spin without sleeping.
    Immediate,
    /// Keep at least this much time between frame starts.
    Throttled(Duration),
}

impl Default for EventPollMode {
    fn default() -> Self {
        EventPollMode::Throttled(Duration::from_micros(100))
    }
}

/// Run loop configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub poll_mode: EventPollMode,

    /// Drain application-visible events after each `process_events`.
    pub drain_input: bool,

    /// Call the optional native `update` hook each frame.
    pub call_update_hook: bool,

    /// Stop after this many frames. `None` runs until told to stop.
    pub max_frames: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            poll_mode: EventPollMode::default(),
            drain_input: true,
            call_update_hook: false,
            max_frames: None,
        }
    }
}
