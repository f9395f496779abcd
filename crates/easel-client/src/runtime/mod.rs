//! Cooperative frame loop.
//!
//! Drives a [`DrawClient`](crate::DrawClient) from the owning thread until the
//! application exits, a frame budget runs out, or a [`StopHandle`] fires.

mod config;
mod run_loop;
mod stop;

pub use config::{EventPollMode, RunConfig};
pub use run_loop::{RunSummary, Runtime};
pub use stop::StopHandle;
