use crate::client::DrawClient;
use crate::input::{InputFrame, InputState};
use crate::native::{DylibBackend, NativeBackend};
use crate::runtime::StopHandle;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// `input_frame` holds the events drained after the previous frame.
pub struct FrameCtx<'a, B: NativeBackend = DylibBackend> {
    pub client: &'a mut DrawClient<B>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub stop: &'a StopHandle,
}
