use anyhow::{ensure, Result};

use crate::client::DrawClient;
use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputFrame, InputState};
use crate::native::NativeBackend;
use crate::time::FrameClock;

use super::config::{EventPollMode, RunConfig};
use super::stop::StopHandle;

/// What a finished run did.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub events: u64,
    /// Non-fatal errors reported by the app or the update hook.
    pub errors: u64,
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Runs frames until the app exits, `config.max_frames` is reached,
    /// `stop` fires, or the client is shut down from inside a frame.
    ///
    /// Each iteration: pace, tick, `on_frame`, optional `update`,
    /// `process_events`, then drain events into input state and `on_event`.
    /// The client must already be initialized.
    pub fn run<B, A>(
        client: &mut DrawClient<B>,
        config: &RunConfig,
        stop: &StopHandle,
        app: &mut A,
    ) -> Result<RunSummary>
    where
        B: NativeBackend,
        A: App<B>,
    {
        ensure!(
            client.state().is_active(),
            "run loop needs an initialized client (state: {:?})",
            client.state()
        );

        let mut clock = FrameClock::new();
        let mut input_state = InputState::default();
        let mut input_frame = InputFrame::default();
        let mut summary = RunSummary::default();

        log::debug!("run loop starting with {:?}", config.poll_mode);

        loop {
            if stop.is_stopped() {
                log::debug!("stop requested");
                break;
            }
            if config.max_frames.is_some_and(|max| summary.frames >= max) {
                break;
            }

            if let EventPollMode::Throttled(interval) = config.poll_mode {
                clock.pace(interval);
            }
            let time = clock.tick();

            let control = {
                let mut ctx = FrameCtx {
                    client: &mut *client,
                    input: &input_state,
                    input_frame: &input_frame,
                    time,
                    stop,
                };
                match app.on_frame(&mut ctx) {
                    Ok(control) => control,
                    Err(e) => {
                        log::warn!("frame {}: {e}", time.frame_index);
                        summary.errors += 1;
                        AppControl::Continue
                    }
                }
            };

            // Deltas were consumed by this frame.
            input_frame.clear();

            if !client.state().is_active() {
                log::debug!("client left the active state during frame {}", time.frame_index);
                summary.frames += 1;
                break;
            }

            if config.call_update_hook {
                if let Err(e) = client.update() {
                    log::warn!("update hook failed: {e}");
                    summary.errors += 1;
                }
            }

            client.process_events();

            let mut exit = control == AppControl::Exit;
            if config.drain_input {
                for ev in client.poll_events() {
                    summary.events += 1;
                    input_state.apply_event(&mut input_frame, ev);
                    if app.on_event(&ev) == AppControl::Exit {
                        exit = true;
                    }
                }
            }

            summary.frames += 1;

            if exit {
                log::debug!("app requested exit");
                break;
            }
        }

        log::info!(
            "run loop finished: {} frames, {} events, {} errors",
            summary.frames,
            summary.events,
            summary.errors
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientConfig, ClientState, DrawError};
    use crate::coords::Color;
    use crate::core::FrameError;
    use crate::input::{Event, Key};
    use crate::native::fake::{Call, FakeBackend};
    use crate::native::{RawEvent, EVENT_MOUSE_CLICK};
    use crate::scene::{Rectangle, ShapeStyle};

    fn client() -> DrawClient<FakeBackend> {
        let mut c = DrawClient::with_backend(FakeBackend::new(), ClientConfig::default());
        c.initialize().unwrap();
        c
    }

    fn immediate(frames: u64) -> RunConfig {
        RunConfig {
            poll_mode: EventPollMode::Immediate,
            max_frames: Some(frames),
            ..RunConfig::default()
        }
    }

    /// Widens the window by one pixel per frame.
    struct Grower {
        width: u32,
        events: Vec<Event>,
        seen_in_frame: usize,
    }

    impl App<FakeBackend> for Grower {
        fn on_event(&mut self, event: &Event) -> AppControl {
            self.events.push(*event);
            if event.key() == Some(Key::Escape) {
                AppControl::Exit
            } else {
                AppControl::Continue
            }
        }

        fn on_frame(&mut self, ctx: &mut FrameCtx<'_, FakeBackend>) -> Result<AppControl, FrameError> {
            self.seen_in_frame += ctx.input_frame.events.len();
            self.width += 1;
            ctx.client.resize_window(self.width, 800)?;
            ctx.client.draw_rectangle(&Rectangle::new(
                ctx.time.frame_index as f32,
                0.0,
                10.0,
                10.0,
                ShapeStyle::outline(Color::white(), 1.0),
            ))?;
            Ok(AppControl::Continue)
        }
    }

    fn grower() -> Grower {
        Grower { width: 800, events: Vec::new(), seen_in_frame: 0 }
    }

    #[test]
    fn runs_the_frame_budget() {
        let mut c = client();
        let mut app = grower();
        let summary = Runtime::run(&mut c, &immediate(100), &StopHandle::new(), &mut app).unwrap();

        assert_eq!(summary.frames, 100);
        assert_eq!(summary.errors, 0);
        assert_eq!(c.window_state().map(|w| w.width), Some(900));
        assert_eq!(c.backend().count(|call| *call == Call::ProcessEvents), 100);
        assert_eq!(c.state(), ClientState::Running);
    }

    #[test]
    fn stop_handle_ends_the_loop_before_any_frame() {
        let mut c = client();
        let stop = StopHandle::new();
        stop.stop();
        let summary = Runtime::run(&mut c, &RunConfig::default(), &stop, &mut grower()).unwrap();
        assert_eq!(summary.frames, 0);
        assert!(c.backend().calls.iter().all(|call| !matches!(call, Call::ProcessEvents)));
    }

    #[test]
    fn events_reach_app_and_next_frame() {
        let mut c = client();
        c.backend_mut().push_event(RawEvent::mouse(EVENT_MOUSE_CLICK, 4.0, 5.0, 0, true));
        c.backend_mut().push_event(RawEvent::key(0x00, true));

        let mut app = grower();
        let summary = Runtime::run(&mut c, &immediate(3), &StopHandle::new(), &mut app).unwrap();

        assert_eq!(summary.events, 2);
        assert_eq!(app.events.len(), 2);
        // Drained after frame 0, visible to frame 1 only.
        assert_eq!(app.seen_in_frame, 2);
        assert_eq!(c.backend().outstanding(), 0);
    }

    #[test]
    fn escape_key_exits() {
        let mut c = client();
        c.backend_mut().push_event(RawEvent::key(0x35, true));
        let cfg = RunConfig { poll_mode: EventPollMode::Immediate, ..RunConfig::default() };
        let summary = Runtime::run(&mut c, &cfg, &StopHandle::new(), &mut grower()).unwrap();
        assert_eq!(summary.frames, 1);
    }

    #[test]
    fn frame_errors_are_counted_not_fatal() {
        let mut c = client();
        c.backend_mut().missing.insert("drawRectangle");
        let summary = Runtime::run(&mut c, &immediate(5), &StopHandle::new(), &mut grower()).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.errors, 5);
    }

    #[test]
    fn update_hook_is_opt_in() {
        let mut c = client();
        Runtime::run(&mut c, &immediate(2), &StopHandle::new(), &mut grower()).unwrap();
        assert_eq!(c.backend().count(|call| *call == Call::Update), 0);

        let cfg = RunConfig { call_update_hook: true, ..immediate(2) };
        Runtime::run(&mut c, &cfg, &StopHandle::new(), &mut grower()).unwrap();
        assert_eq!(c.backend().count(|call| *call == Call::Update), 2);
    }

    #[test]
    fn uninitialized_client_is_rejected() {
        let mut c = DrawClient::with_backend(FakeBackend::new(), ClientConfig::default());
        assert!(Runtime::run(&mut c, &immediate(1), &StopHandle::new(), &mut grower()).is_err());
    }

    #[test]
    fn app_can_stop_through_context() {
        struct StopsItself;
        impl App<FakeBackend> for StopsItself {
            fn on_frame(&mut self, ctx: &mut FrameCtx<'_, FakeBackend>) -> Result<AppControl, FrameError> {
                ctx.stop.stop();
                Err(DrawError::NotRunning.into())
            }
        }

        let mut c = client();
        let summary = Runtime::run(&mut c, &RunConfig::default(), &StopHandle::new(), &mut StopsItself).unwrap();
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn shutdown_inside_a_frame_ends_the_loop() {
        struct ShutsDown;
        impl App<FakeBackend> for ShutsDown {
            fn on_frame(&mut self, ctx: &mut FrameCtx<'_, FakeBackend>) -> Result<AppControl, FrameError> {
                ctx.client.shutdown();
                Ok(AppControl::Continue)
            }
        }

        let mut c = client();
        let summary = Runtime::run(&mut c, &immediate(10_000), &StopHandle::new(), &mut ShutsDown).unwrap();
        assert_eq!(summary.frames, 1);
        assert_eq!(c.state(), ClientState::Shutdown);
        assert_eq!(c.backend().count(|call| *call == Call::ProcessEvents), 0);
    }
}
