//! Sliding-shapes demo.
//!
//! Opens the native window at 800x800, draws a banner rectangle, then slides
//! a rectangle to the right while reshaping a path and widening the window
//! by one pixel each time the slide crosses a whole unit. Escape quits.
//!
//! Usage: `easel-demo [path/to/native/library]`

use std::process::ExitCode;

use anyhow::{Context, Result};
use easel_client::core::{App, AppControl, FrameCtx, FrameError};
use easel_client::input::Key;
use easel_client::logging::{init_logging, LoggingConfig};
use easel_client::runtime::{RunConfig, Runtime, StopHandle};
use easel_client::{ClientConfig, Color, DrawClient, Event, Path, Point, Rectangle, ShapeStyle};

const START_SIZE: u32 = 800;
const SLIDE_PER_FRAME: f32 = 0.01;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let mut config = ClientConfig::default();
    if let Some(path) = std::env::args_os().nth(1) {
        config.library_path = path.into();
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: ClientConfig) -> Result<()> {
    let mut client = DrawClient::new(config);
    client
        .initialize()
        .context("native platform startup failed")?;

    client.process_events();
    client.resize_window(START_SIZE, START_SIZE)?;
    if let Err(e) = client.set_window_title("easel demo") {
        log::debug!("window title not set: {e}");
    }

    client.draw_rectangle(&Rectangle::new(
        0.0,
        0.0,
        500.0,
        50.0,
        ShapeStyle::filled(Color::new(1.0, 0.5, 0.0, 0.0), Color::new(0.0, 0.0, 1.0, 1.0), 1.0),
    ))?;
    client.process_events();

    let stop = StopHandle::new();
    let mut app = Slider::new(START_SIZE, START_SIZE);
    let summary = Runtime::run(&mut client, &RunConfig::default(), &stop, &mut app)?;
    log::info!("demo done after {} frames", summary.frames);

    client.shutdown();
    Ok(())
}

struct Slider {
    x_pos: f32,
    y_pos: f32,
    /// Last whole slide position that triggered a redraw.
    cached_x: i32,
    width: u32,
    height: u32,
}

impl Slider {
    fn new(width: u32, height: u32) -> Self {
        Self {
            x_pos: 0.0,
            y_pos: 0.0,
            cached_x: 0,
            width,
            height,
        }
    }

    /// Next window width, or `None` once `limit` is reached.
    fn widen(&mut self, limit: u32) -> Option<u32> {
        if self.width >= limit {
            return None;
        }
        self.width += 1;
        Some(self.width)
    }
}

impl App for Slider {
    fn on_event(&mut self, event: &Event) -> AppControl {
        log::info!("{event}");
        if event.key() == Some(Key::Escape) {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl, FrameError> {
        self.x_pos += SLIDE_PER_FRAME;

        let whole = self.x_pos as i32;
        if whole == self.cached_x {
            return Ok(AppControl::Continue);
        }
        self.cached_x = whole;

        ctx.client.draw_path(&Path::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 100.0),
                Point::new(100.0, self.x_pos),
                Point::new(100.0, 0.0),
            ],
            ShapeStyle::filled(Color::new(0.5, 0.0, 0.0, 1.0), Color::new(0.0, 1.0, 0.0, 1.0), 1.0),
        ))?;

        ctx.client.draw_rectangle(&Rectangle::new(
            self.x_pos,
            self.y_pos,
            500.0,
            50.0,
            ShapeStyle::filled(Color::new(1.0, 0.5, 0.0, 1.0), Color::new(0.0, 0.0, 1.0, 1.0), 1.0),
        ))?;

        let limit = ctx.client.config().window_dimension_limit();
        if let Some(width) = self.widen(limit) {
            ctx.client.resize_window(width, self.height)?;
            match ctx.client.native_window_width() {
                Ok(w) => log::debug!("native window width: {w}"),
                Err(e) => log::debug!("native window width unavailable: {e}"),
            }
        }

        Ok(AppControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_stops_at_the_limit() {
        let mut slider = Slider::new(798, 800);
        assert_eq!(slider.widen(800), Some(799));
        assert_eq!(slider.widen(800), Some(800));
        assert_eq!(slider.widen(800), None);
        assert_eq!(slider.widen(800), None);
        assert_eq!(slider.width, 800);
    }

    #[test]
    fn default_limit_is_reachable_from_start_size() {
        let limit = ClientConfig::default().window_dimension_limit();
        let mut slider = Slider::new(START_SIZE, START_SIZE);
        let steps = std::iter::from_fn(|| slider.widen(limit)).count();
        assert_eq!(steps as u32, limit - START_SIZE);
        assert_eq!(slider.width, limit);
    }
}
