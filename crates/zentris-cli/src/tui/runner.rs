use std::time::Duration;

use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

const DEFAULT_RATE: f64 = 60.0;

/// TUI application runtime.
///
/// Owns the event loop and executes applications that implement the [`App`]
/// trait.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    #[must_use]
    pub fn new() -> Self {
        let interval = rate_interval(DEFAULT_RATE);
        Self {
            events: EventLoop::new(interval, interval),
        }
    }

    /// Sets the tick rate (Hz, simulation updates per second).
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.events.set_tick_interval(rate_interval(rate));
    }

    /// Sets the frame rate (Hz, renders per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.events.set_render_interval(rate_interval(rate));
    }

    /// Runs the application until it asks to exit.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - `Terminal`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Terminal(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}

fn rate_interval(rate: f64) -> Duration {
    Duration::from_secs_f64(1.0 / rate)
}
