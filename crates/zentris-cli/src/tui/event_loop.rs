use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

/// Events delivered to the application.
#[derive(Debug)]
pub(super) enum TuiEvent {
    /// Advance the simulation.
    Tick,
    /// Paint a frame.
    Render,
    /// Terminal input (key, mouse, resize).
    Terminal(Event),
}

/// Deadline-based event source.
///
/// Tracks the next tick and render deadlines and blocks on terminal input in
/// between. The render deadline is unconditional: frames are painted at the
/// fixed rate whether or not anything changed, so the scene is always redrawn
/// after a gravity step without extra bookkeeping.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration, render_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            tick_interval,
            render_interval,
            last_tick: now,
            last_render: now,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_interval(&mut self, interval: Duration) {
        self.render_interval = interval;
    }

    /// Returns the next event, blocking until a deadline passes or the
    /// terminal has input.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                return Ok(TuiEvent::Render);
            }

            let next_deadline = Ord::min(
                self.last_tick + self.tick_interval,
                self.last_render + self.render_interval,
            );
            let timeout = next_deadline.saturating_duration_since(now);
            if event::poll(timeout)? {
                return Ok(TuiEvent::Terminal(event::read()?));
            }
        }
    }
}
