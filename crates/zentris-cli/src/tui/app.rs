use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// A TUI application driven by [`Tui::run`].
pub trait App {
    /// Called once before the event loop starts; configure tick and frame
    /// rates here.
    fn init(&mut self, tui: &mut Tui);

    /// When true, the event loop stops and the terminal is restored.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize).
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    /// Advances the simulation by one tick.
    fn update(&mut self, tui: &mut Tui);

    /// Paints one frame.
    fn draw(&self, frame: &mut Frame);
}
