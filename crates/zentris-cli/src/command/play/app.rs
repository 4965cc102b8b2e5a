use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Text},
};
use zentris_engine::{GameSession, SessionState};

use crate::{
    tui::{App, Tui},
    ui::widgets::SessionDisplay,
};

use super::music::MusicControls;

const FPS: f64 = 60.0;
/// Simulation step per tick at [`FPS`].
const TICK: Duration = Duration::from_micros(16_667);

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: GameSession,
    music: MusicControls,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(session: GameSession) -> Self {
        Self {
            session,
            music: MusicControls::new(),
            is_exiting: false,
        }
    }

    fn is_playing(&self) -> bool {
        self.session.state().is_playing()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(FPS);
        tui.set_frame_rate(FPS);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        let is_playing = self.is_playing();
        let can_toggle_pause = is_playing || self.session.state().is_paused();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_playing => self.session.move_left(),
                KeyCode::Right if is_playing => self.session.move_right(),
                KeyCode::Down if is_playing => self.session.soft_drop(),
                KeyCode::Up if is_playing => self.session.rotate(),
                KeyCode::Char(' ') if is_playing => self.session.hard_drop(),
                KeyCode::Char('p') if can_toggle_pause => self.session.toggle_pause(),
                KeyCode::Char('r') => self.session.restart(),
                KeyCode::Char('m') => self.music.toggle_playback(),
                KeyCode::Char('n') => {
                    self.music.next_track();
                    self.session.refresh_message();
                }
                KeyCode::Char('v') => self.music.toggle_volume(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.session.advance(TICK);
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session);

        let zen_text = Text::from(self.session.zen_message())
            .style(Style::default().fg(Color::Rgb(186, 186, 214)))
            .centered();

        let help_text = match self.session.state() {
            SessionState::Playing => {
                "← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | Space (Hard Drop) | P (Pause) | R (Restart) | Q (Quit)"
            }
            SessionState::Paused => "P (Resume) | R (Restart) | Q (Quit)",
            SessionState::GameOver => "R (Restart) | Q (Quit)",
        };
        let music_line = format!(
            "music {} | track {}/{} | {}   M (Play/Pause) | N (Next Track) | V (Volume)",
            self.music.playback_label(),
            self.music.track() + 1,
            MusicControls::TRACK_COUNT,
            self.music.volume_label(),
        );
        let footer = Text::from(vec![Line::from(help_text), Line::from(music_line)])
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, zen_area, footer_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        frame.render_widget(session_display, main_area);
        frame.render_widget(zen_text, zen_area);
        frame.render_widget(footer, footer_area);
    }
}
