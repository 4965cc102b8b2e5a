use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Widget},
};
use zentris_engine::{GameSession, SessionState};

use crate::ui::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// Full game scene: stats panel, board with ghost projection, next-piece
/// preview, and state popups.
#[derive(Debug)]
pub(crate) struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    pub(crate) fn height(&self) -> u16 {
        // Board plus its border
        22
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.session.state() {
            // Leveling up shifts the frame tint, never the pace
            SessionState::Playing => style::level_tint(self.session.stats().level()),
            SessionState::Paused => color::LIGHT_YELLOW,
            SessionState::GameOver => color::ROSE,
        };
        let panel = |title: &'static str| {
            BlockWidget::bordered()
                .title(Line::from(title).centered())
                .padding(Padding::symmetric(1, 0))
                .border_style(Style::new().fg(border_color))
                .style(style::DEFAULT)
        };

        let game_board = {
            let widget = BoardDisplay::new(self.session.board()).block(
                BlockWidget::bordered()
                    .border_style(Style::new().fg(border_color))
                    .style(style::DEFAULT),
            );
            if self.session.state().is_game_over() {
                widget
            } else {
                widget
                    .falling_piece(self.session.falling_piece())
                    .ghost(self.session.ghost_piece())
            }
        };
        let stats_panel = StatsDisplay::new(self.session.stats()).block(panel("STATS"));
        let next_panel = PieceDisplay::new()
            .piece(self.session.next_piece())
            .block(panel("NEXT"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats_panel.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_panel.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        stats_panel.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);

        match self.session.state() {
            SessionState::Playing => {}
            SessionState::Paused => {
                let style = Style::new().fg(color::NIGHT).bg(color::LIGHT_YELLOW);
                popup(board_area, buf, Text::styled("PAUSED", style), style);
            }
            SessionState::GameOver => {
                let style = Style::new().fg(color::WHITE).bg(color::ROSE);
                let text = Text::from(vec![
                    Line::from("GAME OVER"),
                    Line::from(format!("final score {}", self.session.stats().score())),
                    Line::from("press R for a fresh board"),
                ])
                .style(style);
                popup(board_area, buf, text, style);
            }
        }
    }
}

fn popup(board_area: Rect, buf: &mut Buffer, text: Text, style: Style) {
    let lines = u16::try_from(text.lines.len()).unwrap_or(1);
    let area = board_area.centered(
        Constraint::Length(board_area.width),
        Constraint::Length(lines + 2),
    );
    let block = BlockWidget::new().style(style);
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    text.centered()
        .render(inner.centered_vertically(Constraint::Length(lines)), buf);
}
