use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{
    block_display::*, board_display::*, piece_display::*, session_display::*, stats_display::*,
};

mod block_display;
mod board_display;
mod piece_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    // Soft pastel palette for a calm board
    pub const PINK: Color = Color::Rgb(255, 182, 193);
    pub const LAVENDER: Color = Color::Rgb(230, 230, 250);
    pub const LIGHT_YELLOW: Color = Color::Rgb(240, 230, 140);
    pub const PALE_GREEN: Color = Color::Rgb(152, 251, 152);
    pub const SKY_BLUE: Color = Color::Rgb(135, 206, 235);
    pub const PLUM: Color = Color::Rgb(221, 160, 221);
    pub const WHEAT: Color = Color::Rgb(245, 222, 179);
    pub const ROSE: Color = Color::Rgb(219, 112, 147);
    pub const GRAY: Color = Color::Rgb(110, 110, 130);
    pub const NIGHT: Color = Color::Rgb(16, 16, 24);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
}

pub(crate) mod style {
    use ratatui::style::{Color, Style};
    use zentris_engine::PieceKind;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        fg_bg(color, color)
    }

    pub(crate) const DEFAULT: Style = fg_bg(color::WHITE, color::NIGHT);
    pub(crate) const EMPTY_DOT: Style = fg_bg(color::GRAY, color::NIGHT);

    #[must_use]
    pub(crate) fn piece_color(kind: PieceKind) -> Color {
        match kind {
            PieceKind::I => color::PINK,
            PieceKind::O => color::LAVENDER,
            PieceKind::T => color::LIGHT_YELLOW,
            PieceKind::S => color::PALE_GREEN,
            PieceKind::Z => color::SKY_BLUE,
            PieceKind::J => color::PLUM,
            PieceKind::L => color::WHEAT,
        }
    }

    #[must_use]
    pub(crate) fn piece(kind: PieceKind) -> Style {
        bg_only(piece_color(kind))
    }

    /// Ghost cells keep the piece color but only as a faint foreground
    /// shade, standing in for the reference's translucency.
    #[must_use]
    pub(crate) fn ghost(kind: PieceKind) -> Style {
        fg_bg(piece_color(kind), color::NIGHT)
    }

    /// Border tint for the level's cosmetic color shift.
    #[must_use]
    pub(crate) fn level_tint(level: usize) -> Color {
        const TINTS: [Color; 7] = [
            color::WHITE,
            color::PINK,
            color::LIGHT_YELLOW,
            color::PALE_GREEN,
            color::SKY_BLUE,
            color::PLUM,
            color::WHEAT,
        ];
        TINTS[level.saturating_sub(1) % TINTS.len()]
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
