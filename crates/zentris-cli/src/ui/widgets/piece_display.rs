use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use zentris_engine::PieceKind;

use crate::ui::widgets::BlockDisplay;

/// Preview pane showing a single piece in its spawn orientation.
#[derive(Debug, Default)]
pub(crate) struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn piece(self, piece: PieceKind) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        2 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(kind) = self.piece else {
            return;
        };

        let shape = kind.shape();
        let display = BlockDisplay::piece(kind);
        // Center the shape in the 4x2 preview grid
        let x0 = (4 - shape.width()) / 2;
        let y0 = 2usize.saturating_sub(shape.height()) / 2;

        for y in 0..shape.height() {
            for x in 0..shape.width() {
                if !shape.is_occupied(x, y) {
                    continue;
                }
                let cell_area = Rect::new(
                    area.x + (x0 + x) as u16 * BlockDisplay::width(),
                    area.y + (y0 + y) as u16,
                    BlockDisplay::width(),
                    1,
                )
                .intersection(area);
                if !cell_area.is_empty() {
                    Widget::render(&display, cell_area, buf);
                }
            }
        }
    }
}
