use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use zentris_engine::{Board, Piece};

use crate::ui::widgets::BlockDisplay;

/// The 10x20 playing field with the falling piece and its ghost projection.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Piece>,
    ghost: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            ghost: None,
            block: None,
        }
    }

    pub(crate) fn falling_piece(self, piece: &'a Piece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub(crate) fn ghost(self, piece: Piece) -> Self {
        Self {
            ghost: Some(piece),
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
        10 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        20 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        for (y, row) in self.board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                render_at(area, buf, x, y, &BlockDisplay::from_cell(cell));
            }
        }

        // Ghost first, falling piece on top where they overlap
        if let Some(ghost) = &self.ghost {
            let display = BlockDisplay::ghost(ghost.kind());
            for (x, y) in visible_cells(ghost) {
                render_at(area, buf, x, y, &display);
            }
        }
        if let Some(piece) = self.falling_piece {
            let display = BlockDisplay::piece(piece.kind());
            for (x, y) in visible_cells(piece) {
                render_at(area, buf, x, y, &display);
            }
        }
    }
}

/// In-board coordinates of the piece's occupied cells; rows overhanging the
/// top edge are not drawn.
fn visible_cells(piece: &Piece) -> impl Iterator<Item = (usize, usize)> + '_ {
    piece.occupied_cells().filter_map(|(x, y)| {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < Board::WIDTH && y < Board::HEIGHT).then_some((x, y))
    })
}

#[expect(clippy::cast_possible_truncation)]
fn render_at(area: Rect, buf: &mut Buffer, x: usize, y: usize, display: &BlockDisplay) {
    let cell_area = Rect::new(
        area.x + x as u16 * BlockDisplay::width(),
        area.y + y as u16,
        BlockDisplay::width(),
        1,
    )
    .intersection(area);
    if !cell_area.is_empty() {
        display.render(cell_area, buf);
    }
}
