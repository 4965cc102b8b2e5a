use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use zentris_engine::GameStats;

use crate::ui::widgets::style;

/// SCORE / LEVEL / LINES readout.
pub(crate) struct StatsDisplay<'a> {
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub(crate) fn new(stats: &'a GameStats) -> Self {
        Self { stats, block: None }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        14 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        3 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = [
            ("SCORE:", self.stats.score()),
            ("LEVEL:", self.stats.level()),
            ("LINES:", self.stats.lines()),
        ];

        let row_areas = Layout::vertical([Constraint::Length(1); 3]).split(area);
        for ((label, value), row_area) in iter::zip(rows, row_areas.iter().copied()) {
            let [label_area, value_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(row_area);
            Line::styled(label, style::DEFAULT)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value.to_string(), style::DEFAULT)
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
