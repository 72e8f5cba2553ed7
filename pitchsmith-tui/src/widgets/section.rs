//! Bordered section panel for the form and output columns.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct SectionPanel<'a> {
    pub title: &'a str,
    pub lines: Vec<Line<'a>>,
    pub border_style: Style,
    pub title_style: Style,
}

impl<'a> SectionPanel<'a> {
    pub fn render(self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(ratatui::text::Span::styled(self.title, self.title_style));
        let widget = Paragraph::new(Text::from(self.lines))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(widget, area);
    }
}
