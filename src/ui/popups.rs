use crate::app::App;
use crate::ui::colors::MESSAGE_ERROR_FG;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Calculates a centered popup area within the given rect.
///
/// The popup will be centered with at least 2 characters margin on all sides.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let min_margin = 2;

    let max_width = area.width.saturating_sub(2 * min_margin);
    let max_height = area.height.saturating_sub(2 * min_margin);

    let popup_width = width.min(max_width);
    let popup_height = height.min(max_height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}

impl App {
    /// Renders a load failure as a centered message box.
    pub(super) fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let lines: Vec<&str> = message.split('\n').collect();
        let max_line_width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

        let popup_width = (max_line_width as u16 + 6).min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = popup_area(area, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Error ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MESSAGE_ERROR_FG));

        Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}
