use crate::app::App;
use crate::ui::MAX_PATH_LENGTH;
use crate::ui::colors::{FOOTER_BG, WHITE_COLOR};
use num_format::{Locale, ToFormattedString};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

impl App {
    /// Formats coverage information for the footer: how much of the deck has
    /// been seen, and how many views this session's stats hold in total.
    pub(super) fn format_progression_text(&self) -> String {
        let Some(player) = &self.player else {
            return String::new();
        };
        let total = player.deck().len();
        let seen = player.stats().seen_cards().min(total);
        let views = player.stats().total_views();
        let percent = if total > 0 { (seen * 100) / total } else { 0 };

        format!(
            "seen {}/{} ({:3}%) · {} views",
            seen,
            total,
            percent,
            views.to_formatted_string(&Locale::en)
        )
    }

    pub(super) fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let path = &self.deck_path;
        let shown_path = if path.chars().count() > MAX_PATH_LENGTH {
            let skip = path.chars().count().saturating_sub(MAX_PATH_LENGTH);
            let suffix: String = path.chars().skip(skip).collect();
            format!("...{}", suffix)
        } else {
            path.clone()
        };

        let progression = format!("{} ", self.format_progression_text());
        let [left, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(progression.chars().count() as u16),
        ])
        .areas(area);

        Block::default()
            .style(Style::default().bg(FOOTER_BG))
            .render(area, buf);

        Paragraph::new(Line::from(format!(" {}", shown_path)))
            .style(Style::default().fg(WHITE_COLOR))
            .render(left, buf);

        Paragraph::new(Line::from(progression))
            .style(Style::default().fg(WHITE_COLOR))
            .render(right, buf);
    }
}
