pub mod colors;
mod card;
mod footer;
mod popups;

use crate::app::{App, AppState};
use crate::help::render_help_popup;
use colors::{GRAY_COLOR, WHITE_COLOR};
pub use popups::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

/// Maximum length for deck path display in footer.
const MAX_PATH_LENGTH: usize = 60;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, middle, bottom] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)])
                .areas(area);

        // Title
        let deck_title = self
            .player
            .as_ref()
            .map(|player| format!(" {} ", player.deck().title))
            .unwrap_or_else(|| " riffle ".to_string());
        let title_middle = Line::from(deck_title).centered();
        let title_right = Line::from(format!("v{}", env!("CARGO_PKG_VERSION")))
            .right_aligned()
            .style(Style::default().fg(WHITE_COLOR));
        let title = Block::default()
            .title_bottom(title_middle)
            .title_bottom(title_right)
            .style(Style::default().bg(GRAY_COLOR));
        title.render(top, buf);

        // Main view
        match &self.app_state {
            AppState::ErrorState(message) => self.render_error(message, middle, buf),
            AppState::Playing => self.render_card_view(middle, buf),
        }

        // Footer
        self.render_footer(bottom, buf);

        // Help popup
        if self.help_visible {
            let help_area = popup_area(area, 36, 12);
            render_help_popup(help_area, buf);
        }
    }
}
