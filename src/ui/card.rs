use crate::app::App;
use crate::player::CardFace;
use crate::ui::colors::{
    CARD_BACK_FG, CARD_BORDER_FG, HINT_DISABLED_FG, HINT_FG, TAG_FG, WHITE_COLOR,
};
use crate::ui::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

impl App {
    /// Renders the current card centered in the playback area, with the
    /// navigation hints underneath.
    pub(super) fn render_card_view(&self, area: Rect, buf: &mut Buffer) {
        let Some(player) = &self.player else {
            return;
        };

        let [card_zone, hint_zone] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let card = player.current_card();
        let (face_title, text, text_style) = match player.face {
            CardFace::Front => (" Front ", &card.front, Style::default().fg(WHITE_COLOR)),
            CardFace::Back => (" Back ", &card.back, Style::default().fg(CARD_BACK_FG)),
        };

        let card_width = area.width.saturating_sub(8).clamp(20, 64);
        let card_height = area.height.saturating_sub(4).clamp(5, 12);
        let card_area = popup_area(card_zone, card_width, card_height);

        let views = player.stats().views(&card.id);
        let views_title = Line::from(format!(" {} views ", views))
            .right_aligned()
            .style(Style::default().fg(HINT_FG));

        let block = Block::default()
            .title(face_title)
            .title_alignment(Alignment::Center)
            .title_bottom(views_title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER_FG));

        let mut lines = vec![Line::from(""), Line::styled(text.as_str(), text_style)];
        if !card.tags.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                card.tags.join(" · "),
                Style::default().fg(TAG_FG),
            ));
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(card_area, buf);

        self.render_hints(player.can_go_back(), hint_zone, buf);
    }

    fn render_hints(&self, can_go_back: bool, area: Rect, buf: &mut Buffer) {
        let back_style = if can_go_back {
            Style::default().fg(HINT_FG)
        } else {
            Style::default().fg(HINT_DISABLED_FG)
        };
        let hints = Line::from(vec![
            Span::styled("← previous", back_style),
            Span::styled("   space flip   → next", Style::default().fg(HINT_FG)),
        ])
        .centered();
        Paragraph::new(hints).render(area, buf);
    }
}
