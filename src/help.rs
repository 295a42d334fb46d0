use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub fn render_help_popup(popup_area: Rect, buf: &mut Buffer) {
    Clear.render(popup_area, buf);

    let help_text = vec![
        Line::from("Playback").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("Right/n      Next card"),
        Line::from("Left/p       Previous card"),
        Line::from("Space/f      Flip card"),
        Line::from("Enter        Flip card"),
        Line::from(""),
        Line::from("General").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("h/?          Toggle this help"),
        Line::from("q/Esc        Quit"),
    ];

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Blue));

    let help_popup = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true });

    help_popup.render(popup_area, buf);
}
