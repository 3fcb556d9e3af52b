use crate::screens::parental::{ParentalMode, ParentalRow, ParentalScreen};
use crate::store::SessionStore;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{draw_header, draw_help, Palette};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_parental(
    f: &mut Frame,
    palette: &Palette,
    screen: &ParentalScreen,
    store: &SessionStore,
) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, palette, "Parental Controls 🔐");

    match &screen.mode {
        ParentalMode::Locked { pin_input, error } => {
            let mut lines = vec![
                Line::from(""),
                Line::from("Grown-ups only! Enter the PIN to continue."),
                Line::from(""),
                Line::styled(
                    "•".repeat(pin_input.len()),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if *error {
                lines.push(Line::from(""));
                lines.push(Line::styled(
                    "Incorrect PIN. Please try again.",
                    Style::default().fg(palette.bad).add_modifier(Modifier::BOLD),
                ));
            }
            let body = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(body, layout.body_area);

            draw_help(
                f,
                layout.help_area,
                palette,
                &[
                    ("0-9", "Type PIN"),
                    ("Enter", "Unlock"),
                    ("Esc", "Back Home"),
                ],
            );
        }
        ParentalMode::Unlocked { .. } => {
            let selected = screen.selected_row();
            let row_style = |row: ParentalRow| {
                if selected == Some(row) {
                    Style::default()
                        .fg(palette.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text)
                }
            };
            let lines = vec![
                Line::from(""),
                Line::styled(
                    format!("Difficulty Level:   {} / 3", store.parental.difficulty_level),
                    row_style(ParentalRow::Difficulty),
                ),
                Line::from(""),
                Line::styled(
                    format!("Daily Time Limit:   {} minutes", store.parental.time_limit_minutes),
                    row_style(ParentalRow::TimeLimit),
                ),
                Line::from(""),
                Line::styled(
                    format!(
                        "Controls Enabled:   {}",
                        if store.parental.enabled { "Yes" } else { "No" }
                    ),
                    row_style(ParentalRow::Enabled),
                ),
            ];
            let body = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Settings"));
            f.render_widget(body, layout.body_area);

            draw_help(
                f,
                layout.help_area,
                palette,
                &[
                    ("↑/↓", "Select"),
                    ("←/→", "Adjust"),
                    ("Enter", "Toggle"),
                    ("Esc", "Back Home"),
                ],
            );
        }
    }
}
