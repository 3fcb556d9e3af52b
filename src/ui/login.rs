use crate::screens::login::{LoginField, LoginScreen};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{draw_header, draw_help, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_login(f: &mut Frame, palette: &Palette, screen: &LoginScreen) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, palette, "Learning Fun Galaxy 🚀");

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(layout.body_area);

    let field_block = |focused: bool, title: &'static str| {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if focused {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.dim)
            })
    };

    let name = Paragraph::new(screen.name_input.as_str())
        .block(field_block(screen.focused == LoginField::Name, "Your Name"));
    f.render_widget(name, form_chunks[0]);

    let age = Paragraph::new(screen.age_input.as_str()).block(field_block(
        screen.focused == LoginField::Age,
        "Your Age (3-10)",
    ));
    f.render_widget(age, form_chunks[1]);

    if let Some(message) = &screen.message {
        let style = if message.starts_with("Welcome") {
            Style::default().fg(palette.good).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.bad)
        };
        let notice = Paragraph::new(message.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(notice, form_chunks[2]);
    }

    // Cursor in the focused field.
    let (area, len) = match screen.focused {
        LoginField::Name => (form_chunks[0], screen.name_input.len()),
        LoginField::Age => (form_chunks[1], screen.age_input.len()),
    };
    f.set_cursor_position((area.x + 1 + len as u16, area.y + 1));

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("Tab", "Switch Field"),
            ("Enter", "Start Learning"),
            ("Esc", "Quit"),
        ],
    );
}
