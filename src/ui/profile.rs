use crate::catalog::CATALOG;
use crate::screens::profile::{ProfileField, ProfileMode, ProfileScreen};
use crate::store::SessionStore;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{draw_header, draw_help, Palette};
use crate::utils::stars_row;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_profile(f: &mut Frame, palette: &Palette, screen: &ProfileScreen, store: &SessionStore) {
    match screen.mode {
        ProfileMode::View => draw_view(f, palette, screen, store),
        ProfileMode::Edit => draw_edit(f, palette, screen),
    }
}

fn draw_view(f: &mut Frame, palette: &Palette, screen: &ProfileScreen, store: &SessionStore) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, palette, "My Profile");

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("{}  {}", screen.avatar(), store.profile.name),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Age {}  -  {}", store.profile.age, store.profile.kind.label())),
        Line::from(""),
        Line::styled("Progress", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    for module in &CATALOG {
        let entry = match store.profile.progress.get(module.id.as_str()) {
            Some(progress) => format!("{} {}", stars_row(progress.stars), module.title),
            None => format!("☆☆☆ {} (not played yet)", module.title),
        };
        lines.push(Line::from(entry));
    }

    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[("e", "Edit Profile"), ("m/Esc", "Back Home")],
    );
}

fn draw_edit(f: &mut Frame, palette: &Palette, screen: &ProfileScreen) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, palette, "Edit Profile");

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
        .block(field_block(screen.focused == ProfileField::Name, "Name"));
    f.render_widget(name, form_chunks[0]);

    let age = Paragraph::new(screen.age_input.as_str()).block(field_block(
        screen.focused == ProfileField::Age,
        "Age (3-10)",
    ));
    f.render_widget(age, form_chunks[1]);

    let avatar = Paragraph::new(format!("← {} →", screen.avatar())).block(field_block(
        screen.focused == ProfileField::Avatar,
        "Avatar",
    ));
    f.render_widget(avatar, form_chunks[2]);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("Tab", "Next Field"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
    );
}
