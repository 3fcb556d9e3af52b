use crate::catalog::{is_available, CATALOG};
use crate::screens::home::HomeScreen;
use crate::store::SessionStore;
use crate::ui::layout::calculate_screen_chunks;
use crate::models::ThemeSetting;
use crate::ui::{draw_help, Palette};
use crate::utils::{stars_row, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_home(f: &mut Frame, palette: &Palette, screen: &HomeScreen, store: &SessionStore) {
    let layout = calculate_screen_chunks(f.area());

    // Header: greeting, the current theme, the (fixed) language.
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(12),
            Constraint::Length(22),
        ])
        .split(layout.header_area);

    let greeting = Paragraph::new(format!(
        "Hi {}! 🚀  {}",
        store.profile.name,
        store.profile.kind.label()
    ))
    .style(palette.title_style())
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(greeting, header_chunks[0]);

    let theme_label = match store.theme {
        ThemeSetting::Light => "☀ Light",
        ThemeSetting::Dark => "🌙 Dark",
    };
    let theme = Paragraph::new(theme_label)
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(theme, header_chunks[1]);

    // More languages are planned; the selector is rendered but inert.
    let language = Paragraph::new(format!("🌐 {}", store.language.label()))
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        );
    f.render_widget(language, header_chunks[2]);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(layout.body_area);

    let items: Vec<ListItem> = CATALOG
        .iter()
        .enumerate()
        .map(|(i, module)| {
            let available = is_available(store.profile.kind, module.age_group);
            let progress = store.profile.progress.get(module.id.as_str());
            let badge = if !available {
                "🔒 ".to_string()
            } else if let Some(progress) = progress {
                format!("{} ", stars_row(progress.stars))
            } else {
                String::new()
            };
            let text = format!(
                "{} {} - {} ({})  {}",
                module.icon,
                module.title,
                truncate_string(module.description, 48),
                module.age_group.band_label(),
                badge
            );
            let style = if i == screen.selected {
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if available {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.dim)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Learning Modules")
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, body_chunks[0]);

    if let Some(notice) = &screen.locked_notice {
        let locked = Paragraph::new(vec![Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(palette.bad).add_modifier(Modifier::BOLD),
        ))])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(locked, body_chunks[1]);
    }

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Open"),
            ("p", "Profile"),
            ("c", "Parental"),
            ("t", "Theme"),
            ("l", "Log Out"),
            ("q", "Quit"),
        ],
    );
}
