pub mod alphabet;
pub mod counting;
pub mod home;
pub mod images;
pub mod layout;
pub mod login;
pub mod math;
pub mod parental;
pub mod profile;
pub mod quiz;
pub mod sentences;

pub use alphabet::draw_alphabet;
pub use counting::draw_counting;
pub use home::draw_home;
pub use images::draw_images;
pub use login::draw_login;
pub use math::draw_math;
pub use parental::draw_parental;
pub use profile::draw_profile;
pub use sentences::draw_sentences;

use crate::models::ThemeSetting;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Colors derived from the session theme. Every draw function takes one
/// of these instead of reading the store.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub good: Color,
    pub bad: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeSetting) -> Self {
        match theme {
            ThemeSetting::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::DarkGray,
                good: Color::Green,
                bad: Color::Red,
                highlight: Color::Yellow,
            },
            ThemeSetting::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                dim: Color::DarkGray,
                good: Color::Green,
                bad: Color::Red,
                highlight: Color::Yellow,
            },
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn draw_header(f: &mut Frame, area: Rect, palette: &Palette, text: &str) {
    let header = Paragraph::new(text)
        .style(palette.title_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Centered "key description  key description" help footer.
pub fn draw_help(f: &mut Frame, area: Rect, palette: &Palette, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in keys.iter().enumerate() {
        spans.push(Span::styled((*key).to_string(), palette.key_style()));
        let trailer = if i + 1 < keys.len() {
            format!(" {}  ", action)
        } else {
            format!(" {}", action)
        };
        spans.push(Span::from(trailer));
    }
    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
