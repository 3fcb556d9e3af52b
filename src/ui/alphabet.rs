use crate::screens::alphabet::{AlphabetPhase, AlphabetScreen};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::quiz::{draw_option_quiz, draw_quiz_done};
use crate::ui::{draw_header, draw_help, Palette};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_alphabet(f: &mut Frame, palette: &Palette, screen: &AlphabetScreen) {
    match &screen.phase {
        AlphabetPhase::Browse { index } => draw_browse(f, palette, screen, *index),
        AlphabetPhase::Quiz(runner) => {
            let visual = Text::from(vec![
                Line::from(""),
                Line::styled(
                    runner.current_question().visual.clone(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            draw_option_quiz(f, palette, "Learn the Alphabet", runner, visual);
        }
        AlphabetPhase::Done { outcome } => {
            draw_quiz_done(f, palette, "Learn the Alphabet", outcome);
        }
    }
}

fn draw_browse(f: &mut Frame, palette: &Palette, screen: &AlphabetScreen, index: usize) {
    let layout = calculate_screen_chunks(f.area());
    let example = &screen.letters()[index];

    draw_header(
        f,
        layout.header_area,
        palette,
        &format!(
            "Learn the Alphabet - {} / {}",
            index + 1,
            screen.letters().len()
        ),
    );

    let card = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            example.letter.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(example.emoji.clone()),
        Line::from(""),
        Line::from(format!("{} as in {}", example.letter, example.word)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("←/→", "Previous / Next Letter"),
            ("Enter", "Next"),
            ("Esc", "Back Home"),
        ],
    );
}
