use crate::screens::counting::{fruit_for, CountingPhase, CountingScreen, MAX_NUMBER};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::quiz::{draw_option_quiz, draw_quiz_done};
use crate::ui::{draw_header, draw_help, Palette};
use crate::utils::emoji_rows;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_counting(f: &mut Frame, palette: &Palette, screen: &CountingScreen) {
    match &screen.phase {
        CountingPhase::Browse { number } => draw_browse(f, palette, *number),
        CountingPhase::Quiz(runner) => {
            let question = runner.current_question();
            // The count shown is the value of the correct option.
            let count: usize = question.options[question.answer].parse().unwrap_or(0);
            let width = f.area().width.saturating_sub(6) as usize;
            let mut lines = vec![Line::from("")];
            lines.extend(
                emoji_rows(&question.visual, count, width)
                    .into_iter()
                    .map(Line::from),
            );
            draw_option_quiz(f, palette, "Counting Numbers", runner, Text::from(lines));
        }
        CountingPhase::Done { outcome } => {
            draw_quiz_done(f, palette, "Counting Numbers", outcome);
        }
    }
}

fn draw_browse(f: &mut Frame, palette: &Palette, number: u32) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        palette,
        &format!("Counting Numbers - {} / {}", number, MAX_NUMBER),
    );

    let width = layout.body_area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            number.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(
        emoji_rows(fruit_for(number), number as usize, width)
            .into_iter()
            .map(Line::from),
    );

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("←/→", "Previous / Next Number"),
            ("Enter", "Next"),
            ("Esc", "Back Home"),
        ],
    );
}
