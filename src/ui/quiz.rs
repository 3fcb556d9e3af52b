use crate::quiz::{QuizOutcome, QuizPhase, QuizRunner};
use crate::ui::layout::{calculate_quiz_chunks, calculate_screen_chunks};
use crate::ui::{draw_header, draw_help, Palette};
use crate::utils::stars_row;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shared renderer for the 1-4 option quizzes: header with progress and
/// score, prompt, a large visual area, the option rows and the help bar.
pub fn draw_option_quiz(
    f: &mut Frame,
    palette: &Palette,
    title: &str,
    runner: &QuizRunner,
    visual: Text,
) {
    let layout = calculate_quiz_chunks(f.area());
    let question = runner.current_question();

    draw_header(
        f,
        layout.header_area,
        palette,
        &format!(
            "{} - Question {} / {} - Score {}",
            title,
            runner.current_index() + 1,
            runner.total(),
            runner.score()
        ),
    );

    let prompt = Paragraph::new(question.prompt.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, layout.prompt_area);

    let visual_widget = Paragraph::new(visual)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(visual_widget, layout.visual_area);

    let mut option_lines = Vec::new();
    for (i, option) in question.options.iter().enumerate() {
        let style = match runner.phase() {
            QuizPhase::Revealing { choice, .. } => {
                if i == question.answer {
                    Style::default().fg(palette.good).add_modifier(Modifier::BOLD)
                } else if i == choice {
                    Style::default().fg(palette.bad)
                } else {
                    Style::default().fg(palette.dim)
                }
            }
            _ => Style::default().fg(palette.text),
        };
        option_lines.push(Line::styled(format!("{}. {}", i + 1, option), style));
    }
    if let QuizPhase::Revealing { correct, .. } = runner.phase() {
        option_lines.push(Line::from(""));
        option_lines.push(Line::styled(
            if correct {
                "Correct! Great job!"
            } else {
                "Oops! The right answer is highlighted."
            },
            if correct {
                Style::default().fg(palette.good).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.bad).add_modifier(Modifier::BOLD)
            },
        ));
    }
    let options = Paragraph::new(option_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[("1-4", "Pick an answer"), ("Esc", "Back Home")],
    );
}

/// End-of-quiz card with the score and star rating.
pub fn draw_quiz_done(f: &mut Frame, palette: &Palette, title: &str, outcome: &QuizOutcome) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(f, layout.header_area, palette, title);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "All done!",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "You got {} out of {} right!",
            outcome.correct, outcome.total
        )),
        Line::from(""),
        Line::styled(stars_row(outcome.stars), Style::default().fg(palette.highlight)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        palette,
        &[("r", "Play Again"), ("m/Esc", "Back Home")],
    );
}
