use crate::screens::sentences::{SentencePhase, SentenceScreen};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{draw_header, draw_help, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_sentences(f: &mut Frame, palette: &Palette, screen: &SentenceScreen) {
    let layout = calculate_screen_chunks(f.area());

    draw_header(
        f,
        layout.header_area,
        palette,
        &format!(
            "Sentence Formation - Level {} / {}",
            screen.level_index + 1,
            screen.level_count()
        ),
    );

    if screen.phase == SentencePhase::Complete {
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "You built every sentence! ⭐⭐⭐",
                Style::default()
                    .fg(palette.good)
                    .add_modifier(Modifier::BOLD),
            ),
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
        return;
    }

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(layout.body_area);

    let sentence = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            if screen.selected.is_empty() {
                "[Pick words below to build your sentence]".to_string()
            } else {
                screen.selected.join(" ")
            },
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Your Sentence"));
    f.render_widget(sentence, body_chunks[0]);

    let mut word_spans = Vec::new();
    for (i, word) in screen.available.iter().enumerate() {
        let style = if i == screen.cursor {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        word_spans.push(Span::styled(format!(" {} ", word), style));
        word_spans.push(Span::from(" "));
    }
    let words = Paragraph::new(vec![Line::from(""), Line::from(word_spans)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Word Tiles"));
    f.render_widget(words, body_chunks[1]);

    if let SentencePhase::Revealing { correct, .. } = screen.phase {
        let (text, color) = if correct {
            ("Great job! That's right! 🎉", palette.good)
        } else {
            ("Not quite. Let's try again!", palette.bad)
        };
        let notice = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(notice, body_chunks[2]);
    }

    draw_help(
        f,
        layout.help_area,
        palette,
        &[
            ("←/→", "Move"),
            ("Enter", "Pick Word"),
            ("Backspace", "Undo"),
            ("c", "Check"),
            ("Esc", "Back Home"),
        ],
    );
}
