use crate::screens::math::MathScreen;
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::quiz::draw_option_quiz;
use crate::ui::{draw_header, draw_help, Palette};
use crate::utils::stars_row;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_math(f: &mut Frame, palette: &Palette, screen: &MathScreen) {
    if let Some(runner) = screen.runner() {
        let visual = Text::from(vec![
            Line::from(""),
            Line::styled(
                runner.current_question().visual.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let title = format!("Math Learning - {}", screen.current_op().name());
        draw_option_quiz(f, palette, &title, runner, visual);
        return;
    }

    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area, palette, "Math Learning");

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "All three rounds finished!",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (op, outcome) in &screen.results {
        lines.push(Line::from(format!(
            "{}  {} / {}  {}",
            op.name(),
            outcome.correct,
            outcome.total,
            stars_row(outcome.stars)
        )));
    }

    let body = Paragraph::new(lines)
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
