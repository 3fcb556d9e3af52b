use crate::screens::images::ImageScreen;
use crate::ui::quiz::{draw_option_quiz, draw_quiz_done};
use crate::ui::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Text},
    Frame,
};

pub fn draw_images(f: &mut Frame, palette: &Palette, screen: &ImageScreen) {
    if let Some(outcome) = &screen.outcome {
        draw_quiz_done(f, palette, "Image Recognition", outcome);
        return;
    }
    let runner = screen.runner();
    let visual = Text::from(vec![
        Line::from(""),
        Line::styled(
            runner.current_question().visual.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    draw_option_quiz(f, palette, "Image Recognition", runner, visual);
}
