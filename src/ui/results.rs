use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.report() else {
        return;
    };
    let percentage = report.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], report.score, report.total_questions, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Achievement tier shown as a badge over the score.
fn achievement_tier(percentage: u32) -> &'static str {
    match percentage {
        90..=100 => "EXPERT",
        80..=89 => "ADVANCED",
        70..=79 => "PROFICIENT",
        60..=69 => "LEARNING",
        _ => "BEGINNER",
    }
}

fn encouraging_message(percentage: u32) -> &'static str {
    match percentage {
        90..=100 => "Excellent! You're a deepfake detection expert!",
        80..=89 => "Great job! You have strong deepfake awareness.",
        70..=79 => "Good work! You're improving your deepfake knowledge.",
        60..=69 => "Not bad! Keep learning about deepfake detection.",
        _ => "Keep practicing! Every step improves your deepfake awareness.",
    }
}

fn share_line(score: usize, total: usize) -> String {
    format!(
        "I scored {}/{} on the Deepfake Awareness Quiz!",
        score, total
    )
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: u32,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            achievement_tier(percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(encouraging_message(percentage).fg(Color::White)),
        Line::from(""),
        Line::from(share_line(score, total).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let is_correct = session
                .feedback_for(question.id())
                .map(|f| f.is_correct)
                .unwrap_or(false);
            let (symbol, color) = if is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let preview = truncate_question(question.text());

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r retake  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(achievement_tier(100), "EXPERT");
        assert_eq!(achievement_tier(90), "EXPERT");
        assert_eq!(achievement_tier(89), "ADVANCED");
        assert_eq!(achievement_tier(70), "PROFICIENT");
        assert_eq!(achievement_tier(60), "LEARNING");
        assert_eq!(achievement_tier(0), "BEGINNER");
    }

    #[test]
    fn share_line_embeds_score() {
        assert_eq!(
            share_line(7, 10),
            "I scored 7/10 on the Deepfake Awareness Quiz!"
        );
    }
}
