use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::AnswerFeedback;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let question = session.current_question();
    let feedback = session.feedback_for(question.id());
    let show_explanation = session.explanation_visible();

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ];
    if show_explanation {
        constraints.push(Constraint::Length(5));
    }
    if feedback.is_some() {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).margin(1).split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question.text());
    render_options(
        frame,
        chunks[2],
        question.options(),
        app.selected_option(),
        session.answer_for(question.id()),
    );

    let mut index = 3;
    if show_explanation {
        render_explanation(frame, chunks[index], question.explanation());
        index += 1;
    }
    if let Some(feedback) = &feedback {
        render_feedback(frame, chunks[index], feedback);
        index += 1;
    }
    render_controls(frame, chunks[index], session.is_complete());
}

/// One marker per question: green once answered, cyan for the current
/// position, gray while pending. Counter on the right.
fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).split(area);

    let mut spans: Vec<Span> = Vec::with_capacity(session.len() * 2);
    for (index, question) in session.questions().iter().enumerate() {
        let answered = session.is_answered(question.id());
        let (marker, color) = if index == session.current_index() {
            ("●", Color::Cyan)
        } else if answered {
            ("●", Color::Green)
        } else {
            ("○", Color::DarkGray)
        };
        spans.push(Span::styled(marker, Style::default().fg(color)));
        if index + 1 < session.len() {
            spans.push(Span::raw(" "));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[0],
    );

    let counter = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    frame.render_widget(
        Paragraph::new(counter)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[1],
    );
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: usize,
    locked: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_locked_choice = locked == Some(index);
        let is_cursor = index == selected && locked.is_none();

        let style = if is_locked_choice {
            Style::default().fg(Color::Yellow).bold()
        } else if locked.is_some() {
            Style::default().fg(Color::DarkGray)
        } else if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_locked_choice {
            "*"
        } else if is_cursor {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, explanation: &str) {
    let widget = Paragraph::new(explanation)
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Explanation ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &AnswerFeedback) {
    let (verdict, color) = if feedback.is_correct {
        ("Great, that was the correct answer!", Color::Green)
    } else {
        ("Oops, that's not the correct answer...", Color::Red)
    };

    let content = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(feedback.explanation.as_str()).fg(Color::Gray),
    ];
    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, complete: bool) {
    let controls = if complete {
        "h/l questions  ·  e explanation  ·  s submit  ·  q quit"
    } else {
        "j/k move  ·  enter answer  ·  h/l questions  ·  e explanation  ·  q quit"
    };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
