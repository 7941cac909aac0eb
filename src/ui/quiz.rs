use crate::models::{QuizState, Verdict};
use crate::ui::layout::{calculate_quiz_chunks, centered_rect};
use crate::ui::picture::picture_lines;
use crate::utils::{centered_offset, cursor_display_column, truncate_string};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub const INPUT_PLACEHOLDER: &str = "Enter your answer here";

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz(f: &mut Frame, state: &QuizState, word_count: usize) {
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new(format!("Spelling Bee - {} words", word_count))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut picture = Text::from(picture_lines(state.current_item.image()));
    picture.push_line(Line::from(""));
    picture.push_line(Line::from(Span::styled(
        "Press Tab to hear the word",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
    )));
    if let Some(message) = &state.status_message {
        picture.push_line(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    let picture = Paragraph::new(picture)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Picture"));
    f.render_widget(picture, layout.picture_area);

    draw_answer_field(f, state, layout.answer_area);

    let action = if state.verdict.is_checked() {
        Line::from(vec![
            Span::styled("Enter", key_style()),
            Span::from(" New Question"),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", key_style()),
            Span::from(" Check Answer"),
        ])
    };
    f.render_widget(
        Paragraph::new(action).alignment(Alignment::Center),
        layout.action_area,
    );

    draw_feedback(f, state, layout.feedback_area);

    let help_text = vec![Line::from(vec![
        Span::styled("Tab", key_style()),
        Span::from(" Hear Word  "),
        Span::styled("Enter", key_style()),
        Span::from(" Check / Next  "),
        Span::styled("Esc", key_style()),
        Span::from(" Quit  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_answer_field(f: &mut Frame, state: &QuizState, area: ratatui::layout::Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let (content, style) = if state.input_text.is_empty() && !state.verdict.is_checked() {
        (
            INPUT_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let style = match state.verdict {
            Verdict::Unchecked => Style::default().fg(Color::White),
            Verdict::Correct => Style::default().fg(Color::Green),
            Verdict::Incorrect => Style::default().fg(Color::Red),
        };
        (truncate_string(&state.input_text, inner_width), style)
    };

    let answer = Paragraph::new(content.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, area);

    if !state.verdict.is_checked() {
        let offset = centered_offset(&state.input_text, inner_width);
        let column = cursor_display_column(&state.input_text, state.cursor_position);
        let cursor_x = area.x + 1 + (offset + column).min(inner_width) as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_feedback(f: &mut Frame, state: &QuizState, area: ratatui::layout::Rect) {
    let mut text = Text::default();

    if let Some(reveal) = state.reveal_text() {
        text.push_line(Line::from(Span::styled(
            reveal,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    } else if state.verdict == Verdict::Correct {
        text.push_line(Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(animation) = &state.animation {
        let color = if animation.is_success() {
            Color::Green
        } else {
            Color::Red
        };
        for line in animation.current_frame() {
            text.push_line(Line::from(Span::styled(*line, Style::default().fg(color))));
        }
    }

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(50, 11, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit Spelling Bee")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Spelling)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
