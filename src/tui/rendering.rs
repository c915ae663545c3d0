use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{ChatMessage, EmoticonKind, Segment, TextStyle};
use crate::render::tokenize_content;
use crate::utils::sanitize_for_terminal;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const NICK_BLUE: Color = Color::Rgb(59, 130, 246);
const ERROR_RED: Color = Color::Rgb(239, 68, 68);
const EMOTICON_YELLOW: Color = Color::Rgb(250, 204, 21);

/// Everything the UI needs for one frame
pub struct ViewState<'a> {
    pub title: &'a str,
    pub messages: &'a [ChatMessage],
    pub rendered: &'a [Vec<Segment>],
    pub selected_idx: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &ViewState<'_>) {
    let layout = AppLayout::new(frame.area());

    render_title(frame, layout.title_area, state.title);
    render_message_list(frame, layout.messages_area, state.rendered, state.selected_idx);
    render_detail(frame, layout.detail_area, state.messages.get(state.selected_idx));
    render_status_bar(
        frame,
        layout.status_area,
        state.messages.len(),
        state.selected_idx,
        state.status_message,
    );
}

fn text_style(style: TextStyle) -> Style {
    match style {
        TextStyle::Plain => Style::default().fg(MUTED),
        TextStyle::Nickname => Style::default().fg(NICK_BLUE),
        TextStyle::BoldBody => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn emoticon_glyph(kind: EmoticonKind) -> &'static str {
    match kind {
        EmoticonKind::Happy => "🙂",
        EmoticonKind::Sad => "🙁",
    }
}

fn segment_span(segment: &Segment) -> Span<'static> {
    match segment {
        Segment::Text { value, style } => {
            Span::styled(sanitize_for_terminal(value), text_style(*style))
        }
        Segment::Emoticon { kind } => {
            Span::styled(emoticon_glyph(*kind), Style::default().fg(EMOTICON_YELLOW))
        }
    }
}

/// One display line for a rendered message; header segments are followed by a space
pub fn message_line(segments: &[Segment]) -> Line<'static> {
    let mut spans = Vec::with_capacity(segments.len() + 2);
    for segment in segments {
        spans.push(segment_span(segment));
        if matches!(segment, Segment::Text { style: TextStyle::Plain | TextStyle::Nickname, .. }) {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(format!(" {} ", sanitize_for_terminal(title)))
        .style(Style::default().fg(BRIGHT).bg(SURFACE).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_message_list(
    frame: &mut Frame,
    area: Rect,
    rendered: &[Vec<Segment>],
    selected_idx: usize,
) {
    let items: Vec<ListItem> =
        rendered.iter().map(|segments| ListItem::new(message_line(segments))).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Conversation "),
        )
        .highlight_style(Style::default().bg(Color::Rgb(39, 39, 42)))
        .highlight_symbol("▌");

    let mut list_state = ListState::default();
    if !rendered.is_empty() {
        list_state.select(Some(selected_idx.min(rendered.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, message: Option<&ChatMessage>) {
    let content = if let Some(message) = message {
        let label = Style::default().fg(MUTED);
        let body = if message.content().is_empty() {
            Line::from(Span::styled("(empty message)", label))
        } else {
            Line::from(tokenize_content(message.content()).iter().map(segment_span).collect::<Vec<_>>())
        };

        Text::from(vec![
            Line::from(vec![
                Span::styled("Time: ", label),
                Span::raw(sanitize_for_terminal(message.timestamp())),
            ]),
            Line::from(vec![
                Span::styled("Name: ", label),
                Span::styled(sanitize_for_terminal(message.nickname()), text_style(TextStyle::Nickname)),
            ]),
            Line::from(""),
            body,
        ])
    } else {
        Text::from("No message selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Message "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    total: usize,
    selected_idx: usize,
    status_message: Option<&StatusMessage>,
) {
    let (status_text, style) = if let Some(status) = status_message {
        let fg = match status.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => ERROR_RED,
        };
        (format!(" {} ", status.text), Style::default().fg(fg).bg(SURFACE))
    } else {
        let mut parts = vec![format!("{} messages", total)];
        if total > 0 {
            parts.push(format!("message {}/{}", selected_idx + 1, total));
        }
        parts.push("↑↓: scroll".to_string());
        parts.push("r: reload".to_string());
        parts.push("q: quit".to_string());
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(SURFACE))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
