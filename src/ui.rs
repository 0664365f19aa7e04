use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use mediconnect_core::content::{
    BANNER, CARE_REMINDERS, HOW_IT_WORKS, INPUT_PLACEHOLDER, MICRO_NOTE, PROMPT_IDEAS,
};
use mediconnect_core::{ChatSession, Sender};
use crate::app::{App, FocusPane, InputMode};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    let [chat_column, side_column] = Layout::horizontal([
        Constraint::Percentage(60),
        Constraint::Percentage(40),
    ])
    .areas(body_area);

    render_chat_column(app, frame, chat_column);
    render_side_column(app, frame, side_column);

    render_footer(app, frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", BANNER.eyebrow), Style::default().fg(Color::Cyan).bold()),
        Span::styled(BANNER.title, Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(title), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };
    let mode_text = match app.input_mode {
        InputMode::Normal => " NORMAL ",
        InputMode::Editing => " ASK ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    let pairs: &[(&str, &str)] = match (app.input_mode, app.focus) {
        (InputMode::Editing, _) => &[
            (" Enter ", " send "),
            (" Esc ", " stop typing "),
            (" Tab ", " focus "),
            (" ↑/↓ ", " scroll "),
            (" C-c ", " quit "),
        ],
        (InputMode::Normal, FocusPane::Prompts) => &[
            (" j/k ", " choose "),
            (" Enter ", " use prompt "),
            (" Tab ", " focus "),
            (" i ", " type "),
            (" q ", " quit "),
        ],
        (InputMode::Normal, _) => &[
            (" j/k ", " scroll "),
            (" g/G ", " top/bottom "),
            (" Tab ", " focus "),
            (" i ", " type "),
            (" q ", " quit "),
        ],
    };
    for (key, label) in pairs {
        hints.push(Span::styled(*key, key_style));
        hints.push(Span::styled(*label, label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

fn render_chat_column(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area, note_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    // Store area for mouse hit-testing and inner size for scroll calculations
    app.chat_area = Some(chat_area);
    let inner = (chat_area.width.saturating_sub(2), chat_area.height.saturating_sub(2));
    if inner != (app.chat_width, app.chat_height) {
        (app.chat_width, app.chat_height) = inner;
        // Wrapping changed, so re-anchor on the latest reply
        app.scroll_chat_to_bottom();
    }

    let chat_border_color = if app.focus == FocusPane::Chat { Color::Cyan } else { Color::DarkGray };
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chat_border_color))
        .title(" Chat ");

    let chat = chat_paragraph(&app.session)
        .block(chat_block)
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    render_input(app, frame, input_area);

    let note = Paragraph::new(Span::styled(MICRO_NOTE, Style::default().fg(Color::DarkGray)));
    frame.render_widget(note, note_area);
}

/// Chat log as rendered, without its border. Also used to measure wrapped height.
pub fn chat_paragraph(session: &ChatSession) -> Paragraph<'_> {
    let mut lines: Vec<Line> = Vec::new();
    for msg in session.messages() {
        let label_color = match msg.sender {
            Sender::User => Color::Cyan,
            Sender::Assistant => Color::Yellow,
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", msg.sender.label()),
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        )));
        for line in &msg.lines {
            lines.push(Line::from(line.as_str()));
        }
        lines.push(Line::default());
    }

    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true })
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let input_border_color = if editing || app.focus == FocusPane::Input {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color))
        .title(" Ask your question ");

    let draft = app.session.draft();

    // Calculate visible portion of input with horizontal scrolling
    // Inner width = total width - 2 (for borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = app.cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let input = if draft.is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let visible_text: String = draft.chars().skip(scroll_offset).take(inner_width).collect();
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(input.block(input_block), area);

    // Show cursor when editing
    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_side_column(app: &mut App, frame: &mut Frame, area: Rect) {
    let [banner_area, prompts_area, how_area, reminders_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(PROMPT_IDEAS.len() as u16 + 2),
        Constraint::Length(HOW_IT_WORKS.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::raw(BANNER.subtitle)),
        Line::from(Span::styled(BANNER.note, Style::default().fg(Color::Red))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(banner, banner_area);

    app.prompts_area = Some(prompts_area);
    let prompts_focused = app.focus == FocusPane::Prompts;
    let prompts_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if prompts_focused { Color::Cyan } else { Color::DarkGray }))
        .title(" Try asking ");
    let items: Vec<ListItem> = PROMPT_IDEAS.iter().map(|idea| ListItem::new(*idea)).collect();
    let highlight = if prompts_focused {
        Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let prompts = List::new(items)
        .block(prompts_block)
        .highlight_style(highlight)
        .highlight_symbol("> ");
    frame.render_stateful_widget(prompts, prompts_area, &mut app.prompt_state);

    frame.render_widget(bullet_list(" How it works ", &HOW_IT_WORKS), how_area);
    frame.render_widget(bullet_list(" Quick care reminders ", &CARE_REMINDERS), reminders_area);
}

fn bullet_list<'a>(title: &'a str, items: &'a [&'a str]) -> Paragraph<'a> {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| Line::from(vec![Span::styled("• ", Style::default().fg(Color::Green)), Span::raw(*item)]))
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
}
