//! Board drawing. Every frame repaints the whole surface from the current
//! app state; nothing drawn in an earlier frame survives.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use pawdeck_client::RosterBackend;
use pawdeck_types::Player;

use crate::presentation::presenters::roster::{build_detail, build_roster};
use crate::presentation::renderers::tui::app::{App, Mode, PlayerForm};

pub fn draw<B: RosterBackend>(f: &mut Frame, app: &App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match &app.mode {
        Mode::Listing => draw_cards(f, chunks[0], app),
        // Cards are hidden while the detail panel is up; the working set
        // itself is untouched and comes back on close.
        Mode::Detail(player) => draw_detail(f, chunks[0], player),
        Mode::Form(form) => {
            draw_cards(f, chunks[0], app);
            draw_form(f, chunks[0], form);
        }
    }

    draw_footer(f, chunks[1], app);
}

fn draw_cards<B: RosterBackend>(f: &mut Frame, area: Rect, app: &App<B>) {
    let roster = build_roster(&app.players);

    if roster.is_empty() {
        let empty = Paragraph::new("No players on the roster. Press 'a' to add one.")
            .block(Block::default().borders(Borders::ALL).title("Roster (0)"));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = roster
        .cards
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        card.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(card.breed.clone(), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("status: {}", card.status),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(card.image_url.clone(), Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Roster ({})", roster.len())),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(f: &mut Frame, area: Rect, player: &Player) {
    let detail = build_detail(player);
    let panel = centered_rect(60, 50, area);

    let lines = vec![
        Line::from(Span::styled(
            detail.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Breed:  {}", detail.breed)),
        Line::from(format!("Status: {}", detail.status)),
        Line::from(format!("Image:  {}", detail.image_url)),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Player #{}", detail.id)),
    );

    f.render_widget(Clear, panel);
    f.render_widget(paragraph, panel);
}

fn draw_form(f: &mut Frame, area: Rect, form: &PlayerForm) {
    let panel = centered_rect(60, 50, area);

    let mut lines = Vec::new();
    for (index, label) in PlayerForm::labels().into_iter().enumerate() {
        lines.push(form_line(label, form.field(index), index == form.field_index));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if form.submitted {
        lines.push(Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter submit · Esc cancel · Tab next field",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add a player"),
    );

    f.render_widget(Clear, panel);
    f.render_widget(paragraph, panel);
}

fn form_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), style),
        Span::styled(value, style),
    ])
}

fn draw_footer<B: RosterBackend>(f: &mut Frame, area: Rect, app: &App<B>) {
    let hints = match &app.mode {
        Mode::Listing => "↑/↓ select · Enter details · x remove · a add · r refresh · q quit",
        Mode::Detail(_) => "Esc close · q quit",
        Mode::Form(_) => "Tab/↑/↓ fields · Enter submit · Esc cancel",
    };

    let footer = Paragraph::new(Text::from(vec![
        Line::from(app.status.as_str()),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal[1]
}
