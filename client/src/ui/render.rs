use board::{Coord, Difficulty, Game, Player, HEIGHT, WIDTH};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{human_player, App};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{BORDER, CURSOR, EMPTY_CELL, PLAYER_ONE, PLAYER_TWO, TEXT, WIN_HIGHLIGHT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    frame.render_widget(header(), regions.header);
    frame.render_widget(board_panel(app), regions.board);
    frame.render_widget(controls_panel(app), regions.controls);
    frame.render_widget(status_panel(app), regions.status);
    frame.render_widget(footer(regions.footer), regions.footer);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
}

fn header() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Connect Four",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER)))
}

fn player_color(player: Player) -> ratatui::style::Color {
    match player {
        Player::One => PLAYER_ONE,
        Player::Two => PLAYER_TWO,
    }
}

/// Highlighted while the game runs and on the winning run, dimmed otherwise.
pub fn cell_style(game: &Game, coord: Coord) -> Style {
    let Some(player) = game.board().cell(coord) else {
        return Style::default().fg(EMPTY_CELL);
    };
    let style = Style::default().fg(player_color(player));
    if game.is_running() {
        style
    } else if game.is_winning_cell(coord) {
        style.bg(WIN_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

fn board_panel(app: &App) -> Paragraph<'static> {
    let game = app.game();
    let mut lines = Vec::with_capacity(HEIGHT + 2);

    let mut numbers = vec![Span::raw(" ")];
    for col in 0..WIDTH {
        let style = if col == app.selected_column() {
            Style::default().fg(CURSOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(EMPTY_CELL)
        };
        numbers.push(Span::styled(format!(" {}  ", col + 1), style));
    }
    lines.push(Line::from(numbers));

    for row in 0..HEIGHT {
        let mut spans = vec![Span::raw(" ")];
        for col in 0..WIDTH {
            let coord = Coord::new(row, col);
            let symbol = if game.board().cell(coord).is_some() {
                " ●  "
            } else {
                " ·  "
            };
            spans.push(Span::styled(symbol, cell_style(game, coord)));
        }
        lines.push(Line::from(spans));
    }

    let mut cursor = vec![Span::raw(" ")];
    for col in 0..WIDTH {
        if col == app.selected_column() && app.accepts_human_input() {
            let color = player_color(game.turn());
            cursor.push(Span::styled(" ▲  ", Style::default().fg(color)));
        } else {
            cursor.push(Span::raw("    "));
        }
    }
    lines.push(Line::from(cursor));

    Paragraph::new(lines).block(panel("Board"))
}

pub fn difficulty_bar(difficulty: Difficulty) -> String {
    let level = difficulty.level();
    let filled = "■".repeat(level as usize);
    let empty = "□".repeat((Difficulty::MAX - level) as usize);
    format!("{filled}{empty} {level}/{}", Difficulty::MAX)
}

fn controls_panel(app: &App) -> Paragraph<'static> {
    let settings = app.settings();
    let engine = match settings.ai_player {
        Some(player) => format!("Player {}", player.number()),
        None => "nobody".to_string(),
    };
    let human = match human_player(settings) {
        Some(player) => format!("Player {}", player.number()),
        None => "both sides".to_string(),
    };
    let label = Style::default().fg(EMPTY_CELL);
    let value = Style::default().fg(TEXT);
    let lines = vec![
        Line::from(vec![
            Span::styled("Engine plays as: ", label),
            Span::styled(engine, value),
        ]),
        Line::from(vec![Span::styled("You play:        ", label), Span::styled(human, value)]),
        Line::from(vec![
            Span::styled("Algorithm:       ", label),
            Span::styled(settings.algorithm.label(), value),
        ]),
        Line::from(vec![
            Span::styled("Difficulty:      ", label),
            Span::styled(difficulty_bar(settings.difficulty), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("p  engine side   a  algorithm", label)),
        Line::from(Span::styled("+/-  difficulty  r  restart", label)),
    ];
    Paragraph::new(lines).block(panel("Controls"))
}

fn status_panel(app: &App) -> Paragraph<'static> {
    let color = if app.game().is_running() {
        player_color(app.game().turn())
    } else {
        TEXT
    };
    Paragraph::new(Line::from(Span::styled(
        app.status_message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(panel("Status"))
}

fn footer(area: Rect) -> Paragraph<'static> {
    let hints = " ←/→: Select │ Enter/1-7/Click: Drop │ R: Restart │ Q: Quit";
    let version = format!("v{VERSION} ");
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());
    let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER)))
}
