//! Terminal UI rendering with ratatui
//!
//! Read-only over the engine: draws the field, score, next-piece preview and
//! the game-over banner. Never mutates game state.

use crate::board::{BOARD_COLS, BOARD_ROWS};
use crate::game::Game;
use crate::position::Position;
use crate::settings::Settings;
use crate::tetromino::{PieceKind, Rotation};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const EMPTY: &str = "  ";

/// Total width: board (10*2 + 2 for borders) + side panel (16)
const GAME_WIDTH: u16 = 38;
/// Total height: board (20) + 2 for borders
const GAME_HEIGHT: u16 = 22;

/// Fixed palette indexed by cell marker; entry 0 is the field background.
const PALETTE: [Color; 8] = [
    Color::Rgb(26, 31, 40),   // empty cell
    Color::Rgb(47, 230, 23),  // 1: L
    Color::Rgb(232, 18, 18),  // 2: J
    Color::Rgb(226, 116, 17), // 3: I
    Color::Rgb(237, 234, 4),  // 4: O
    Color::Rgb(166, 0, 247),  // 5: S
    Color::Rgb(21, 204, 209), // 6: T
    Color::Rgb(13, 64, 216),  // 7: Z
];

/// Render the entire game UI
pub fn render(frame: &mut Frame, game: &Game, settings: &Settings) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Board
            Constraint::Length(16), // Score + next piece
        ])
        .split(game_area);

    render_board(frame, main_layout[0], game, settings);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Length(6), // Next piece
            Constraint::Min(0),
        ])
        .split(main_layout[1]);

    render_score(frame, right_layout[0], game);
    render_next(frame, right_layout[1], game.next_piece.kind, settings);

    if game.game_over {
        render_overlay(frame, area, "GAME OVER", "Press any key to restart");
    }
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the playfield with the active piece overlaid
fn render_board(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let block_char = settings.visual.block_char();

    let block = Block::default()
        .title(" BLOCKFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece_cells = game.current_piece.cells();
    let piece_marker = game.current_piece.kind.marker();

    let mut lines: Vec<Line> = Vec::with_capacity(BOARD_ROWS);
    for row in 0..BOARD_ROWS {
        let mut spans = Vec::with_capacity(BOARD_COLS);
        for col in 0..BOARD_COLS {
            let cell = Position::new(row as i32, col as i32);
            let marker = if piece_cells.contains(&cell) {
                piece_marker
            } else {
                game.board.marker(row, col)
            };

            if marker == 0 {
                spans.push(Span::styled(EMPTY, Style::default().bg(PALETTE[0])));
            } else {
                spans.push(Span::styled(
                    block_char,
                    Style::default().fg(PALETTE[marker as usize]).bg(PALETTE[0]),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the score panel
fn render_score(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" SCORE ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let points = Paragraph::new(Line::styled(
        game.score.points.to_string(),
        Style::default().fg(Color::White).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(points, inner);
}

/// Render the next-piece preview at its own frame offset
fn render_next(frame: &mut Frame, area: Rect, kind: PieceKind, settings: &Settings) {
    let block = Block::default()
        .title(" NEXT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 8 {
        return;
    }

    let cells = kind.cells(Rotation::North);
    let color = PALETTE[kind.marker() as usize];
    let block_char = settings.visual.block_char();

    // Every kind's spawn form fits the top two rows of its local frame
    let mut lines: Vec<Line> = Vec::new();
    for row in 0..2 {
        let mut spans = Vec::new();
        for col in 0..4 {
            if cells.contains(&Position::new(row, col)) {
                spans.push(Span::styled(block_char, Style::default().fg(color)));
            } else {
                spans.push(Span::raw(EMPTY));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Render a centered overlay banner
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let overlay_area = center_rect(area, 30, 5);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Red).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
