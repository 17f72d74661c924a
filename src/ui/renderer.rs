use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::game::{Cell, Game, Phase};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    let board_height = ARENA_HEIGHT as u16 + 2; // rows + borders
    let board_width = ARENA_WIDTH as u16 * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(15), // score + keys
            Constraint::Length(board_width),
            Constraint::Length(15), // next piece
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let left_info_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let right_info_area = horizontal_chunks[3];

    render_board(f, game, board_area);
    render_left_info(f, game, left_info_area);
    render_next_piece(f, game, right_info_area);

    match game.phase {
        Phase::Paused => render_paused_overlay(f, board_area),
        Phase::GameOver => render_game_over_overlay(f, game, board_area),
        Phase::Running => {}
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut render_arena = game.arena;

    // Overlay the active piece; at game over it may overlap settled cells,
    // which is exactly the final frame the player should see.
    for (y, row) in game.active.shape.iter().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            if !occupied {
                continue;
            }
            let ax = game.active.x + x as i32;
            let ay = game.active.y + y as i32;
            if ax >= 0 && ax < ARENA_WIDTH as i32 && ay >= 0 && ay < ARENA_HEIGHT as i32 {
                render_arena[ay as usize][ax as usize] = Cell::Filled(game.active.kind);
            }
        }
    }

    let mut board_lines = Vec::new();
    for y in 0..ARENA_HEIGHT {
        let mut line_spans = Vec::new();
        for x in 0..ARENA_WIDTH {
            match render_arena[y][x] {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
                Cell::Filled(kind) => {
                    line_spans.push(Span::styled("██", Style::default().fg(kind.color())));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_left_info(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // score
            Constraint::Length(11), // keys
            Constraint::Min(1),
        ])
        .split(area);

    render_score(f, game, chunks[0]);
    render_keys(f, chunks[1]);
}

fn render_score(f: &mut Frame, game: &Game, area: Rect) {
    let score_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            format!("{}", game.score),
            Style::default().fg(Color::Cyan),
        )]),
    ];

    let score_widget = Paragraph::new(score_text)
        .block(Block::default().borders(Borders::ALL).title("Score"))
        .alignment(Alignment::Center);

    f.render_widget(score_widget, area);
}

fn render_keys(f: &mut Frame, area: Rect) {
    let keys_text = vec![
        Line::from(vec![Span::raw("←/→ move")]),
        Line::from(vec![Span::raw("↑   rotate")]),
        Line::from(vec![Span::raw("↓   drop")]),
        Line::from(vec![Span::raw("spc hard drop")]),
        Line::from(vec![Span::raw("p   pause")]),
        Line::from(vec![Span::raw("r   restart")]),
        Line::from(vec![Span::raw("q   quit")]),
    ];

    let keys_widget =
        Paragraph::new(keys_text).block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(keys_widget, area);
}

fn render_next_piece(f: &mut Frame, game: &Game, area: Rect) {
    let mut next_lines = vec![Line::from(vec![Span::raw("")])];

    for &kind in &game.next {
        let shape = kind.shape();

        // Bounding box, so blank catalog rows don't pad the preview
        let mut min_row = shape.len();
        let mut max_row = 0;
        for (i, row) in shape.iter().enumerate() {
            if row.iter().any(|&cell| cell) {
                min_row = min_row.min(i);
                max_row = max_row.max(i);
            }
        }

        for i in min_row..=max_row {
            let mut line_spans = Vec::new();
            for &cell in &shape[i] {
                if cell {
                    line_spans.push(Span::styled("██", Style::default().fg(kind.color())));
                } else {
                    line_spans.push(Span::raw("  "));
                }
            }
            next_lines.push(Line::from(line_spans));
        }
    }

    let next_widget = Paragraph::new(next_lines)
        .block(Block::default().borders(Borders::ALL).title("Next"))
        .alignment(Alignment::Center);

    f.render_widget(next_widget, area);
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

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_paused_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 25, area);
    f.render_widget(Clear, popup_area);

    let paused_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press P to resume")]),
    ];

    let paused_widget = Paragraph::new(paused_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paused_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(60, 35, area);
    f.render_widget(Clear, popup_area);

    let game_over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Final Score: {}", game.score))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let game_over_widget = Paragraph::new(game_over_text)
        .block(Block::default().borders(Borders::ALL).title("Game Over"))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}
