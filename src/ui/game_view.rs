use crate::game::{Board, Cell, GameState, GameStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of every board line: "  ║" + 3 chars per cell + " ║"
const BOARD_WIDTH: u16 = 3 + 3 * COLS as u16 + 2;
/// Lines above the first board row: column numbers and the top border
const BOARD_TOP: u16 = 2;
const CELL_WIDTH: u16 = 3;
const BOARD_LEFT_PAD: u16 = 3;

/// Everything the view needs besides the game itself.
pub struct ViewState<'a> {
    pub selected_column: usize,
    pub message: Option<&'a str>,
    pub winning_cells: &'a [(usize, usize)],
}

fn split(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

pub fn render(frame: &mut Frame, game_state: &GameState, view: &ViewState) {
    let [header, board, message, controls] = split(frame.area());

    render_header(frame, game_state, header);
    render_board(frame, game_state.board(), view, board);
    render_message(frame, view.message, message);
    render_controls(frame, controls);
}

/// Map a terminal position inside `area` (the whole frame) to the board
/// column drawn there.
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let [_, board, _, _] = split(area);
    let left = board.x + board.width.saturating_sub(BOARD_WIDTH) / 2 + BOARD_LEFT_PAD;
    let right = left + CELL_WIDTH * COLS as u16;
    // Column numbers, the board rows and the indicator line all count
    let bottom = board.y + BOARD_TOP + ROWS as u16 + 2;

    if y < board.y || y >= bottom || x < left || x >= right {
        return None;
    }
    Some(((x - left) / CELL_WIDTH) as usize)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => {
            let player = game_state.current_player();
            (format!("Turn: {player}"), player_color(player))
        }
        GameStatus::Won(player) => (format!("Winner: {player}"), player_color(player)),
        GameStatus::Draw => ("Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect 4"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, view: &ViewState, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == view.selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if view.winning_cells.contains(&(row, col)) {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == view.selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/1-7: Drop  |  R: Reset  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn board_origin(area: Rect) -> (u16, u16) {
        let [_, board, _, _] = split(area);
        let left = board.x + (board.width - BOARD_WIDTH) / 2 + BOARD_LEFT_PAD;
        (left, board.y + BOARD_TOP)
    }

    #[test]
    fn test_column_at_maps_each_cell() {
        let area = frame_area();
        let (left, top) = board_origin(area);
        for col in 0..COLS {
            let x = left + col as u16 * CELL_WIDTH + 1;
            assert_eq!(column_at(area, x, top), Some(col));
            assert_eq!(column_at(area, x, top + ROWS as u16 - 1), Some(col));
        }
    }

    #[test]
    fn test_column_at_outside_board() {
        let area = frame_area();
        let (left, _) = board_origin(area);
        // Header and side margins
        assert_eq!(column_at(area, left, 0), None);
        assert_eq!(column_at(area, left - 1, 6), None);
        assert_eq!(column_at(area, left + CELL_WIDTH * COLS as u16, 6), None);
        assert_eq!(column_at(area, left, 23), None);
    }
}
