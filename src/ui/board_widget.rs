use crate::game::{Cell, Game};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal columns taken by one board cell
pub const CELL_WIDTH: u16 = 3;

/// Characters left of the first cell ("  ║")
const GRID_LEFT: u16 = 3;

/// Characters right of the last cell (" ║")
const GRID_RIGHT: u16 = 2;

/// Lines above and below the cell rows: floating disc, column numbers, top
/// border, bottom border, selection marker
const FRAME_LINES: u16 = 5;

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Size of the rendered board in terminal cells
pub fn board_size(columns: usize, rows: usize) -> (u16, u16) {
    let width = to_u16(columns)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(GRID_LEFT + GRID_RIGHT);
    let height = to_u16(rows).saturating_add(FRAME_LINES);
    (width, height)
}

/// The rect the board occupies inside `area`: centered horizontally, top
/// aligned, clipped to `area`.
pub fn board_rect(area: Rect, columns: usize, rows: usize) -> Rect {
    let (width, height) = board_size(columns, rows);
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, height)
}

/// Map a pointer position onto a column of a board drawn at `board`.
/// `None` when the pointer is outside the drawn board, left of the grid or
/// past its last column.
pub fn column_at(board: Rect, x: u16, y: u16, columns: usize) -> Option<usize> {
    let left = board.x.saturating_add(GRID_LEFT);
    if !board.contains(Position { x, y }) || x < left {
        return None;
    }
    let column = usize::from((x - left) / CELL_WIDTH);
    (column < columns).then_some(column)
}

/// One-based column number, centered and cut to one cell's width
fn column_label(col: usize) -> String {
    format!("{:^3.3}", (col + 1).to_string())
}

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::PlayerOne => (" \u{25cf} ", Color::Red),
        Cell::PlayerTwo => (" \u{25cf} ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Render the board with column numbers and the selection marker into
/// `area`. Returns the rect the board was drawn in.
pub fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) -> Rect {
    let board = game.board();
    let columns = board.columns();
    let rect = board_rect(area, columns, board.rows());
    let mut lines = Vec::new();

    // Floating disc for the player about to move
    let mut disc_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column && !game.is_terminal() {
            disc_line.push(cell_span(game.current_player().to_cell()));
        } else {
            disc_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(disc_line));

    // Column numbers, dimmed once a column is full
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..columns {
        let label = column_label(col);
        let playable = board.is_column_playable(col).unwrap_or(false);
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if playable {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        col_line.push(Span::styled(label, style));
    }
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * usize::from(CELL_WIDTH) + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend(board.row_cells(row).map(cell_span));
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), rect);
    rect
}
