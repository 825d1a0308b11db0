use board::{HEIGHT, WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal columns taken by one board cell.
pub const CELL_WIDTH: u16 = 4;
/// Borders, one padding column each side, and the cells.
pub const BOARD_PANEL_WIDTH: u16 = 2 + 2 + CELL_WIDTH * WIDTH as u16;
/// Borders, column numbers, the rows and the cursor line.
pub const BOARD_PANEL_HEIGHT: u16 = 2 + 1 + HEIGHT as u16 + 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Regions {
    pub header: Rect,
    pub board: Rect,
    pub controls: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_PANEL_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(0)])
        .split(rows[1]);
    Regions {
        header: rows[0],
        board: body[0],
        controls: body[1],
        status: rows[2],
        footer: rows[3],
    }
}

/// Screen position of cell (0, 0) inside the board panel.
pub fn grid_origin(board: Rect) -> (u16, u16) {
    (board.x + 2, board.y + 2)
}

/// Board column under a screen position, if it falls on a cell.
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let board = layout_regions(area).board;
    let (ox, oy) = grid_origin(board);
    let grid_w = CELL_WIDTH * WIDTH as u16;
    let grid_h = HEIGHT as u16;
    let inside = x >= ox && x < ox + grid_w && y >= oy && y < oy + grid_h;
    let within_panel = x < board.x + board.width && y < board.y + board.height;
    if inside && within_panel {
        Some(((x - ox) / CELL_WIDTH) as usize)
    } else {
        None
    }
}
