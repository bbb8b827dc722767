use std::collections::BTreeMap;
use std::fmt;

use super::evaluation;
use super::player::Player;
use crate::error::PositionError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column that earns the center bonus during evaluation.
pub const CENTER_COL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Parse a numeric cell value (0 empty, 1 or 2 for a player)
    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the top, row 5 is the bottom.
///
/// `Position` is `Copy`: every successor produced by [`Position::successors`]
/// owns its own grid and never aliases its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Cell; COLS]; ROWS],
}

fn check_col(col: usize) -> Result<(), PositionError> {
    if col >= COLS {
        return Err(PositionError::InvalidColumn(col));
    }
    Ok(())
}

impl Position {
    /// Create a new empty position
    pub fn new() -> Self {
        Position {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a position from raw numeric tokens (0 empty, 1/2 players).
    ///
    /// No gravity or turn-order checks are made.
    pub fn from_grid(grid: [[u8; COLS]; ROWS]) -> Result<Self, PositionError> {
        let mut position = Position::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                position.cells[row][col] = Cell::from_value(value)
                    .ok_or(PositionError::InvalidCell { row, col, value })?;
            }
        }
        Ok(position)
    }

    /// Parse six rows of `.`, `X` and `O`, top row first. Whitespace inside a
    /// row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, PositionError> {
        if rows.len() != ROWS {
            return Err(PositionError::Parse(format!(
                "expected {ROWS} rows, got {}",
                rows.len()
            )));
        }
        let mut position = Position::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(PositionError::Parse(format!(
                    "row {row} has {} cells, expected {COLS}",
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                position.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::PlayerOne,
                    'O' | 'o' => Cell::PlayerTwo,
                    other => {
                        return Err(PositionError::Parse(format!(
                            "unexpected character '{other}' at row {row}, column {col}"
                        )))
                    }
                };
            }
        }
        Ok(position)
    }

    /// Get the cell at a specific position
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, PositionError> {
        check_col(col)?;
        if row >= ROWS {
            return Err(PositionError::InvalidRow(row));
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked cell access for code that iterates within the grid bounds
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if all six rows of a column are occupied
    pub fn is_column_full(&self, col: usize) -> Result<bool, PositionError> {
        check_col(col)?;
        Ok((0..ROWS).all(|row| self.cells[row][col] != Cell::Empty))
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// The grid is left untouched on error.
    pub fn drop_piece(&mut self, player: Player, col: usize) -> Result<usize, PositionError> {
        check_col(col)?;

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.to_cell();
                return Ok(row);
            }
        }

        Err(PositionError::ColumnFull(col))
    }

    /// Columns that can still take a piece, ascending
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.cells.iter().any(|row| row[col] == Cell::Empty))
            .collect()
    }

    /// Every position reachable by one drop of `player`, keyed by column.
    /// Iteration order is ascending column index.
    pub fn successors(&self, player: Player) -> BTreeMap<usize, Position> {
        let mut children = BTreeMap::new();
        for col in self.legal_columns() {
            let mut child = *self;
            if child.drop_piece(player, col).is_ok() {
                children.insert(col, child);
            }
        }
        children
    }

    /// Number of pieces owned by `player`
    pub fn count(&self, player: Player) -> usize {
        let cell = player.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Total number of pieces on the grid
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count()
    }

    /// Player to move, derived from piece counts: equal counts means
    /// Player One moves, otherwise Player Two.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::One) == self.count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.piece_count() == ROWS * COLS
    }

    /// Scan every cell as the start of a four-in-a-row and return the first
    /// owner found.
    pub fn winner(&self) -> Option<Player> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                let Some(player) = cell.player() else {
                    continue;
                };
                if self.check_vertical(row, col, cell)
                    || self.check_horizontal(row, col, cell)
                    || self.check_diagonal_up(row, col, cell)
                    || self.check_diagonal_down(row, col, cell)
                {
                    return Some(player);
                }
            }
        }
        None
    }

    /// A decided winner or a full grid
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Heuristic score from Player One's perspective
    pub fn evaluate(&self) -> i64 {
        evaluation::evaluate(self)
    }

    /// Check downward from (row, col)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        row + 3 < ROWS && (1..4).all(|i| self.cells[row + i][col] == cell)
    }

    /// Check rightward from (row, col)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        col + 3 < COLS && (1..4).all(|i| self.cells[row][col + i] == cell)
    }

    /// Check up-right from (row, col), /
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        row >= 3 && col + 3 < COLS && (1..4).all(|i| self.cells[row - i][col + i] == cell)
    }

    /// Check down-right from (row, col), \
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        row + 3 < ROWS
            && col + 3 < COLS
            && (1..4).all(|i| self.cells[row + i][col + i] == cell)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let position = Position::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(position.cell(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(position.piece_count(), 0);
        assert_eq!(position.side_to_move(), Player::One);
    }

    #[test]
    fn test_drop_piece() {
        let mut position = Position::new();

        // Drop first piece in column 3
        let row = position.drop_piece(Player::One, 3).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(position.cell(5, 3).unwrap(), Cell::PlayerOne);

        // Drop second piece in same column
        let row = position.drop_piece(Player::Two, 3).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(position.cell(4, 3).unwrap(), Cell::PlayerTwo);
    }

    #[test]
    fn test_column_full() {
        let mut position = Position::new();

        // Fill column 0
        for _ in 0..ROWS {
            position.drop_piece(Player::One, 0).unwrap();
        }

        assert_eq!(position.is_column_full(0), Ok(true));
        let before = position;
        assert_eq!(
            position.drop_piece(Player::Two, 0),
            Err(PositionError::ColumnFull(0))
        );
        assert_eq!(position, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut position = Position::new();
        assert_eq!(
            position.drop_piece(Player::One, 7),
            Err(PositionError::InvalidColumn(7))
        );
        assert_eq!(
            position.is_column_full(12),
            Err(PositionError::InvalidColumn(12))
        );
    }

    #[test]
    fn test_side_to_move_parity() {
        let mut position = Position::new();
        position.drop_piece(Player::One, 0).unwrap();
        assert_eq!(position.side_to_move(), Player::Two);
        position.drop_piece(Player::Two, 0).unwrap();
        assert_eq!(position.side_to_move(), Player::One);
    }

    #[test]
    fn test_successors_are_independent_copies() {
        let mut position = Position::new();
        for _ in 0..ROWS {
            position.drop_piece(Player::One, 2).unwrap();
        }
        let children = position.successors(Player::Two);
        assert_eq!(children.keys().copied().collect::<Vec<_>>(), vec![0, 1, 3, 4, 5, 6]);
        for (&col, child) in &children {
            assert_eq!(child.piece_count(), position.piece_count() + 1);
            assert_eq!(child.cell(5, col).unwrap(), Cell::PlayerTwo);
        }
        // Parent is untouched
        assert_eq!(position.piece_count(), ROWS);
    }

    #[test]
    fn test_horizontal_win() {
        let position = Position::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", "XXXX...",
        ])
        .unwrap();
        assert_eq!(position.winner(), Some(Player::One));
        assert!(position.is_terminal());
    }

    #[test]
    fn test_vertical_win() {
        let mut position = Position::new();
        for _ in 0..4 {
            position.drop_piece(Player::Two, 3).unwrap();
        }
        assert_eq!(position.winner(), Some(Player::Two));
    }

    #[test]
    fn test_diagonal_up_win() {
        let position = Position::from_rows(&[
            ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOO...",
        ])
        .unwrap();
        assert_eq!(position.winner(), Some(Player::One));
    }

    #[test]
    fn test_diagonal_down_win() {
        let position = Position::from_rows(&[
            ".......", ".......", "...O...", "...XO..", "...XXO.", "...XXXO",
        ])
        .unwrap();
        assert_eq!(position.winner(), Some(Player::Two));
    }

    #[test]
    fn test_no_win_with_three() {
        let position = Position::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", "XXX.OOO",
        ])
        .unwrap();
        assert_eq!(position.winner(), None);
        assert!(!position.is_terminal());
    }

    #[test]
    fn test_from_grid_rejects_invalid_value() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[4][1] = 3;
        assert_eq!(
            Position::from_grid(grid),
            Err(PositionError::InvalidCell { row: 4, col: 1, value: 3 })
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Position::from_rows(&["......."]).is_err());
        assert!(Position::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", "XX?....",
        ])
        .is_err());
    }

    #[test]
    fn test_display() {
        let mut position = Position::new();
        position.drop_piece(Player::One, 0).unwrap();
        position.drop_piece(Player::Two, 6).unwrap();
        let rendered = position.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[5], "X . . . . . O");
        assert_eq!(lines[6], "0 1 2 3 4 5 6");
    }
}
