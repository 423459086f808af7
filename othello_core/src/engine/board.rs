use core::fmt;

use crate::engine::types::{BOARD_LEN, Cell, Color, Position};

/// 盤の一辺のマス数（配列長）。
const SIDE: usize = BOARD_LEN as usize;

/// 8×8 の石配置。
pub type Cells = [[Cell; SIDE]; SIDE];

/// 盤面操作に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardError {
    /// 盤外の座標が指定された。
    #[error("position ({row}, {col}) is off the board")]
    OutOfRange {
        /// 指定された行。
        row: i8,
        /// 指定された列。
        col: i8,
    },
    /// 盤面図を解釈できなかった。
    #[error("malformed board diagram: {0}")]
    MalformedDiagram(String),
}

impl BoardError {
    /// 座標から `OutOfRange` を生成する。
    #[inline]
    #[must_use]
    pub const fn out_of_range(pos: Position) -> Self {
        Self::OutOfRange {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

/// 盤面（8×8 のマス、行優先）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// `cells[row][col]`。
    cells: Cells,
}

impl Board {
    /// 指定マスの状態を返す。
    ///
    /// # Errors
    ///
    /// `pos` が盤外の場合、`BoardError::OutOfRange` を返す。
    #[inline]
    pub fn cell_at(&self, pos: Position) -> Result<Cell, BoardError> {
        let (row, col) = pos.indices().ok_or(BoardError::out_of_range(pos))?;
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .ok_or(BoardError::out_of_range(pos))
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        (self.count_discs(Color::Black), self.count_discs(Color::White))
    }

    /// 指定色の石数を数える。
    #[inline]
    #[must_use]
    pub fn count_discs(&self, color: Color) -> u32 {
        let mut count = 0_u32;
        for cell in self.cells.iter().flatten() {
            if color.owns(*cell) {
                count = count.saturating_add(1);
            }
        }
        count
    }

    /// 全マスが空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// 盤面図（8行、`.`/`B`/`W`）から盤面を生成する。
    ///
    /// 空行と空白は無視する。
    ///
    /// # Errors
    ///
    /// 行数・列数が 8 でない場合や未知の文字を含む場合、
    /// `BoardError::MalformedDiagram` を返す。
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<char>>())
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != SIDE {
            return Err(BoardError::MalformedDiagram(format!(
                "expected {SIDE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row_idx, (line, target)) in rows.iter().zip(board.cells.iter_mut()).enumerate() {
            if line.len() != SIDE {
                return Err(BoardError::MalformedDiagram(format!(
                    "row {row_idx} has {} cells, expected {SIDE}",
                    line.len()
                )));
            }
            for (ch, cell) in line.iter().zip(target.iter_mut()) {
                *cell = Cell::from_char(*ch).ok_or_else(|| {
                    BoardError::MalformedDiagram(format!("unexpected {ch:?} in row {row_idx}"))
                })?;
            }
        }

        Ok(board)
    }

    /// 初期局面（中央4マス）を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        let mut cells = [[Cell::Empty; SIDE]; SIDE];
        cells[3][3] = Cell::Occupied(Color::White);
        cells[4][4] = Cell::Occupied(Color::White);
        cells[3][4] = Cell::Occupied(Color::Black);
        cells[4][3] = Cell::Occupied(Color::Black);
        Self { cells }
    }

    /// 指定マスに石を置く（合法性は検査しない）。
    ///
    /// # Errors
    ///
    /// `pos` が盤外の場合、`BoardError::OutOfRange` を返す。
    #[inline]
    pub fn set_cell(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        let (row, col) = pos.indices().ok_or(BoardError::out_of_range(pos))?;
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|line| line.get_mut(col))
            .ok_or(BoardError::out_of_range(pos))?;
        *cell = Cell::Occupied(color);
        Ok(())
    }

    /// 盤面全体の読み取り専用スナップショットを返す。
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Cells {
        self.cells
    }

    /// 盤上の石の総数を返す。
    #[inline]
    #[must_use]
    pub fn total_discs(&self) -> u32 {
        let (black, white) = self.counts();
        black.saturating_add(white)
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for cell in line {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
