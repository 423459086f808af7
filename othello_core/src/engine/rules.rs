//! 着手の合法性判定と反転処理。
//!
//! 判定と適用は同じ1方向走査 [`sandwich`] を共有する。

use crate::engine::board::{Board, BoardError};
use crate::engine::types::{Cell, Color, Direction, Position};

/// 1方向に盤端まで進んだときの最大歩数。
const MAX_STEPS: usize = 7;

/// `origin` から `direction` へ走査し、挟める相手石の座標を返す。
///
/// 相手石が1個以上連続し、その直後に自石がある場合のみ `Some`。
/// 盤外・空きマスに当たった場合、隣が自石の場合は `None`。
fn sandwich(board: &Board, color: Color, origin: Position, direction: Direction) -> Option<Vec<Position>> {
    let mut run = Vec::new();
    let mut cursor = origin;

    for _ in 0..MAX_STEPS {
        cursor = cursor.translate(direction);
        match board.cell_at(cursor).ok()? {
            Cell::Empty => return None,
            Cell::Occupied(disc) if disc == color => {
                return if run.is_empty() { None } else { Some(run) };
            }
            Cell::Occupied(_) => run.push(cursor),
        }
    }

    None
}

impl Board {
    /// `color` が `target` に打った場合に反転する石を全方向分返す。
    ///
    /// 合法手でない場合は空を返す。
    ///
    /// # Errors
    ///
    /// `target` が盤外の場合、`BoardError::OutOfRange` を返す。
    pub fn captures(&self, color: Color, target: Position) -> Result<Vec<Position>, BoardError> {
        if !self.cell_at(target)?.is_empty() {
            return Ok(Vec::new());
        }

        Ok(Direction::ALL
            .iter()
            .filter_map(|dir| sandwich(self, color, target, *dir))
            .flatten()
            .collect())
    }

    /// `color` が `target` に打てるかを返す。
    ///
    /// 空きマスであり、いずれかの方向で相手石を挟める場合に合法。
    ///
    /// # Errors
    ///
    /// `target` が盤外の場合、`BoardError::OutOfRange` を返す。
    #[inline]
    pub fn is_legal_move(&self, color: Color, target: Position) -> Result<bool, BoardError> {
        if !self.cell_at(target)?.is_empty() {
            return Ok(false);
        }

        Ok(Direction::ALL
            .iter()
            .any(|dir| sandwich(self, color, target, *dir).is_some()))
    }

    /// `color` の合法手を行優先で列挙する。
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|pos| self.is_legal_move(color, *pos).unwrap_or(false))
            .collect()
    }

    /// `color` が着手可能かを返す。
    #[inline]
    #[must_use]
    pub fn can_play(&self, color: Color) -> bool {
        Position::all().any(|pos| self.is_legal_move(color, pos).unwrap_or(false))
    }

    /// `color` に合法手が1つも無いかを返す。
    #[inline]
    #[must_use]
    pub fn no_moves_available(&self, color: Color) -> bool {
        !self.can_play(color)
    }

    /// 着手を盤面に反映し、反転した石の座標を返す。
    ///
    /// 方向ごとに挟みを再判定し、成立した全方向を反転してから `target` に石を置く。
    /// 合法性の確認は呼び出し側の責務で、どの方向も成立しない場合は盤面を変更しない。
    ///
    /// # Errors
    ///
    /// `target` が盤外の場合、`BoardError::OutOfRange` を返す。
    pub fn apply_move(&mut self, color: Color, target: Position) -> Result<Vec<Position>, BoardError> {
        let flipped = self.captures(color, target)?;
        if flipped.is_empty() {
            return Ok(flipped);
        }

        for pos in &flipped {
            self.set_cell(*pos, color)?;
        }
        self.set_cell(target, color)?;

        Ok(flipped)
    }
}
