use crate::engine::board::Board;
use crate::engine::types::Color;

/// 表示層へ通知するイベント。
///
/// 着手が受理されるたびに [`crate::engine::game::MoveResult`] に積まれ、
/// イベントループを持つ呼び出し側が描画などへ転送する。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Event {
    /// 盤面が更新された。
    BoardChanged {
        /// 更新後の盤面。
        board: Board,
        /// 次の手番。
        to_move: Color,
    },
    /// 終局した。
    GameOver {
        /// 最終盤面。
        board: Board,
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 合法手が無いため手番が飛ばされた。
    Passed {
        /// 手番を飛ばされた色。
        skipped: Color,
    },
}
