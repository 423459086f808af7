use tracing::{debug, info, instrument};

use crate::engine::board::Board;
use crate::engine::config::GameConfig;
use crate::engine::event::Event;
use crate::engine::types::{Cell, Color, Position};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 指定色の着手待ち。
    AwaitingMove(Color),
    /// 終局（双方に合法手が無い）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
}

impl Status {
    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }

    /// 着手待ちの色を返す（終局後は `None`）。
    #[inline]
    #[must_use]
    pub const fn to_move(self) -> Option<Color> {
        match self {
            Self::AwaitingMove(color) => Some(color),
            Self::GameOver { .. } => None,
        }
    }
}

/// 終局時の勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameResult {
    /// 引き分け。
    Draw,
    /// 指定色の勝ち。
    Win(Color),
}

/// 着手が受理されなかった理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is over; no further moves are accepted")]
    GameOver,
    /// 指定マスが合法手ではない。
    #[error("illegal move at ({row}, {col})")]
    IllegalMove {
        /// 指定された行。
        row: i8,
        /// 指定された列。
        col: i8,
    },
    /// 手番ではない色が着手しようとした。
    #[error("{got} tried to move but it is {expected}'s turn")]
    NotYourTurn {
        /// 現在の手番。
        expected: Color,
        /// 着手しようとした色。
        got: Color,
    },
    /// 盤外の座標が指定された。
    #[error("position ({row}, {col}) is off the board")]
    OutOfRange {
        /// 指定された行。
        row: i8,
        /// 指定された列。
        col: i8,
    },
}

/// `submit_move` の結果。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveResult {
    /// 反転した石。
    captured: Vec<Position>,
    /// 発火したイベント。
    events: Vec<Event>,
    /// 遷移後の状態。
    next_state: Status,
    /// 却下された場合の理由。
    rejection: Option<PlayError>,
}

impl MoveResult {
    /// 受理されたかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// 反転した石の座標を返す。
    #[inline]
    #[must_use]
    pub fn captured(&self) -> &[Position] {
        &self.captured
    }

    /// 表示層へ転送するイベントを返す。
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// `Result` に変換する。
    ///
    /// # Errors
    ///
    /// 着手が却下されていた場合、その理由を返す。
    #[inline]
    pub fn into_result(self) -> Result<Self, PlayError> {
        match self.rejection {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    /// 遷移後の状態を返す。
    #[inline]
    #[must_use]
    pub const fn next_state(&self) -> Status {
        self.next_state
    }

    /// 却下理由を返す。
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<&PlayError> {
        self.rejection.as_ref()
    }

    /// 却下結果を生成する。
    const fn rejected(err: PlayError, state: Status) -> Self {
        Self {
            captured: Vec::new(),
            events: Vec::new(),
            next_state: state,
            rejection: Some(err),
        }
    }
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 現在の状態。
    status: Status,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面から開始する。
    ///
    /// `to_move` に合法手が無ければ相手番、双方に無ければ終局として扱う。
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let (status, _skipped) = resolve(&board, to_move);
        Self { board, status }
    }

    /// 指定マスの状態を返す。
    ///
    /// # Errors
    ///
    /// 盤外の場合、`PlayError::OutOfRange` を返す。
    #[inline]
    pub fn get_cell(&self, row: i8, col: i8) -> Result<Cell, PlayError> {
        self.board
            .cell_at(Position::new(row, col))
            .map_err(|_err| PlayError::OutOfRange { row, col })
    }

    /// 黒先の初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::initial(),
            status: Status::AwaitingMove(Color::Black),
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// 現手番の合法手を返す（終局後は空）。
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        self.status
            .to_move()
            .map_or_else(Vec::new, |color| self.board.legal_moves(color))
    }

    /// 設定に従って初期局面から開始する。
    #[inline]
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            board: Board::initial(),
            status: Status::AwaitingMove(config.first_player),
        }
    }

    /// 1手を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返し、盤面・状態は変更しない：
    /// - `PlayError::GameOver`: すでに終局している場合
    /// - `PlayError::NotYourTurn`: `color` が手番でない場合
    /// - `PlayError::OutOfRange`: `target` が盤外の場合
    /// - `PlayError::IllegalMove`: 空きでない、またはどの方向も挟めない場合
    pub fn play(&mut self, color: Color, target: Position) -> Result<MoveResult, PlayError> {
        let expected = match self.status {
            Status::GameOver { .. } => return Err(PlayError::GameOver),
            Status::AwaitingMove(active) => active,
        };
        if color != expected {
            return Err(PlayError::NotYourTurn {
                expected,
                got: color,
            });
        }

        let (row, col) = (target.row(), target.col());
        let legal = self
            .board
            .is_legal_move(color, target)
            .map_err(|_err| PlayError::OutOfRange { row, col })?;
        if !legal {
            return Err(PlayError::IllegalMove { row, col });
        }

        let captured = self
            .board
            .apply_move(color, target)
            .map_err(|_err| PlayError::OutOfRange { row, col })?;

        let (status, skipped) = resolve(&self.board, color.opponent());
        self.status = status;

        let mut events = Vec::new();
        match status {
            Status::AwaitingMove(to_move) => {
                events.push(Event::BoardChanged {
                    board: self.board,
                    to_move,
                });
                if let Some(skipped_color) = skipped {
                    debug!(skipped = %skipped_color, "no legal move, turn passes back");
                    events.push(Event::Passed {
                        skipped: skipped_color,
                    });
                }
            }
            Status::GameOver { black, white } => {
                info!(black, white, "game over");
                events.push(Event::GameOver {
                    board: self.board,
                    black,
                    white,
                });
            }
        }

        Ok(MoveResult {
            captured,
            events,
            next_state: status,
            rejection: None,
        })
    }

    /// 終局していれば勝敗を返す。
    #[inline]
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::AwaitingMove(_) => None,
            Status::GameOver { black, white } => Some(if black > white {
                GameResult::Win(Color::Black)
            } else if white > black {
                GameResult::Win(Color::White)
            } else {
                GameResult::Draw
            }),
        }
    }

    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub fn score_of(&self, color: Color) -> u32 {
        self.board.count_discs(color)
    }

    /// 現手番を返す（終局後は `None`）。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Option<Color> {
        self.status.to_move()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// 着手要求を処理する。却下も `MoveResult` として返す。
    #[instrument(level = "debug", skip(self), fields(state = ?self.status))]
    pub fn submit_move(&mut self, color: Color, row: i8, col: i8) -> MoveResult {
        match self.play(color, Position::new(row, col)) {
            Ok(result) => result,
            Err(err) => {
                debug!(error = %err, "move rejected");
                MoveResult::rejected(err, self.status)
            }
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// `next` に手番を渡した後の状態と、飛ばされた色を決める。
fn resolve(board: &Board, next: Color) -> (Status, Option<Color>) {
    if board.can_play(next) {
        return (Status::AwaitingMove(next), None);
    }

    if board.can_play(next.opponent()) {
        return (Status::AwaitingMove(next.opponent()), Some(next));
    }

    let (black, white) = board.counts();
    (Status::GameOver { black, white }, None)
}

#[cfg(test)]
mod tests {
    use super::{Game, GameResult, PlayError, Status};
    use crate::engine::board::Board;
    use crate::engine::config::GameConfig;
    use crate::engine::event::Event;
    use crate::engine::types::{Cell, Color, Position};

    /// 黒が (0,2) を打つと白は打てなくなるが、黒は (7,5) に打てる局面。
    const PASS_DIAGRAM: &str = "
        BW......
        ........
        ........
        ........
        ........
        ........
        ........
        ......WB
    ";

    #[test]
    fn initial_state_awaits_configured_first_player() {
        let game = Game::initial();
        assert_eq!(game.status(), Status::AwaitingMove(Color::Black));
        assert_eq!(game.score_of(Color::Black), 2);
        assert_eq!(game.score_of(Color::White), 2);

        let white_first = Game::new(GameConfig {
            first_player: Color::White,
        });
        assert_eq!(white_first.side_to_move(), Some(Color::White));
    }

    #[test]
    fn opening_move_is_accepted_and_turn_passes() {
        let mut game = Game::initial();
        let result = game.submit_move(Color::Black, 2, 3);

        assert!(result.accepted());
        assert_eq!(result.captured(), &[Position::new(3, 3)]);
        assert_eq!(result.next_state(), Status::AwaitingMove(Color::White));
        assert_eq!(
            result.events(),
            &[Event::BoardChanged {
                board: *game.board(),
                to_move: Color::White,
            }]
        );
        assert_eq!(game.score_of(Color::Black), 4);
        assert_eq!(game.score_of(Color::White), 1);
        assert_eq!(game.get_cell(3, 3), Ok(Cell::Occupied(Color::Black)));
    }

    #[test]
    fn occupied_cell_is_rejected_without_mutation() {
        for color in [Color::Black, Color::White] {
            let mut game = Game::new(GameConfig {
                first_player: color,
            });
            let before = game;
            let result = game.submit_move(color, 3, 3);

            assert!(!result.accepted());
            assert_eq!(
                result.rejection(),
                Some(&PlayError::IllegalMove { row: 3, col: 3 })
            );
            assert!(result.events().is_empty());
            assert_eq!(game, before);
        }
    }

    #[test]
    fn move_without_capture_is_rejected() {
        let mut game = Game::initial();
        let result = game.submit_move(Color::Black, 0, 0);
        assert_eq!(
            result.into_result(),
            Err(PlayError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(game, Game::initial());
    }

    #[test]
    fn off_board_move_is_a_recoverable_error() {
        let mut game = Game::initial();
        let result = game.submit_move(Color::Black, 8, 0);
        assert_eq!(
            result.rejection(),
            Some(&PlayError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            game.get_cell(-1, 2),
            Err(PlayError::OutOfRange { row: -1, col: 2 })
        );
        assert_eq!(game, Game::initial());
    }

    #[test]
    fn move_by_inactive_color_is_rejected() {
        let mut game = Game::initial();
        let result = game.submit_move(Color::White, 2, 4);
        assert_eq!(
            result.rejection(),
            Some(&PlayError::NotYourTurn {
                expected: Color::Black,
                got: Color::White,
            })
        );
        assert_eq!(result.next_state(), Status::AwaitingMove(Color::Black));
    }

    #[test]
    fn turn_stays_with_mover_when_opponent_cannot_move() {
        let board = Board::from_diagram(PASS_DIAGRAM).unwrap();
        let mut game = Game::from_board(board, Color::Black);

        let result = game.submit_move(Color::Black, 0, 2);
        assert!(result.accepted());
        assert!(game.board().no_moves_available(Color::White));
        assert!(!game.board().no_moves_available(Color::Black));
        assert_eq!(result.next_state(), Status::AwaitingMove(Color::Black));
        assert_eq!(
            result.events(),
            &[
                Event::BoardChanged {
                    board: *game.board(),
                    to_move: Color::Black,
                },
                Event::Passed {
                    skipped: Color::White,
                },
            ]
        );
    }

    #[test]
    fn game_ends_when_neither_color_can_move() {
        let board = Board::from_diagram(PASS_DIAGRAM).unwrap();
        let mut game = Game::from_board(board, Color::Black);
        assert!(game.submit_move(Color::Black, 0, 2).accepted());

        let result = game.submit_move(Color::Black, 7, 5);
        assert!(result.accepted());
        assert_eq!(
            result.next_state(),
            Status::GameOver { black: 6, white: 0 }
        );
        assert!(matches!(
            result.events(),
            [Event::GameOver {
                black: 6,
                white: 0,
                ..
            }]
        ));
        assert_eq!(game.result(), Some(GameResult::Win(Color::Black)));
        assert!(game.legal_moves().is_empty());

        let frozen = game;
        let after = game.submit_move(Color::Black, 1, 1);
        assert_eq!(after.rejection(), Some(&PlayError::GameOver));
        assert_eq!(game, frozen);
    }

    #[test]
    fn from_board_applies_pass_rule_immediately() {
        let board = Board::from_diagram(PASS_DIAGRAM).unwrap();
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.status(), Status::AwaitingMove(Color::Black));
    }

    #[test]
    fn full_even_board_is_a_draw() {
        let board = Board::from_diagram(
            "
            BBBBBBBB
            WWWWWWWW
            BBBBBBBB
            WWWWWWWW
            BBBBBBBB
            WWWWWWWW
            BBBBBBBB
            WWWWWWWW
            ",
        )
        .unwrap();
        let game = Game::from_board(board, Color::Black);
        assert_eq!(game.status(), Status::GameOver { black: 32, white: 32 });
        assert_eq!(game.result(), Some(GameResult::Draw));
    }
}
