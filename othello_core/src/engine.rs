/// 盤面（マス配列と石数）の実装。
pub mod board;
/// 1ゲームの開始条件。
pub mod config;
/// 表示層への通知。
pub mod event;
/// ゲーム進行（手番、パス、終局判定）の実装。
pub mod game;
/// 合法手判定と反転処理の実装。
pub mod rules;
pub mod types;

pub type Board = board::Board;
pub type BoardError = board::BoardError;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Direction = types::Direction;
pub type Event = event::Event;
pub type Game = game::Game;
pub type GameConfig = config::GameConfig;
pub type GameResult = game::GameResult;
pub type GameStatus = game::Status;
pub type MoveResult = game::MoveResult;
pub type PlayError = game::PlayError;
pub type Position = types::Position;
