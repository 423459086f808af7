//! Othello (Reversi) board engine.
//!
//! このクレートは盤面・合法手判定・反転処理・手番管理を行う `engine` を提供します。
//! 描画や入力変換は呼び出し側（`othello_cli` など）が担当し、
//! エンジンは型付きのクエリ／コマンドとイベントのみを公開します。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;
