//! 端末で動作する最小 UI。
//!
//! 標準入力から `row col` を読み、エンジンへ着手要求を送る。

mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use othello_core::engine;
use tracing::Level;

use crate::config::{AppConfig, LogFormat, LoggingConfig};

/// Play Othello against another human in the terminal.
#[derive(Debug, Parser)]
#[command(name = "othello", about = "Two-player Othello in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Color that moves first (black or white)
    #[arg(long)]
    first: Option<engine::Color>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Mark legal moves on the board
    #[arg(long)]
    hints: bool,
}

/// 入力1行を解釈した結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Command {
    Help,
    Hints,
    Play(i8, i8),
    Quit,
    Show,
}

/// 入力行をコマンドに変換する。
fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["q" | "quit" | "exit"] => Ok(Command::Quit),
        ["h" | "help" | "?"] => Ok(Command::Help),
        ["moves" | "hints"] => Ok(Command::Hints),
        [] | ["board"] => Ok(Command::Show),
        [row, col] => {
            let row = row
                .parse::<i8>()
                .map_err(|_err| format!("row {row:?} is not a number"))?;
            let col = col
                .parse::<i8>()
                .map_err(|_err| format!("column {col:?} is not a number"))?;
            Ok(Command::Play(row, col))
        }
        _ => Err(format!("unrecognized command {line:?}; type `help`")),
    }
}

#[derive(Debug)]
struct App {
    game: engine::Game,
    hints: bool,
}

impl App {
    fn new(config: engine::GameConfig, hints: bool) -> Self {
        Self {
            game: engine::Game::new(config),
            hints,
        }
    }

    /// 盤面を行・列番号付きで描画する。
    fn render(&self, board: &engine::Board) -> String {
        let legal = if self.hints {
            self.game.legal_moves()
        } else {
            Vec::new()
        };

        let mut out = String::from("  0 1 2 3 4 5 6 7\n");
        for (row, line) in (0_i8..).zip(board.snapshot()) {
            out.push_str(&row.to_string());
            for (col, cell) in (0_i8..).zip(line) {
                let mark = if legal.contains(&engine::Position::new(row, col)) {
                    '*'
                } else {
                    cell.to_char()
                };
                out.push(' ');
                out.push(mark);
            }
            out.push('\n');
        }
        out
    }

    fn status_text(&self) -> String {
        let black = self.game.score_of(engine::Color::Black);
        let white = self.game.score_of(engine::Color::White);

        match self.game.result() {
            None => {
                let side = self
                    .game
                    .side_to_move()
                    .map_or_else(|| "Nobody".to_owned(), |color| color.to_string());
                format!("{side} to move | B={black} W={white}")
            }
            Some(engine::GameResult::Win(color)) => {
                format!("Game Over: {color} wins | B={black} W={white}")
            }
            Some(engine::GameResult::Draw) => format!("Game Over: Draw | B={black} W={white}"),
        }
    }

    /// 着手を送り、返ってきたイベントを表示する。
    fn try_play<W: Write>(&mut self, row: i8, col: i8, out: &mut W) -> io::Result<()> {
        let Some(side) = self.game.side_to_move() else {
            return writeln!(out, "{}", engine::PlayError::GameOver);
        };

        let result = self.game.submit_move(side, row, col);
        if let Some(err) = result.rejection() {
            return writeln!(out, "rejected: {err}");
        }

        for event in result.events() {
            match event {
                engine::Event::BoardChanged { board, .. } => {
                    write!(out, "{}", self.render(board))?;
                }
                engine::Event::Passed { skipped } => {
                    writeln!(out, "{skipped} has no legal move and passes.")?;
                }
                engine::Event::GameOver { board, .. } => {
                    write!(out, "{}", self.render(board))?;
                }
                _ => {}
            }
        }
        writeln!(out, "{}", self.status_text())
    }

    /// 入力が尽きるか `quit` まで対話ループを回す。
    fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.render(self.game.board()))?;
        writeln!(out, "{}", self.status_text())?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    writeln!(out, "commands: <row> <col> | board | moves | quit")?;
                }
                Ok(Command::Hints) => {
                    let moves: Vec<String> = self
                        .game
                        .legal_moves()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    writeln!(out, "legal moves: {}", moves.join(" "))?;
                }
                Ok(Command::Play(row, col)) => self.try_play(row, col, out)?,
                Ok(Command::Show) => {
                    write!(out, "{}", self.render(self.game.board()))?;
                    writeln!(out, "{}", self.status_text())?;
                }
                Err(msg) => writeln!(out, "{msg}")?,
            }
            out.flush()?;
        }

        Ok(())
    }
}

/// `tracing` の購読者を設定する（出力先は標準エラー）。
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let level: Level = logging
        .level
        .parse()
        .with_context(|| format!("invalid log level {:?}", logging.level))?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging)?;
    tracing::info!(first_player = %config.game.first_player, "starting game");

    let mut app = App::new(config.game, cli.hints);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
