use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// 盤の一辺の長さ。
pub const BOARD_LEN: i8 = 8;

/// 石の色（手番）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// 黒。
    Black,
    /// 白。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// 指定マスの石がこの色かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn owns(self, cell: Cell) -> bool {
        matches!(
            (self, cell),
            (Self::Black, Cell::Occupied(Self::Black)) | (Self::White, Cell::Occupied(Self::White))
        )
    }

    /// 黒 = -1、白 = +1 の符号値を返す。
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Black => -1,
            Self::White => 1,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("Black"),
            Self::White => f.write_str("White"),
        }
    }
}

/// 色の文字列表現を解釈できなかった。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown color {0:?} (expected \"black\" or \"white\")")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Self::Black),
            "white" | "w" => Ok(Self::White),
            _ => Err(ParseColorError(s.to_owned())),
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// 石が置かれている。
    Occupied(Color),
}

impl Cell {
    /// 置かれている石の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Occupied(color) => Some(color),
        }
    }

    /// 空きマスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 盤面図で使う1文字を返す。
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Occupied(Color::Black) => 'B',
            Self::Occupied(Color::White) => 'W',
        }
    }

    /// 盤面図の1文字を解釈する。
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '-' => Some(Self::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Self::Occupied(Color::Black)),
            'W' | 'w' | 'O' | 'o' => Some(Self::Occupied(Color::White)),
            _ => None,
        }
    }
}

/// 盤面座標（行, 列）。盤外の値も表せる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行（0 が上端）。
    row: i8,
    /// 列（0 が左端）。
    col: i8,
}

impl Position {
    /// 座標を生成する（範囲チェックなし）。
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// 盤上の全 64 マスを行優先で列挙する。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_LEN).flat_map(|row| (0..BOARD_LEN).map(move |col| Self::new(row, col)))
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// 列を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// 盤外かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.row < 0 || self.row >= BOARD_LEN || self.col < 0 || self.col >= BOARD_LEN
    }

    /// 盤上なら配列インデックス（行, 列）を返す。
    #[inline]
    #[must_use]
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_off_board() {
            return None;
        }
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }

    /// 方向ベクトル分だけ移動した座標を返す（折り返しなし）。
    #[inline]
    #[must_use]
    pub const fn translate(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl fmt::Display for Position {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 挟み判定で走査する8方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// 上。
    North,
    /// 右上。
    NorthEast,
    /// 右。
    East,
    /// 右下。
    SouthEast,
    /// 下。
    South,
    /// 左下。
    SouthWest,
    /// 左。
    West,
    /// 左上。
    NorthWest,
}

impl Direction {
    /// 全方向。
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// 単位ベクトル（行差, 列差）を返す。
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}
