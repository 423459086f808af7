use serde::{Deserialize, Serialize};

use crate::engine::types::Color;

/// 1ゲームの開始条件。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 先手の色。
    pub first_player: Color,
}

impl Default for GameConfig {
    #[inline]
    fn default() -> Self {
        Self {
            first_player: Color::Black,
        }
    }
}
