use serde::{Deserialize, Serialize};

/// Contents of one board position, fixed when the minefield is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Number of mines among the up-to-8 surrounding cells, in `[0, 8]`.
    Safe(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible token for one cell, as reported by `visible_value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleTile {
    Hidden,
    Mine,
    Count(u8),
}

impl VisibleTile {
    /// Single-character form used by text renderers: blank, `*`, or a digit.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => ' ',
            Self::Mine => '*',
            Self::Count(count) => (b'0' + count) as char,
        }
    }
}

impl core::fmt::Display for VisibleTile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}
