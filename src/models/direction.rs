use serde::Serialize;

/// Side of a transfer seen from one lawyer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Direction {
    Cede,
    Recibe,
}

impl Direction {
    /// Convert query value → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cede" => Some(Direction::Cede),
            "recibe" => Some(Direction::Recibe),
            _ => None,
        }
    }

    /// Connector used in the report ("3 a Ana" / "3 de Ana").
    pub fn preposition(&self) -> &'static str {
        match self {
            Direction::Cede => "a",
            Direction::Recibe => "de",
        }
    }
}
