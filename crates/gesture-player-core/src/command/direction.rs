use std::fmt;

use serde::{Deserialize, Serialize};

/// Which neighbouring video a switch moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The next video in the playlist.
    Next,
    /// The previous video in the playlist.
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Previous => f.write_str("previous"),
        }
    }
}
