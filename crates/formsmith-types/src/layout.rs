use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Column-count preference for the rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Single,
    Double,
    Triple,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Single, Layout::Double, Layout::Triple];

    pub fn token(&self) -> &'static str {
        match self {
            Layout::Single => "single",
            Layout::Double => "double",
            Layout::Triple => "triple",
        }
    }

    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.token()).collect()
    }

    /// Largest column count the layout reaches on a wide viewport
    pub fn max_columns(&self) -> usize {
        match self {
            Layout::Single => 1,
            Layout::Double => 2,
            Layout::Triple => 3,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Layout::Single => Layout::Double,
            Layout::Double => Layout::Triple,
            Layout::Triple => Layout::Single,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.token() == s)
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}
