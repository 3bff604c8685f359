//! Core editor types: editing mode and lifecycle phase.

use std::fmt;
use std::str::FromStr;

/// Which of the two views is currently active and editable.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The rendered, directly editable view.
    #[default]
    Visual,
    /// The raw markup shown as plain text.
    Source,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Visual => "visual",
            Mode::Source => "source",
        }
    }

    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            Mode::Visual => Mode::Source,
            Mode::Source => Mode::Visual,
        }
    }

    /// Message announced through the live region after switching to this mode.
    pub fn announcement(self) -> &'static str {
        match self {
            Mode::Visual => "Switched to Visual mode",
            Mode::Source => "Switched to HTML mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Mode`] from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown editor mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visual" => Ok(Mode::Visual),
            "source" => Ok(Mode::Source),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Lifecycle phase of an editor instance.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Scaffold built and events wired.
    Attached,
    /// Torn down; the host page is back to its pre-attach state.
    Detached,
}
