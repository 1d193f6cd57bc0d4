use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geometric direction an entry is expanded across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(format!("unknown axis '{other}'")),
        }
    }
}

/// Directionality of a derived entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The textual marker: `""` or `"-"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }

    /// Apply the sign to a CSS value.
    ///
    /// Negating an already negative value drops its minus instead of
    /// stacking a second one.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Sign::Positive => value.to_string(),
            Sign::Negative => match value.strip_prefix('-') {
                Some(positive) => positive.to_string(),
                None => format!("-{value}"),
            },
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output dimensionality of composed transform/translate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2d")]
    TwoD,
    #[default]
    #[serde(rename = "3d")]
    ThreeD,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::TwoD => "2d",
            Dimension::ThreeD => "3d",
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2d" => Ok(Dimension::TwoD),
            "3d" => Ok(Dimension::ThreeD),
            other => Err(format!("unknown dimension '{other}'")),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
