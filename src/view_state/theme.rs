use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the selected theme.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Neon,
    Void,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Neon, Theme::Void];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Neon => "neon",
            Self::Void => "void",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Neon => "Neon",
            Self::Void => "Void",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌑",
            Self::Neon => "⚡",
            Self::Void => "🌌",
        }
    }

    /// dark → neon → void → dark
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Neon,
            Self::Neon => Self::Void,
            Self::Void => Self::Dark,
        }
    }

    /// Theme to start with given what was in storage. Missing or unreadable
    /// values fall back to the default.
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "neon" => Ok(Self::Neon),
            "void" => Ok(Self::Void),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_round_trips_through_display() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_stored(Some(&theme.to_string())), theme);
        }
    }

    #[test]
    fn test_missing_or_bad_value_falls_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(
            "solarized".parse::<Theme>(),
            Err(UnknownTheme("solarized".to_string()))
        );
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = Theme::Dark;
        for expected in [Theme::Neon, Theme::Void, Theme::Dark] {
            theme = theme.next();
            assert_eq!(theme, expected);
        }
    }
}
