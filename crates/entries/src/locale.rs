use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Cy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct LocaleParseError(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Cy];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cy => "cy",
        }
    }

    /// The other member of the two-locale set.
    pub fn alternate(self) -> Locale {
        match self {
            Locale::En => Locale::Cy,
            Locale::Cy => Locale::En,
        }
    }

    /// Site-relative link for a CMS uri. Welsh pages live under `/welsh`.
    pub fn path_for(self, uri: &str) -> String {
        match self {
            Locale::Cy => format!("/welsh/{uri}"),
            Locale::En => format!("/{uri}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "cy" => Ok(Locale::Cy),
            other => Err(LocaleParseError(other.to_string())),
        }
    }
}

// Locales sort by their code so locale sets come out as ["cy", "en"].
impl Ord for Locale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
            assert_eq!(locale.to_string(), locale.code());
        }
        assert!("fr".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn ordering_follows_code() {
        let mut locales = vec![Locale::En, Locale::Cy];
        locales.sort();
        assert_eq!(locales, vec![Locale::Cy, Locale::En]);
    }

    #[test]
    fn welsh_paths_are_prefixed() {
        assert_eq!(Locale::Cy.path_for("funding/programmes"), "/welsh/funding/programmes");
        assert_eq!(Locale::En.path_for("funding/programmes"), "/funding/programmes");
        assert_eq!(Locale::En.alternate(), Locale::Cy);
    }
}
