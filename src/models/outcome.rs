use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// Which side of a binary market an outcome sits on.
///
/// Backend payloads carry this as free text in whatever casing the source
/// produced ("YES", "yes", "No", ...). Callers normalize through `FromStr`
/// at the boundary; everything past that point works with the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// Direction marker shown next to the outcome price.
    pub fn glyph(&self) -> &'static str {
        match self {
            Side::Yes => "▲",
            Side::No => "▼",
        }
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("yes") {
            Ok(Side::Yes)
        } else if normalized.eq_ignore_ascii_case("no") {
            Ok(Side::No)
        } else {
            bail!("Unknown outcome side: {:?}", s)
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Yes => write!(f, "Yes"),
            Side::No => write!(f, "No"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_casing() {
        assert_eq!("yes".parse::<Side>().unwrap(), Side::Yes);
        assert_eq!("YES".parse::<Side>().unwrap(), Side::Yes);
        assert_eq!("No".parse::<Side>().unwrap(), Side::No);
        assert_eq!("nO".parse::<Side>().unwrap(), Side::No);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(" Yes ".parse::<Side>().unwrap(), Side::Yes);
    }

    #[test]
    fn rejects_anything_else() {
        assert!("maybe".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
        assert!("y".parse::<Side>().is_err());
    }

    #[test]
    fn displays_canonical_casing() {
        assert_eq!(Side::Yes.to_string(), "Yes");
        assert_eq!(Side::No.to_string(), "No");
    }
}
