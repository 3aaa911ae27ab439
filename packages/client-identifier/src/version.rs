//! Rules to read the four character version token of Azureus style peer IDs.
//!
//! Every rule works on the token `[v0, v1, v2, v3]`. When a token does not
//! follow the rule of its client (for example a letter where a digit is
//! expected) the token is kept as it is, with the bytes that are not printable
//! ASCII escaped.

/// How a client encodes its version in the four character token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Style {
    /// `1234` is `1.2.3.4`
    FourDigits,
    /// `123x` is `1.2.3`
    ThreeDigits,
    /// `123B` is `1.2.3 Beta` and `123A` is `1.2.3 Alpha`
    ThreeDigitsPlusMnemonic,
    /// `1234` is `12.34`
    TwoMajorTwoMinor,
    /// `x123` is `1.23`
    SkipFirstOneMajorTwoMinor,
    /// `0D6x` is `0.13.6`, letters count from 10
    ThreeAlphanumeric,
    /// `13F0` is `1.3.15`
    Deluge,
    /// `2920` is `2.92`, `0009` is `0.9`, `0091` is `0.91` and `292Z` is `2.92+`
    Transmission,
    /// `0091` is `0.91` and `1010` is `10.10`
    WebTorrent,
    /// The token carries no version information.
    NoVersion,
}

/// Version used for clients whose token carries no version information.
pub const NO_VERSION: &str = "";

/// Applies the rule to the token.
#[must_use]
pub fn format(style: Style, token: &[u8; 4]) -> String {
    try_format(style, token).unwrap_or_else(|| crate::display_safe(token))
}

fn try_format(style: Style, token: &[u8; 4]) -> Option<String> {
    let [v0, v1, v2, v3] = token.map(char::from);

    let version = match style {
        Style::FourDigits => format!("{}.{}.{}.{}", digit(v0)?, digit(v1)?, digit(v2)?, digit(v3)?),
        Style::ThreeDigits => format!("{}.{}.{}", digit(v0)?, digit(v1)?, digit(v2)?),
        Style::ThreeDigitsPlusMnemonic => {
            let version = format!("{}.{}.{}", digit(v0)?, digit(v1)?, digit(v2)?);
            match v3 {
                'B' => format!("{version} Beta"),
                'A' => format!("{version} Alpha"),
                _ => version,
            }
        }
        Style::TwoMajorTwoMinor => format!("{}{}.{}{}", digit(v0)?, digit(v1)?, digit(v2)?, digit(v3)?),
        Style::SkipFirstOneMajorTwoMinor => format!("{}.{}{}", digit(v1)?, digit(v2)?, digit(v3)?),
        Style::ThreeAlphanumeric => format!("{}.{}.{}", alphanumeric(v0)?, alphanumeric(v1)?, alphanumeric(v2)?),
        Style::Deluge => format!("{}.{}.{}", digit(v0)?, digit(v1)?, alphanumeric(v2)?),
        Style::Transmission => transmission(v0, v1, v2, v3)?,
        Style::WebTorrent => format!("{}.{}", drop_leading_zero(v0, v1)?, drop_leading_zero(v2, v3)?),
        Style::NoVersion => NO_VERSION.to_owned(),
    };

    Some(version)
}

fn digit(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// `0`-`9` and then `A` = 10, `B` = 11 and so on.
fn alphanumeric(c: char) -> Option<u32> {
    if c.is_ascii_digit() || c.is_ascii_uppercase() {
        c.to_digit(36)
    } else {
        None
    }
}

fn drop_leading_zero(high: char, low: char) -> Option<String> {
    let (high, low) = (digit(high)?, digit(low)?);

    if high == 0 {
        Some(low.to_string())
    } else {
        Some(format!("{high}{low}"))
    }
}

fn transmission(v0: char, v1: char, v2: char, v3: char) -> Option<String> {
    let (d0, d1, d2) = (digit(v0)?, digit(v1)?, digit(v2)?);

    match (d0, d1, d2) {
        (0, 0, 0) => Some(format!("0.{}", digit(v3)?)),
        (0, 0, _) => Some(format!("0.{d2}{}", digit(v3)?)),
        _ => {
            let suffix = if matches!(v3, 'Z' | 'X') { "+" } else { "" };
            Some(format!("{d0}.{d1}{d2}{suffix}"))
        }
    }
}
