use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{configuration_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
}

enum Grouping {
    Thousands,
    // 12,34,567
    Indian,
}

struct Style {
    symbol: &'static str,
    symbol_first: bool,
    group_separator: &'static str,
    decimal_separator: &'static str,
    grouping: Grouping,
}

impl Locale {
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::EnUs => Style {
                symbol: "$",
                symbol_first: true,
                group_separator: ",",
                decimal_separator: ".",
                grouping: Grouping::Thousands,
            },
            Self::EnGb => Style {
                symbol: "£",
                symbol_first: true,
                group_separator: ",",
                decimal_separator: ".",
                grouping: Grouping::Thousands,
            },
            Self::EnIn => Style {
                symbol: "₹",
                symbol_first: true,
                group_separator: ",",
                decimal_separator: ".",
                grouping: Grouping::Indian,
            },
            Self::DeDe => Style {
                symbol: "\u{a0}€",
                symbol_first: false,
                group_separator: ".",
                decimal_separator: ",",
                grouping: Grouping::Thousands,
            },
            Self::FrFr => Style {
                symbol: "\u{a0}€",
                symbol_first: false,
                group_separator: "\u{202f}",
                decimal_separator: ",",
                grouping: Grouping::Thousands,
            },
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EnUs
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "en-in" => Ok(Self::EnIn),
            "de-de" => Ok(Self::DeDe),
            "fr-fr" => Ok(Self::FrFr),
            _ => Err(configuration_error(format!(
                "unsupported locale '{}'",
                s.trim()
            ))),
        }
    }
}

/// Renders an amount with two decimals in the locale's currency style.
pub fn format(amount: f64, locale: &Locale) -> String {
    let style = locale.style();
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = group_digits(whole, &style);
    let number = format!("{}{}{}", grouped, style.decimal_separator, cents);
    // tiny negatives round to zero and drop the sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    if style.symbol_first {
        format!("{}{}{}", sign, style.symbol, number)
    } else {
        format!("{}{}{}", sign, number, style.symbol)
    }
}

fn group_digits(whole: &str, style: &Style) -> String {
    let digits: Vec<char> = whole.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut size = 3;

    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(digits[start..end].iter().collect());
        end = start;

        if let Grouping::Indian = style.grouping {
            size = 2;
        }
    }

    groups.reverse();
    groups.join(style.group_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_us_dollars() {
        assert_eq!(format(45.0, &Locale::EnUs), "$45.00");
        assert_eq!(format(1234.5, &Locale::EnUs), "$1,234.50");
        assert_eq!(format(1234567.891, &Locale::EnUs), "$1,234,567.89");
    }

    #[test]
    fn formats_indian_grouping() {
        assert_eq!(format(76.5, &Locale::EnIn), "₹76.50");
        assert_eq!(format(1234567.0, &Locale::EnIn), "₹12,34,567.00");
    }

    #[test]
    fn formats_euro_locales() {
        assert_eq!(format(1234.5, &Locale::DeDe), "1.234,50\u{a0}€");
        assert_eq!(format(1234.5, &Locale::FrFr), "1\u{202f}234,50\u{a0}€");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format(-12.5, &Locale::EnGb), "-£12.50");
        assert_eq!(format(-0.001, &Locale::EnUs), "$0.00");
    }

    #[test]
    fn parses_locale_descriptors() {
        assert_eq!("en_IN".parse::<Locale>().unwrap(), Locale::EnIn);
        assert_eq!("DE-de".parse::<Locale>().unwrap(), Locale::DeDe);
        assert!("xx-YY".parse::<Locale>().is_err());
    }
}
