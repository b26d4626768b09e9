//! Property values and numeric scaling.
//!
//! A property value is treated as a flat list of whitespace-separated tokens.
//! Tokens that start with a number (`10px`, `-2.5em`, `.5`) are scaled by a
//! [`TransformAction`]; everything else (`auto`, `#fff`, `rgba(...)`) passes
//! through exactly as written.
//!
//! ```rust
//! use tweak_css::{transform, TransformAction};
//!
//! assert_eq!(transform("10px 20px", TransformAction::Grow), "15px 30px");
//! assert_eq!(transform("1px solid #333", TransformAction::Shrink), "1px solid #333");
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CssError;

static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+(?:\.\d+)?|\.\d+)(.*)$").expect("numeric token pattern is valid")
});

/// The scaling applied to every numeric token of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformAction {
    /// Halve the magnitude, never going below 1.
    Shrink,
    /// Multiply the magnitude by 1.5.
    Grow,
    /// Leave the value as it is.
    None,
}

impl TransformAction {
    /// All actions, in the order they are listed in help output.
    pub const ALL: [TransformAction; 3] = [
        TransformAction::Shrink,
        TransformAction::Grow,
        TransformAction::None,
    ];

    /// Returns the factor applied to a magnitude.
    pub fn multiplier(self) -> f64 {
        match self {
            TransformAction::Shrink => 0.5,
            TransformAction::Grow => 1.5,
            TransformAction::None => 1.0,
        }
    }

    /// Scales a magnitude, clamping shrinks at 1.
    pub fn scale(self, magnitude: f64) -> f64 {
        let scaled = magnitude * self.multiplier();
        match self {
            TransformAction::Shrink => scaled.max(1.0),
            _ => scaled,
        }
    }

    /// Returns the lowercase name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformAction::Shrink => "shrink",
            TransformAction::Grow => "grow",
            TransformAction::None => "none",
        }
    }
}

impl std::fmt::Display for TransformAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransformAction {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shrink" => Ok(TransformAction::Shrink),
            "grow" => Ok(TransformAction::Grow),
            "none" => Ok(TransformAction::None),
            _ => Err(CssError::InvalidAction(s.to_string())),
        }
    }
}

/// One whitespace-separated piece of a property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A token starting with a number, e.g. `-12.5px`.
    Numeric {
        raw: &'a str,
        sign: &'a str,
        magnitude: f64,
        unit: &'a str,
    },
    /// Anything else, kept verbatim.
    Other(&'a str),
}

impl<'a> Token<'a> {
    /// Splits a token into sign, magnitude and unit when it starts with a number.
    pub fn parse(raw: &'a str) -> Self {
        let Some(caps) = NUMERIC_TOKEN.captures(raw) else {
            return Token::Other(raw);
        };
        let (Some(sign), Some(number), Some(unit)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return Token::Other(raw);
        };
        match number.as_str().parse::<f64>() {
            Ok(magnitude) => Token::Numeric {
                raw,
                sign: sign.as_str(),
                magnitude,
                unit: unit.as_str(),
            },
            Err(_) => Token::Other(raw),
        }
    }

    /// Returns `true` for numeric tokens.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Numeric { .. })
    }

    /// Renders the token after applying `action`.
    ///
    /// [`TransformAction::None`] and non-numeric tokens come back as written.
    pub fn render(&self, action: TransformAction) -> String {
        match self {
            Token::Other(raw) => raw.to_string(),
            Token::Numeric { raw, .. } if action == TransformAction::None => raw.to_string(),
            Token::Numeric {
                sign,
                magnitude,
                unit,
                ..
            } => format!(
                "{}{}{}",
                sign,
                format_magnitude(action.scale(*magnitude)),
                unit
            ),
        }
    }
}

/// A property value split into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> PropertyValue<'a> {
    /// Splits `value` on whitespace.
    pub fn parse(value: &'a str) -> Self {
        Self {
            tokens: value.split_whitespace().map(Token::parse).collect(),
        }
    }

    /// Returns the parsed tokens.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Returns `true` if at least one token can be scaled.
    pub fn has_numeric(&self) -> bool {
        self.tokens.iter().any(Token::is_numeric)
    }

    /// Renders every token with `action` applied, joined by single spaces.
    pub fn scaled(&self, action: TransformAction) -> String {
        self.tokens
            .iter()
            .map(|token| token.render(action))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Applies `action` to every numeric token of `value`.
///
/// Multi-value properties are supported; non-numeric tokens are untouched and
/// the result is joined with single spaces.
///
/// # Example
///
/// ```rust
/// use tweak_css::{transform, TransformAction};
///
/// assert_eq!(transform("10px", TransformAction::Shrink), "5px");
/// assert_eq!(transform("1px", TransformAction::Shrink), "1px");
/// assert_eq!(transform("3px", TransformAction::Grow), "4.5px");
/// ```
pub fn transform(value: &str, action: TransformAction) -> String {
    PropertyValue::parse(value).scaled(action)
}

/// Formats a magnitude, dropping the decimal point for whole numbers.
pub fn format_magnitude(magnitude: f64) -> String {
    if magnitude.is_finite() && magnitude.fract() == 0.0 {
        format!("{:.0}", magnitude)
    } else {
        format!("{}", magnitude)
    }
}
