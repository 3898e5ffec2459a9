//! Numeric and color value parsing with per-property unit defaults.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Units recognized in style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Absolute pixels.
    Px,
    /// Percentage.
    Percent,
    /// Relative to font size.
    Em,
    /// Milliseconds.
    Ms,
    /// Seconds.
    S,
    /// Unit-less (opacity and friends).
    #[default]
    None,
}

impl Unit {
    /// The suffix as written in CSS text; empty for unit-less.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::None => "",
        }
    }

    /// Map a recognized suffix to its unit.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        match suffix {
            "px" => Some(Unit::Px),
            "%" => Some(Unit::Percent),
            "em" => Some(Unit::Em),
            "ms" => Some(Unit::Ms),
            "s" => Some(Unit::S),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default units applied when a raw value carries no recognized
/// suffix.
pub const DEFAULT_UNITS: &[(&str, Unit)] = &[
    ("top", Unit::Px),
    ("bottom", Unit::Px),
    ("left", Unit::Px),
    ("right", Unit::Px),
    ("width", Unit::Px),
    ("height", Unit::Px),
    ("margin-top", Unit::Px),
    ("margin-bottom", Unit::Px),
    ("margin-left", Unit::Px),
    ("margin-right", Unit::Px),
    ("padding-top", Unit::Px),
    ("padding-bottom", Unit::Px),
    ("padding-left", Unit::Px),
    ("padding-right", Unit::Px),
    ("border-bottom-left-radius", Unit::Px),
    ("border-bottom-right-radius", Unit::Px),
    ("border-top-left-radius", Unit::Px),
    ("border-top-right-radius", Unit::Px),
    ("transition-duration", Unit::Ms),
    ("opacity", Unit::None),
    ("font-size", Unit::Px),
];

/// Properties whose values are colors, not numbers.
pub const COLOR_PROPERTIES: &[&str] = &["background-color", "color", "border-color"];

/// The registered default unit for a property, if any.
pub fn default_unit(property: &str) -> Option<Unit> {
    DEFAULT_UNITS
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, unit)| *unit)
}

/// Whether a property takes color values.
pub fn is_color_property(property: &str) -> bool {
    COLOR_PROPERTIES.contains(&property)
}

/// Whether a raw value already ends in a recognized unit suffix.
pub fn has_unit_suffix(value: &str) -> bool {
    ["px", "%", "em", "ms", "s"]
        .iter()
        .any(|suffix| value.ends_with(suffix))
}

/// A style value split into magnitude and unit.
///
/// Parsing never fails: values that are neither numeric nor a known
/// color form degrade to [`NumericValue::Raw`] (numbers) or white
/// (colors) rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// A parsed magnitude with its (possibly defaulted) unit.
    Number {
        /// Parsed magnitude.
        value: f64,
        /// Explicit suffix when recognized, else the property default.
        unit: Unit,
    },
    /// A normalized 6-digit hex color, `#rrggbb`.
    Color(String),
    /// The original text of a value that did not parse as a number.
    Raw(String),
}

impl NumericValue {
    /// The unit tag: a suffix for numbers, `"hex"` for colors, empty
    /// for raw pass-throughs.
    pub fn unit_str(&self) -> &str {
        match self {
            NumericValue::Number { unit, .. } => unit.as_str(),
            NumericValue::Color(_) => "hex",
            NumericValue::Raw(_) => "",
        }
    }

    /// The magnitude, when numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumericValue::Number { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Split a raw style value into magnitude and unit.
///
/// Color properties route to hex normalization; everything else is
/// parsed as a leading float with unit inference. `None` stands for a
/// missing computed value.
pub fn parse_number(value: Option<&str>, property: &str) -> NumericValue {
    if is_color_property(property) {
        return parse_color_value(value);
    }
    let raw = value.unwrap_or("");

    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();
    let token = match parser.next() {
        Ok(t) => t.clone(),
        Err(_) => return NumericValue::Raw(raw.to_string()),
    };

    match token {
        Token::Number { value, .. } => NumericValue::Number {
            value: value as f64,
            unit: default_unit(property).unwrap_or(Unit::Px),
        },
        Token::Dimension { value, unit, .. } => {
            let unit = Unit::from_suffix(unit.as_ref())
                .unwrap_or_else(|| default_unit(property).unwrap_or(Unit::Px));
            NumericValue::Number {
                value: value as f64,
                unit,
            }
        }
        Token::Percentage { unit_value, .. } => NumericValue::Number {
            value: (unit_value * 100.0) as f64,
            unit: Unit::Percent,
        },
        _ => NumericValue::Raw(raw.to_string()),
    }
}

/// Normalize a color value to `#rrggbb`.
///
/// `#…` text passes through untouched; `rgb(r, g, b)` converts
/// channel-wise; anything else, including a missing value, defaults
/// to white.
fn parse_color_value(value: Option<&str>) -> NumericValue {
    match value {
        Some(v) if v.starts_with('#') => NumericValue::Color(v.to_string()),
        Some(v) => match parse_rgb(v) {
            Some(hex) => NumericValue::Color(hex),
            None => NumericValue::Color("#ffffff".to_string()),
        },
        None => NumericValue::Color("#ffffff".to_string()),
    }
}

fn parse_rgb(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();

    let token = parser.next().ok()?.clone();
    match token {
        Token::Function(name) if name.eq_ignore_ascii_case("rgb") => {
            let (r, g, b) = parser
                .parse_nested_block(|p| {
                    let r = parse_channel(p)?;
                    p.expect_comma()?;
                    let g = parse_channel(p)?;
                    p.expect_comma()?;
                    let b = parse_channel(p)?;
                    Ok::<_, ParseError<'_, ()>>((r, g, b))
                })
                .ok()?;
            Some(format!("#{r:02x}{g:02x}{b:02x}"))
        }
        _ => None,
    }
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0) as u8),
        _ => Err(parser.new_custom_error(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_suffix_wins() {
        assert_eq!(
            parse_number(Some("10px"), "width"),
            NumericValue::Number {
                value: 10.0,
                unit: Unit::Px
            }
        );
        assert_eq!(
            parse_number(Some("1.5em"), "width"),
            NumericValue::Number {
                value: 1.5,
                unit: Unit::Em
            }
        );
    }

    #[test]
    fn bare_number_takes_property_default() {
        assert_eq!(
            parse_number(Some("10"), "width"),
            NumericValue::Number {
                value: 10.0,
                unit: Unit::Px
            }
        );
        assert_eq!(
            parse_number(Some("200"), "transition-duration"),
            NumericValue::Number {
                value: 200.0,
                unit: Unit::Ms
            }
        );
        assert_eq!(
            parse_number(Some("0.5"), "opacity"),
            NumericValue::Number {
                value: 0.5,
                unit: Unit::None
            }
        );
    }

    #[test]
    fn unregistered_property_defaults_to_px() {
        assert_eq!(
            parse_number(Some("3"), "z-index"),
            NumericValue::Number {
                value: 3.0,
                unit: Unit::Px
            }
        );
    }

    #[test]
    fn unrecognized_dimension_suffix_falls_back() {
        assert_eq!(
            parse_number(Some("10pt"), "width"),
            NumericValue::Number {
                value: 10.0,
                unit: Unit::Px
            }
        );
    }

    #[test]
    fn percentage_parses_as_percent() {
        assert_eq!(
            parse_number(Some("50%"), "width"),
            NumericValue::Number {
                value: 50.0,
                unit: Unit::Percent
            }
        );
    }

    #[test]
    fn non_numeric_degrades_to_raw() {
        let parsed = parse_number(Some("abc"), "width");
        assert_eq!(parsed, NumericValue::Raw("abc".to_string()));
        assert_eq!(parsed.unit_str(), "");

        assert_eq!(
            parse_number(Some(""), "width"),
            NumericValue::Raw(String::new())
        );
        assert_eq!(parse_number(None, "width"), NumericValue::Raw(String::new()));
    }

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(
            parse_number(Some("rgb(255, 0, 0)"), "color"),
            NumericValue::Color("#ff0000".to_string())
        );
        assert_eq!(
            parse_number(Some("rgb(0,128,255)"), "background-color"),
            NumericValue::Color("#0080ff".to_string())
        );
    }

    #[test]
    fn hex_passes_through() {
        let parsed = parse_number(Some("#00ff00"), "color");
        assert_eq!(parsed, NumericValue::Color("#00ff00".to_string()));
        assert_eq!(parsed.unit_str(), "hex");
    }

    #[test]
    fn unparsable_color_defaults_to_white() {
        assert_eq!(
            parse_number(Some("salmon-ish"), "color"),
            NumericValue::Color("#ffffff".to_string())
        );
        assert_eq!(
            parse_number(None, "border-color"),
            NumericValue::Color("#ffffff".to_string())
        );
    }

    #[test]
    fn unit_suffix_detection() {
        assert!(has_unit_suffix("10px"));
        assert!(has_unit_suffix("50%"));
        assert!(has_unit_suffix("200ms"));
        assert!(!has_unit_suffix("10"));
        assert!(!has_unit_suffix("auto"));
    }
}
