//! Opacity normalization between the standard `opacity` property and
//! the legacy `filter: alpha(opacity=N)` mechanism.

use crate::probe::SupportedProperties;

/// Which opacity mechanism the host platform speaks.
///
/// Detected once at engine construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpacityMode {
    /// Native `opacity` property, plain float values.
    Standard,
    /// Legacy engines: `filter` property with `alpha(opacity=N)`
    /// percentage syntax.
    Filter,
}

impl OpacityMode {
    /// Pick the mechanism the platform supports.
    ///
    /// `Filter` only when the platform lacks `opacity` but exposes
    /// `filter`; everything else (including an empty probe) is
    /// `Standard`.
    pub fn detect(supported: &SupportedProperties) -> Self {
        if !supported.contains("opacity") && supported.contains("filter") {
            OpacityMode::Filter
        } else {
            OpacityMode::Standard
        }
    }

    /// The property name reads and writes go through.
    pub fn property(&self) -> &'static str {
        match self {
            OpacityMode::Standard => "opacity",
            OpacityMode::Filter => "filter",
        }
    }

    /// Parse a raw computed value into an opacity fraction.
    ///
    /// Empty input means the property is unset and yields `None`. On
    /// the filter path the percentage is extracted from an
    /// `opacity=<digits>` fragment (case-insensitive); no fragment,
    /// no value.
    pub fn parse(&self, value: &str) -> Option<f64> {
        if value.is_empty() {
            return None;
        }
        match self {
            OpacityMode::Filter => {
                let percent = extract_alpha_percent(value)?;
                Some(percent as f64 / 100.0)
            }
            OpacityMode::Standard => value.trim().parse::<f64>().ok(),
        }
    }

    /// Format an opacity fraction for writing to the host.
    pub fn write_value(&self, value: f64) -> String {
        match self {
            OpacityMode::Filter => format!("alpha(opacity={})", value * 100.0),
            OpacityMode::Standard => format!("{value}"),
        }
    }
}

/// Find `opacity=<digits>` in a filter string and return the digits.
fn extract_alpha_percent(value: &str) -> Option<u32> {
    let lower = value.to_ascii_lowercase();
    let start = lower.find("opacity=")? + "opacity=".len();
    let digits: String = lower[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported(names: &[&str]) -> SupportedProperties {
        SupportedProperties::from_names(names.iter().copied())
    }

    #[test]
    fn detection_prefers_standard_opacity() {
        assert_eq!(
            OpacityMode::detect(&supported(&["opacity", "filter"])),
            OpacityMode::Standard
        );
        assert_eq!(
            OpacityMode::detect(&supported(&["filter"])),
            OpacityMode::Filter
        );
        assert_eq!(OpacityMode::detect(&supported(&[])), OpacityMode::Standard);
    }

    #[test]
    fn empty_value_reads_as_unset() {
        assert_eq!(OpacityMode::Standard.parse(""), None);
        assert_eq!(OpacityMode::Filter.parse(""), None);
    }

    #[test]
    fn standard_parses_plain_float() {
        assert_eq!(OpacityMode::Standard.parse("0.5"), Some(0.5));
        assert_eq!(OpacityMode::Standard.parse("1"), Some(1.0));
    }

    #[test]
    fn filter_extracts_embedded_percentage() {
        assert_eq!(OpacityMode::Filter.parse("alpha(opacity=50)"), Some(0.5));
        assert_eq!(OpacityMode::Filter.parse("Alpha(OPACITY=75)"), Some(0.75));
        assert_eq!(OpacityMode::Filter.parse("blur(2px)"), None);
    }

    #[test]
    fn write_value_round_trips_per_mode() {
        assert_eq!(OpacityMode::Filter.write_value(0.5), "alpha(opacity=50)");
        assert_eq!(OpacityMode::Standard.write_value(0.5), "0.5");
        assert_eq!(OpacityMode::Standard.write_value(1.0), "1");
    }
}
