// File: crates/chart-core/src/format.rs
// Summary: printf-style value specifiers ("%.1f", "%d bpm") for the scrubbed value label.

use crate::error::{ChartError, Result};

/// Default label format: one decimal place.
pub const DEFAULT_VALUE_SPECIFIER: &str = "%.1f";

/// A parsed value specifier: literal prefix, fixed precision, literal suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueFormat {
    prefix: String,
    precision: usize,
    suffix: String,
}

impl Default for ValueFormat {
    fn default() -> Self { Self { prefix: String::new(), precision: 1, suffix: String::new() } }
}

impl ValueFormat {
    /// Parse a specifier with exactly one `%f`, `%.Nf` or `%d` conversion.
    /// `%%` is a literal percent sign.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason| ChartError::InvalidFormat { spec: spec.to_string(), reason };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut precision = None;
        let mut chars = spec.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' || chars.peek() == Some(&'%') {
                if c == '%' {
                    chars.next();
                }
                if precision.is_some() { suffix.push(c) } else { prefix.push(c) }
                continue;
            }
            if precision.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut digits: Option<String> = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut d = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_digit() { break; }
                    d.push(c);
                    chars.next();
                }
                digits = Some(d);
            }

            precision = Some(match (chars.next(), digits) {
                (Some('f'), None) => 6,
                (Some('f'), Some(d)) if d.is_empty() => 0,
                (Some('f'), Some(d)) => {
                    let p: usize = d.parse().map_err(|_| invalid("precision is not a number"))?;
                    if p > 17 {
                        return Err(invalid("precision above 17"));
                    }
                    p
                }
                (Some('d'), None) => 0,
                (Some('d'), Some(_)) => return Err(invalid("%d takes no precision")),
                (Some(_), _) => return Err(invalid("unsupported conversion")),
                (None, _) => return Err(invalid("truncated conversion")),
            });
        }

        let precision = precision.ok_or_else(|| invalid("missing conversion"))?;
        Ok(Self { prefix, precision, suffix })
    }

    pub fn precision(&self) -> usize { self.precision }

    pub fn format(&self, value: f64) -> String {
        format!("{}{:.*}{}", self.prefix, self.precision, value, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_specifier_is_one_decimal() {
        let f = ValueFormat::parse(DEFAULT_VALUE_SPECIFIER).unwrap();
        assert_eq!(f, ValueFormat::default());
        assert_eq!(f.format(12.0), "12.0");
        assert_eq!(f.format(3.14159), "3.1");
        assert_eq!(f.precision(), 1);
    }

    #[test]
    fn bare_f_uses_six_places() {
        assert_eq!(ValueFormat::parse("%f").unwrap().format(1.5), "1.500000");
        assert_eq!(ValueFormat::parse("%.f").unwrap().format(2.0), "2");
        assert_eq!(ValueFormat::parse("%d").unwrap().precision(), 0);
    }

    #[test]
    fn literal_text_and_percent() {
        let f = ValueFormat::parse("~%d bpm").unwrap();
        assert_eq!(f.format(71.6), "~72 bpm");
        let f = ValueFormat::parse("%.2f%%").unwrap();
        assert_eq!(f.format(0.5), "0.50%");
    }

    #[test]
    fn rejects_bad_specifiers() {
        for spec in ["", "value", "%x", "%.1f %.1f", "%.2d", "%.", "%.99f"] {
            assert!(
                matches!(ValueFormat::parse(spec), Err(ChartError::InvalidFormat { .. })),
                "{spec} should be rejected"
            );
        }
    }
}
