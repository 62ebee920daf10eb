//! Opt-in consistency checks for a resolved profile.
//!
//! Resolution never rejects anything. These checks only report; callers
//! decide what, if anything, to do about the result.

use std::fmt;

use crate::{Attribute, FlavorProfile, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub attribute: Attribute,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.attribute, self.message)
    }
}

impl FlavorProfile {
    pub fn validate(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (attribute, value) in self.entries() {
            if let Value::Str(s) = value {
                if s.trim().is_empty() {
                    issues.push(Issue {
                        severity: Severity::Error,
                        attribute,
                        message: "empty value".into(),
                    });
                }
            }
        }

        if !self.release_date().is_empty() && !is_iso_date(self.release_date()) {
            issues.push(Issue {
                severity: Severity::Error,
                attribute: Attribute::ReleaseDate,
                message: format!("'{}' is not a YYYY-MM-DD date", self.release_date()),
            });
        }

        // Independent defaults: overriding MCCODE_STRING alone leaves MCCODE_NAME stale.
        if self.product_name_upper() != self.product_name().to_uppercase() {
            issues.push(Issue {
                severity: Severity::Warning,
                attribute: Attribute::ProductNameUpper,
                message: format!(
                    "'{}' is not the uppercase of product name '{}'",
                    self.product_name_upper(),
                    self.product_name()
                ),
            });
        }

        if self.flavor_upper() != self.product_name_upper() {
            issues.push(Issue {
                severity: Severity::Warning,
                attribute: Attribute::FlavorUpper,
                message: format!(
                    "'{}' differs from {} '{}'",
                    self.flavor_upper(),
                    Attribute::ProductNameUpper,
                    self.product_name_upper()
                ),
            });
        }

        issues
    }
}

fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits = |r: std::ops::Range<usize>| -> Option<u32> {
        let part = &s[r];
        if part.bytes().all(|c| c.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };
    matches!(
        (digits(0..4), digits(5..7), digits(8..10)),
        (Some(_), Some(1..=12), Some(1..=31))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, Flavor, Overrides};

    #[test]
    fn defaults_are_clean() {
        for flavor in Flavor::ALL {
            assert!(FlavorProfile::defaults(flavor).validate().is_empty());
        }
    }

    #[test]
    fn iso_dates() {
        assert!(is_iso_date("2023-07-22"));
        assert!(!is_iso_date("2023-13-01"));
        assert!(!is_iso_date("2023-7-22"));
        assert!(!is_iso_date("22/07/2023"));
        assert!(!is_iso_date("2023-07-2x"));
    }

    #[test]
    fn renamed_product_warns_about_stale_upper_name() {
        let o = Overrides::new()
            .with(Attribute::ProductName, "MyStas")
            .unwrap();
        let p = resolve(Flavor::Neutron, &o);
        let issues = p.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].attribute, Attribute::ProductNameUpper);
        // Reporting never repairs.
        assert_eq!(p.product_name_upper(), "MCSTAS");
    }

    #[test]
    fn empty_and_malformed_values_are_errors() {
        let o = Overrides::new()
            .with(Attribute::LibraryTag, "")
            .unwrap()
            .with(Attribute::ReleaseDate, "July 2023")
            .unwrap();
        let issues = resolve(Flavor::Xray, &o).validate();
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.attribute)
            .collect();
        assert_eq!(errors, vec![Attribute::LibraryTag, Attribute::ReleaseDate]);
    }

    #[test]
    fn issue_display() {
        let issue = Issue {
            severity: Severity::Error,
            attribute: Attribute::Version,
            message: "empty value".into(),
        };
        assert_eq!(issue.to_string(), "error: MCCODE_VERSION: empty value");
    }
}
