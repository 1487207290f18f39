//! Per-field validation rules

use super::value::{FieldValue, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-()+.]+$").expect("invalid phone pattern"));

/// Returns true if the string has the shape of an email address
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Returns true if the string only contains phone number characters
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// A single constraint on a non-blank field value
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    MinLength(usize, String),
    MaxLength(usize, String),
    Email(String),
    Phone(String),
    Min(f64, String),
    Max(f64, String),
    OneOf(Vec<String>, String),
    MinItems(usize, String),
    IsTrue(String),
}

impl Rule {
    /// Check the rule, returning the message on failure
    pub fn check(&self, value: &FieldValue) -> Option<&str> {
        let ok = match self {
            Rule::MinLength(n, _) => value
                .as_text()
                .map_or(true, |s| s.chars().count() >= *n),
            Rule::MaxLength(n, _) => value
                .as_text()
                .map_or(true, |s| s.chars().count() <= *n),
            Rule::Email(_) => value.as_text().map_or(true, is_email),
            Rule::Phone(_) => value.as_text().map_or(true, is_phone),
            Rule::Min(min, _) => value.as_number().map_or(true, |n| n >= *min),
            Rule::Max(max, _) => value.as_number().map_or(true, |n| n <= *max),
            Rule::OneOf(allowed, _) => value
                .as_text()
                .map_or(true, |s| allowed.iter().any(|a| a == s)),
            Rule::MinItems(n, _) => value.as_list().map_or(true, |items| items.len() >= *n),
            Rule::IsTrue(_) => value.as_bool() == Some(true),
        };

        if ok {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::MinLength(_, m)
            | Rule::MaxLength(_, m)
            | Rule::Email(m)
            | Rule::Phone(m)
            | Rule::Min(_, m)
            | Rule::Max(_, m)
            | Rule::OneOf(_, m)
            | Rule::MinItems(_, m)
            | Rule::IsTrue(m) => m,
        }
    }
}

/// A constraint spanning several fields, reported against `target`
#[derive(Debug, Clone)]
pub struct CrossFieldRule {
    pub target: &'static str,
    pub message: String,
    /// Returns true when the record violates the rule
    pub violated: fn(&FormValues) -> bool,
}

impl CrossFieldRule {
    pub fn new(target: &'static str, message: &str, violated: fn(&FormValues) -> bool) -> Self {
        Self {
            target,
            message: message.to_string(),
            violated,
        }
    }

    pub fn check(&self, values: &FormValues) -> Option<&str> {
        if (self.violated)(values) {
            Some(&self.message)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod patterns {
        use super::*;

        #[test]
        fn test_email_shapes() {
            assert!(is_email("jane@example.com"));
            assert!(is_email("a.b+c@sub.example.org"));
            assert!(!is_email("jane@example"));
            assert!(!is_email("jane example@x.com"));
            assert!(!is_email("@example.com"));
            assert!(!is_email(""));
        }

        #[test]
        fn test_phone_shapes() {
            assert!(is_phone("512-555-0100"));
            assert!(is_phone("(512) 555.0100"));
            assert!(is_phone("+1 512 555 0100"));
            assert!(!is_phone("call me"));
            assert!(!is_phone("512-555-01OO"));
        }
    }

    mod rule_checks {
        use super::*;

        #[test]
        fn test_length_counts_chars() {
            let rule = Rule::MinLength(2, "too short".into());
            assert_eq!(rule.check(&FieldValue::from("é")), Some("too short"));
            assert_eq!(rule.check(&FieldValue::from("éé")), None);

            let rule = Rule::MaxLength(3, "too long".into());
            assert_eq!(rule.check(&FieldValue::from("abcd")), Some("too long"));
        }

        #[test]
        fn test_numeric_bounds_are_inclusive() {
            let min = Rule::Min(1.0, "min".into());
            let max = Rule::Max(500.0, "max".into());
            assert_eq!(min.check(&FieldValue::Number(0.0)), Some("min"));
            assert_eq!(min.check(&FieldValue::Number(1.0)), None);
            assert_eq!(max.check(&FieldValue::Number(500.0)), None);
            assert_eq!(max.check(&FieldValue::Number(501.0)), Some("max"));
        }

        #[test]
        fn test_one_of() {
            let rule = Rule::OneOf(vec!["cat".into(), "dog".into()], "pick one".into());
            assert_eq!(rule.check(&FieldValue::from("cat")), None);
            assert_eq!(rule.check(&FieldValue::from("ferret")), Some("pick one"));
        }

        #[test]
        fn test_min_items_and_is_true() {
            let rule = Rule::MinItems(1, "select".into());
            assert_eq!(rule.check(&FieldValue::List(vec![])), Some("select"));
            assert_eq!(rule.check(&FieldValue::from(vec!["a"])), None);

            let rule = Rule::IsTrue("agree".into());
            assert_eq!(rule.check(&FieldValue::Bool(false)), Some("agree"));
            assert_eq!(rule.check(&FieldValue::Null), Some("agree"));
            assert_eq!(rule.check(&FieldValue::Bool(true)), None);
        }
    }

    #[test]
    fn test_cross_field_rule() {
        let rule = CrossFieldRule::new("interval", "Choose how often", |v| {
            v.flag("isRecurring") && v.text("interval").is_empty()
        });

        let mut values = FormValues::new();
        assert_eq!(rule.check(&values), None);
        values.set("isRecurring", true);
        assert_eq!(rule.check(&values), Some("Choose how often"));
        values.set("interval", "month");
        assert_eq!(rule.check(&values), None);
    }
}
