use regex::Regex;

use crate::prelude::*;

/// Field names used as data bag keys: letters, digits, `_`, `.` and `-`.
static FIELD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("field name pattern is valid"));

pub struct FieldNameUtils;

impl FieldNameUtils {
    pub fn is_valid(name: &str) -> bool {
        FIELD_NAME.is_match(name)
    }

    pub fn validate(setting: &str, name: &str) -> TriggerResult<()> {
        if name.is_empty() {
            return fmt_err!(IllegalArgument, "{} is required", setting);
        }
        if !Self::is_valid(name) {
            return fmt_err!(
                IllegalArgument,
                "{} contains characters other than letters, digits, '_', '.' or '-': {}",
                setting,
                name
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_with_separators() {
        assert!(FieldNameUtils::is_valid("userid"));
        assert!(FieldNameUtils::is_valid("user_"));
        assert!(FieldNameUtils::is_valid("step1.related-user_id"));
    }

    #[test]
    fn hyphen_is_a_separator_like_underscore_and_dot() {
        assert!(FieldNameUtils::is_valid("related-user"));
        assert!(FieldNameUtils::is_valid("-"));
        assert!(FieldNameUtils::validate("useridfield", "course-module.id").is_ok());
    }

    #[test]
    fn rejects_other_characters() {
        assert!(!FieldNameUtils::is_valid(""));
        assert!(!FieldNameUtils::is_valid("user id"));
        assert!(!FieldNameUtils::is_valid("user$"));
        assert!(!FieldNameUtils::is_valid("{userid}"));
        assert!(FieldNameUtils::validate("outputprefix", "a/b").is_err());
        assert!(FieldNameUtils::validate("outputprefix", "").is_err());
    }
}
