use once_cell::sync::Lazy;
use trigger_common::prelude::*;

/// English strings for step names, descriptions, form labels and privacy declarations.
pub struct LangStrings;

static STRINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("step_lookup_event_name", "Event lookup"),
        (
            "step_lookup_event_desc",
            "This step looks up the group identifier or role short name an event refers to, \
             and adds it to the workflow data.",
        ),
        (
            "step_lookup_event:privacy:userdata_desc",
            "The group or role an event refers to is looked up and stored in the workflow data.",
        ),
        ("step_lookup_user_useridfield", "User id data field"),
        ("contextidfield", "Context id data field"),
        ("outputprefix", "Output prefix"),
        ("required", "Required"),
    ])
});

impl LangStrings {
    /// Returns the string for `identifier`, or `[[identifier]]` when there is none.
    pub fn get(identifier: &str) -> InlineStr {
        match STRINGS.get(identifier) {
            Some(s) => (*s).into(),
            None => {
                warn!("Missing language string: {}", identifier);
                format!("[[{}]]", identifier).into()
            }
        }
    }

    pub fn exists(identifier: &str) -> bool {
        STRINGS.contains_key(identifier)
    }
}

#[cfg(test)]
mod tests {
    use trigger_common::StepSettings;

    use super::*;

    #[test]
    fn known_and_missing_strings() {
        assert_eq!(LangStrings::get("step_lookup_event_name").as_str(), "Event lookup");
        assert_eq!(LangStrings::get("no_such_string").as_str(), "[[no_such_string]]");
    }

    #[test]
    fn every_form_label_has_a_string() {
        for field in StepSettings::form_fields() {
            assert!(LangStrings::exists(field.label), "{}", field.label);
        }
    }
}
