use trigger_common::prelude::*;
use trigger_common::Event;

/// Builds the flat field set a step reads from: the event's own fields overlaid by the results of
/// the steps that ran before it.
pub struct DatafieldManager;

impl DatafieldManager {
    pub const OTHER_FIELD: &'static str = "other";
    pub const OTHER_PREFIX: &'static str = "other_";

    pub fn get_datafields(
        event: &Event,
        step_results: &HashMap<InlineStr, Object>,
    ) -> HashMap<InlineStr, Object> {
        let mut datafields = event.get_data();

        // `other` is free-form; flatten it so each entry is addressable by name
        if let Some(Object::Map(other)) = datafields.remove(Self::OTHER_FIELD) {
            for (k, v) in other {
                let mut key = InlineStr::from(Self::OTHER_PREFIX);
                key.push_str(&k);
                datafields.insert(key, v);
            }
        }

        datafields.extend(step_results.iter().map(|(k, v)| (k.clone(), v.clone())));
        datafields
    }

    pub fn has_field(
        event: &Event,
        step_results: &HashMap<InlineStr, Object>,
        field: &str,
    ) -> bool {
        Self::get_datafields(event, step_results).contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_results_override_event_fields() {
        let mut event = Event::new(r"\core\event\group_member_added", 7).with_userid(2);
        event.other.insert("component".into(), Object::from("mod_forum"));

        let step_results = HashMap::from([
            (InlineStr::from("userid"), Object::Int(5)),
            (InlineStr::from("user_email"), Object::from("a@b.c")),
        ]);
        let datafields = DatafieldManager::get_datafields(&event, &step_results);

        assert_eq!(datafields.get("userid"), Some(&Object::Int(5)));
        assert_eq!(datafields.get("objectid"), Some(&Object::Long(7)));
        assert_eq!(datafields.get("user_email"), Some(&Object::from("a@b.c")));
        assert_eq!(
            datafields.get("other_component"),
            Some(&Object::from("mod_forum"))
        );
        assert!(datafields.get("other").is_none());
    }

    #[test]
    fn has_field_checks_both_sources() {
        let event = Event::new("role_assigned", 3).with_relateduserid(9);
        let step_results = HashMap::from([(InlineStr::from("user_id"), Object::Int(1))]);
        assert!(DatafieldManager::has_field(&event, &step_results, "relateduserid"));
        assert!(DatafieldManager::has_field(&event, &step_results, "user_id"));
        assert!(!DatafieldManager::has_field(&event, &step_results, "userid"));
    }
}
