use trigger_common::prelude::*;
use trigger_common::{Event, EventKind, StepSettings, StepType};

use super::workflow_step::{WorkflowData, WorkflowStep};
use crate::dao::LookupDao;
use crate::utils::{DatafieldManager, LangStrings};

/// Where the label of an event's object lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LookupTarget {
    table: &'static str,
    key_column: &'static str,
    value_column: &'static str,
}

const GROUP_IDENTIFIER: LookupTarget = LookupTarget {
    table: "groups",
    key_column: "id",
    value_column: "identifier",
};

const ROLE_SHORT_NAME: LookupTarget = LookupTarget {
    table: "roles",
    key_column: "id",
    value_column: "short_name",
};

/// Adds the group identifier or role short name an event refers to into the workflow data, under
/// `<outputprefix>event`.
pub struct EventLookupStep {
    settings: StepSettings,
    lookup_dao: Arc<dyn LookupDao>,
}

impl std::fmt::Debug for EventLookupStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLookupStep")
            .field("settings", &self.settings)
            .finish()
    }
}

impl EventLookupStep {
    pub const FIELDS: [&'static str; 1] = ["event"];
    pub const PRIVACY_DESC: &'static str = "step_lookup_event:privacy:userdata_desc";

    pub fn new(settings: StepSettings, lookup_dao: Arc<dyn LookupDao>) -> TriggerResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            lookup_dao,
        })
    }

    /// Builds the step from the settings object the host stored for it.
    pub fn from_step_data(
        step_data: &serde_json::Value,
        lookup_dao: Arc<dyn LookupDao>,
    ) -> TriggerResult<Self> {
        Self::new(StepSettings::try_from(step_data)?, lookup_dao)
    }

    pub fn settings(&self) -> &StepSettings {
        &self.settings
    }

    fn lookup_target(kind: EventKind) -> Option<LookupTarget> {
        match kind {
            EventKind::GroupMemberAdded | EventKind::GroupMemberRemoved => Some(GROUP_IDENTIFIER),
            EventKind::RoleAssigned | EventKind::RoleUnassigned => Some(ROLE_SHORT_NAME),
            EventKind::Unsupported => None,
        }
    }

    fn lookup_event_object(&self, event: &Event) -> TriggerResult<Object> {
        let target = match Self::lookup_target(event.kind()) {
            Some(target) => target,
            None => {
                warn!("Unsupported event for event lookup: {}", event.eventname());
                return Ok(Object::Null);
            }
        };

        let objectid = match event.objectid {
            Some(objectid) => objectid,
            None => {
                warn!("Event {} has no objectid, nothing to look up", event.eventname());
                return Ok(Object::Null);
            }
        };

        debug!(
            "Looking up {}.{} for {} {}",
            target.table,
            target.value_column,
            event.eventname(),
            objectid
        );
        Ok(self
            .lookup_dao
            .get_field(target.table, target.key_column, objectid, target.value_column)?
            .unwrap_or(Object::Null))
    }
}

impl WorkflowStep for EventLookupStep {
    fn execute(
        &self,
        event: &Event,
        mut step_results: WorkflowData,
    ) -> TriggerResult<(bool, WorkflowData)> {
        let datafields = DatafieldManager::get_datafields(event, &step_results);

        if !datafields.contains_key(self.settings.useridfield.as_str()) {
            error!(
                "Specified userid field not present in the workflow data: {}",
                self.settings.useridfield
            );
            return fmt_err!(
                MissingField,
                "Specified userid field not present in the workflow data: {}",
                self.settings.useridfield
            );
        }
        debug!(
            "Event lookup for user {:?} in context {:?}",
            datafields.get(self.settings.useridfield.as_str()),
            datafields.get(self.settings.contextidfield.as_str())
        );

        let event_object = self.lookup_event_object(event)?;
        step_results.insert(self.settings.output_key(Self::FIELDS[0]), event_object);

        Ok((true, step_results))
    }

    fn get_step_type(&self) -> &str {
        StepType::EventLookupStep.as_str()
    }

    fn get_step_name(&self) -> InlineStr {
        LangStrings::get("step_lookup_event_name")
    }

    fn get_step_desc(&self) -> InlineStr {
        LangStrings::get("step_lookup_event_desc")
    }

    fn get_privacy_fields(&self) -> HashMap<InlineStr, InlineStr> {
        HashMap::from([(
            InlineStr::from(StepType::EventLookupStep.as_str()),
            InlineStr::from(Self::PRIVACY_DESC),
        )])
    }

    fn get_fields(&self) -> &[&'static str] {
        &Self::FIELDS
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::dao::MemoryLookupDao;

    fn step(settings: StepSettings) -> EventLookupStep {
        let dao = MemoryLookupDao::from_json(&serde_json::json!({
            "groups": [{ "id": 7, "identifier": "G7" }],
            "roles": [{ "id": 3, "short_name": "editor" }],
        }))
        .unwrap();
        EventLookupStep::new(settings, Arc::new(dao)).unwrap()
    }

    #[test]
    fn dispatch_table() {
        assert_eq!(
            EventLookupStep::lookup_target(EventKind::GroupMemberAdded),
            Some(GROUP_IDENTIFIER)
        );
        assert_eq!(
            EventLookupStep::lookup_target(EventKind::RoleUnassigned),
            Some(ROLE_SHORT_NAME)
        );
        assert_eq!(EventLookupStep::lookup_target(EventKind::Unsupported), None);
    }

    #[test]
    fn missing_objectid_yields_null() {
        let step = step(StepSettings::default());
        let mut event = Event::new("group_member_added", 0).with_userid(2);
        event.objectid = None;
        let (ok, data) = step.execute(&event, WorkflowData::default()).unwrap();
        assert!(ok);
        assert_eq!(data.get("user_event"), Some(&Object::Null));
    }

    #[test]
    fn useridfield_missing_is_checked_before_lookup() {
        let step = step(StepSettings::new("relateduserid", "contextid", "user_").unwrap());
        let event = Event::new("group_member_added", 7).with_userid(2);
        assert_matches!(
            step.execute(&event, WorkflowData::default()),
            Err(e) if e.code() == ErrorCode::missing_field_code()
        );
    }

    #[test]
    fn metadata() {
        let step = step(StepSettings::default());
        assert_eq!(step.get_step_type(), "event_lookup_step");
        assert_eq!(step.get_step_name().as_str(), "Event lookup");
        assert!(!step.get_step_desc().is_empty());
        assert_eq!(step.get_fields(), &["event"]);
        assert_eq!(
            step.get_privacy_fields()
                .get("event_lookup_step")
                .map(|x| x.as_str()),
            Some(EventLookupStep::PRIVACY_DESC)
        );
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = StepSettings {
            useridfield: "user id".into(),
            ..StepSettings::default()
        };
        let dao: Arc<dyn LookupDao> = Arc::new(MemoryLookupDao::new());
        assert!(EventLookupStep::new(settings, dao).is_err());
    }
}
