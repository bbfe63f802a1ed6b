use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString};

use crate::prelude::*;

/// Event types a lookup step knows how to resolve. Anything else is `Unsupported`.
#[derive(Clone, Copy, Debug, EnumString, AsRefStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    GroupMemberAdded,
    GroupMemberRemoved,
    RoleAssigned,
    RoleUnassigned,
    #[strum(disabled)]
    Unsupported,
}

impl EventKind {
    pub const NAMESPACE_SEPARATOR: char = '\\';

    /// Resolves a raw event name, fully qualified (`\core\event\role_assigned`) or short
    /// (`role_assigned`).
    pub fn of(eventname: &str) -> EventKind {
        let short_name = eventname
            .trim()
            .rsplit(Self::NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or_default();
        EventKind::from_str(short_name).unwrap_or(EventKind::Unsupported)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, EventKind::Unsupported)
    }
}

/// An event delivered by the host's event bus, parsed once at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Fully-qualified event type identifier, as received.
    eventname: InlineStr,
    kind: EventKind,
    /// Id of the event's subject; a group id or a role id depending on `kind`.
    pub objectid: Option<i64>,
    pub component: Option<InlineStr>,
    pub action: Option<InlineStr>,
    pub target: Option<InlineStr>,
    pub crud: Option<InlineStr>,
    pub contextid: Option<i64>,
    pub userid: Option<i64>,
    pub relateduserid: Option<i64>,
    pub courseid: Option<i64>,
    pub timecreated: Option<i64>,
    pub other: HashMap<InlineStr, Object>,
}

impl Event {
    pub fn new(eventname: &str, objectid: i64) -> Self {
        Self {
            eventname: eventname.trim().into(),
            kind: EventKind::of(eventname),
            objectid: Some(objectid),
            component: None,
            action: None,
            target: None,
            crud: None,
            contextid: None,
            userid: None,
            relateduserid: None,
            courseid: None,
            timecreated: None,
            other: HashMap::default(),
        }
    }

    pub fn eventname(&self) -> &str {
        &self.eventname
    }

    /// Resolved once from `eventname` when the event is created.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn with_userid(mut self, userid: i64) -> Self {
        self.userid = Some(userid);
        self
    }

    pub fn with_relateduserid(mut self, relateduserid: i64) -> Self {
        self.relateduserid = Some(relateduserid);
        self
    }

    pub fn with_contextid(mut self, contextid: i64) -> Self {
        self.contextid = Some(contextid);
        self
    }

    pub fn with_courseid(mut self, courseid: i64) -> Self {
        self.courseid = Some(courseid);
        self
    }

    /// The event's own fields as data bag entries. Unset attributes are left out.
    pub fn get_data(&self) -> HashMap<InlineStr, Object> {
        let mut data = HashMap::with_capacity(14);
        data.insert("eventname".into(), Object::from(&self.eventname));

        let strings = [
            ("component", &self.component),
            ("action", &self.action),
            ("target", &self.target),
            ("crud", &self.crud),
        ];
        for (k, v) in strings {
            if let Some(v) = v {
                data.insert(k.into(), Object::from(v));
            }
        }

        let ids = [
            ("objectid", self.objectid),
            ("contextid", self.contextid),
            ("userid", self.userid),
            ("relateduserid", self.relateduserid),
            ("courseid", self.courseid),
            ("timecreated", self.timecreated),
        ];
        for (k, v) in ids {
            if let Some(v) = v {
                data.insert(k.into(), Object::from(v));
            }
        }

        if !self.other.is_empty() {
            data.insert("other".into(), Object::Map(self.other.clone()));
        }
        data
    }

    fn read_id(value: &serde_json::Value, key: &str) -> TriggerResult<Option<i64>> {
        match value.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(v) => Object::from_json(v)
                .as_i64()
                .map(Some)
                .map_err(|_| ErrorCode::IllegalArgument(format!("{} invalid: {}", key, v))),
        }
    }

    fn read_str(value: &serde_json::Value, key: &str) -> Option<InlineStr> {
        value
            .get(key)
            .and_then(|x| x.as_str())
            .map(|x| x.trim().into())
    }
}

impl TryFrom<&serde_json::Value> for Event {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let eventname = value
            .get("eventname")
            .and_then(|x| x.as_str())
            .ok_or(ErrorCode::IllegalArgument("eventname not found"))?
            .trim();
        if eventname.is_empty() {
            return str_err!(IllegalArgument, "eventname is empty");
        }

        let other = match value.get("other") {
            None | Some(serde_json::Value::Null) => HashMap::default(),
            Some(serde_json::Value::Object(v)) => Object::convert_jsonmap_to_hashmap(v),
            Some(_) => return str_err!(IllegalArgument, "other invalid"),
        };

        Ok(Self {
            eventname: eventname.into(),
            kind: EventKind::of(eventname),
            objectid: Self::read_id(value, "objectid")?,
            component: Self::read_str(value, "component"),
            action: Self::read_str(value, "action"),
            target: Self::read_str(value, "target"),
            crud: Self::read_str(value, "crud"),
            contextid: Self::read_id(value, "contextid")?,
            userid: Self::read_id(value, "userid")?,
            relateduserid: Self::read_id(value, "relateduserid")?,
            courseid: Self::read_id(value, "courseid")?,
            timecreated: Self::read_id(value, "timecreated")?,
            other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_from_qualified_and_short_names() {
        assert_eq!(
            EventKind::of(r"\core\event\group_member_added"),
            EventKind::GroupMemberAdded
        );
        assert_eq!(EventKind::of("group_member_removed"), EventKind::GroupMemberRemoved);
        assert_eq!(EventKind::of(r"\core\event\role_assigned"), EventKind::RoleAssigned);
        assert_eq!(EventKind::of("role_unassigned"), EventKind::RoleUnassigned);
        assert_eq!(EventKind::of(r"\core\event\user_loggedin"), EventKind::Unsupported);
        assert_eq!(EventKind::of(""), EventKind::Unsupported);
        assert_eq!(EventKind::of("unsupported"), EventKind::Unsupported);
        assert!(!EventKind::Unsupported.is_supported());
    }

    #[test]
    fn parse_event_from_json() {
        let value = serde_json::json!({
            "eventname": "\\core\\event\\role_assigned",
            "component": "core",
            "objectid": "3",
            "contextid": 12,
            "userid": 2,
            "relateduserid": 5,
            "other": { "id": 44 },
        });
        let event = Event::try_from(&value).unwrap();
        assert_eq!(event.kind(), EventKind::RoleAssigned);
        assert_eq!(event.eventname(), r"\core\event\role_assigned");
        assert_eq!(event.objectid, Some(3));
        assert_eq!(event.relateduserid, Some(5));
        assert_eq!(event.courseid, None);

        let data = event.get_data();
        assert_eq!(data.get("userid"), Some(&Object::Long(2)));
        assert_eq!(data.get("component"), Some(&Object::from("core")));
        assert!(data.get("courseid").is_none());
        assert!(matches!(data.get("other"), Some(Object::Map(_))));
    }

    #[test]
    fn parse_event_rejects_bad_input() {
        assert!(Event::try_from(&serde_json::json!({ "objectid": 1 })).is_err());
        assert!(Event::try_from(&serde_json::json!({ "eventname": " " })).is_err());
        assert!(Event::try_from(&serde_json::json!({
            "eventname": "role_assigned",
            "objectid": "three",
        }))
        .is_err());
    }
}
