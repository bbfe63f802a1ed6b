use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString, IntoStaticStr};

#[derive(Clone, Copy, Debug, EnumString, AsRefStr, IntoStaticStr, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum StepType {
    EventLookupStep,
}

impl StepType {
    /// Converts a step type string to `StepType`; `None` for step types registered by the host.
    pub fn of(step_type: &str) -> Option<StepType> {
        StepType::from_str(step_type).ok()
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_type_uses_snake_case_names() {
        assert_eq!(StepType::EventLookupStep.as_str(), "event_lookup_step");
        assert_eq!(StepType::EventLookupStep.as_ref(), "event_lookup_step");
        assert_eq!(StepType::of("event_lookup_step"), Some(StepType::EventLookupStep));
        assert_eq!(StepType::of("http_post_action_step"), None);
    }
}
