use dashmap::DashMap;
use once_cell::sync::Lazy;
use trigger_common::prelude::*;
use trigger_common::StepType;

use super::event_lookup_step::EventLookupStep;
use super::workflow_step::WorkflowStep;
use crate::dao::LookupDao;

/// Holds a mapping of step type names to `WorkflowStep` instances registered by the host.
pub struct StepRegistry;

static REGISTRY: Lazy<DashMap<InlineStr, Arc<dyn WorkflowStep>>> = Lazy::new(DashMap::new);

impl StepRegistry {
    pub fn get(step_type: &str) -> TriggerResult<Arc<dyn WorkflowStep>> {
        REGISTRY
            .get(step_type)
            .map(|x| x.value().clone())
            .ok_or_else(|| {
                ErrorCode::NotFound(format!("{} not found in StepRegistry", step_type))
            })
    }

    pub fn is_registered(step_type: &str) -> bool {
        REGISTRY.contains_key(step_type)
    }

    pub fn register(step_type: &str, step: Arc<dyn WorkflowStep>) {
        REGISTRY.insert(InlineStr::from(step_type), step);
    }

    pub fn unregister(step_type: &str) {
        REGISTRY.remove(step_type);
    }

    /// Builds a built-in step from its stored settings, falling back to a registered instance for
    /// step types the crate does not know.
    pub fn build(
        step_type: &str,
        step_data: &serde_json::Value,
        lookup_dao: Arc<dyn LookupDao>,
    ) -> TriggerResult<Arc<dyn WorkflowStep>> {
        match StepType::of(step_type) {
            Some(StepType::EventLookupStep) => Ok(Arc::new(EventLookupStep::from_step_data(
                step_data, lookup_dao,
            )?)),
            None => Self::get(step_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::MemoryLookupDao;

    #[test]
    fn register_and_unregister() {
        let dao: Arc<dyn LookupDao> = Arc::new(MemoryLookupDao::new());
        let step = StepRegistry::build("event_lookup_step", &serde_json::json!({}), dao).unwrap();

        StepRegistry::register("registry_test_lookup", step);
        assert!(StepRegistry::is_registered("registry_test_lookup"));
        assert_eq!(
            StepRegistry::get("registry_test_lookup")
                .unwrap()
                .get_step_type(),
            "event_lookup_step"
        );

        StepRegistry::unregister("registry_test_lookup");
        assert!(!StepRegistry::is_registered("registry_test_lookup"));
    }

    #[test]
    fn unknown_step_type() {
        let dao: Arc<dyn LookupDao> = Arc::new(MemoryLookupDao::new());
        let err = StepRegistry::build("registry_test_unknown", &serde_json::json!({}), dao)
            .err()
            .unwrap();
        assert_eq!(err.code(), ErrorCode::not_found_code());
    }
}
