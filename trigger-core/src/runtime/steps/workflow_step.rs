use trigger_common::prelude::*;
use trigger_common::Event;

/// Data threaded through the steps of a workflow.
pub type WorkflowData = HashMap<InlineStr, Object>;

pub trait WorkflowStep: Send + Sync {
    /// Run the step for `event`.
    ///
    /// `step_results` holds what previous steps produced. Returns whether the workflow should go on,
    /// together with the (possibly enriched) data.
    fn execute(
        &self,
        event: &Event,
        step_results: WorkflowData,
    ) -> TriggerResult<(bool, WorkflowData)>;

    /// return type name the step is registered under
    fn get_step_type(&self) -> &str;

    /// return translated display name
    fn get_step_name(&self) -> InlineStr;

    /// return translated description
    fn get_step_desc(&self) -> InlineStr;

    /// Personal data the step touches, keyed by step type, with the language string id describing
    /// it.
    fn get_privacy_fields(&self) -> HashMap<InlineStr, InlineStr> {
        HashMap::default()
    }

    /// return names of the fields the step adds, before any output prefix
    fn get_fields(&self) -> &[&'static str] {
        &[]
    }
}
