mod event_lookup_step;
mod step_registry;
mod workflow_step;

pub use event_lookup_step::EventLookupStep;
pub use step_registry::StepRegistry;
pub use workflow_step::{WorkflowData, WorkflowStep};
