mod step_pipeline;
mod steps;

pub use step_pipeline::StepPipeline;
pub use steps::{EventLookupStep, StepRegistry, WorkflowData, WorkflowStep};
