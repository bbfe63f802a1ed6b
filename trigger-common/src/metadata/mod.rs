mod step_settings;
mod step_type;

pub use step_settings::{FormField, ParamType, StepSettings};
pub use step_type::StepType;
