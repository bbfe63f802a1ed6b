mod common;
mod exception;
mod metadata;
mod run;
mod utils;

pub use metadata::{FormField, ParamType, StepSettings, StepType};
pub use run::{Event, EventKind};
pub use utils::FieldNameUtils;

pub mod prelude;

#[macro_use]
pub(crate) mod macros;
