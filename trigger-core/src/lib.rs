mod config;
mod dao;
mod runtime;
mod utils;

pub use config::Properties;
pub use dao::{LookupDao, MemoryLookupDao};
pub use runtime::{EventLookupStep, StepPipeline, StepRegistry, WorkflowData, WorkflowStep};
pub use utils::{DatafieldManager, LangStrings};

/// Installs the env_logger backend for the `log` facade; later calls are no-ops.
pub fn initialize() {
    let _ = env_logger::try_init();
}
