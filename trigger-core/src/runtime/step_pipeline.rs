use trigger_common::prelude::*;
use trigger_common::Event;

use super::steps::{WorkflowData, WorkflowStep};
use crate::config::Properties;

/// Runs the steps of one workflow, in order, for an event.
#[derive(Default)]
pub struct StepPipeline {
    steps: Vec<Arc<dyn WorkflowStep>>,
}

impl StepPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, step: Arc<dyn WorkflowStep>) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `false` with the data gathered so far when a step halts the workflow. A step error
    /// aborts the run.
    pub fn run(&self, event: &Event, data: WorkflowData) -> TriggerResult<(bool, WorkflowData)> {
        let max_entries = Properties::get_max_workflow_data_entries();
        let mut data = data;

        for (seq, step) in self.steps.iter().enumerate() {
            debug!(
                "Executing step {} ({}) for event {}",
                seq,
                step.get_step_type(),
                event.eventname()
            );
            let (proceed, step_results) = step.execute(event, data).map_err(|e| {
                error!(
                    "Step {} ({}) failed: {}",
                    seq,
                    step.get_step_type(),
                    e.display_text()
                );
                e
            })?;
            data = step_results;

            if data.len() > max_entries {
                return fmt_err!(
                    IllegalArgument,
                    "workflow data has {} entries after step {}, the limit is {}",
                    data.len(),
                    seq,
                    max_entries
                );
            }
            if !proceed {
                info!(
                    "Step {} ({}) halted the workflow for event {}",
                    seq,
                    step.get_step_type(),
                    event.eventname()
                );
                return Ok((false, data));
            }
        }
        Ok((true, data))
    }
}
