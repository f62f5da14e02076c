pub use self::gate::{Confirmation, ConfirmationGate, ConfirmationPolicy};
pub use self::orchestrator::{CascadeOrchestrator, CascadeRun, DeclinePolicy, StepRecord};
pub use self::outcome::{RunOutcome, Verdict};
pub use self::plan::DeletionPlan;
pub use self::step::{SkipReason, StepExecutor, StepResult};

mod gate;
mod orchestrator;
mod outcome;
mod plan;
mod step;
