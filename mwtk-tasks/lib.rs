pub use self::cascade::{
    CascadeOrchestrator, CascadeRun, Confirmation, ConfirmationGate, ConfirmationPolicy, DeclinePolicy, DeletionPlan,
    RunOutcome, SkipReason, StepExecutor, StepRecord, StepResult, Verdict,
};
pub use self::helm::{HelmAppsManager, HelmCli, HelmError, HelmRunner};
pub use self::prompt::{ConsolePrompter, PromptError, Prompter};
pub use self::reporter::{ConsoleReporter, ReportKind, Reporter};

pub mod commands;

mod cascade;
mod helm;
mod prompt;
mod reporter;

#[cfg(test)]
pub(crate) mod testing;
