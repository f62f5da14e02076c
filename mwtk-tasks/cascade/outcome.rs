use mwtk_common::{count_of, pluralize};

use crate::ReportKind;
use crate::commands::CommandOutcome;

#[cfg(test)]
#[path = "./outcome.tests.rs"]
mod outcome_tests;

/// Graded result of a cascade run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoneDeleted,
    PartiallyDeleted,
    FullyDeleted,
}

/// Counters of a cascade run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub deleted_count: usize,
    pub total_steps: usize,
}

impl RunOutcome {
    /// Creates new [`RunOutcome`] instance.
    pub fn new(deleted_count: usize, total_steps: usize) -> Self {
        Self {
            deleted_count,
            total_steps,
        }
    }

    /// Grades the run.
    pub fn verdict(&self) -> Verdict {
        if self.deleted_count == 0 {
            Verdict::NoneDeleted
        } else if self.deleted_count < self.total_steps {
            Verdict::PartiallyDeleted
        } else {
            Verdict::FullyDeleted
        }
    }

    /// Returns the summary line for the run, `subject` names the deletion target.
    pub fn message(&self, subject: &str) -> String {
        match self.verdict() {
            Verdict::NoneDeleted => "No resource has been deleted.".to_owned(),
            Verdict::PartiallyDeleted => format!(
                "Only {} (out of {}) {} been deleted successfully.",
                count_of(self.deleted_count, "resource", "resources"),
                self.total_steps,
                pluralize(self.deleted_count, "has", "have"),
            ),
            Verdict::FullyDeleted => format!("{subject} deleted successfully!"),
        }
    }

    /// Returns kind of the summary line.
    pub fn report_kind(&self) -> ReportKind {
        match self.verdict() {
            Verdict::NoneDeleted => ReportKind::Warning,
            Verdict::PartiallyDeleted => ReportKind::Error,
            Verdict::FullyDeleted => ReportKind::Success,
        }
    }

    /// Returns exit classification of the run.
    pub fn command_outcome(&self) -> CommandOutcome {
        match self.verdict() {
            Verdict::NoneDeleted | Verdict::PartiallyDeleted => CommandOutcome::Invalid,
            Verdict::FullyDeleted => CommandOutcome::Success,
        }
    }
}
