use mwtk_kube::FoundResource;
use tracing::{info, warn};

use crate::Prompter;

#[cfg(test)]
#[path = "./gate.tests.rs"]
mod gate_tests;

/// How the [`ConfirmationGate`] answers deletion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPolicy {
    /// Ask the operator every time.
    Prompt,

    /// Proceed without asking.
    AssumeYes,

    /// Decline without asking.
    AssumeNo,
}

impl ConfirmationPolicy {
    /// Derives policy from the CLI switches.\
    /// **Note** that a non-interactive run declines everything unless `force` or `yes` is set.
    pub fn from_flags(force: bool, yes: bool, interactive: bool) -> Self {
        if force || yes {
            ConfirmationPolicy::AssumeYes
        } else if interactive {
            ConfirmationPolicy::Prompt
        } else {
            ConfirmationPolicy::AssumeNo
        }
    }
}

/// Answer from the [`ConfirmationGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancelled,
}

/// Checkpoint that lets the operator abort deletion of a single resource.
pub struct ConfirmationGate<'a, P: Prompter> {
    prompter: &'a P,
    policy: ConfirmationPolicy,
    managed_by: String,
}

impl<'a, P: Prompter> ConfirmationGate<'a, P> {
    /// Creates new [`ConfirmationGate`] instance.\
    /// `managed_by` is the label value that marks resources created by this CLI.
    pub fn new(prompter: &'a P, policy: ConfirmationPolicy, managed_by: impl Into<String>) -> Self {
        Self {
            prompter,
            policy,
            managed_by: managed_by.into(),
        }
    }

    /// Returns text of the question asked before the `found` resource is deleted.
    pub fn prompt_text(&self, found: &FoundResource) -> String {
        let resource = &found.resource;
        let mut text = format!(
            "Delete {} \"{}\" from namespace \"{}\"?",
            resource.kind, resource.name, resource.namespace
        );
        if !found.is_managed_by(&self.managed_by) {
            text.push_str(&format!(" Note that it was not created by {}.", self.managed_by));
        }

        text
    }

    /// Asks whether the `found` resource can be deleted.
    pub fn confirm(&self, found: &FoundResource) -> Confirmation {
        match self.policy {
            ConfirmationPolicy::AssumeYes => Confirmation::Proceed,
            ConfirmationPolicy::AssumeNo => {
                info!("Deletion of {} declined (non-interactive mode)", found.resource);
                Confirmation::Cancelled
            },
            ConfirmationPolicy::Prompt => match self.prompter.confirm(&self.prompt_text(found)) {
                Ok(true) => Confirmation::Proceed,
                Ok(false) => Confirmation::Cancelled,
                Err(error) => {
                    warn!("Cannot confirm deletion of {}: {}", found.resource, error);
                    Confirmation::Cancelled
                },
            },
        }
    }
}
