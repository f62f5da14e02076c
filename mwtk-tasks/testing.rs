use mwtk_kube::{ClusterError, ClusterResources, FoundResource, Manifest, ResourceKind, ResourceRef};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::{HelmError, HelmRunner, PromptError, Prompter, ReportKind, Reporter};

/// In-memory cluster that records every call.
#[derive(Default)]
pub struct FakeCluster {
    existing: Mutex<Vec<ResourceRef>>,
    lookup_failures: HashMap<ResourceKind, String>,
    delete_failures: HashMap<ResourceKind, String>,
    create_failures: HashMap<ResourceKind, String>,
    lookups: Mutex<Vec<ResourceRef>>,
    deleted: Mutex<Vec<ResourceRef>>,
    created: Mutex<Vec<ResourceRef>>,
}

impl FakeCluster {
    pub fn with(existing: &[ResourceRef]) -> Self {
        Self {
            existing: Mutex::new(existing.to_vec()),
            ..Default::default()
        }
    }

    pub fn failing_lookup(mut self, kind: ResourceKind, message: &str) -> Self {
        self.lookup_failures.insert(kind, message.to_owned());
        self
    }

    pub fn failing_delete(mut self, kind: ResourceKind, message: &str) -> Self {
        self.delete_failures.insert(kind, message.to_owned());
        self
    }

    pub fn failing_create(mut self, kind: ResourceKind, message: &str) -> Self {
        self.create_failures.insert(kind, message.to_owned());
        self
    }

    pub fn lookups(&self) -> Vec<ResourceRef> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<ResourceRef> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<ResourceRef> {
        self.created.lock().unwrap().clone()
    }
}

impl ClusterResources for FakeCluster {
    async fn find_by_name(&self, resource: &ResourceRef) -> Result<Option<FoundResource>, ClusterError> {
        self.lookups.lock().unwrap().push(resource.clone());
        if let Some(message) = self.lookup_failures.get(&resource.kind) {
            return Err(ClusterError::Other(message.clone()));
        }

        let exists = self.existing.lock().unwrap().contains(resource);
        Ok(exists.then(|| FoundResource {
            resource: resource.clone(),
            uid: Some(format!("uid-{}", resource.name)),
            managed_by: Some("mwtk".to_owned()),
        }))
    }

    async fn delete(&self, found: &FoundResource) -> Result<(), ClusterError> {
        if let Some(message) = self.delete_failures.get(&found.resource.kind) {
            return Err(ClusterError::Api {
                message: message.clone(),
                code: 403,
            });
        }

        self.existing.lock().unwrap().retain(|r| r != &found.resource);
        self.deleted.lock().unwrap().push(found.resource.clone());
        Ok(())
    }

    async fn create(&self, manifest: &Manifest) -> Result<(), ClusterError> {
        let resource = manifest.resource_ref();
        if let Some(message) = self.create_failures.get(&resource.kind) {
            return Err(ClusterError::Api {
                message: message.clone(),
                code: 422,
            });
        }

        let mut existing = self.existing.lock().unwrap();
        if existing.contains(&resource) {
            return Err(ClusterError::Api {
                message: format!("\"{}\" already exists", resource.name),
                code: 409,
            });
        }

        existing.push(resource.clone());
        self.created.lock().unwrap().push(resource);
        Ok(())
    }
}

/// Prompter with scripted answers.
#[derive(Default)]
pub struct FakePrompter {
    answers: Mutex<VecDeque<bool>>,
    texts: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
    fail: bool,
}

impl FakePrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn typing(texts: &[&str]) -> Self {
        Self {
            texts: Mutex::new(texts.iter().map(|t| (*t).to_owned()).collect()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn check(&self, prompt: &str) -> Result<(), PromptError> {
        self.asked.lock().unwrap().push(prompt.to_owned());
        if self.fail {
            Err(dialoguer::Error::IO(std::io::Error::other("not a terminal")).into())
        } else {
            Ok(())
        }
    }
}

impl Prompter for FakePrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, PromptError> {
        self.check(prompt)?;
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }

    fn ask(&self, prompt: &str) -> Result<String, PromptError> {
        self.check(prompt)?;
        Ok(self.texts.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn ask_secret(&self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)
    }
}

/// Reporter that keeps every reported line.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(ReportKind, String)>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<(ReportKind, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn lines_of(&self, kind: ReportKind) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line)
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, kind: ReportKind, message: &str) {
        self.lines.lock().unwrap().push((kind, message.to_owned()));
    }
}

/// Helm runner with scripted outputs keyed by the helm sub-command.
#[derive(Default)]
pub struct FakeHelm {
    outputs: HashMap<String, Result<String, (i32, String)>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeHelm {
    pub fn responding(mut self, subcommand: &str, output: &str) -> Self {
        self.outputs.insert(subcommand.to_owned(), Ok(output.to_owned()));
        self
    }

    pub fn failing(mut self, key: &str, code: i32, stderr: &str) -> Self {
        self.outputs.insert(key.to_owned(), Err((code, stderr.to_owned())));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl HelmRunner for FakeHelm {
    async fn run(&self, args: &[String]) -> Result<String, HelmError> {
        self.calls.lock().unwrap().push(args.to_vec());

        let full_key = args.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
        let output = self
            .outputs
            .get(&full_key)
            .or_else(|| args.first().and_then(|subcommand| self.outputs.get(subcommand)));

        match output {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err((code, stderr))) => Err(HelmError::Failed {
                code: Some(*code),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}
