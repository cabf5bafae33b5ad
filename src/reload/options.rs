use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::hooks::HookChain;

/// Extra request payload and partial page props share the same JSON object shape
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// How a visit ended, as seen by the lifecycle hooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The visit started and has not completed yet
    Pending,
    Success,
    Error(String),
    Cancelled,
}

/// The event handed to every lifecycle hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitEvent {
    /// The keys the visit was restricted to (empty means everything)
    pub only: Vec<String>,
    pub outcome: VisitOutcome,
}
impl VisitEvent {
    pub fn new(only: Vec<String>, outcome: VisitOutcome) -> Self {
        Self { only, outcome }
    }
}

/// The part of the reload options that goes over the wire.
///
/// Field names are serialized in `camelCase` so the options can be written as the
/// same JSON a server-side adapter expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReloadRequest {
    /// Only refetch these page keys
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
    /// Refetch everything but these page keys
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<String>,
    #[serde(skip_serializing_if = "JsonMap::is_empty")]
    pub data: JsonMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub preserve_scroll: bool,
    pub preserve_state: bool,
}
impl Default for ReloadRequest {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            except: Vec::new(),
            data: JsonMap::new(),
            headers: BTreeMap::new(),
            preserve_scroll: true,
            preserve_state: true,
        }
    }
}

/// Lifecycle observers attached to one reload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisitHooks {
    pub on_start: HookChain<VisitEvent>,
    pub on_finish: HookChain<VisitEvent>,
    pub on_success: HookChain<VisitEvent>,
    pub on_error: HookChain<VisitEvent>,
    pub on_cancel: HookChain<VisitEvent>,
}

/// Everything handed to a [`Reload`](super::Reload) capability.
///
/// Deserializing only fills the request half: hooks are code, not data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReloadOptions {
    #[serde(flatten)]
    pub request: ReloadRequest,
    #[serde(skip)]
    pub hooks: VisitHooks,
}

impl ReloadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only(&self) -> &[String] {
        &self.request.only
    }

    pub fn with_only<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.only = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_except<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.except = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.request.data.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_preserve_scroll(mut self, preserve_scroll: bool) -> Self {
        self.request.preserve_scroll = preserve_scroll;
        self
    }

    pub fn with_preserve_state(mut self, preserve_state: bool) -> Self {
        self.request.preserve_state = preserve_state;
        self
    }

    pub fn on_start<F: Fn(&VisitEvent) + 'static>(mut self, hook: F) -> Self {
        self.hooks.on_start.push(hook);
        self
    }

    pub fn on_finish<F: Fn(&VisitEvent) + 'static>(mut self, hook: F) -> Self {
        self.hooks.on_finish.push(hook);
        self
    }

    pub fn on_success<F: Fn(&VisitEvent) + 'static>(mut self, hook: F) -> Self {
        self.hooks.on_success.push(hook);
        self
    }

    pub fn on_error<F: Fn(&VisitEvent) + 'static>(mut self, hook: F) -> Self {
        self.hooks.on_error.push(hook);
        self
    }

    pub fn on_cancel<F: Fn(&VisitEvent) + 'static>(mut self, hook: F) -> Self {
        self.hooks.on_cancel.push(hook);
        self
    }
}
