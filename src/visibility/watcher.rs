use super::entry::IntersectionEntry;

/// A live observation of one anchor element.
///
/// Implemented by whatever primitive actually watches the element (a browser
/// `IntersectionObserver` driven through eval, a test double, ...). The watcher owns
/// the handle and is the only one allowed to disconnect it.
pub trait Observation {
    /// Stop delivering intersection records. Must tolerate being called twice.
    fn disconnect(&mut self);
}

/// Whether every visibility edge is delivered or only the first one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// The observation is cancelled on the first edge
    #[default]
    Once,
    /// Every edge is delivered for the lifetime of the observation
    Continuous,
}
impl TriggerMode {
    pub fn from_always(always: bool) -> Self {
        if always {
            Self::Continuous
        } else {
            Self::Once
        }
    }
}

/// Edge detector over the intersection records of one observation.
///
/// It remembers the last intersecting state and reports only `false -> true`
/// transitions, whatever the edge semantics of the underlying primitive.
#[derive(Debug)]
pub struct VisibilityWatcher<O: Observation> {
    mode: TriggerMode,
    observation: Option<O>,
    last_intersecting: bool,
}

impl<O: Observation> VisibilityWatcher<O> {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            observation: None,
            last_intersecting: false,
        }
    }

    /// Replace the current observation, disconnecting the previous one.
    ///
    /// `None` means the anchor ref is unset: the watcher stays idle.
    pub fn observe(&mut self, observation: Option<O>) {
        self.disconnect();
        self.last_intersecting = false;
        if observation.is_some() {
            log::debug!("VisibilityWatcher - observing ({:?})", self.mode);
        }
        self.observation = observation;
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// Feed one delivery of intersection records.
    ///
    /// Only the first record is consulted. Returns `true` when the delivery is a
    /// qualifying not-visible to visible edge.
    pub fn deliver(&mut self, entries: &[IntersectionEntry]) -> bool {
        if self.observation.is_none() {
            return false;
        }
        let Some(first) = entries.first() else {
            return false;
        };

        let was_intersecting = self.last_intersecting;
        self.last_intersecting = first.is_intersecting;
        if was_intersecting || !first.is_intersecting {
            return false;
        }

        if self.mode == TriggerMode::Once {
            self.disconnect();
        }
        log::debug!("VisibilityWatcher - became visible");
        true
    }

    pub fn disconnect(&mut self) {
        if let Some(mut observation) = self.observation.take() {
            log::debug!("VisibilityWatcher - disconnect");
            observation.disconnect();
        }
    }
}

impl<O: Observation> Drop for VisibilityWatcher<O> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
