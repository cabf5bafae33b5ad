use dioxus::prelude::*;

use crate::utils::CheapClone;

use super::options::ReloadOptions;

/// The partial-reload capability a component invokes once it becomes visible.
///
/// Implementations issue the request asynchronously and report progress through the
/// hooks carried by the options. `reload` itself must return without waiting.
pub trait Reload {
    fn reload(&self, options: ReloadOptions);
}

impl<F: Fn(ReloadOptions)> Reload for F {
    fn reload(&self, options: ReloadOptions) {
        self(options)
    }
}

/// Shared, cheaply clonable handle over a [`Reload`] implementation.
///
/// This is what gets injected (through dioxus context or a constructor) instead of
/// reaching for a global router.
#[derive(Clone)]
pub struct ReloadHandle(CheapClone<dyn Reload>);

impl ReloadHandle {
    pub fn new<R: Reload + 'static>(reload: R) -> Self {
        Self(CheapClone::new(reload))
    }
}
impl Reload for ReloadHandle {
    fn reload(&self, options: ReloadOptions) {
        self.0.reload(options)
    }
}
impl PartialEq for ReloadHandle {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.0, &other.0)
    }
}
impl core::fmt::Debug for ReloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadHandle").finish_non_exhaustive()
    }
}

/// Make `reload` available to every `WhenVisible` below the calling component
pub fn provide_reload<R: Reload + 'static>(reload: R) -> ReloadHandle {
    use_context_provider(move || ReloadHandle::new(reload))
}
