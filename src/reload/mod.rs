//! # Reload
//!
//! Everything between "the anchor became visible" and "the partial reload was
//! handed to the transport": merged reload options, the ordered lifecycle hooks,
//! the injected [`Reload`] capability, and the per-instance fetch state machine.

mod capability;
mod coordinator;
mod error;
mod hooks;
mod options;
mod params;

pub use capability::{provide_reload, Reload, ReloadHandle};
pub use coordinator::{
    FetchCoordinator, FetchState, FetchStateStore, MountState, TriggerConfig, VisibleOutcome,
};
pub use error::{ConfigurationError, TransportError};
pub use hooks::{Hook, HookChain};
pub use options::{JsonMap, ReloadOptions, ReloadRequest, VisitEvent, VisitHooks, VisitOutcome};
pub use params::{compute_reload_params, DataKeys};
