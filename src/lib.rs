//! # when-visible
//!
//! Deferred partial reloads for [Dioxus](https://dioxuslabs.com): a component renders a
//! placeholder, waits for it to scroll into view (optionally a few pixels early), asks an
//! injected [`Reload`](reload::Reload) capability for just the page keys it displays,
//! and swaps in its children once the data has arrived.
//!
//! ## Core Concepts
//!
//! - [`VisibilityWatcher`](visibility::VisibilityWatcher): edge detector over intersection records
//! - [`FetchCoordinator`](reload::FetchCoordinator): the `loaded`/`fetching` state machine and its dedupe guard
//! - [`render_mode`](render::render_mode) / [`ElementFactory`](render::ElementFactory): the placeholder/loaded rendering contract
//! - [`WhenVisible`](components::when_visible::WhenVisible): the dioxus component tying them together
//! - [`use_reload_service`](state_management::use_reload_service): a coroutine driving a [`Transport`](state_management::Transport)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use when_visible::prelude::*;
//!
//! #[component]
//! fn Page() -> Element {
//!     provide_reload(use_reload_service(MyTransport));
//!     rsx! {
//!         WhenVisible {
//!             data: DataKeys::from("stats"),
//!             fallback: rsx! { "Loading..." },
//!             Stats {}
//!         }
//!     }
//! }
//! ```

pub mod components;
mod helper_hooks;
pub mod reload;
pub mod render;
pub mod state_management;
mod utils;
pub mod visibility;

/// Prelude module that re-exports commonly used types and traits.
///
/// ```rust,ignore
/// use when_visible::prelude::*;
/// ```
pub mod prelude {
    pub use super::components::when_visible::WhenVisible;
    pub use super::helper_hooks::prelude::{helper_hooks::use_visibility_observer, AnchorRef};
    pub use super::reload::{
        compute_reload_params, provide_reload, ConfigurationError, DataKeys, FetchCoordinator,
        FetchState, FetchStateStore, HookChain, MountState, Reload, ReloadHandle, ReloadOptions,
        ReloadRequest, TransportError, TriggerConfig, VisibleOutcome, VisitEvent, VisitHooks,
        VisitOutcome,
    };
    pub use super::render::{render, render_mode, Content, ElementFactory, RenderMode, WrapperTag};
    pub use super::state_management::{
        merge_partial_props, read_page_prop, use_reload_service, PartialProps, ReloadService,
        Transport, TransportFuture, PAGE_PROPS,
    };
    pub use super::visibility::{
        IntersectionEntry, Observation, TriggerMargin, TriggerMode, VisibilityWatcher,
    };
}
