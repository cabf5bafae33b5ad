use std::cell::Cell;

use dioxus::prelude::*;

use crate::utils::CheapClone;

use super::{
    capability::{Reload, ReloadHandle},
    error::ConfigurationError,
    options::ReloadOptions,
    params::{compute_reload_params, DataKeys},
};

/// Fetch progress of one component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchState {
    /// A reload completed successfully at least once
    pub loaded: bool,
    /// A reload is in flight
    pub fetching: bool,
}

/// Where a component keeps its [`FetchState`].
///
/// Writing is expected to notify the host framework (schedule a re-render).
pub trait FetchStateStore: Clone + 'static {
    fn get(&self) -> FetchState;
    fn set(&self, state: FetchState);
}

impl FetchStateStore for Signal<FetchState> {
    fn get(&self) -> FetchState {
        *self.peek()
    }
    fn set(&self, state: FetchState) {
        let mut signal = *self;
        Writable::set(&mut signal, state);
    }
}

impl FetchStateStore for CheapClone<Cell<FetchState>> {
    fn get(&self) -> FetchState {
        Cell::get(self)
    }
    fn set(&self, state: FetchState) {
        Cell::set(self, state)
    }
}

/// Tracks whether the owning component is still mounted.
///
/// Reload hooks may fire after unmount; they check this before touching state.
#[derive(Debug, Clone)]
pub struct MountState(CheapClone<Cell<bool>>);
impl MountState {
    pub fn new() -> Self {
        Self(CheapClone::new(Cell::new(true)))
    }
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
    pub fn unmount(&self) {
        self.0.set(false)
    }
}
impl Default for MountState {
    fn default() -> Self {
        Self::new()
    }
}

/// The props that drive a fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriggerConfig {
    pub data: Option<DataKeys>,
    pub params: Option<ReloadOptions>,
    /// Re-fetch on every visibility edge instead of only the first one
    pub always: bool,
    /// Release the in-flight guard when the reload fails or is cancelled.
    ///
    /// Off by default: a failed reload leaves `fetching` set and the component
    /// never retries.
    pub release_guard_on_error: bool,
}

/// What [`FetchCoordinator::on_visible`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleOutcome {
    Invoked,
    SkippedInFlight,
    /// One-shot component already loaded: `LOADED` is terminal
    SkippedLoaded,
}

/// Owns the fetch state machine of one component instance.
///
/// `IDLE -> FETCHING -> LOADED`, and `LOADED -> FETCHING -> LOADED` again only in
/// continuous mode. In one-shot mode `LOADED` is terminal even if an edge still
/// reaches [`on_visible`](FetchCoordinator::on_visible).
#[derive(Debug, Clone)]
pub struct FetchCoordinator<S: FetchStateStore> {
    config: CheapClone<TriggerConfig>,
    store: S,
    reload: ReloadHandle,
    mount: MountState,
}

impl<S: FetchStateStore> FetchCoordinator<S> {
    pub fn new(config: TriggerConfig, store: S, reload: ReloadHandle, mount: MountState) -> Self {
        Self {
            config: CheapClone::new(config),
            store,
            reload,
            mount,
        }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    pub fn state(&self) -> FetchState {
        self.store.get()
    }

    /// Called on every qualifying visibility edge.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] when the component has neither `data` nor `params`.
    /// Nothing is reloaded and the state is left untouched in that case.
    pub fn on_visible(&self) -> Result<VisibleOutcome, ConfigurationError> {
        let state = self.store.get();
        if state.fetching {
            log::debug!("FetchCoordinator - reload already in flight, skipping");
            return Ok(VisibleOutcome::SkippedInFlight);
        }
        if state.loaded && !self.config.always {
            log::debug!("FetchCoordinator - already loaded, skipping");
            return Ok(VisibleOutcome::SkippedLoaded);
        }

        let mut options =
            compute_reload_params(self.config.data.as_ref(), self.config.params.as_ref())?;

        self.update(|s| s.fetching = true);

        let this = self.clone();
        options
            .hooks
            .on_start
            .prepend(move |_| this.update(|s| s.fetching = true));

        let this = self.clone();
        options.hooks.on_finish.prepend(move |_| {
            this.update(|s| {
                s.loaded = true;
                s.fetching = false;
            })
        });

        if self.config.release_guard_on_error {
            let this = self.clone();
            options
                .hooks
                .on_error
                .prepend(move |_| this.update(|s| s.fetching = false));
            let this = self.clone();
            options
                .hooks
                .on_cancel
                .prepend(move |_| this.update(|s| s.fetching = false));
        }

        log::debug!("FetchCoordinator - reloading only={:?}", options.only());
        self.reload.reload(options);
        Ok(VisibleOutcome::Invoked)
    }

    fn update(&self, f: impl FnOnce(&mut FetchState)) {
        if !self.mount.is_mounted() {
            log::debug!("FetchCoordinator - ignoring state update after unmount");
            return;
        }
        let mut state = self.store.get();
        f(&mut state);
        self.store.set(state);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::reload::options::{VisitEvent, VisitOutcome};

    type Calls = Rc<RefCell<Vec<ReloadOptions>>>;

    fn recorder() -> (ReloadHandle, Calls) {
        let calls: Calls = Rc::default();
        let c = calls.clone();
        (
            ReloadHandle::new(move |options: ReloadOptions| c.borrow_mut().push(options)),
            calls,
        )
    }

    fn coordinator(config: TriggerConfig) -> (FetchCoordinator<Rc<Cell<FetchState>>>, Calls) {
        let (reload, calls) = recorder();
        let store = Rc::new(Cell::new(FetchState::default()));
        (
            FetchCoordinator::new(config, store, reload, MountState::new()),
            calls,
        )
    }

    fn data(keys: &str) -> TriggerConfig {
        TriggerConfig {
            data: Some(keys.into()),
            ..Default::default()
        }
    }

    fn event(outcome: VisitOutcome) -> VisitEvent {
        VisitEvent::new(vec!["a".into()], outcome)
    }

    #[test]
    fn invokes_reload_and_marks_fetching() {
        let (coordinator, calls) = coordinator(data("a"));
        assert_eq!(coordinator.on_visible(), Ok(VisibleOutcome::Invoked));
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].only(), ["a".to_owned()]);
        assert_eq!(
            coordinator.state(),
            FetchState {
                loaded: false,
                fetching: true
            }
        );
    }

    #[test]
    fn dedupes_while_in_flight() {
        let (coordinator, calls) = coordinator(data("a"));
        coordinator.on_visible().unwrap();
        assert_eq!(
            coordinator.on_visible(),
            Ok(VisibleOutcome::SkippedInFlight)
        );
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn finish_hook_loads_and_releases_the_guard() {
        let (coordinator, calls) = coordinator(data("a"));
        coordinator.on_visible().unwrap();
        let options = calls.borrow()[0].clone();

        options.hooks.on_start.call(&event(VisitOutcome::Pending));
        assert!(coordinator.state().fetching);
        options.hooks.on_finish.call(&event(VisitOutcome::Success));
        assert_eq!(
            coordinator.state(),
            FetchState {
                loaded: true,
                fetching: false
            }
        );

        assert_eq!(coordinator.on_visible(), Ok(VisibleOutcome::SkippedLoaded));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn continuous_mode_reloads_after_loading() {
        let (coordinator, calls) = coordinator(TriggerConfig {
            always: true,
            ..data("a")
        });
        coordinator.on_visible().unwrap();
        let options = calls.borrow()[0].clone();
        options.hooks.on_finish.call(&event(VisitOutcome::Success));

        assert_eq!(coordinator.on_visible(), Ok(VisibleOutcome::Invoked));
        assert_eq!(calls.borrow().len(), 2);
        assert!(coordinator.state().loaded);
    }

    #[test]
    fn core_hooks_run_before_caller_hooks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (reload, calls) = recorder();
        let store = Rc::new(Cell::new(FetchState::default()));

        let (s, st) = (seen.clone(), store.clone());
        let (s2, st2) = (seen.clone(), store.clone());
        let params = ReloadOptions::new()
            .on_start(move |_| s.borrow_mut().push(("start", st.get())))
            .on_finish(move |_| s2.borrow_mut().push(("finish", st2.get())));
        let config = TriggerConfig {
            params: Some(params),
            ..Default::default()
        };
        let coordinator = FetchCoordinator::new(config, store, reload, MountState::new());
        coordinator.on_visible().unwrap();

        let options = calls.borrow()[0].clone();
        options.hooks.on_start.call(&event(VisitOutcome::Pending));
        options.hooks.on_finish.call(&event(VisitOutcome::Success));

        assert_eq!(
            *seen.borrow(),
            vec![
                (
                    "start",
                    FetchState {
                        loaded: false,
                        fetching: true
                    }
                ),
                (
                    "finish",
                    FetchState {
                        loaded: true,
                        fetching: false
                    }
                ),
            ]
        );
    }

    #[test]
    fn configuration_error_leaves_state_alone() {
        let (coordinator, calls) = coordinator(TriggerConfig::default());
        assert_eq!(
            coordinator.on_visible(),
            Err(ConfigurationError::MissingDataAndParams)
        );
        assert!(calls.borrow().is_empty());
        assert_eq!(coordinator.state(), FetchState::default());
    }

    #[test]
    fn failed_reload_keeps_the_guard_stuck_by_default() {
        let (coordinator, calls) = coordinator(data("a"));
        coordinator.on_visible().unwrap();
        let options = calls.borrow()[0].clone();
        assert!(options.hooks.on_error.is_empty());

        options
            .hooks
            .on_error
            .call(&event(VisitOutcome::Error("boom".into())));
        assert_eq!(
            coordinator.on_visible(),
            Ok(VisibleOutcome::SkippedInFlight)
        );
    }

    #[test]
    fn guard_release_can_be_opted_into() {
        let (coordinator, calls) = coordinator(TriggerConfig {
            release_guard_on_error: true,
            ..data("a")
        });
        coordinator.on_visible().unwrap();
        let options = calls.borrow()[0].clone();

        options
            .hooks
            .on_error
            .call(&event(VisitOutcome::Error("boom".into())));
        assert_eq!(coordinator.state(), FetchState::default());

        assert_eq!(coordinator.on_visible(), Ok(VisibleOutcome::Invoked));
        let options = calls.borrow()[1].clone();
        options.hooks.on_cancel.call(&event(VisitOutcome::Cancelled));
        assert!(!coordinator.state().fetching);
    }

    #[test]
    fn updates_after_unmount_are_ignored() {
        let (reload, calls) = recorder();
        let store = Rc::new(Cell::new(FetchState::default()));
        let mount = MountState::new();
        let coordinator = FetchCoordinator::new(data("a"), store.clone(), reload, mount.clone());
        coordinator.on_visible().unwrap();

        mount.unmount();
        let options = calls.borrow()[0].clone();
        options.hooks.on_finish.call(&event(VisitOutcome::Success));
        assert_eq!(
            store.get(),
            FetchState {
                loaded: false,
                fetching: true
            }
        );
    }
}
