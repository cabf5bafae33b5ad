use std::{future::Future, pin::Pin};

use dioxus::prelude::*;
use futures_util::stream::StreamExt;

use crate::{
    reload::{
        Reload, ReloadOptions, ReloadRequest, TransportError, VisitEvent, VisitHooks, VisitOutcome,
    },
    utils::CheapClone,
};

use super::page_props::{merge_partial_props, PartialProps, PAGE_PROPS};

pub type TransportFuture = Pin<Box<dyn Future<Output = Result<PartialProps, TransportError>>>>;

/// Sends partial reload requests to the server and returns the props it answered with
pub trait Transport {
    fn fetch(&self, request: ReloadRequest) -> TransportFuture;
}

/// Commands for the reload service
pub enum ReloadCommand {
    /// Issue one partial reload
    Reload { options: ReloadOptions },
}
impl core::fmt::Debug for ReloadCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reload { options } => f
                .debug_struct("Reload")
                .field("request", &options.request)
                .finish_non_exhaustive(),
        }
    }
}

/// [`Reload`] capability backed by the reload service coroutine
#[derive(Clone, Copy)]
pub struct ReloadService(Coroutine<ReloadCommand>);
impl core::fmt::Debug for ReloadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadService").finish_non_exhaustive()
    }
}
impl Reload for ReloadService {
    fn reload(&self, options: ReloadOptions) {
        self.0.send(ReloadCommand::Reload { options });
    }
}

/// Reload service coroutine.
///
/// Each reload runs in its own task so reloads of different components do not
/// queue behind each other.
pub fn use_reload_service<T: Transport + 'static>(transport: T) -> ReloadService {
    let transport = use_hook(move || -> CheapClone<dyn Transport> { CheapClone::new(transport) });

    let handle = use_coroutine(move |mut rx: UnboundedReceiver<ReloadCommand>| {
        let transport = transport.clone();
        async move {
            log::info!("reload_service (coroutine) - start");

            while let Some(cmd) = rx.next().await {
                log::debug!("reload_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ReloadCommand::Reload { options } => {
                        spawn(run_reload(transport.clone(), options));
                    }
                }
                log::debug!("reload_service (coroutine) - Command processed");
            }
        }
    });
    ReloadService(handle)
}

async fn run_reload(transport: CheapClone<dyn Transport>, options: ReloadOptions) {
    let ReloadOptions { request, hooks } = options;
    hooks
        .on_start
        .call(&VisitEvent::new(request.only.clone(), VisitOutcome::Pending));

    let result = transport.fetch(request.clone()).await;

    settle_visit(&hooks, &request, result, |props| {
        merge_partial_props(
            &mut PAGE_PROPS.write(),
            props,
            &request.only,
            &request.except,
        )
    });
}

/// Apply a transport result and fire the matching hooks.
///
/// `merge` runs (and releases whatever it borrowed) before any hook is called.
/// On success `on_success` then `on_finish` fire; failures only fire `on_error`
/// or `on_cancel`.
pub(crate) fn settle_visit<M>(
    hooks: &VisitHooks,
    request: &ReloadRequest,
    result: Result<PartialProps, TransportError>,
    merge: M,
) -> VisitOutcome
where
    M: FnOnce(PartialProps) -> Vec<String>,
{
    let only = request.only.clone();
    match result {
        Ok(props) => {
            let updated = merge(props);
            log::debug!("reload_service - merged props {updated:?}");
            let event = VisitEvent::new(only, VisitOutcome::Success);
            hooks.on_success.call(&event);
            hooks.on_finish.call(&event);
            event.outcome
        }
        Err(TransportError::Cancelled) => {
            log::debug!("reload_service - reload of {only:?} cancelled");
            let event = VisitEvent::new(only, VisitOutcome::Cancelled);
            hooks.on_cancel.call(&event);
            event.outcome
        }
        Err(e) => {
            let e = crate::utils::log_error(e);
            let event = VisitEvent::new(only, VisitOutcome::Error(e));
            hooks.on_error.call(&event);
            event.outcome
        }
    }
}
