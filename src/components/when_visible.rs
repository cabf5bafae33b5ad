use dioxus::prelude::*;

use crate::{
    helper_hooks::prelude::{helper_hooks::use_visibility_observer, AnchorRef},
    reload::{
        DataKeys, FetchCoordinator, FetchState, MountState, ReloadHandle, ReloadOptions,
        TriggerConfig,
    },
    render::{render, render_mode, ElementFactory, WrapperTag},
    utils::{log_error, CheapClone},
    visibility::{TriggerMargin, TriggerMode},
};

/// Materializes the render contract as dioxus elements
struct AnchorElements {
    anchor: AnchorRef,
}

macro_rules! wrapper_elements {
    ($tag:expr, $anchor:expr, $anchor_id:expr, $content:expr, $($variant:ident => $el:ident),+ $(,)?) => {
        match $tag {
            $(WrapperTag::$variant => {
                let anchor = $anchor;
                let anchor_id = $anchor_id;
                let content = $content;
                rsx! {
                    $el { id: "{anchor_id}", onmounted: move |_| anchor.attach(), {content} }
                }
            })+
        }
    };
}

impl ElementFactory for AnchorElements {
    type Node = Element;

    fn wrapper(&self, tag: WrapperTag, anchor_id: &str, content: Option<Element>) -> Element {
        let content = content.unwrap_or_else(|| rsx! {});
        wrapper_elements!(
            tag,
            self.anchor,
            anchor_id,
            content,
            Div => div,
            Span => span,
            Section => section,
            Article => article,
            Aside => aside,
            Li => li,
            P => p,
        )
    }

    fn bare(&self, content: Option<Element>) -> Element {
        content.unwrap_or_else(|| rsx! {})
    }
}

/// Defers a partial reload until this component scrolls into view.
///
/// Until the first reload completes, an anchor element (`tag`, a `div` by
/// default) holding `fallback` is rendered and observed. When it comes within
/// `buffer` pixels of the viewport, a reload restricted to `data` (merged over
/// `params`) is issued through the [`ReloadHandle`] found in context. Once it
/// finishes, `children` are rendered:
/// - directly, with the anchor gone, when `always` is false;
/// - inside the still-observed anchor when `always` is true, each new visibility
///   edge issuing a new reload.
///
/// One of `data` or `params` is required; without either, nothing is reloaded, the
/// error is logged and `fallback` stays on screen.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     WhenVisible {
///         data: DataKeys::from("comments"),
///         buffer: 200.0,
///         fallback: rsx! { p { "Loading comments..." } },
///         Comments {}
///     }
/// }
/// ```
#[component]
pub fn WhenVisible(
    data: Option<DataKeys>,
    params: Option<ReloadOptions>,
    #[props(default)] buffer: f64,
    #[props(default)] tag: WrapperTag,
    #[props(default)] always: bool,
    fallback: Option<Element>,
    #[props(default)] release_guard_on_error: bool,
    children: Element,
) -> Element {
    let anchor_id: CheapClone<str> = use_hook(|| CheapClone::from(crate::utils::anchor_id()));
    let state = use_signal(FetchState::default);
    let mount = use_hook(MountState::new);

    log::debug!("WhenVisible {anchor_id} Rendered");

    {
        let mount = mount.clone();
        let anchor_id = anchor_id.clone();
        use_drop(move || {
            log::debug!("WhenVisible {anchor_id} Dropped");
            mount.unmount();
        });
    }

    let coordinator = match try_use_context::<ReloadHandle>() {
        Some(reload) => Some(FetchCoordinator::new(
            TriggerConfig {
                data,
                params,
                always,
                release_guard_on_error,
            },
            state,
            reload,
            mount,
        )),
        None => {
            log::error!(
                "WhenVisible {anchor_id} - no reload capability in context, use `provide_reload`"
            );
            None
        }
    };

    let anchor = use_visibility_observer(
        anchor_id.clone(),
        TriggerMargin::new(buffer),
        TriggerMode::from_always(always),
        move || {
            if let Some(coordinator) = &coordinator {
                if let Err(e) = coordinator.on_visible() {
                    log_error(e);
                }
            }
        },
    );

    let FetchState { loaded, .. } = state();
    render(
        &AnchorElements { anchor },
        render_mode(always, loaded),
        tag,
        &anchor_id,
        Some(children),
        fallback,
    )
}
