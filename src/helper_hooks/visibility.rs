use dioxus::prelude::*;

use crate::{
    utils::CheapClone,
    visibility::{IntersectionEntry, Observation, TriggerMargin, TriggerMode, VisibilityWatcher},
};

/// Handle a component hands to its anchor element so the observation can start
/// once the element is actually mounted.
///
/// Every mount counts: a replaced anchor element gets a fresh observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRef {
    mounts: Signal<u64>,
}
impl AnchorRef {
    /// To be called from the anchor's `onmounted`
    pub fn attach(self) {
        let mut mounts = self.mounts;
        *mounts.write() += 1;
        log::debug!("AnchorRef - mounted (#{})", mounts.peek());
    }
}

/// Registry key of the browser observer bound to one mount of an anchor
#[derive(Debug, Clone)]
struct ObservationKey {
    anchor_id: CheapClone<str>,
    generation: u64,
}
impl core::fmt::Display for ObservationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.anchor_id, self.generation)
    }
}

/// The browser-side `IntersectionObserver` registered for one anchor mount
#[derive(Debug)]
struct EvalObservation {
    key: ObservationKey,
}
impl Observation for EvalObservation {
    fn disconnect(&mut self) {
        document::eval(&disconnect_script(&self.key));
    }
}

/// Disconnects every observer registered for any mount of `anchor_id`
fn disconnect_anchor_js(anchor_id: &str) -> String {
    format!(
        r#"
        window.__whenVisible = window.__whenVisible || {{}};
        for (const key of Object.keys(window.__whenVisible)) {{
            if (key.startsWith("{anchor_id}/")) {{
                window.__whenVisible[key].disconnect();
                delete window.__whenVisible[key];
            }}
        }}
    "#
    )
}

fn observe_script(key: &ObservationKey, margin: TriggerMargin) -> String {
    let root_margin = margin.root_margin();
    let anchor_id = &key.anchor_id;
    let previous = disconnect_anchor_js(anchor_id);
    format!(
        r#"
        {previous}
        const anchor = document.getElementById("{anchor_id}");
        if (anchor) {{
            const observer = new IntersectionObserver((entries) => {{
                dioxus.send(entries.map((entry) => ({{
                    isIntersecting: entry.isIntersecting,
                }})));
            }}, {{ rootMargin: "{root_margin}" }});
            window.__whenVisible["{key}"] = observer;
            observer.observe(anchor);
        }}
        await new Promise(() => {{}});
    "#
    )
}

fn disconnect_script(key: &ObservationKey) -> String {
    format!(
        r#"
        if (window.__whenVisible && window.__whenVisible["{key}"]) {{
            window.__whenVisible["{key}"].disconnect();
            delete window.__whenVisible["{key}"];
        }}
    "#
    )
}

async fn observe<F: Fn()>(
    key: ObservationKey,
    margin: TriggerMargin,
    mode: TriggerMode,
    on_visible: F,
) {
    let mut watcher = VisibilityWatcher::new(mode);
    watcher.observe(Some(EvalObservation { key: key.clone() }));

    let mut eval = document::eval(&observe_script(&key, margin));
    log::debug!("use_visibility_observer - observing {key} with margin {margin}");

    while watcher.is_observing() {
        let entries = match eval.recv::<Vec<IntersectionEntry>>().await {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("use_visibility_observer - observer channel for {key} failed: {e:?}");
                break;
            }
        };
        if watcher.deliver(&entries) {
            on_visible();
        }
    }

    watcher.disconnect();
    log::debug!("use_visibility_observer - stopped observing {key}");
}

/// Watch the element with id `anchor_id` and call `on_visible` on every
/// not-visible to visible edge (only the first one in [`TriggerMode::Once`]).
///
/// Nothing is observed until [`AnchorRef::attach`] is called. Each further call
/// tears the running observation down and starts one on the newly mounted element.
/// `on_visible` is captured on the first render. The observer is torn down when
/// the component drops.
pub fn use_visibility_observer<F>(
    anchor_id: CheapClone<str>,
    margin: TriggerMargin,
    mode: TriggerMode,
    on_visible: F,
) -> AnchorRef
where
    F: Fn() + Clone + 'static,
{
    let mounts = use_signal(|| 0);
    let mut running: Signal<Option<Task>> = use_signal(|| None);

    {
        let anchor_id = anchor_id.clone();
        use_effect(move || {
            let generation = mounts();
            if generation == 0 {
                return;
            }
            if let Some(previous) = running.take() {
                log::debug!("use_visibility_observer - {anchor_id} remounted, restarting");
                previous.cancel();
            }
            let key = ObservationKey {
                anchor_id: anchor_id.clone(),
                generation,
            };
            let task = spawn(observe(key, margin, mode, on_visible.clone()));
            running.set(Some(task));
        });
    }

    use_drop(move || {
        log::debug!("use_visibility_observer - {anchor_id} dropped");
        document::eval(&disconnect_anchor_js(&anchor_id));
    });

    AnchorRef { mounts }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn key(generation: u64) -> ObservationKey {
        ObservationKey {
            anchor_id: CheapClone::from("when-visible-1"),
            generation,
        }
    }

    #[test]
    fn observe_script_targets_the_anchor_with_the_margin() {
        let script = observe_script(&key(1), TriggerMargin::new(200.0));
        assert!(script.contains(r#"document.getElementById("when-visible-1")"#));
        assert!(script.contains(r#"window.__whenVisible["when-visible-1/1"] = observer"#));
        assert!(script.contains(r#"rootMargin: "200px""#));
        assert!(script.contains("dioxus.send"));
    }

    #[test]
    fn a_new_mount_replaces_the_observers_of_earlier_mounts() {
        let script = observe_script(&key(2), TriggerMargin::default());
        let purge = script
            .find(r#"key.startsWith("when-visible-1/")"#)
            .unwrap();
        let register = script.find(r#"window.__whenVisible["when-visible-1/2"]"#).unwrap();
        assert!(purge < register);
    }

    #[test]
    fn disconnect_script_only_clears_its_own_mount() {
        let script = disconnect_script(&key(1));
        assert!(script.contains(r#"window.__whenVisible["when-visible-1/1"].disconnect()"#));
        assert!(script.contains(r#"delete window.__whenVisible["when-visible-1/1"]"#));
        assert!(!script.contains("when-visible-1/2"));
    }

    #[test]
    fn every_mount_starts_a_new_generation() {
        fn app(seen: Rc<RefCell<Vec<u64>>>) -> Element {
            let mounts = use_signal(|| 0);
            use_hook(|| {
                let anchor = AnchorRef { mounts };
                anchor.attach();
                seen.borrow_mut().push(*mounts.peek());
                // the element was replaced: mounted again
                anchor.attach();
                seen.borrow_mut().push(*mounts.peek());
            });
            rsx! {}
        }

        let seen: Rc<RefCell<Vec<u64>>> = Rc::default();
        let mut dom = VirtualDom::new_with_props(app, seen.clone());
        dom.rebuild_in_place();
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}
