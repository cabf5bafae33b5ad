use dioxus::prelude::*;

use crate::reload::JsonMap;

/// The page data partial reloads are merged into, keyed by prop name
pub type PartialProps = JsonMap;

pub static PAGE_PROPS: GlobalSignal<PartialProps> = Signal::global(PartialProps::new);

/// Merge a partial reload response into `target`.
///
/// Keys outside `only` (when non-empty) or inside `except` are ignored, so a server
/// that sends more than asked cannot clobber unrelated props. Returns the keys that
/// were written, in response order.
pub fn merge_partial_props(
    target: &mut PartialProps,
    incoming: PartialProps,
    only: &[String],
    except: &[String],
) -> Vec<String> {
    let mut updated = Vec::with_capacity(incoming.len());
    for (key, value) in incoming {
        if !only.is_empty() && !only.contains(&key) {
            log::debug!("merge_partial_props - ignoring unrequested key {key}");
            continue;
        }
        if except.contains(&key) {
            log::debug!("merge_partial_props - ignoring excluded key {key}");
            continue;
        }
        target.insert(key.clone(), value);
        updated.push(key);
    }
    updated
}

/// Read one prop from [`PAGE_PROPS`], subscribing the calling component to changes
pub fn read_page_prop(key: &str) -> Option<serde_json::Value> {
    PAGE_PROPS.read().get(key).cloned()
}
