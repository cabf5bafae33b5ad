use dioxus::prelude::*;
use when_visible::prelude::*;

#[component]
fn Skeleton(label: String) -> Element {
    rsx! {
        div { class: "skeleton h-24 w-full", "Loading {label}..." }
    }
}

/// Shows one page prop as loaded into `PAGE_PROPS`
#[component]
fn PropCard(name: String) -> Element {
    let Some(prop) = read_page_prop(&name) else {
        return rsx! {
            div { class: "card", "{name}: no data" }
        };
    };
    let revision = prop.get("revision").cloned().unwrap_or_default();
    let items: Vec<String> = prop
        .get("items")
        .and_then(|items| items.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "card",
            h2 { "{name} (revision {revision})" }
            ul {
                for item in items {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}

#[component]
fn Filler(paragraphs: usize) -> Element {
    rsx! {
        for i in 0..paragraphs {
            p { key: "{i}", class: "my-8",
                "Scroll down: the sections below only fetch their data once they come into view."
            }
        }
    }
}

#[component]
pub fn DemoPage() -> Element {
    let activity = use_hook(|| {
        ReloadOptions::new()
            .with_only(["activity"])
            .with_header("X-Demo", "when-visible")
            .on_finish(|event| log::info!("activity reload finished: {:?}", event.outcome))
    });

    rsx! {
        main { class: "p-4",
            h1 { "when-visible demo" }
            Filler { paragraphs: 20 }

            WhenVisible {
                data: DataKeys::from("stats"),
                buffer: 200.0,
                fallback: rsx! {
                    Skeleton { label: "stats" }
                },
                PropCard { name: "stats" }
            }

            Filler { paragraphs: 20 }

            WhenVisible {
                data: DataKeys::from(["comments", "reactions"]),
                tag: WrapperTag::Section,
                always: true,
                release_guard_on_error: true,
                fallback: rsx! {
                    Skeleton { label: "comments" }
                },
                PropCard { name: "comments" }
                PropCard { name: "reactions" }
            }

            Filler { paragraphs: 20 }

            WhenVisible {
                params: activity,
                fallback: rsx! {
                    Skeleton { label: "activity" }
                },
                PropCard { name: "activity" }
            }
        }
    }
}
