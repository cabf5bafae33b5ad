#![windows_subsystem = "windows"]
mod demo;

use dioxus::prelude::*;
use when_visible::prelude::*;

use demo::{config::DemoConfig, transport::SimulatedTransport, views::DemoPage};

static TITLE: &'static str = "when-visible demo";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let config = use_hook(DemoConfig::from_env);
    provide_reload(use_reload_service(SimulatedTransport::new(config)));

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        div { id: "app", class: "text-base", DemoPage {} }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 900))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
