use dioxus::prelude::*;
use realty::components::App as RealtyApp;

const MAIN_CSS: Asset = asset!("/assets/realty.css");

fn main() {
    // Cross-platform logger (web console + desktop stdout)
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Realty Desk")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 800.0))
                .with_min_inner_size(LogicalSize::new(640.0, 480.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! stylesheets do not load reliably on desktop
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/realty.css")} }
        }

        body { class: "rl-body",
            RealtyApp {}
        }
    }
}
