use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting web landing page");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The browser has no config directory, so this resolves to the defaults.
    let config = use_context_provider(ui::load_site_config);

    rsx! {
        document::Title { "{config.brand.name}" }
        document::Link { rel: "stylesheet", href: ui::LANDING_CSS }
        Router::<Route> {}
    }
}
