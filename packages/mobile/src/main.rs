use dioxus::logger::tracing::Level;
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
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::load_site_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::LANDING_CSS }
        Router::<Route> {}
    }
}
