use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

// Module Declarations
mod components;
mod config;
mod fragment_client;
mod hooks;
mod menu;
mod nav;
mod pages;
mod sections;

use pages::{Cv, Home, Portfolio};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/cv.html")]
    Cv {},
    #[route("/portfolio.html")]
    Portfolio {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
