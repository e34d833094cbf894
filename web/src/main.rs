use dioxus::prelude::*;

mod auth;
mod components;
mod dashboard;
mod index;
mod not_found;
mod stores;
mod style;

use auth::AuthView;
use components::Toaster;
use dashboard::DashboardView;
use index::IndexView;
use not_found::NotFoundView;

pub use stores::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    IndexView {},
    #[route("/auth")]
    AuthView {},
    #[route("/dashboard")]
    DashboardView {},
    // the disease model pages are hosted elsewhere and land here
    #[route("/:..segments")]
    NotFoundView { segments: Vec<String> },
}

impl Route {
    fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::NotFoundView {
            segments: Vec::new(),
        })
    }
}

#[component]
fn App() -> Element {
    use_session_provider();

    rsx! {
        Router::<Route> {}
        Toaster {}
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        println!("logger init failed: {e}");
    }
    launch(App);
}
