use dioxus::prelude::*;
use diagnostix_api::prelude::*;

use super::components::Auth;
use super::components::Header;
use crate::Route;
use crate::use_session;

#[component]
pub fn AuthView() -> Element {
    let navigator = use_navigator();
    let state = use_session().state;

    // signed in visitors, including ones who just signed in here, move on
    use_effect(move || {
        if let Some(path) = auth_redirect(&state.read()) {
            navigator.replace(Route::from_path(path));
        }
    });

    rsx! {
        Header {},
        Auth {}
    }
}
