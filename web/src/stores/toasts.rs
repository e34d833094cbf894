use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use diagnostix_api::prelude::*;

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

const TOAST_DURATION_MS: u32 = 5_000;

/// Show a toast and schedule its removal. The timer outlives the calling
/// component so navigating away doesn't strand the toast.
pub fn show_toast(toast: Toast) {
    let id = toast.id;
    push_toast(&mut TOASTS.write(), toast);
    spawn_forever(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        dismiss_toast(id);
    });
}

pub fn dismiss_toast(id: u64) {
    remove_toast(&mut TOASTS.write(), id);
}
