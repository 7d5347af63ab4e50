use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;

/// Opens the browser print dialog for the current page.
#[component]
pub fn PrintButton() -> Element {
    rsx! {
        button {
            class: "action-btn print-btn",
            onclick: move |_| {
                if let Some(window) = web_sys::window() {
                    if let Err(err) = window.print() {
                        tracing::warn!("print dialog failed: {err:?}");
                    }
                }
            },
            "Print CV"
        }
    }
}

/// Shows the contact e-mail and copies it to the clipboard on click, with a
/// transient confirmation. Clipboard failures are logged, never surfaced.
#[component]
pub fn CopyEmailButton(email: String) -> Element {
    let mut copied = use_signal(|| false);
    let shown_email = email.clone();

    rsx! {
        button {
            class: "action-btn copy-email-btn",
            onclick: move |_| {
                let email = email.clone();
                spawn(async move {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let clipboard = window.navigator().clipboard();
                    match JsFuture::from(clipboard.write_text(&email)).await {
                        Ok(_) => {
                            copied.set(true);
                            TimeoutFuture::new(1500).await;
                            copied.set(false);
                        }
                        Err(err) => tracing::warn!("clipboard copy failed: {err:?}"),
                    }
                });
            },
            if copied() {
                "Copied!"
            } else {
                "{shown_email}"
            }
        }
    }
}
