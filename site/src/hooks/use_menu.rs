use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::menu::MenuState;

/// Handle to the responsive menu state shared through context.
#[derive(Clone, Copy)]
pub struct MenuHandle {
    pub state: Signal<MenuState>,
}

impl MenuHandle {
    pub fn open(&mut self) {
        self.state.write().open();
    }

    pub fn close(&mut self) {
        self.state.write().close();
    }

    pub fn resize_to_viewport(&mut self) {
        self.state.write().resize(current_viewport_width());
    }
}

/// Menu state seeded from the current viewport, re-evaluated on every
/// window resize. The resize listener lives for the rest of the page view.
pub fn use_menu() -> MenuHandle {
    let state = use_signal(|| MenuState::new(current_viewport_width()));
    let handle = MenuHandle { state };

    use_hook(|| {
        if let Some(window) = web_sys::window() {
            let mut handle = handle;
            let closure = Closure::<dyn FnMut()>::new(move || handle.resize_to_viewport());
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    handle
}

/// Current window inner width, defaulting to desktop when unavailable.
pub fn current_viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width as u32)
        .unwrap_or(1024)
}
