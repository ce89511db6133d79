//! Thin wrappers over the handful of browser APIs the portal touches.
//! Everything here is best-effort; a missing `window` (tests, SSR) is a no-op.

use std::cell::RefCell;

use crate::portal::{Destination, Theme};

#[cfg(feature = "web")]
use wasm_bindgen::{JsValue, prelude::Closure};

/// Global name the Google widget calls back into (`data-callback`).
pub const CREDENTIAL_CALLBACK: &str = "handleCredentialResponse";

/// Owns whatever is currently installed as a page-global handler. Installing
/// a new one hands back (and so drops) the old one.
pub struct HandlerSlot<T>(RefCell<Option<T>>);

impl<T> HandlerSlot<T> {
    pub const fn new() -> Self {
        Self(RefCell::new(None))
    }

    pub fn install(&self, handler: T) -> Option<T> {
        self.0.replace(Some(handler))
    }

    pub fn is_installed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl<T> Default for HandlerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "web")]
thread_local! {
    static CREDENTIAL_HANDLER: HandlerSlot<Closure<dyn Fn(JsValue)>> = const { HandlerSlot::new() };
}

/// Set `data-theme` on `<html>` so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "web")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if el.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("could not apply theme {theme}");
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Leave the page. Fire-and-forget.
pub fn navigate(dest: Destination) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(dest.href()).is_err() {
                log::warn!("navigation to {} failed", dest.href());
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = dest;
    }
}

/// Blocking notification, same as `window.alert`.
pub fn alert(msg: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(msg);
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = msg;
    }
}

/// Pull `credential` out of the object the sign-in widget hands its callback.
#[cfg(feature = "web")]
fn credential_of(response: &JsValue) -> String {
    js_sys::Reflect::get(response, &JsValue::from_str("credential"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Expose `f` on `window` under [`CREDENTIAL_CALLBACK`]. The closure is kept
/// alive in a thread-local slot; a later call replaces and frees the previous one.
pub fn register_credential_callback(f: impl Fn(String) + 'static) {
    #[cfg(feature = "web")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::<dyn Fn(JsValue)>::new(move |resp: JsValue| f(credential_of(&resp)));
        let installed = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(CREDENTIAL_CALLBACK),
            cb.as_ref(),
        );
        match installed {
            Ok(true) => {
                // window now points at the new closure, the old one can go
                CREDENTIAL_HANDLER.with(|slot| drop(slot.install(cb)));
            }
            _ => log::warn!("could not register {CREDENTIAL_CALLBACK}"),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = f;
    }
}

/// Drive the already-loaded GSI library directly: the script only scans the
/// DOM once at load time, and the login form is mounted later. Returns false
/// when `google.accounts.id` is not there (script blocked or still loading).
#[cfg(feature = "web")]
pub fn render_google_button(client_id: &str, host: &web_sys::HtmlElement) -> bool {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let window: &JsValue = &window;
    let lookup = |target: &JsValue, key: &str| {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    };
    let Some(id_api) = lookup(window, "google")
        .and_then(|g| lookup(&g, "accounts"))
        .and_then(|a| lookup(&a, "id"))
    else {
        return false;
    };
    let method = |name: &str| lookup(&id_api, name).and_then(|f| f.dyn_into::<Function>().ok());
    let (Some(initialize), Some(render)) = (method("initialize"), method("renderButton")) else {
        return false;
    };
    let Some(callback) = lookup(window, CREDENTIAL_CALLBACK) else {
        return false;
    };

    let set = |obj: &Object, key: &str, value: &JsValue| {
        let _ = Reflect::set(obj, &JsValue::from_str(key), value);
    };

    let config = Object::new();
    set(&config, "client_id", &JsValue::from_str(client_id));
    set(&config, "callback", &callback);

    let options = Object::new();
    for (key, value) in [("type", "standard"), ("size", "large"), ("text", "sign_in_with"), ("shape", "pill")] {
        set(&options, key, &JsValue::from_str(value));
    }

    let ok = initialize.call1(&id_api, &config).is_ok()
        && render.call2(&id_api, host, &options).is_ok();
    if !ok {
        log::warn!("google sign-in widget refused to render");
    }
    ok
}
