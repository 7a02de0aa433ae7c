//! Browser binding for the theme controller.
//!
//! Implements [`ThemeSurface`] over `document.body` and the toggle's `<img>`,
//! [`PreferenceStore`] over `localStorage`, and wires the controller to the
//! page once the document has been parsed. Requires a browser environment.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, Storage, Window};

use crate::config::ToggleConfig;
use crate::consts::{CONFIG_ATTR, ICON_BASE_ATTR};
use crate::controller::{PreferenceStore, ThemeController, ThemeSurface, mount};
use crate::error::ThemeError;

fn dom_err(context: &'static str) -> impl Fn(JsValue) -> ThemeError {
    move |e| ThemeError::Dom(format!("{context}: {e:?}"))
}

fn storage_err(e: JsValue) -> ThemeError {
    ThemeError::Storage(format!("{e:?}"))
}

/// Body class flag plus the toggle icon.
pub struct BodySurface {
    body: HtmlElement,
    icon: Option<Element>,
    dark_class: String,
}

impl BodySurface {
    pub fn new(body: HtmlElement, icon: Option<Element>, dark_class: impl Into<String>) -> Self {
        Self { body, icon, dark_class: dark_class.into() }
    }
}

impl ThemeSurface for BodySurface {
    fn is_dark(&self) -> bool {
        self.body.class_list().contains(&self.dark_class)
    }

    fn add_dark(&mut self) -> Result<(), ThemeError> {
        self.body.class_list().add_1(&self.dark_class).map_err(dom_err("classList.add"))
    }

    fn toggle_dark(&mut self) -> Result<bool, ThemeError> {
        self.body.class_list().toggle(&self.dark_class).map_err(dom_err("classList.toggle"))
    }

    fn set_icon_src(&mut self, src: &str) -> Result<(), ThemeError> {
        // Markup without an <img> still gets the class flag and persistence.
        let Some(icon) = &self.icon else {
            return Ok(());
        };
        icon.set_attribute("src", src).map_err(dom_err("img.src"))
    }
}

/// `localStorage` for the page origin, if the browser exposes it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("theme: localStorage access denied: {e:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(storage_err)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(key, value).map_err(storage_err)
    }
}

fn window_and_document() -> Result<(Window, Document), ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".into()))?;
    Ok((window, document))
}

/// Bind the toggle once the document's structure is available.
///
/// While the document is still loading this defers to `DOMContentLoaded`;
/// otherwise it binds immediately.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when there is no window or document, or when
/// binding fails on an already parsed document. Failures inside a deferred
/// bind are logged instead.
pub fn install() -> Result<(), ThemeError> {
    let (_, document) = window_and_document()?;

    if document.ready_state() != "loading" {
        return bind();
    }

    let deferred = Closure::once_into_js(move || {
        if let Err(e) = bind() {
            log::warn!("theme: toggle not installed: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())
        .map_err(dom_err("addEventListener(DOMContentLoaded)"))
}

/// Restore the stored theme and attach the click handler.
///
/// A page without the toggle control is left untouched.
fn bind() -> Result<(), ThemeError> {
    let (window, document) = window_and_document()?;
    let body = document.body().ok_or_else(|| ThemeError::Dom("no body".into()))?;
    let config = ToggleConfig::from_page(body.get_attribute(CONFIG_ATTR).as_deref());

    let found = document.get_element_by_id(&config.toggle_id);
    if found.is_none() {
        log::debug!("theme: no #{} on this page", config.toggle_id);
    }

    let mounted = mount(found, |toggle| {
        let icon = match toggle.query_selector("img") {
            Ok(icon) => icon,
            Err(e) => {
                log::warn!("theme: toggle icon lookup failed: {e:?}");
                None
            }
        };
        let config = config.with_markup_icon_base(toggle.get_attribute(ICON_BASE_ATTR).as_deref());
        let surface = BodySurface::new(body, icon, config.dark_class.clone());
        ThemeController::new(config, surface, LocalStore::from_window(&window))
    });
    let Some((toggle, mut controller)) = mounted else {
        return Ok(());
    };

    let on_click = Closure::wrap(Box::new(move |_ev: Event| {
        controller.toggle();
    }) as Box<dyn FnMut(Event)>);

    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_err("addEventListener(click)"))?;

    // Handler lives for the page lifetime.
    on_click.forget();
    Ok(())
}
