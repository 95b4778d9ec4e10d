#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and browser backends.
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use js_sys::Reflect;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MediaQueryList, MediaQueryListEvent};

use kotomare_theme::{
    ColorSchemeSource, EngineConfig, MemoryStorage, RecordingEnvironment, StorageError,
    StorageResult, ThemeEnvironment, ThemeMode, ThemeStorage,
};

use crate::bridge::ContextCore;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn console_call(method: &str, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(func) = Reflect::get(&console, &method.into()) else {
        return;
    };
    let Ok(func) = func.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = func.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_call("error", &msg);
        }));
    });
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn parse_json(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap_or(JsValue::NULL)
}

// ── Logging ─────────────────────────────────────────────────────────────

/// Routes formatted log lines to `console.log`/`warn`/`error` by level.
#[derive(Debug, Clone, Copy, Default)]
struct ConsoleMakeWriter;

struct ConsoleWriter {
    method: &'static str,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            console_call(self.method, line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: "log",
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        let method = match *meta.level() {
            tracing::Level::ERROR => "error",
            tracing::Level::WARN => "warn",
            _ => "log",
        };
        ConsoleWriter {
            method,
            buf: Vec::new(),
        }
    }
}

/// Install the panic hook and a console tracing subscriber.
///
/// `verbose` lowers the level from `info` to `debug`. Safe to call more
/// than once; only the first subscriber sticks.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(verbose: bool) {
    install_panic_hook();
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
}

// ── Backends ────────────────────────────────────────────────────────────

/// `window.localStorage`.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// `None` when storage is disabled (privacy mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(inner)) => Some(Self { inner }),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %js_error_message(&err), "localStorage unavailable");
                None
            }
        }
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))
    }
}

/// Writes variables on `document.documentElement` and swaps its
/// `light`/`dark` class.
pub struct DocumentEnvironment {
    root: HtmlElement,
}

impl DocumentEnvironment {
    pub fn open() -> Option<Self> {
        let root = web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { root })
    }
}

impl ThemeEnvironment for DocumentEnvironment {
    fn set_variable(&mut self, name: &str, value: &str) {
        if let Err(err) = self.root.style().set_property(name, value) {
            tracing::debug!(name, error = %js_error_message(&err), "failed to set CSS variable");
        }
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        let classes = self.root.class_list();
        let _ = classes.remove_1(mode.toggled().as_str());
        let _ = classes.add_1(mode.as_str());
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQueryPreference {
    query: Option<MediaQueryList>,
}

impl MediaQueryPreference {
    pub fn open() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

impl ColorSchemeSource for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }
}

// ── ThemeContext ────────────────────────────────────────────────────────

type BrowserCore = ContextCore<Box<dyn ThemeStorage>, Box<dyn ThemeEnvironment>>;

struct PreferenceListener {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl PreferenceListener {
    fn detach(&self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// The theme context exposed to the page.
///
/// Construct once at startup. Theme values are returned as plain JS objects.
#[wasm_bindgen]
pub struct ThemeContext {
    core: Rc<RefCell<BrowserCore>>,
    listener: Option<PreferenceListener>,
}

#[wasm_bindgen]
impl ThemeContext {
    /// Initialize from `localStorage` and the OS preference, apply the
    /// theme to the document, and start following preference changes.
    ///
    /// `config_json` optionally overrides [`EngineConfig`] fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> ThemeContext {
        install_panic_hook();
        let config = match config_json.as_deref() {
            Some(json) => EngineConfig::from_json_str(json).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "invalid ThemeContext config, using defaults");
                EngineConfig::default()
            }),
            None => EngineConfig::default(),
        };

        let storage: Box<dyn ThemeStorage> = match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                tracing::warn!("no localStorage, theme choice will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        let environment: Box<dyn ThemeEnvironment> = match DocumentEnvironment::open() {
            Some(env) => Box::new(env),
            None => {
                tracing::warn!("no document root, theme variables are not applied");
                Box::new(RecordingEnvironment::new())
            }
        };
        let preference = MediaQueryPreference::open();

        let core = Rc::new(RefCell::new(ContextCore::new(
            config,
            storage,
            environment,
            &preference,
        )));
        let listener = preference
            .query
            .and_then(|query| Self::attach_listener(&core, query));
        Self { core, listener }
    }

    fn attach_listener(
        core: &Rc<RefCell<BrowserCore>>,
        query: MediaQueryList,
    ) -> Option<PreferenceListener> {
        let weak = Rc::downgrade(core);
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| {
                let Some(core) = weak.upgrade() else {
                    return;
                };
                let Ok(mut core) = core.try_borrow_mut() else {
                    tracing::debug!("theme context busy, dropping preference change");
                    return;
                };
                core.preference_changed(event.matches());
            },
        );
        match query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(PreferenceListener { query, callback }),
            Err(err) => {
                tracing::warn!(error = %js_error_message(&err), "cannot watch prefers-color-scheme");
                None
            }
        }
    }

    /// Active theme as `{id, name, mode, colors}`.
    pub fn theme(&self) -> JsValue {
        parse_json(&self.core.borrow().theme_json())
    }

    /// `"light"` or `"dark"`.
    pub fn mode(&self) -> String {
        self.core.borrow().mode().to_string()
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, id: &str) -> bool {
        self.core.borrow_mut().set_theme(id)
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> bool {
        self.core.borrow_mut().set_mode(mode)
    }

    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&self) {
        self.core.borrow_mut().toggle_mode();
    }

    /// The custom draft `{mode, colors}`, or `null`.
    #[wasm_bindgen(js_name = customTheme)]
    pub fn custom_theme(&self) -> JsValue {
        parse_json(&self.core.borrow().custom_theme_json())
    }

    /// Replace the custom draft with a `{mode, colors}` object, or clear it
    /// with `null`. Does not change the active theme.
    #[wasm_bindgen(js_name = setCustomTheme)]
    pub fn set_custom_theme(&self, config: JsValue) -> bool {
        if config.is_null() || config.is_undefined() {
            return self.core.borrow_mut().set_custom_theme(None);
        }
        let json = match js_sys::JSON::stringify(&config) {
            Ok(json) => String::from(json),
            Err(err) => {
                tracing::warn!(error = %js_error_message(&err), "setCustomTheme argument is not serializable");
                return false;
            }
        };
        self.core.borrow_mut().set_custom_theme(Some(&json))
    }

    #[wasm_bindgen(js_name = applyCustomTheme)]
    pub fn apply_custom_theme(&self) -> bool {
        self.core.borrow_mut().apply_custom_theme()
    }

    #[wasm_bindgen(js_name = isCustomTheme)]
    pub fn is_custom_theme(&self) -> bool {
        self.core.borrow().is_custom_theme()
    }

    /// `{theme, mode, customTheme, isCustomTheme}` in one object.
    pub fn snapshot(&self) -> JsValue {
        parse_json(&self.core.borrow().snapshot_json())
    }

    /// Stop following OS preference changes.
    pub fn dispose(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.detach();
        }
    }
}

impl Drop for ThemeContext {
    fn drop(&mut self) {
        self.dispose();
    }
}
