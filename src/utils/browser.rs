use dioxus::logger::tracing::warn;
use js_sys::wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use super::{
  config::{join_base, strip_base},
  error::AppError,
  history::{History, Scroller, Subscription},
  shortcut::{overlay_command, OverlayCommand}
};

fn js_error(e: JsValue) -> AppError {
  AppError::WasmError(format!("{:?}", e))
}

fn browser_window() -> Result<Window, AppError> {
  window().ok_or_else(|| AppError::WasmError("global window should exist!".to_string()))
}

/// A window event listener that is removed again when dropped.
pub struct WindowListener {
  window: Window,
  event: &'static str,
  callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
  pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, AppError> {
    let window = browser_window()?;
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    window
      .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
      .map_err(js_error)?;
    Ok(Self { window, event, callback })
  }
}

impl Drop for WindowListener {
  fn drop(&mut self) {
    if let Err(e) = self.window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()) {
      warn!("failed to detach {} listener: {:?}", self.event, e);
    }
  }
}

/// `window.history` scoped to the configured base path.
#[derive(Debug, Clone, Default)]
pub struct BrowserHistory {
  base: String,
}

impl BrowserHistory {
  pub fn new(base: impl Into<String>) -> Self {
    Self { base: base.into() }
  }
}

impl History for BrowserHistory {
  fn read(&self) -> String {
    let pathname = browser_window().and_then(|w| w.location().pathname().map_err(js_error));
    match pathname {
      Ok(pathname) => strip_base(&self.base, &pathname),
      Err(e) => {
        warn!("could not read location, assuming root: {}", e);
        "/".to_string()
      }
    }
  }

  fn push(&self, path: &str) -> Result<(), AppError> {
    let history = browser_window()?.history().map_err(js_error)?;
    let url = join_base(&self.base, path);
    history
      .push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
      .map_err(|e| AppError::HistoryError(format!("{:?}", e)))
  }

  fn subscribe(&self, mut on_change: Box<dyn FnMut()>) -> Result<Subscription, AppError> {
    let listener = WindowListener::new("popstate", move |_| on_change())?;
    Ok(Subscription::new(move || drop(listener)))
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroller;

impl Scroller for BrowserScroller {
  fn scroll_to_top(&self) {
    let Ok(window) = browser_window() else { return };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
  }
}

/// Vertical scroll offset of the page, 0 when unknown.
pub fn scroll_offset() -> f64 {
  browser_window().and_then(|w| w.scroll_y().map_err(js_error)).unwrap_or(0.0)
}

pub fn current_year() -> u32 {
  js_sys::Date::new_0().get_full_year()
}

/// Routes global keydowns through [`overlay_command`].
pub fn listen_for_shortcuts(mut handler: impl FnMut(OverlayCommand) + 'static) -> Result<WindowListener, AppError> {
  WindowListener::new("keydown", move |event: Event| {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return };
    if let Some(command) = overlay_command(&key_event.key(), key_event.meta_key(), key_event.ctrl_key()) {
      if command.prevents_default() {
        key_event.prevent_default();
      }
      handler(command);
    }
  })
}
