use std::rc::Rc;
use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
  utils::{browser::{current_year, scroll_offset, WindowListener}, router::{LEGAL_NAV, PRIMARY_NAV}},
  AppState
};

const SCROLL_THRESHOLD: f64 = 8.0;

#[component]
pub fn Template(children: Element) -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    main { {children} }
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  let state = use_context::<AppState>();
  let mut menu_open = use_signal(|| false);
  let scrolled = use_signal(|| scroll_offset() > SCROLL_THRESHOLD);

  use_hook(move || {
    let mut scrolled = scrolled;
    let listener = WindowListener::new("scroll", move |_| {
      let now = scroll_offset() > SCROLL_THRESHOLD;
      if *scrolled.peek() != now {
        scrolled.set(now);
      }
    });
    match listener {
      Ok(listener) => Some(Rc::new(listener)),
      Err(e) => {
        warn!("header will not shrink on scroll: {}", e);
        None
      }
    }
  });

  let mut handle_nav = move |path: &'static str| {
    menu_open.set(false);
    state.navigate(path);
  };

  let header_class = if scrolled() { "site-header scrolled" } else { "site-header" };

  rsx! {
    header {
      class: "{header_class}",
      "aria-label": "Primary",
      div {
        class: "nav-container",
        button {
          class: "logo",
          "aria-label": "Go to home",
          onclick: move |_| handle_nav("/"),
          "Polyfacts"
        }
        nav {
          class: "nav-links",
          "aria-label": "Main navigation",
          for item in PRIMARY_NAV {
            button {
              key: "{item.path}",
              class: "nav-link",
              onclick: move |_| handle_nav(item.path),
              "{item.label}"
            }
          }
        }
        div {
          class: "nav-actions",
          button {
            class: "search-button",
            "aria-label": "Open search (Cmd/Ctrl+K)",
            onclick: move |_| state.open_search(),
            span { "Search" }
            span { class: "shortcut-hint", "⌘K" }
          }
          button {
            class: "outline-button",
            "aria-label": "Connect Wallet",
            "Connect"
          }
          button {
            class: "cta-button",
            "aria-label": "Launch App",
            onclick: move |_| handle_nav("/trading"),
            "Launch App →"
          }
        }
        div {
          class: "mobile-actions",
          button {
            class: "icon-button",
            "aria-label": "Open search",
            onclick: move |_| state.open_search(),
            "⌕"
          }
          button {
            class: "icon-button menu-button",
            "aria-label": "Toggle menu",
            onclick: move |_| menu_open.set(!menu_open()),
            if menu_open() { "✕" } else { "☰" }
          }
        }
      }
      if menu_open() {
        nav {
          class: "mobile-drawer",
          "aria-label": "Mobile navigation",
          for item in PRIMARY_NAV {
            button {
              key: "{item.path}",
              class: "drawer-link",
              onclick: move |_| handle_nav(item.path),
              "{item.label}"
            }
          }
          div {
            class: "drawer-actions",
            button { class: "outline-button", "Connect Wallet" }
            button {
              class: "cta-button",
              onclick: move |_| handle_nav("/trading"),
              "Launch App"
            }
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  let state = use_context::<AppState>();
  let year = current_year();

  rsx! {
    footer {
      div {
        class: "footer-container",
        div {
          class: "footer-brand",
          div { class: "footer-logo", "Polyfacts" }
          p { "AI-powered market intelligence for prediction markets." }
        }
        div {
          class: "footer-column",
          div { class: "footer-heading", "Product" }
          for item in PRIMARY_NAV {
            button {
              key: "{item.path}",
              class: "footer-link",
              onclick: move |_| state.navigate(item.path),
              "{item.label}"
            }
          }
        }
        div {
          class: "footer-column",
          div { class: "footer-heading", "Legal" }
          for item in LEGAL_NAV {
            button {
              key: "{item.path}",
              class: "footer-link",
              onclick: move |_| state.navigate(item.path),
              "{item.label}"
            }
          }
        }
        div {
          class: "footer-column",
          div { class: "footer-heading", "Stay updated" }
          div {
            class: "newsletter",
            input {
              "aria-label": "Email",
              placeholder: "Email address",
            }
            button { class: "cta-button", "Subscribe" }
          }
          p { class: "footer-note", "We keep it concise. No spam." }
        }
      }
      div {
        class: "copyright",
        "© {year} Polyfacts. Research and information. Not financial advice."
      }
    }
  }
}
