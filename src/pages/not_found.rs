use dioxus::prelude::*;

use crate::{components::section::Section, AppState};

#[component]
pub fn NotFound() -> Element {
  let state = use_context::<AppState>();

  rsx! {
    Section {
      title: "Page not found",
      p { class: "prose", "The page you requested does not exist." }
      button {
        class: "cta-button",
        onclick: move |_| state.navigate("/"),
        "Go Home"
      }
    }
  }
}
