use dioxus::prelude::*;

#[component]
pub fn Section(title: String, desc: Option<String>, children: Element) -> Element {
  rsx! {
    section {
      class: "section",
      div {
        class: "section-header",
        h2 { "{title}" }
        if let Some(desc) = desc {
          p { class: "section-desc", "{desc}" }
        }
      }
      {children}
    }
  }
}

/// Clickable feature tile.
#[component]
pub fn Card(title: String, desc: String, onclick: EventHandler<MouseEvent>) -> Element {
  rsx! {
    button {
      class: "card",
      "aria-label": "View {title}",
      onclick: move |evt| onclick.call(evt),
      div { class: "card-title", "{title}" }
      div { class: "card-desc", "{desc}" }
      div { class: "card-action", "View ›" }
    }
  }
}

/// Grey box standing in for a widget that is not built yet.
#[component]
pub fn Placeholder(label: String, variant: String) -> Element {
  rsx! {
    div {
      class: "placeholder {variant}",
      "{label}"
    }
  }
}
