use dioxus::prelude::*;

use crate::AppState;

#[component]
pub fn SearchModal() -> Element {
  static CSS: Asset = asset!("/assets/search.css");
  let state = use_context::<AppState>();
  let mut search = state.search;

  let query = search.read().query().to_string();
  let results = search.read().results();

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "search-modal",
      role: "dialog",
      "aria-modal": "true",
      div {
        class: "search-backdrop",
        onclick: move |_| state.close_search(),
      }
      div {
        class: "search-panel",
        div {
          class: "search-input-row",
          input {
            autofocus: true,
            value: "{query}",
            placeholder: "Search markets, news, symbols",
            "aria-label": "Global search",
            oninput: move |evt| search.write().set_query(evt.value()),
          }
        }
        div {
          class: "search-results",
          if results.is_empty() {
            div { class: "search-empty", "No results." }
          } else {
            for (i, entry) in results.into_iter().enumerate() {
              button {
                key: "{i}",
                class: "search-result",
                onclick: move |_| state.select(entry),
                div { class: "search-group", "{entry.group}" }
                div { class: "search-title", "{entry.title}" }
              }
            }
          }
        }
      }
    }
  }
}
