use dioxus::prelude::*;

use crate::{components::section::Section, AppState};

struct FeedItem {
  headline: &'static str,
  summary: &'static str,
  age: &'static str,
  impact: &'static str,
}

const ITEMS: [FeedItem; 2] = [
  FeedItem {
    headline: "ETF flows push BTC to 6-week high",
    summary: "AI summary: Inflows into spot ETFs accelerated; derivatives funding remains neutral; traders price 60k–70k range.",
    age: "2m ago",
    impact: "High",
  },
  FeedItem {
    headline: "Debate poll shifts race in key state",
    summary: "AI summary: New poll shows statistically significant movement; markets reassess probability of outcome.",
    age: "14m ago",
    impact: "Medium",
  },
];

const SOURCES: [&str; 3] = ["News", "Social", "Platform"];

#[component]
pub fn Feed() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  let state = use_context::<AppState>();

  rsx! {
    document::Stylesheet {href: CSS},
    Section {
      title: "Live Feed",
      desc: "Real-time news from crypto, politics, sports, and prediction markets. Curated by AI.",
      div {
        class: "toolbar",
        for source in SOURCES {
          button { key: "{source}", class: "outline-button small", "{source}" }
        }
        div { class: "muted small push-right", "Most Recent" }
      }
      div {
        class: "feed-list",
        for item in ITEMS.iter() {
          div {
            key: "{item.headline}",
            class: "panel",
            div {
              class: "panel-row",
              div { class: "panel-title", "{item.headline}" }
              div { class: "muted small", "{item.age}" }
            }
            p { class: "panel-body", "{item.summary}" }
            div {
              class: "button-row",
              button {
                class: "outline-button small",
                onclick: move |_| state.navigate("/research"),
                "Open related markets"
              }
              span { class: "muted small", "Impact: {item.impact}" }
            }
          }
        }
      }
    }
  }
}
