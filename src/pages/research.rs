use dioxus::prelude::*;

use crate::{components::section::Section, AppState};

struct MarketSample {
  title: &'static str,
  platform: &'static str,
  odds: &'static str,
  fair: &'static str,
}

const SAMPLES: [MarketSample; 3] = [
  MarketSample { title: "BTC > $80k by Dec 31", platform: "Polymarket", odds: "58%", fair: "61%" },
  MarketSample { title: "US Election Winner 2024", platform: "PredictIt", odds: "52%", fair: "55%" },
  MarketSample { title: "ETH ETF approved by Q4", platform: "Manifold", odds: "47%", fair: "49%" },
];

#[component]
pub fn Research() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  let state = use_context::<AppState>();

  rsx! {
    document::Stylesheet {href: CSS},
    Section {
      title: "Research",
      desc: "Get deep AI-powered research on any prediction market. Analyze sentiment, risk, and confidence.",
      div {
        class: "toolbar",
        input {
          class: "text-input",
          "aria-label": "Search markets",
          placeholder: "Search markets",
        }
        button { class: "outline-button", "Filters" }
      }
      div {
        class: "card-grid three-col",
        for market in SAMPLES.iter() {
          div {
            key: "{market.title}",
            class: "panel",
            div {
              class: "panel-row",
              div { class: "panel-title", "{market.title}" }
              div { class: "muted small", "{market.platform}" }
            }
            div {
              class: "odds",
              span { "Odds {market.odds}" }
              span { "Fair {market.fair}" }
            }
            div {
              class: "button-row",
              button {
                class: "cta-button small",
                onclick: move |_| state.navigate("/trading"),
                "Open in Trading"
              }
              button { class: "outline-button small", "View Insight" }
            }
          }
        }
      }
    }
  }
}
