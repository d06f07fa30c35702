use dioxus::prelude::*;

use crate::{components::section::{Card, Section}, AppState};

const HERO_METRICS: [(&str, &str); 4] = [
  ("Markets analyzed", "12,487"),
  ("Avg. confidence", "72%"),
  ("Coverage", "Crypto • Politics • Sports"),
  ("Latency", "Real-time feed"),
];

const STEPS: [&str; 4] = [
  "Ingest real-time data",
  "ML models score sentiment, risk, confidence",
  "Surface insights and drivers",
  "Trade with the advanced terminal",
];

#[component]
pub fn Hero() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  let state = use_context::<AppState>();

  rsx! {
    document::Stylesheet {href: CSS},
    section {
      class: "hero",
      "aria-label": "Hero",
      div {
        class: "hero-copy",
        h1 { "AI market intelligence for prediction markets" },
        p { "Deep research, real-time news, and an institutional-grade terminal to trade facts. Powered by advanced AI." },
        div {
          class: "hero-actions",
          button {
            class: "cta-button",
            "aria-label": "Launch App",
            onclick: move |_| state.navigate("/trading"),
            "Launch App"
          }
          button {
            class: "outline-button",
            "aria-label": "Explore Research",
            onclick: move |_| state.navigate("/research"),
            "Explore Research"
          }
        }
        div {
          class: "hero-metrics",
          for (label, value) in HERO_METRICS {
            div {
              key: "{label}",
              class: "metric-tile",
              div { class: "metric-label", "{label}" }
              div { class: "metric-value", "{value}" }
            }
          }
        }
      }
      div { class: "hero-visual" }
    }
  }
}

#[component]
pub fn HomeFeatures() -> Element {
  let state = use_context::<AppState>();

  rsx! {
    Section {
      title: "What you can do",
      desc: "Deep AI research, a real-time feed, portfolio insights, and a pro trading terminal — built for clarity and speed.",
      div {
        class: "card-grid two-col",
        Card {
          title: "Research",
          desc: "Deep AI Research • Confidence Scoring • Risk Assessment",
          onclick: move |_| state.navigate("/research"),
        }
        Card {
          title: "Live Feed",
          desc: "Crypto • Politics & Elections • Sports & Entertainment",
          onclick: move |_| state.navigate("/feed"),
        }
        Card {
          title: "Portfolio",
          desc: "Live Polyfacts Token Data • Eligibility • Holder Benefits",
          onclick: move |_| state.navigate("/portfolio"),
        }
        Card {
          title: "Trading",
          desc: "Trade Facts • Advanced Terminal • Pro Charting",
          onclick: move |_| state.navigate("/trading"),
        }
      }
    }
    Section {
      title: "How it works",
      ol {
        class: "steps",
        for (n, step) in (1..).zip(STEPS) {
          li {
            key: "{n}",
            class: "step",
            div { class: "step-number", "Step {n}" }
            div { class: "step-text", "{step}" }
          }
        }
      }
    }
    Section {
      title: "Research deeper. Trade smarter.",
      div {
        class: "button-row",
        button {
          class: "cta-button",
          onclick: move |_| state.navigate("/trading"),
          "Launch App"
        }
        button {
          class: "outline-button",
          onclick: move |_| state.navigate("/feed"),
          "View Live Feed"
        }
      }
    }
  }
}
