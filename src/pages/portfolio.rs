use dioxus::prelude::*;

use crate::components::section::{Placeholder, Section};

const TOKEN_METRICS: [(&str, &str); 6] = [
  ("Price", "$0.42"),
  ("24h Change", "+2.1%"),
  ("Market Cap", "$42M"),
  ("FDV", "$120M"),
  ("Volume (24h)", "$1.8M"),
  ("Liquidity", "$6.2M"),
];

const BENEFITS: [&str; 3] = ["Lower platform fees", "Priority research features", "Governance & early access"];

#[component]
pub fn Portfolio() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Section {
      title: "Portfolio",
      desc: "Live Polyfacts Token data and holder benefits.",
      div {
        class: "metric-grid",
        for (label, value) in TOKEN_METRICS {
          div {
            key: "{label}",
            class: "panel",
            div { class: "muted small", "{label}" }
            div { class: "mono", "{value}" }
          }
        }
      }
      Placeholder { label: "Price chart placeholder", variant: "chart" }
      div {
        class: "card-grid three-col",
        for benefit in BENEFITS {
          div {
            key: "{benefit}",
            class: "panel",
            div { class: "panel-title", "{benefit}" }
            div { class: "panel-body", "Benefit details (placeholder)." }
          }
        }
      }
      div {
        class: "button-row",
        button { class: "cta-button", "Connect Wallet" }
      }
      p { class: "muted small", "Information only. Not investment advice." }
    }
  }
}
