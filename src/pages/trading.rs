use dioxus::prelude::*;

use crate::components::section::{Placeholder, Section};

#[component]
pub fn Trading() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Section {
      title: "Trading",
      desc: "Trade facts and prediction markets with real-time data and an institutional-grade terminal.",
      div {
        class: "terminal",
        Placeholder { label: "Markets list", variant: "tall" }
        Placeholder { label: "Advanced chart", variant: "tall wide" }
        Placeholder { label: "Order panel", variant: "tall" }
        div {
          class: "terminal-bottom",
          Placeholder { label: "Order book", variant: "short" }
          Placeholder { label: "Recent trades", variant: "short" }
          Placeholder { label: "Positions", variant: "short" }
        }
      }
      div { class: "muted small", "Non-custodial demo placeholders. Not financial advice." }
    }
  }
}
