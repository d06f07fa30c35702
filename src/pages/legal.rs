use dioxus::prelude::*;

use crate::components::section::Section;

/// Terms and Privacy share one template.
#[component]
pub fn Legal(title: String) -> Element {
  rsx! {
    Section {
      title: "{title}",
      div {
        class: "prose",
        p { "This is a minimal {title} template for Polyfacts." }
      }
    }
  }
}

#[component]
pub fn Disclaimer() -> Element {
  rsx! {
    Section {
      title: "Disclaimer",
      p {
        class: "prose",
        "Polyfacts provides research and information. Not financial, investment, or trading advice. Prediction markets involve risk. Past performance does not guarantee future results."
      }
    }
  }
}
