#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use std::rc::Rc;
use dioxus::{logger::tracing::{error, info}, prelude::*};

use components::{search_modal::SearchModal, template::Template};
use pages::{
  feed::Feed, home::{Hero, HomeFeatures}, legal::{Disclaimer, Legal}, not_found::NotFound,
  portfolio::Portfolio, research::Research, trading::Trading
};
use utils::{
  browser::{listen_for_shortcuts, BrowserHistory, BrowserScroller},
  config::AppConfig,
  history::History,
  router::{PathRouter, View},
  search::{select_result, CatalogEntry, SearchOverlay},
  shortcut::OverlayCommand
};

pub type AppRouter = PathRouter<BrowserHistory, BrowserScroller>;

/// Session state owned by [`App`] and handed to the tree through context.
#[derive(Clone, Copy)]
pub struct AppState {
  pub router: Signal<AppRouter>,
  pub search: Signal<SearchOverlay>,
}

impl AppState {
  pub fn navigate(&self, path: &str) {
    let mut router = self.router;
    let result = router.write().navigate(path);
    if let Err(e) = result {
      error!("navigation to {} failed: {}", path, e);
    }
  }

  pub fn open_search(&self) {
    let mut search = self.search;
    search.write().open();
  }

  pub fn close_search(&self) {
    let mut search = self.search;
    if search.peek().is_open() {
      search.write().close();
    }
  }

  pub fn select(&self, entry: &CatalogEntry) {
    let (mut router, mut search) = (self.router, self.search);
    let result = select_result(&mut router.write(), &mut search.write(), entry);
    if let Err(e) = result {
      error!("could not open {}: {}", entry.target, e);
    }
  }
}

fn main() {
  let config = AppConfig::from_env();
  dioxus::logger::init(config.log_level).expect("logger should only be initialised once");
  info!("starting polyfacts (base path {:?})", config.base_path);
  dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn App() -> Element {
  static CSS: Asset = asset!("/assets/main.css");

  let config = use_context::<AppConfig>();
  let router = use_signal(|| PathRouter::new(BrowserHistory::new(config.base_path.clone()), BrowserScroller));
  let search = use_signal(SearchOverlay::default);
  let state = use_context_provider(|| AppState { router, search });

  // back/forward buttons
  use_hook(move || {
    let mut synced = router;
    let subscription = router.peek().history().subscribe(Box::new(move || {
      if synced.write().sync() {
        info!("history moved to {}", synced.peek().current_route());
      }
    }));
    match subscription {
      Ok(sub) => Some(Rc::new(sub)),
      Err(e) => {
        error!("could not follow browser history: {}", e);
        None
      }
    }
  });

  use_hook(move || {
    let mut search = search;
    let listener = listen_for_shortcuts(move |command| match command {
      OverlayCommand::Toggle => search.write().toggle(),
      OverlayCommand::Close => state.close_search(),
    });
    match listener {
      Ok(listener) => Some(Rc::new(listener)),
      Err(e) => {
        error!("keyboard shortcuts unavailable: {}", e);
        None
      }
    }
  });

  let view = router.read().view();
  let title = router.read().title();
  let on_root = router.read().current_route().as_str() == "/";

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "{title}" }
    div {
      class: "app",
      Template {
        if on_root {
          Hero { }
        }
        Page { view }
      }
      if search.read().is_open() {
        SearchModal { }
      }
    }
  }
}

#[component]
fn Page(view: View) -> Element {
  match view {
    View::Home => rsx! { HomeFeatures { } },
    View::Research => rsx! { Research { } },
    View::Feed => rsx! { Feed { } },
    View::Portfolio => rsx! { Portfolio { } },
    View::Trading => rsx! { Trading { } },
    View::TermsLegal => rsx! { Legal { title: "Terms" } },
    View::PrivacyLegal => rsx! { Legal { title: "Privacy" } },
    View::Disclaimer => rsx! { Disclaimer { } },
    View::NotFound => rsx! { NotFound { } },
  }
}
