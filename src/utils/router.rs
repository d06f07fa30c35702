use std::fmt;
use dioxus::logger::tracing::{debug, info};

use super::{error::AppError, history::{History, Scroller}};

pub const TAGLINE: &str = "Polyfacts — AI-powered market intelligence for prediction markets";

/// Every page the app knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
  Home,
  Research,
  Feed,
  Portfolio,
  Trading,
  TermsLegal,
  PrivacyLegal,
  Disclaimer,
  NotFound,
}

impl View {
  #[cfg(test)]
  pub const ALL: [View; 9] = [
    View::Home,
    View::Research,
    View::Feed,
    View::Portfolio,
    View::Trading,
    View::TermsLegal,
    View::PrivacyLegal,
    View::Disclaimer,
    View::NotFound,
  ];

  /// Exact match only. Anything unknown lands on Home and keeps its URL;
  /// NotFound is reached solely through the literal `/404`.
  pub fn resolve(path: &str) -> View {
    match path {
      "/research" => View::Research,
      "/feed" => View::Feed,
      "/portfolio" => View::Portfolio,
      "/trading" => View::Trading,
      "/legal/terms" => View::TermsLegal,
      "/legal/privacy" => View::PrivacyLegal,
      "/disclaimer" => View::Disclaimer,
      "/404" => View::NotFound,
      _ => View::Home,
    }
  }

  pub const fn path(&self) -> &'static str {
    match self {
      View::Home => "/",
      View::Research => "/research",
      View::Feed => "/feed",
      View::Portfolio => "/portfolio",
      View::Trading => "/trading",
      View::TermsLegal => "/legal/terms",
      View::PrivacyLegal => "/legal/privacy",
      View::Disclaimer => "/disclaimer",
      View::NotFound => "/404",
    }
  }

  pub fn title(&self) -> &'static str {
    match self {
      View::Research => "Research — Polyfacts",
      View::Feed => "Live Feed — Polyfacts",
      View::Portfolio => "Portfolio — Polyfacts",
      View::Trading => "Trading — Polyfacts",
      View::TermsLegal => "Terms — Polyfacts",
      View::PrivacyLegal => "Privacy — Polyfacts",
      View::Disclaimer => "Disclaimer — Polyfacts",
      View::Home | View::NotFound => TAGLINE,
    }
  }
}

/// Path as the user sees it in the address bar. Not normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn view(&self) -> View {
    View::resolve(&self.0)
  }
}

impl From<&str> for Route {
  fn from(path: &str) -> Self {
    Route(path.to_string())
  }
}

impl From<String> for Route {
  fn from(path: String) -> Self {
    Route(path)
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
  pub label: &'static str,
  pub path: &'static str,
}

pub const PRIMARY_NAV: [NavItem; 4] = [
  NavItem { label: "Research", path: View::Research.path() },
  NavItem { label: "Live Feed", path: View::Feed.path() },
  NavItem { label: "Portfolio", path: View::Portfolio.path() },
  NavItem { label: "Trading", path: View::Trading.path() },
];

pub const LEGAL_NAV: [NavItem; 3] = [
  NavItem { label: "Disclaimer", path: View::Disclaimer.path() },
  NavItem { label: "Terms", path: View::TermsLegal.path() },
  NavItem { label: "Privacy", path: View::PrivacyLegal.path() },
];

/// Keeps the in-memory route in step with the history it was built on.
pub struct PathRouter<H, S> {
  history: H,
  scroller: S,
  current: Route,
}

impl<H: History, S: Scroller> PathRouter<H, S> {
  pub fn new(history: H, scroller: S) -> Self {
    let current = Route::from(history.read());
    info!("router started on {}", current);
    Self { history, scroller, current }
  }

  pub fn current_route(&self) -> &Route {
    &self.current
  }

  pub fn view(&self) -> View {
    self.current.view()
  }

  pub fn title(&self) -> &'static str {
    self.view().title()
  }

  pub fn history(&self) -> &H {
    &self.history
  }

  /// Pushes `target` and scrolls to the top. Returns `Ok(false)` when already
  /// on `target`, in which case neither history nor scroll position change.
  pub fn navigate(&mut self, target: &str) -> Result<bool, AppError> {
    if self.current.as_str() == target {
      debug!("already on {}, skipping navigation", target);
      return Ok(false);
    }
    self.history.push(target)?;
    self.current = Route::from(target);
    self.scroller.scroll_to_top();
    info!("navigated to {} ({:?})", target, self.current.view());
    Ok(true)
  }

  /// Re-reads the visible path after a back/forward move.
  pub fn sync(&mut self) -> bool {
    let path = self.history.read();
    if self.current.as_str() == path {
      return false;
    }
    debug!("history moved from {} to {}", self.current, path);
    self.current = Route::from(path);
    true
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};
  use proptest::prelude::*;

  use super::*;
  use crate::utils::memory::{MemoryHistory, MemoryScroller};

  fn router_at(path: &str) -> (PathRouter<MemoryHistory, MemoryScroller>, MemoryHistory, MemoryScroller) {
    let history = MemoryHistory::new(path);
    let scroller = MemoryScroller::default();
    (PathRouter::new(history.clone(), scroller.clone()), history, scroller)
  }

  #[test]
  fn known_routes_resolve_to_their_view() {
    let table = [
      ("/", View::Home, TAGLINE),
      ("/research", View::Research, "Research — Polyfacts"),
      ("/feed", View::Feed, "Live Feed — Polyfacts"),
      ("/portfolio", View::Portfolio, "Portfolio — Polyfacts"),
      ("/trading", View::Trading, "Trading — Polyfacts"),
      ("/legal/terms", View::TermsLegal, "Terms — Polyfacts"),
      ("/legal/privacy", View::PrivacyLegal, "Privacy — Polyfacts"),
      ("/disclaimer", View::Disclaimer, "Disclaimer — Polyfacts"),
      ("/404", View::NotFound, TAGLINE),
    ];
    for (path, view, title) in table {
      assert_eq!(View::resolve(path), view, "{}", path);
      assert_eq!(view.title(), title, "{}", path);
    }
  }

  #[test]
  fn canonical_paths_round_trip() {
    for view in View::ALL {
      assert_eq!(View::resolve(view.path()), view);
    }
  }

  #[test]
  fn near_misses_fall_back_to_home() {
    for path in ["", "/research/", "/Research", "/legal", "/legal/terms/extra", "/404/", "research", "/feed?x=1"] {
      assert_eq!(View::resolve(path), View::Home, "{}", path);
    }
  }

  #[test]
  fn navigation_menus_point_at_known_views() {
    for item in PRIMARY_NAV.iter().chain(LEGAL_NAV.iter()) {
      assert_ne!(View::resolve(item.path), View::Home, "{}", item.label);
    }
  }

  #[test]
  fn navigate_updates_route_view_and_title() {
    let (mut router, history, scroller) = router_at("/");
    assert!(router.navigate("/trading").unwrap());

    assert_eq!(router.current_route().as_str(), "/trading");
    assert_eq!(history.read(), "/trading");
    assert_eq!(router.view(), View::Trading);
    assert_eq!(router.title(), "Trading — Polyfacts");
    assert_eq!(history.pushes(), 1);
    assert_eq!(scroller.scrolls(), 1);
  }

  #[test]
  fn navigate_to_current_route_is_a_no_op() {
    let (mut router, history, scroller) = router_at("/feed");
    assert!(!router.navigate("/feed").unwrap());
    assert!(router.navigate("/research").unwrap());
    assert!(!router.navigate("/research").unwrap());
    assert!(!router.navigate("/research").unwrap());

    assert_eq!(history.pushes(), 1);
    assert_eq!(scroller.scrolls(), 1);
  }

  #[test]
  fn unknown_start_path_shows_home_and_keeps_url() {
    let (router, history, _) = router_at("/unknown-xyz");
    assert_eq!(router.view(), View::Home);
    assert_eq!(router.title(), TAGLINE);
    assert_eq!(router.current_route().as_str(), "/unknown-xyz");
    assert_eq!(history.pushes(), 0);
  }

  #[test]
  fn navigating_home_from_an_unknown_path_pushes() {
    let (mut router, history, _) = router_at("/unknown-xyz");
    assert!(router.navigate("/").unwrap());
    assert_eq!(history.pushes(), 1);
  }

  #[test]
  fn back_and_forward_resync_through_subscription() {
    let (router, history, scroller) = router_at("/");
    let router = Rc::new(RefCell::new(router));
    let synced = router.clone();
    let _sub = history
      .subscribe(Box::new(move || { synced.borrow_mut().sync(); }))
      .unwrap();

    router.borrow_mut().navigate("/research").unwrap();
    router.borrow_mut().navigate("/legal/privacy").unwrap();

    history.back();
    assert_eq!(router.borrow().current_route().as_str(), "/research");
    history.back();
    assert_eq!(router.borrow().view(), View::Home);
    history.forward();
    history.forward();
    assert_eq!(router.borrow().view(), View::PrivacyLegal);
    // history moves never scroll
    assert_eq!(scroller.scrolls(), 2);
  }

  #[test]
  fn sync_without_movement_reports_nothing() {
    let (mut router, _, _) = router_at("/disclaimer");
    assert!(!router.sync());
    assert_eq!(router.view(), View::Disclaimer);
  }

  proptest! {
    #[test]
    fn unknown_paths_resolve_home(path in ".*") {
      prop_assume!(View::ALL.iter().all(|v| v.path() != path));
      prop_assert_eq!(View::resolve(&path), View::Home);
      prop_assert_eq!(View::resolve(&path).title(), TAGLINE);
    }

    #[test]
    fn navigate_is_immediately_visible(path in "/[a-z/]{0,12}") {
      let (mut router, history, _) = router_at("/");
      router.navigate(&path).unwrap();
      prop_assert_eq!(router.current_route().as_str(), path.as_str());
      prop_assert_eq!(history.read(), path);
    }

    #[test]
    fn history_moves_always_match_reported_path(
      paths in prop::collection::vec("/[a-z]{0,6}", 1..8),
      moves in prop::collection::vec(-3isize..=3, 0..12),
    ) {
      let (mut router, history, _) = router_at("/");
      for path in &paths {
        router.navigate(path).unwrap();
      }
      for delta in moves {
        if history.go(delta) {
          router.sync();
        }
        prop_assert_eq!(router.current_route().as_str(), history.read());
      }
    }
  }
}
