use dioxus::logger::tracing::info;

use super::{error::AppError, history::{History, Scroller}, router::PathRouter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
  pub title: &'static str,
  pub group: &'static str,
  pub target: &'static str,
}

pub const CATALOG: [CatalogEntry; 5] = [
  CatalogEntry { title: "BTC > $80k by Dec 31", group: "Markets", target: "/research" },
  CatalogEntry { title: "US Election Winner 2024", group: "Markets", target: "/research" },
  CatalogEntry { title: "Trading Terminal", group: "Pages", target: "/trading" },
  CatalogEntry { title: "Live Feed", group: "Pages", target: "/feed" },
  CatalogEntry { title: "Portfolio", group: "Pages", target: "/portfolio" },
];

/// Entries whose title contains `query`, ignoring case, in catalog order.
pub fn filter<'a>(query: &str, catalog: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
  let needle = query.to_lowercase();
  catalog
    .iter()
    .filter(|entry| entry.title.to_lowercase().contains(&needle))
    .collect()
}

/// Quick-search overlay session. The query only lives while the overlay is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOverlay {
  open: bool,
  query: String,
}

impl SearchOverlay {
  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn open(&mut self) {
    if !self.open {
      self.query.clear();
      self.open = true;
    }
  }

  pub fn close(&mut self) {
    self.open = false;
    self.query.clear();
  }

  pub fn toggle(&mut self) {
    if self.open {
      self.close();
    } else {
      self.open();
    }
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
  }

  pub fn results(&self) -> Vec<&'static CatalogEntry> {
    filter(&self.query, &CATALOG)
  }

  /// Closes the overlay and hands back the path to navigate to.
  pub fn select(&mut self, entry: &CatalogEntry) -> &'static str {
    info!("search picked {:?} for query {:?}", entry.title, self.query);
    self.close();
    entry.target
  }
}

/// Picking a result: the overlay closes with an empty query, then the router
/// moves to the entry's target.
pub fn select_result<H: History, S: Scroller>(
  router: &mut PathRouter<H, S>,
  overlay: &mut SearchOverlay,
  entry: &CatalogEntry,
) -> Result<bool, AppError> {
  let target = overlay.select(entry);
  router.navigate(target)
}
