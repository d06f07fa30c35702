use dioxus::logger::tracing::Level;

/// Values baked in at compile time by build.rs (optionally from `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  /// Prefix the app is served under, e.g. `/polyfacts`. Empty when served from root.
  pub base_path: String,
  pub log_level: Level,
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_values(option_env!("POLYFACTS_BASE_PATH"), option_env!("POLYFACTS_LOG_LEVEL"))
  }

  pub fn from_values(base_path: Option<&str>, log_level: Option<&str>) -> Self {
    Self {
      base_path: normalize_base(base_path.unwrap_or("")),
      log_level: log_level
        .and_then(|lvl| lvl.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO),
    }
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self::from_values(None, None)
  }
}

pub fn normalize_base(raw: &str) -> String {
  let trimmed = raw.trim().trim_matches('/');
  if trimmed.is_empty() {
    String::new()
  } else {
    format!("/{}", trimmed)
  }
}

/// Maps a browser pathname to an app path. Paths outside `base` pass through.
pub fn strip_base(base: &str, pathname: &str) -> String {
  if base.is_empty() {
    return pathname.to_string();
  }
  match pathname.strip_prefix(base) {
    Some("") => "/".to_string(),
    Some(rest) if rest.starts_with('/') => rest.to_string(),
    _ => pathname.to_string(),
  }
}

pub fn join_base(base: &str, path: &str) -> String {
  format!("{}{}", base, path)
}
