use super::error::AppError;

/// Addressable location of the running session.
///
/// The router only talks to this trait, so the browser can be swapped for
/// an in-memory history anywhere a real window is not available.
pub trait History {
  /// Currently visible path.
  fn read(&self) -> String;
  /// Adds an entry for `path` without reloading the page.
  fn push(&self, path: &str) -> Result<(), AppError>;
  /// Registers `on_change` for back/forward moves. Pushes never trigger it.
  fn subscribe(&self, on_change: Box<dyn FnMut()>) -> Result<Subscription, AppError>;
}

pub trait Scroller {
  fn scroll_to_top(&self);
}

/// Detaches its listener when unsubscribed or dropped.
pub struct Subscription {
  release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
  pub fn new(release: impl FnOnce() + 'static) -> Self {
    Self { release: Some(Box::new(release)) }
  }

  #[cfg(test)]
  pub fn unsubscribe(mut self) {
    if let Some(release) = self.release.take() {
      release();
    }
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(release) = self.release.take() {
      release();
    }
  }
}
