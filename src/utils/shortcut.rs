#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
  Toggle,
  Close,
}

impl OverlayCommand {
  /// Whether the browser's own handling of the key must be suppressed.
  pub fn prevents_default(&self) -> bool {
    matches!(self, OverlayCommand::Toggle)
  }
}

/// Cmd/Ctrl+K toggles the search overlay, Escape closes it.
pub fn overlay_command(key: &str, meta: bool, ctrl: bool) -> Option<OverlayCommand> {
  if (meta || ctrl) && key.eq_ignore_ascii_case("k") {
    return Some(OverlayCommand::Toggle);
  }
  if key == "Escape" {
    return Some(OverlayCommand::Close);
  }
  None
}
