use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  WasmError(String),
  HistoryError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::WasmError(msg) => write!(f, "Wasm error: {}", msg),
      AppError::HistoryError(msg) => write!(f, "History error: {}", msg),
    }
  }
}
