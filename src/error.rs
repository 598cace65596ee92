use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Local storage is not available")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Document root is not available")]
    DocumentUnavailable,

    #[error("Class list error: {0}")]
    ClassList(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Render a thrown JS value as a message, falling back to its debug form.
pub(crate) fn js_message(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
