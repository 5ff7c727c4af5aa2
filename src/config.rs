//! Page configuration
//!
//! Everything is fixed at build time except the API base, which the host
//! page may override with `<meta name="hello:api-base" content="...">`.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const HELLO_PATH: &str = "/api/hello";

const API_BASE_META: &str = "hello:api-base";

/// Document-level metadata applied by the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub lang: String,
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title: "Hello World - Full Stack App".into(),
            description: "A simple full-stack application with Rust, Yew and FastAPI".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, e.g. "http://localhost:8000"
    pub api_base: String,
    pub hello_path: String,
    pub page: PageMeta,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            hello_path: HELLO_PATH.into(),
            page: PageMeta::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, plus the API base from the host page's meta tag if present.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(base) = get_meta_content(&document, API_BASE_META) {
                config = config.with_api_base(&base);
            }
        }

        config
    }

    /// Blank values are ignored so an empty meta tag keeps the default.
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim();
        if !base.is_empty() {
            self.api_base = base.to_string();
        }
        self
    }

    /// Full URL of the greeting endpoint.
    pub fn hello_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.hello_path.trim_start_matches('/')
        )
    }
}

fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.hello_url(), "http://localhost:8000/api/hello");
        assert_eq!(config.page.lang, "en");
        assert_eq!(config.page.title, "Hello World - Full Stack App");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let config = AppConfig::default().with_api_base("http://api.example.test:9000/");
        assert_eq!(config.hello_url(), "http://api.example.test:9000/api/hello");
    }

    #[test]
    fn blank_override_keeps_default() {
        let config = AppConfig::default().with_api_base("   ");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
