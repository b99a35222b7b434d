//! Frontend configuration module
//!
//! Resolves the backend endpoint layout and origin from values baked in at
//! build time, falling back to the page's own origin.

use shared::config::{ApiLayout, ClientConfig};

/// Build-time frontend settings.
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    /// Raw `DOCCHAT_API_LAYOUT` value.
    pub api_layout: Option<&'static str>,
    /// Raw `DOCCHAT_API_ORIGIN` value.
    pub api_origin: Option<&'static str>,
}

impl FrontendConfig {
    /// Create a new frontend configuration instance from build-time values
    pub fn new() -> Self {
        Self {
            api_layout: option_env!("DOCCHAT_API_LAYOUT"),
            api_origin: option_env!("DOCCHAT_API_ORIGIN"),
        }
    }

    /// Resolve the endpoint configuration.
    ///
    /// An unknown layout is reported to the console and replaced by the
    /// standard layout. Without an explicit origin the current page origin is
    /// used, since the HTTP client needs absolute URLs.
    pub fn client_config(&self) -> ClientConfig {
        let origin = self
            .api_origin
            .map(str::to_string)
            .or_else(browser_origin);

        ClientConfig::from_values(self.api_layout, origin.as_deref()).unwrap_or_else(|err| {
            web_sys::console::warn_1(&format!("Invalid DocChat configuration: {err}").into());
            ClientConfig {
                layout: ApiLayout::Standard,
                origin: origin.unwrap_or_default().trim_end_matches('/').to_string(),
            }
        })
    }
}

fn browser_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_origin_defaults_to_page() {
        let config = FrontendConfig::default().client_config();
        assert!(config.origin.starts_with("http"));
        assert!(config.spaces_url().ends_with("/api/spaces"));
    }

    #[wasm_bindgen_test]
    fn test_explicit_values() {
        let config = FrontendConfig {
            api_layout: Some("docmost"),
            api_origin: Some("https://docs.example.com"),
        }
        .client_config();
        assert_eq!(config.spaces_url(), "https://docs.example.com/docmost/api");
    }

    #[wasm_bindgen_test]
    fn test_bad_layout_falls_back() {
        let config = FrontendConfig {
            api_layout: Some("soap"),
            api_origin: Some("https://docs.example.com"),
        }
        .client_config();
        assert_eq!(config.layout, ApiLayout::Standard);
    }
}
