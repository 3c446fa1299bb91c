//! Site configuration: repository link, APK link and asset-host prefix.
//!
//! The server resolves the configuration once with [`SiteConfig::from_env`]
//! (after `dotenvy::dotenv()`), installs it process-wide and embeds it in the
//! page shell as JSON. The hydrating client reads it back with
//! [`SiteConfig::from_json`]. Values missing from the runtime environment
//! fall back to whatever was set when the crate was compiled.

use std::sync::OnceLock;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Environment variable holding the repository URL
pub const GITHUB_URL_VAR: &str = "GITHUB_URL";
/// Environment variable holding the installable package URL
pub const APK_URL_VAR: &str = "APK_URL";
/// Environment variable holding the asset-host base URL
pub const CDN_URL_VAR: &str = "CDN_URL";

/// DOM id of the `<script>` element carrying the embedded configuration
pub const EMBED_ELEMENT_ID: &str = "site-config";

static CURRENT: OnceLock<SiteConfig> = OnceLock::new();

/// Errors raised while decoding an embedded configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site configuration element `#{0}` not found")]
    MissingElement(&'static str),
    #[error("malformed site configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Externally supplied URLs consumed by the page sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Source repository, e.g. `https://github.com/you/bunkmate`
    #[serde(default)]
    pub github_url: String,
    /// Direct download link for the Android package
    #[serde(default)]
    pub apk_url: String,
    /// Asset host prefix; images live under `{cdn_url}/images/`
    #[serde(default)]
    pub cdn_url: String,
}

impl SiteConfig {
    pub fn new(
        github_url: impl Into<String>,
        apk_url: impl Into<String>,
        cdn_url: impl Into<String>,
    ) -> Self {
        Self {
            github_url: github_url.into(),
            apk_url: apk_url.into(),
            cdn_url: cdn_url.into(),
        }
    }

    /// Values baked in at compile time. Unset variables become empty strings.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("GITHUB_URL").unwrap_or_default(),
            option_env!("APK_URL").unwrap_or_default(),
            option_env!("CDN_URL").unwrap_or_default(),
        )
    }

    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` before this to pick up a `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        let build = Self::from_build_env();
        let read = |var: &str, fallback: String| std::env::var(var).unwrap_or(fallback);
        Self {
            github_url: read(GITHUB_URL_VAR, build.github_url),
            apk_url: read(APK_URL_VAR, build.apk_url),
            cdn_url: read(CDN_URL_VAR, build.cdn_url),
        }
    }

    /// Decode a configuration previously produced by [`SiteConfig::to_json`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw.trim())?)
    }

    /// Encode for embedding inside an inline `<script>` element.
    ///
    /// `</` is escaped so a URL can never terminate the element early.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }

    /// Read the configuration embedded in the current document.
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = leptos::web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(EMBED_ELEMENT_ID))
            .and_then(|element| element.text_content())
            .ok_or(ConfigError::MissingElement(EMBED_ELEMENT_ID))?;
        Self::from_json(&text)
    }

    /// Install the process-wide configuration. Only the first call wins.
    pub fn install(self) -> &'static SiteConfig {
        CURRENT.get_or_init(|| self)
    }

    /// The installed configuration, or the build-time values if nothing was
    /// installed yet.
    pub fn current() -> &'static SiteConfig {
        CURRENT.get_or_init(Self::from_build_env)
    }

    /// Prefix an asset path with the asset host.
    ///
    /// No validation happens here: a blank host yields a root-relative path.
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.cdn_url, path)
    }

    /// URL of the page background image substituted into the style sheet
    pub fn background_url(&self) -> String {
        self.asset("/images/bunk-bg-2.webp")
    }

    pub fn has_github(&self) -> bool {
        !self.github_url.is_empty()
    }

    pub fn has_apk(&self) -> bool {
        !self.apk_url.is_empty()
    }

    pub fn has_cdn(&self) -> bool {
        !self.cdn_url.is_empty()
    }

    /// Names of the variables that resolved to nothing.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (GITHUB_URL_VAR, self.has_github()),
            (APK_URL_VAR, self.has_apk()),
            (CDN_URL_VAR, self.has_cdn()),
        ]
        .into_iter()
        .filter_map(|(name, set)| (!set).then_some(name))
        .collect()
    }
}

/// Configuration visible to the current component.
///
/// A value provided through context wins over the process-wide one.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(|| SiteConfig::current().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteConfig {
        SiteConfig::new(
            "https://example.com/repo",
            "https://example.com/app.apk",
            "https://cdn.example.com",
        )
    }

    #[test]
    fn test_asset_concatenates_host_and_path() {
        let config = sample();
        assert_eq!(
            config.asset("/images/alarm.webp"),
            "https://cdn.example.com/images/alarm.webp"
        );
        assert_eq!(
            config.background_url(),
            "https://cdn.example.com/images/bunk-bg-2.webp"
        );
    }

    #[test]
    fn test_blank_host_leaves_relative_path() {
        let config = SiteConfig::default();
        assert_eq!(config.asset("/images/fork.webp"), "/images/fork.webp");
    }

    #[test]
    fn test_json_round_trip() {
        let config = sample();
        let decoded = SiteConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_json_escapes_closing_tags() {
        let config = SiteConfig::new("https://example.com/</script>", "", "");
        let json = config.to_json();
        assert!(!json.contains("</script>"));
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_missing_fields_default_to_blank() {
        let config = SiteConfig::from_json(r#"{"apk_url":"https://example.com/app.apk"}"#).unwrap();
        assert_eq!(config.apk_url, "https://example.com/app.apk");
        assert!(config.github_url.is_empty());
        assert!(config.cdn_url.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed site configuration"));
    }

    #[test]
    fn test_missing_lists_unset_variables() {
        let config = SiteConfig::new("https://example.com/repo", "", "");
        assert_eq!(config.missing(), vec![APK_URL_VAR, CDN_URL_VAR]);
        assert!(sample().missing().is_empty());
    }

    #[test]
    fn test_context_value_wins() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(sample());
            assert_eq!(use_site_config(), sample());
        });
    }
}
