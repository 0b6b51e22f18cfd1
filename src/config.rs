//! Endpoint and client settings for the HearthstoneJSON catalog

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.hearthstonejson.com/v1/";
pub const DEFAULT_BUILD: &str = "25770";
pub const DEFAULT_LOCALE: &str = "enUS";
pub const DEFAULT_USER_AGENT: &str = "Innkeep/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URI of the API, with trailing slash
    pub api_base: String,
    /// Game build whose card data is requested
    pub build: String,
    pub locale: String,
    pub user_agent: String,
    /// Timeout applied to the whole catalog request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            build: DEFAULT_BUILD.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Full URL of the card catalog, e.g.
    /// `https://api.hearthstonejson.com/v1/25770/enUS/cards.json`
    pub fn catalog_url(&self) -> String {
        let base = if self.api_base.ends_with('/') {
            self.api_base.clone()
        } else {
            format!("{}/", self.api_base)
        };
        format!("{}{}/{}/cards.json", base, self.build, self.locale)
    }

    /// Same settings, pointed at another API base (mock servers, mirrors)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
