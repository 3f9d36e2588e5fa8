//! Connection settings for the NEIS hub.

pub const DEFAULT_NEIS_BASE_URL: &str = "https://open.neis.go.kr/hub";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MONTHLY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeisTimeouts {
    pub connect_secs: u64,
    /// Whole-request timeout for school searches.
    pub search_secs: u64,
    /// Whole-request timeout for the monthly menu and schedule fetches.
    pub monthly_secs: u64,
}

impl Default for NeisTimeouts {
    fn default() -> Self {
        Self {
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            search_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
            monthly_secs: DEFAULT_MONTHLY_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct NeisConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeouts: NeisTimeouts,
    /// Skip TLS certificate verification. The hub has served incomplete
    /// chains before; off unless explicitly enabled.
    pub accept_invalid_certs: bool,
}

impl NeisConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_NEIS_BASE_URL.to_owned(),
            timeouts: NeisTimeouts::default(),
            accept_invalid_certs: false,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for NeisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeisConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
