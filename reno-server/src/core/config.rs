/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | default tracing level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | PLATFORM_FEE_PERCENTAGE | 5 | default platform fee for new businesses |
/// | TAX_BRACKET_RATE | 0.24 | default bracket rate for donation estimates |
/// | DONATION_PRESETS | 5,10,15,20 | default donation presets (comma separated) |
/// | REQUEST_TIMEOUT_MS | 30000 | request timeout (milliseconds) |
/// | ONBOARDING_RETENTION_SECS | 86400 | how long finished onboarding workflows are kept |
/// | ONBOARDING_MAX_PER_BUSINESS | 500 | onboarding workflows one business may hold |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 PLATFORM_FEE_PERCENTAGE=3.5 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,

    // === Business defaults ===
    pub platform_fee_percentage: f64,
    pub tax_bracket_rate: f64,
    pub donation_presets: Vec<f64>,

    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,

    // === Onboarding retention ===
    pub onboarding_retention_secs: u64,
    pub onboarding_max_per_business: usize,
}

pub const DEFAULT_DONATION_PRESETS: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

pub const DEFAULT_ONBOARDING_RETENTION_SECS: u64 = 24 * 60 * 60;

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            platform_fee_percentage: std::env::var("PLATFORM_FEE_PERCENTAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|p| (0.0..=100.0).contains(p))
                .unwrap_or(crate::allocation::fee_split::DEFAULT_PLATFORM_FEE_PERCENTAGE),
            tax_bracket_rate: std::env::var("TAX_BRACKET_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|r| (0.0..=1.0).contains(r))
                .unwrap_or(crate::allocation::donation::DEFAULT_TAX_BRACKET_RATE),
            donation_presets: std::env::var("DONATION_PRESETS")
                .ok()
                .and_then(|v| parse_presets(&v))
                .unwrap_or_else(|| DEFAULT_DONATION_PRESETS.to_vec()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            onboarding_retention_secs: std::env::var("ONBOARDING_RETENTION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ONBOARDING_RETENTION_SECS),
            onboarding_max_per_business: std::env::var("ONBOARDING_MAX_PER_BUSINESS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(crate::services::DEFAULT_MAX_WORKFLOWS_PER_BUSINESS),
        }
    }

    /// Override the port and the default platform fee
    ///
    /// Mostly used by tests
    pub fn with_overrides(http_port: u16, platform_fee_percentage: f64) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.platform_fee_percentage = platform_fee_percentage;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a comma separated preset list such as `5,10,15,20`.
///
/// Returns `None` when the list is empty or any entry is not a
/// percentage in `0..=100`.
pub fn parse_presets(raw: &str) -> Option<Vec<f64>> {
    let presets = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok().filter(|p| (0.0..=100.0).contains(p)))
        .collect::<Option<Vec<_>>>()?;
    if presets.is_empty() { None } else { Some(presets) }
}
