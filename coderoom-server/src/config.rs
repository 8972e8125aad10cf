use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_JUDGE0_URL: &str = "https://judge0-ce.p.rapidapi.com";
pub const DEFAULT_RAPIDAPI_HOST: &str = "judge0-ce.p.rapidapi.com";

/// Runtime settings for the server. The CLI fills this from flags and env.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub execution: ExecutionConfig,
    /// Rooms with no members and no activity for this long are dropped.
    /// `None` keeps rooms for the lifetime of the process.
    pub room_idle_ttl: Option<Duration>,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            execution: ExecutionConfig::default(),
            room_idle_ttl: Some(Duration::from_secs(30 * 60)),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    pub judge0_url: String,
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub poll_interval: Duration,
    /// Wall-clock budget for one submit/poll cycle before it is reported as timed out.
    pub max_poll_duration: Duration,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            judge0_url: DEFAULT_JUDGE0_URL.to_owned(),
            rapidapi_key: String::new(),
            rapidapi_host: DEFAULT_RAPIDAPI_HOST.to_owned(),
            poll_interval: Duration::from_millis(1500),
            max_poll_duration: Duration::from_secs(60),
        }
    }
}
