//! Connection-pool settings for [`HttpTransport`](crate::HttpTransport).

use std::str::FromStr;
use std::time::Duration;

use ethrpc_core::TransportError;

pub const ENV_MAX_CONNECTIONS: &str = "HTTP_MAX_CONNECTIONS";
pub const ENV_MAX_CONNECTIONS_PER_ORIGIN: &str = "HTTP_MAX_CONNECTIONS_PER_ORIGIN";
pub const ENV_POOL_TIMEOUT: &str = "HTTP_POOL_TIMEOUT";
pub const ENV_KEEPALIVE_TIMEOUT: &str = "HTTP_KEEPALIVE_TIMEOUT";

pub const DEFAULT_MAX_CONNECTIONS: usize = 10;
pub const DEFAULT_MAX_CONNECTIONS_PER_ORIGIN: usize = 5;
pub const DEFAULT_POOL_TIMEOUT: Duration = Duration::from_secs(10);
/// Keep-alive used when it is switched on without an explicit value.
pub const DEFAULT_KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool sizing and timeouts for one transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPoolConfig {
    /// Upper bound on requests in flight through this transport.
    pub max_connections: usize,
    /// Idle connections kept open per origin.
    pub max_connections_per_origin: usize,
    /// How long a request may wait for a free connection slot.
    pub pool_timeout: Duration,
    /// Idle keep-alive for pooled connections; `None` leaves reqwest's default.
    pub keep_alive_timeout: Option<Duration>,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for HttpPoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_connections_per_origin: DEFAULT_MAX_CONNECTIONS_PER_ORIGIN,
            pool_timeout: DEFAULT_POOL_TIMEOUT,
            keep_alive_timeout: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HttpPoolConfig {
    /// Read overrides from `HTTP_MAX_CONNECTIONS`, `HTTP_MAX_CONNECTIONS_PER_ORIGIN`,
    /// `HTTP_POOL_TIMEOUT` and `HTTP_KEEPALIVE_TIMEOUT` (seconds).
    pub fn from_env() -> Result<Self, TransportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    ///
    /// Unset variables keep their defaults. A present but empty
    /// `HTTP_KEEPALIVE_TIMEOUT` enables keep-alive at
    /// [`DEFAULT_KEEP_ALIVE_TIMEOUT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(n) = parse_var(&lookup, ENV_MAX_CONNECTIONS)? {
            config.max_connections = n;
        }
        if let Some(n) = parse_var(&lookup, ENV_MAX_CONNECTIONS_PER_ORIGIN)? {
            config.max_connections_per_origin = n;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_POOL_TIMEOUT)? {
            config.pool_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(ENV_KEEPALIVE_TIMEOUT) {
            config.keep_alive_timeout = Some(if raw.trim().is_empty() {
                DEFAULT_KEEP_ALIVE_TIMEOUT
            } else {
                Duration::from_secs(parse_value(ENV_KEEPALIVE_TIMEOUT, &raw)?)
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Enable keep-alive with the given idle timeout.
    pub fn with_keep_alive(mut self, timeout: Duration) -> Self {
        self.keep_alive_timeout = Some(timeout);
        self
    }

    /// Reject settings the pool cannot work with.
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.max_connections == 0 {
            return Err(invalid(ENV_MAX_CONNECTIONS, self.max_connections));
        }
        if self.max_connections_per_origin == 0 {
            return Err(invalid(
                ENV_MAX_CONNECTIONS_PER_ORIGIN,
                self.max_connections_per_origin,
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, TransportError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|raw| parse_value(key, &raw)).transpose()
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, TransportError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn invalid(key: &str, value: impl ToString) -> TransportError {
    TransportError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
