//! TCP reachability checks with a bounded wait.

use shellkit_core::{PortProbe, Protocol, Result, ToolError};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Default wait for a connection before a port is reported closed
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(200);

/// Upper bound accepted for a probe timeout
const MAX_PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// TCP connect prober
#[derive(Debug, Clone)]
pub struct PortProber {
    timeout: Duration,
}

impl Default for PortProber {
    fn default() -> Self {
        Self::new()
    }
}

impl PortProber {
    /// Create a prober with the default 200ms timeout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the timeout, rejecting zero and anything over a minute
    pub fn timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() || timeout > MAX_PROBE_TIMEOUT {
            return Err(ToolError::invalid(
                "timeout",
                format!("{}ms", timeout.as_millis()),
                "between 1 and 60000 milliseconds",
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Current timeout
    #[must_use]
    pub const fn current_timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe one port on one host.
    ///
    /// Name resolution failures are errors. A refused connection, an
    /// unroutable address or an exhausted timeout all yield `open: false`.
    pub async fn probe(&self, host: &str, port: u16) -> Result<PortProbe> {
        if port == 0 {
            return Err(ToolError::invalid("port", "0", "between 1 and 65535"));
        }

        let open = match tokio::time::timeout(self.timeout, self.connect(host, port)).await {
            Ok(result) => result?,
            Err(_) => {
                debug!(host, port, timeout_ms = self.timeout.as_millis() as u64, "probe timed out");
                false
            }
        };

        Ok(PortProbe {
            host: host.to_string(),
            protocol: Protocol::Tcp,
            port,
            open,
        })
    }

    /// Probe several ports on one host, one after another.
    ///
    /// Each entry succeeds or fails on its own.
    pub async fn probe_ports(&self, host: &str, ports: &[u16]) -> Vec<Result<PortProbe>> {
        let mut results = Vec::with_capacity(ports.len());
        for port in ports {
            results.push(self.probe(host, *port).await);
        }
        results
    }

    async fn connect(&self, host: &str, port: u16) -> Result<bool> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| ToolError::Resolve {
                host: host.to_string(),
                message: e.to_string(),
            })?
            .collect();

        if addrs.is_empty() {
            return Err(ToolError::Resolve {
                host: host.to_string(),
                message: "no addresses returned".to_string(),
            });
        }

        for addr in addrs {
            match TcpStream::connect(addr).await {
                Ok(_) => {
                    debug!(%addr, "port open");
                    return Ok(true);
                }
                Err(e) => debug!(%addr, error = %e, "connect failed"),
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_open_port_is_reachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let probe = PortProber::new().probe("127.0.0.1", port).await.unwrap();
        assert!(probe.open);
        assert_eq!(probe.port, port);
        assert_eq!(probe.protocol, Protocol::Tcp);
    }

    #[tokio::test]
    async fn test_closed_port_is_not_reachable_within_timeout() {
        // Bind then drop to get a port that is very likely closed.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let prober = PortProber::new();
        let start = std::time::Instant::now();
        let probe = prober.probe("127.0.0.1", port).await.unwrap();
        assert!(!probe.open);
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_port_zero_rejected() {
        let err = PortProber::new().probe("127.0.0.1", 0).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_timeout_bounds() {
        assert!(PortProber::new().timeout(Duration::ZERO).is_err());
        assert!(PortProber::new().timeout(Duration::from_secs(61)).is_err());
        let prober = PortProber::new().timeout(Duration::from_millis(50)).unwrap();
        assert_eq!(prober.current_timeout(), Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_probe_ports_keeps_order_and_isolates_failures() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let results = PortProber::new().probe_ports("127.0.0.1", &[0, port]).await;
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].as_ref().unwrap().open);
    }
}
