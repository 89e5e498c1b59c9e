//! Shared transport for the single-line TCP protocols (whois and DAS).
//!
//! One exchange is one connection: connect, write the query line with CRLF,
//! read until the peer closes, then close. The session walks through
//! [`LineState`] and every transition is traced at `debug`.

use crate::endpoints::Endpoint;
use crate::error::NoridError;
use crate::types::ClientConfig;
use std::fmt;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Prefix asking the whois or finger server to read and answer in UTF-8.
pub const CHARSET_FLAG: &str = "-c utf-8 ";

/// Lifecycle of one line-protocol exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Disconnected,
    Connected,
    Sent,
    ReceivedAll,
    Closed,
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineState::Disconnected => "disconnected",
            LineState::Connected => "connected",
            LineState::Sent => "sent",
            LineState::ReceivedAll => "received-all",
            LineState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Build a whois or DAS query line, adding [`CHARSET_FLAG`] for non-ASCII
/// names or when asked to.
pub fn query_line(query: &str, force_utf8: bool) -> String {
    let query = query.trim();
    if force_utf8 || !query.is_ascii() {
        format!("{}{}", CHARSET_FLAG, query)
    } else {
        query.to_string()
    }
}

/// Timeouts and size limit for one endpoint.
#[derive(Debug, Clone)]
pub(crate) struct LineTransport {
    endpoint: Endpoint,
    connect_timeout: Duration,
    read_timeout: Duration,
    max_response_bytes: usize,
}

impl LineTransport {
    pub(crate) fn new(endpoint: Endpoint, config: &ClientConfig) -> Self {
        Self {
            endpoint,
            connect_timeout: config.connect_timeout,
            read_timeout: config.timeout,
            max_response_bytes: config.max_response_bytes,
        }
    }

    pub(crate) fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send `line` and return the whole response, decoded lossily as UTF-8.
    pub(crate) async fn exchange(&self, line: &str) -> Result<String, NoridError> {
        let mut session = LineSession::new(self.endpoint.address());
        let result = self.run(&mut session, line).await;
        if let Err(e) = &result {
            debug!(
                address = %self.endpoint.address(),
                state = %session.state(),
                error = %e,
                "line protocol exchange failed"
            );
        }
        session.close().await;
        result
    }

    async fn run(&self, session: &mut LineSession, line: &str) -> Result<String, NoridError> {
        session.connect(self.connect_timeout).await?;
        session.send(line).await?;
        let bytes = session
            .receive(self.read_timeout, self.max_response_bytes)
            .await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// One connection and where it is in its lifecycle.
pub(crate) struct LineSession {
    address: String,
    stream: Option<TcpStream>,
    state: LineState,
}

impl LineSession {
    pub(crate) fn new(address: String) -> Self {
        Self {
            address,
            stream: None,
            state: LineState::Disconnected,
        }
    }

    pub(crate) fn state(&self) -> LineState {
        self.state
    }

    fn transition(&mut self, next: LineState) {
        debug!(address = %self.address, from = %self.state, to = %next, "line protocol transition");
        self.state = next;
    }

    pub(crate) async fn connect(&mut self, bound: Duration) -> Result<(), NoridError> {
        let stream = tokio::time::timeout(bound, TcpStream::connect(self.address.as_str()))
            .await
            .map_err(|_| NoridError::timeout(&self.address, "connect", bound))?
            .map_err(|e| NoridError::network(&self.address, "connect", e.to_string()))?;

        self.stream = Some(stream);
        self.transition(LineState::Connected);
        Ok(())
    }

    pub(crate) async fn send(&mut self, line: &str) -> Result<(), NoridError> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            NoridError::network(&self.address, "write", "not connected")
        })?;

        let payload = format!("{}\r\n", line);
        stream
            .write_all(payload.as_bytes())
            .await
            .map_err(|e| NoridError::network(&self.address, "write", e.to_string()))?;
        stream
            .flush()
            .await
            .map_err(|e| NoridError::network(&self.address, "write", e.to_string()))?;

        self.transition(LineState::Sent);
        Ok(())
    }

    /// Read until EOF. Fails with `Timeout` if EOF does not arrive within
    /// `bound`, and with `ProtocolError` past `max_bytes`.
    pub(crate) async fn receive(
        &mut self,
        bound: Duration,
        max_bytes: usize,
    ) -> Result<Vec<u8>, NoridError> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            NoridError::network(&self.address, "read", "not connected")
        })?;

        let limit = (max_bytes as u64).saturating_add(1);
        let mut buffer = Vec::new();
        tokio::time::timeout(bound, stream.take(limit).read_to_end(&mut buffer))
            .await
            .map_err(|_| NoridError::timeout(&self.address, "read", bound))?
            .map_err(|e| NoridError::network(&self.address, "read", e.to_string()))?;

        if buffer.len() > max_bytes {
            return Err(NoridError::protocol(
                &self.address,
                format!("response exceeds {} bytes", max_bytes),
            ));
        }

        debug!(address = %self.address, bytes = buffer.len(), "line protocol response read");
        self.transition(LineState::ReceivedAll);
        Ok(buffer)
    }

    /// Release the connection. Runs on every path.
    pub(crate) async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if self.state == LineState::ReceivedAll {
                let _ = stream.shutdown().await;
            }
        }
        self.transition(LineState::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Protocol;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// Log sink for asserting on trace output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_query_line_charset_flag() {
        assert_eq!(query_line("norid.no", false), "norid.no");
        assert_eq!(query_line("norid.no", true), "-c utf-8 norid.no");
        assert_eq!(query_line("blåbær.no", false), "-c utf-8 blåbær.no");
        assert_eq!(query_line("  norid.no ", false), "norid.no");
    }

    #[tokio::test]
    async fn test_session_reaches_closed_after_exchange() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let n = socket.read(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"norid.no\r\n");
            socket.write_all(b"norid.no is delegated\n").await.unwrap();
        });

        let mut session = LineSession::new(address);
        assert_eq!(session.state(), LineState::Disconnected);

        session.connect(Duration::from_secs(2)).await.unwrap();
        assert_eq!(session.state(), LineState::Connected);
        session.send("norid.no").await.unwrap();
        assert_eq!(session.state(), LineState::Sent);
        let bytes = session.receive(Duration::from_secs(2), 1024).await.unwrap();
        assert_eq!(session.state(), LineState::ReceivedAll);
        assert_eq!(bytes, b"norid.no is delegated\n");

        session.close().await;
        assert_eq!(session.state(), LineState::Closed);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_session_closes_after_connect_failure() {
        // Bind and drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let mut session = LineSession::new(address);
        let err = session.connect(Duration::from_secs(2)).await.unwrap_err();
        assert!(err.is_network());

        session.close().await;
        assert_eq!(session.state(), LineState::Closed);
    }

    #[tokio::test]
    async fn test_oversized_response_is_protocol_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(&[b'x'; 2048]).await;
        });

        let mut session = LineSession::new(address);
        session.connect(Duration::from_secs(2)).await.unwrap();
        session.send("norid.no").await.unwrap();
        let err = session
            .receive(Duration::from_secs(2), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, NoridError::ProtocolError { .. }));

        session.close().await;
        assert_eq!(session.state(), LineState::Closed);
    }

    #[tokio::test]
    async fn test_failed_exchange_logs_the_state_it_stopped_in() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        // Accept and read, but never answer or close.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let endpoint = Endpoint {
            protocol: Protocol::Das,
            host: "127.0.0.1".to_string(),
            port,
            base_url: None,
        };
        let config = ClientConfig::default().with_timeout(Duration::from_millis(200));
        let transport = LineTransport::new(endpoint, &config);

        let err = transport.exchange("norid.no").await.unwrap_err();
        assert!(matches!(err, NoridError::Timeout { .. }));

        let logs = captured.text();
        assert!(logs.contains("line protocol exchange failed"), "{}", logs);
        assert!(logs.contains("state=sent"), "{}", logs);
        server.abort();
    }
}
