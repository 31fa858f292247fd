//! HTTP client for the device console.
//!
//! The console forwards a melody to the buzzer when it receives its wire
//! encoding as a JSON array of `[code, duration_ms]` pairs. Both elements
//! are single bytes on the console side, so a note lasts at most 255 ms.

use std::time::Duration;

use kroneum_cli::Context;
use kroneum_melody::WireNote;
use reqwest::{Client as ReqwestClient, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

/// Path of the play endpoint.
pub const PLAY_PATH: &str = "/api/play";

/// Longest note duration, in whole milliseconds, the console accepts.
pub const MAX_NOTE_MS: u64 = u8::MAX as u64;

/// Error type for device console requests.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Console answered with a non-success status.
    #[error("device console returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// A note is longer than the console can express.
    #[error("note {index} lasts {duration_ms} ms, the device accepts at most {max} ms", max = MAX_NOTE_MS)]
    DurationOutOfRange { index: usize, duration_ms: u64 },
}

/// Checks that every note fits the console's one-byte duration.
///
/// Durations are compared after rounding to whole milliseconds, as they are
/// sent on the wire.
pub fn check_durations(notes: &[WireNote]) -> Result<(), DeviceError> {
    for (index, note) in notes.iter().enumerate() {
        let rounded = note.duration_ms.round();
        if !(0.0..=MAX_NOTE_MS as f64).contains(&rounded) {
            return Err(DeviceError::DurationOutOfRange {
                index,
                duration_ms: rounded as u64,
            });
        }
    }
    Ok(())
}

/// Client for one device console.
pub struct DeviceClient {
    client: ReqwestClient,
    base_url: String,
}

impl DeviceClient {
    /// Creates a client for the console at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DeviceError> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from a CLI context.
    pub fn from_context(ctx: &Context) -> Result<Self, DeviceError> {
        Self::new(ctx.base_url(), Duration::from_secs(ctx.timeout_secs()))
    }

    /// Full URL of the play endpoint.
    pub fn play_url(&self) -> String {
        format!("{}{}", self.base_url, PLAY_PATH)
    }

    /// Sends a wire-encoded melody to the device.
    pub async fn play_melody(&self, notes: &[WireNote]) -> Result<(), DeviceError> {
        check_durations(notes)?;

        let url = self.play_url();
        debug!(%url, notes = notes.len(), "posting melody");

        let response = self.client.post(&url).json(notes).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "device console rejected melody");
            return Err(DeviceError::Status { status, body });
        }

        debug!(%status, "melody accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kroneum_melody::notes::*;
    use kroneum_melody::{ALL_PRESETS, DEFAULT_SCALE_FACTOR, Melody, n, to_wire_encoding};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single request, replies with `status_line` and returns the raw request.
    async fn serve_once(listener: TcpListener, status_line: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let length = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + length || n == 0 {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    }

    #[test]
    fn test_play_url() {
        let client = DeviceClient::new("http://127.0.0.1:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.play_url(), "http://127.0.0.1:8080/api/play");
    }

    #[tokio::test]
    async fn test_play_melody_posts_wire_encoding() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 204 No Content"));

        let client = DeviceClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let notes = [WireNote::new(0xa5, 100.0), WireNote::new(0xb5, 100.0)];
        client.play_melody(&notes).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/play "));
        assert!(request.ends_with("[[165,100],[181,100]]"));
    }

    #[tokio::test]
    async fn test_play_melody_reports_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 500 Internal Server Error"));

        let client = DeviceClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = client.play_melody(&[WireNote::new(0, 100.0)]).await.unwrap_err();
        server.await.unwrap();

        match err {
            DeviceError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_play_melody_refuses_long_notes_before_sending() {
        // Nothing listens on this host; a request would fail as Http.
        let client = DeviceClient::new("http://device.invalid", Duration::from_secs(1)).unwrap();
        let melody = Melody::new(vec![n(C4, QUARTER), n(A5, SIXTEENTH)]).unwrap();
        let notes = to_wire_encoding(&melody, DEFAULT_SCALE_FACTOR).unwrap();

        match client.play_melody(&notes).await.unwrap_err() {
            DeviceError::DurationOutOfRange { index, duration_ms } => {
                assert_eq!(index, 0);
                assert_eq!(duration_ms, 400);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_durations_bounds() {
        assert!(check_durations(&[]).is_ok());
        assert!(check_durations(&[WireNote::new(0xa5, 255.0), WireNote::new(0, 255.4)]).is_ok());

        let err = check_durations(&[WireNote::new(0xa5, 100.0), WireNote::new(0xb5, 255.5)])
            .unwrap_err();
        assert!(matches!(
            err,
            DeviceError::DurationOutOfRange { index: 1, duration_ms: 256 }
        ));

        // Every built-in preset fits at the default scale.
        for preset in ALL_PRESETS {
            let notes = to_wire_encoding(&preset.melody().unwrap(), DEFAULT_SCALE_FACTOR).unwrap();
            assert!(check_durations(&notes).is_ok(), "{}", preset.id);
        }
    }
}
