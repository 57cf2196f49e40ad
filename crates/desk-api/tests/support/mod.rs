//! Local capture server for HTTP contract tests.
//!
//! Binds `tiny_http` to `127.0.0.1:0`, records every request it receives and
//! answers with a canned response, optionally after a delay.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use desk_api::{ApiClient, StaticToken, TokenSource};

pub const TOKEN: &str = "test-session-token";

#[derive(Debug)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct CaptureServer {
    pub base_url: String,
    rx: Receiver<Captured>,
}

impl CaptureServer {
    /// Answer every request with `status` and `body` immediately.
    pub fn start(status: u16, body: &'static str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO)
    }

    /// Answer every request with `status` and `body` after `delay`.
    pub fn start_with_delay(status: u16, response_body: &'static str, delay: Duration) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind capture server");
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .expect("capture server port");
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = Vec::new();
                let _ = request.as_reader().read_to_end(&mut body);
                let captured = Captured {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| {
                            (
                                h.field.to_string().to_ascii_lowercase(),
                                h.value.to_string(),
                            )
                        })
                        .collect(),
                    body,
                };
                let _ = tx.send(captured);

                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                let response = tiny_http::Response::from_string(response_body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("static header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            rx,
        }
    }

    /// The next captured request, waiting up to five seconds.
    pub fn next(&self) -> Captured {
        self.rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server should have received a request")
    }

    /// A client pointed at this server with [`TOKEN`] as the session token.
    pub fn client(&self) -> ApiClient {
        self.client_with(Arc::new(StaticToken::new(TOKEN)))
    }

    pub fn client_with(&self, tokens: Arc<dyn TokenSource>) -> ApiClient {
        ApiClient::new(&self.base_url, tokens).expect("client should build")
    }

    /// Whether any request arrived within `wait`.
    pub fn received_within(&self, wait: Duration) -> bool {
        self.rx.recv_timeout(wait).is_ok()
    }
}

/// Answer one request with `200` headers at once, then write `chunks` as a
/// chunked body, one every `interval`. Returns the base URL.
pub fn start_trickle(chunks: &'static [&'static str], interval: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind trickle server");
    let port = listener.local_addr().expect("trickle server addr").port();

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line.trim().is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        let mut body = vec![0; content_length];
        let _ = reader.read_exact(&mut body);

        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nTransfer-Encoding: chunked\r\n\r\n",
        );
        let _ = stream.flush();
        for chunk in chunks {
            std::thread::sleep(interval);
            let _ = write!(stream, "{:x}\r\n{chunk}\r\n", chunk.len());
            let _ = stream.flush();
        }
        let _ = stream.write_all(b"0\r\n\r\n");
        let _ = stream.flush();
    });

    format!("http://127.0.0.1:{port}")
}
