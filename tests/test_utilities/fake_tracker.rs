//! Minimal HTTP responder standing in for a Dependency-Track server
//!
//! Serves one canned response per accepted connection, in order, and hands
//! back the raw requests it received.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub const PROJECT_UUID: &str = "3f9c1b9e-5c55-4d8f-9a41-2f3b0c7e8d11";

pub struct FakeTracker {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl FakeTracker {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                requests.push(read_request(&mut stream));
                let response = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            requests
        });

        Self { base_url, handle }
    }

    /// Happy path: project created, found once, SBOM accepted
    pub fn publishing(name: &str, version: &str) -> Self {
        Self::start(vec![
            (201, format!(r#"{{"name":"{}","version":"{}","uuid":"{}"}}"#, name, version, PROJECT_UUID)),
            (
                200,
                format!(
                    r#"[{{"name":"{}","version":"{}","uuid":"{}","active":true}}]"#,
                    name, version, PROJECT_UUID
                ),
            ),
            (200, r#"{"token":"7d1a2b3c-0000-4000-8000-000000000000"}"#.to_string()),
        ])
    }

    /// Waits for all canned responses to be served and returns the requests
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            return String::from_utf8_lossy(&data).into_owned();
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());
    let chunked = head.contains("transfer-encoding: chunked");

    loop {
        let body = &data[header_end..];
        let complete = match content_length {
            Some(length) => body.len() >= length,
            None if chunked => body.ends_with(b"0\r\n\r\n"),
            None => true,
        };
        if complete {
            break;
        }
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&data).into_owned()
}
