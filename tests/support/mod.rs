#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    thread::{self, JoinHandle},
    time::Duration,
};

/// Request line, headers and body as the stub saw them.
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Single-shot HTTP server answering one request with a canned response.
pub struct StubServer {
    pub endpoint: String,
    handle: JoinHandle<CapturedRequest>,
}

impl StubServer {
    pub fn respond(status: u16, body: &str) -> Self {
        Self::respond_after(status, body, Duration::ZERO)
    }

    pub fn respond_after(status: u16, body: &str, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub addr");
        let body = body.to_string();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept request");
            let captured = read_request(&stream);
            thread::sleep(delay);
            write_response(stream, status, &body);
            captured
        });
        Self {
            endpoint: format!("http://{addr}/predict"),
            handle,
        }
    }

    pub fn captured(self) -> CapturedRequest {
        self.handle.join().expect("stub thread")
    }
}

/// An endpoint nothing is listening on.
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}/predict")
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).expect("request body");

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8(body).expect("utf-8 body"),
    }
}

fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    // The client may already have given up on a delayed response.
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
