//! Minimal HTTP/1.1 server standing in for xkcd.com in integration tests.
//!
//! Serves `/<id>/info.0.json` and `/<id>/` for the comics it was started with;
//! anything else gets a 404 HTML page.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

pub const INTERNAL_MONOLOGUES_JSON: &str = r#"{"month": "10", "num": 2057, "link": "", "year": "2018", "news": "", "safe_title": "Internal Monologues", "transcript": "", "alt": "Haha, just kidding, everyone's already been hacked. I wonder if today's the day we find out about it.", "img": "https://imgs.xkcd.com/comics/internal_monologues.png", "title": "Internal Monologues", "day": "10"}"#;

pub const INTERNAL_MONOLOGUES_HTML: &str = r#"<!DOCTYPE html>
<html><head><title>xkcd: Internal Monologues</title></head><body>
<div id="ctitle">Internal Monologues</div>
<div id="comic">
<img src="//imgs.xkcd.com/comics/internal_monologues.png" title="Haha, just kidding, everyone's already been hacked." alt="Internal Monologues" />
</div>
</body></html>"#;

/// Serves `INTERNAL_MONOLOGUES_*` as comic 2057. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start() -> String {
    let mut routes = HashMap::new();
    routes.insert(
        "/2057/info.0.json".to_string(),
        ("application/json", INTERNAL_MONOLOGUES_JSON.to_string()),
    );
    routes.insert(
        "/2057/".to_string(),
        ("text/html", INTERNAL_MONOLOGUES_HTML.to_string()),
    );
    // A comic whose JSON is broken.
    routes.insert(
        "/404/info.0.json".to_string(),
        ("application/json", "{\"num\": 404, \"title\": ".to_string()),
    );
    start_with_routes(routes)
}

pub fn start_with_routes(routes: HashMap<String, (&'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, (&'static str, String)>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }
    let (status, content_type, body) = match routes.get(path) {
        Some((ct, body)) => ("200 OK", *ct, body.as_str()),
        None => ("404 Not Found", "text/html", "<html><body><h1>404 Not Found</h1></body></html>"),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
