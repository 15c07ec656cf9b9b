//! Mock payments API server for testing
//!
//! Serves the same response shapes as the real API:
//! - GET /contacts returns { contacts: [...] }
//! - GET /cards returns { cards: [...] }
//! - GET /transfers returns { transfers: [...] }

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::{Card, Contact, Transfer};

/// Mock payments server for testing
pub struct MockPaymentsServer {
    port: u16,
    running: Arc<AtomicBool>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub num_contacts: usize,
    pub num_cards: usize,
    pub num_transfers: usize,
    /// Answer every request with this status instead of data
    pub fail_status: Option<u16>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            num_contacts: 3,
            num_cards: 2,
            num_transfers: 4,
            fail_status: None,
        }
    }
}

impl MockPaymentsServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        // Non-blocking accept so stop() can end the loop
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        thread::spawn(move || handle_connection(stream, &cfg));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockPaymentsServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);
    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();

    if parts.len() < 2 {
        send_response(&mut stream, 400, "Bad Request", r#"{"error": "Invalid request"}"#);
        return;
    }

    if let Some(status) = config.fail_status {
        send_response(
            &mut stream,
            status,
            "Error",
            r#"{"error": "Service temporarily unavailable"}"#,
        );
        return;
    }

    let path = parts[1].split('?').next().unwrap_or(parts[1]);
    let body = match (parts[0], path) {
        ("GET", "/contacts") => json!({ "contacts": mock_contacts(config.num_contacts) }),
        ("GET", "/cards") => json!({ "cards": mock_cards(config.num_cards) }),
        ("GET", "/transfers") => json!({ "transfers": mock_transfers(config.num_transfers) }),
        ("GET", _) => {
            send_response(&mut stream, 404, "Not Found", r#"{"error": "Endpoint not found"}"#);
            return;
        }
        _ => {
            send_response(
                &mut stream,
                405,
                "Method Not Allowed",
                r#"{"error": "Method not allowed"}"#,
            );
            return;
        }
    };

    send_response(&mut stream, 200, "OK", &body.to_string());
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn mock_contacts(count: usize) -> Vec<Contact> {
    (1..=count)
        .map(|i| Contact::new(format!("Contact {}", i), format!("+1 555 01{:02}", i)))
        .collect()
}

fn mock_cards(count: usize) -> Vec<Card> {
    (1..=count)
        .map(|i| Card::new(format!("**** {:04}", 4240 + i), "Test Holder"))
        .collect()
}

fn mock_transfers(count: usize) -> Vec<Transfer> {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let transfer = Transfer::new(
                format!("Transfer {}", i + 1),
                Decimal::new(1000 * (i as i64 + 1), 2),
                if i % 2 == 0 { "USD" } else { "EUR" },
                start + Duration::days(i as i64),
            );
            if i % 2 == 0 {
                transfer.sent_to("Me", format!("Contact {}", i + 1))
            } else {
                transfer.received_from(format!("Contact {}", i + 1), "Me")
            }
        })
        .collect()
}
