//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock origin that echoes the request target (path + query) back as
/// a text/plain body. Returns the bound address.
pub async fn start_echo_origin() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        if let Some((target, mut socket)) = read_request(socket).await {
                            let response = format!(
                                "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                target.len(),
                                target
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock origin that returns a fixed response after `delay`.
/// Returns the bound address.
pub async fn start_fixed_origin(
    status: u16,
    content_type: Option<&'static str>,
    body: &'static str,
    delay: Duration,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        if let Some((_, mut socket)) = read_request(socket).await {
                            tokio::time::sleep(delay).await;

                            let status_text = match status {
                                200 => "200 OK",
                                404 => "404 Not Found",
                                500 => "500 Internal Server Error",
                                503 => "503 Service Unavailable",
                                _ => "200 OK",
                            };
                            let content_type_line = content_type
                                .map(|value| format!("Content-Type: {}\r\n", value))
                                .unwrap_or_default();
                            let response = format!(
                                "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status_text,
                                content_type_line,
                                body.len(),
                                body
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Reserve an address with nothing listening on it.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Read the request line and headers, returning the request target.
async fn read_request(socket: TcpStream) -> Option<(String, TcpStream)> {
    let mut reader = BufReader::new(socket);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await.ok()?;
    let target = request_line.split_whitespace().nth(1)?.to_string();

    loop {
        let mut header = String::new();
        reader.read_line(&mut header).await.ok()?;
        if header == "\r\n" || header == "\n" || header.is_empty() {
            break;
        }
    }

    Some((target, reader.into_inner()))
}
