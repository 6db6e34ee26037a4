//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test arranca el servidor real en un puerto efímero dentro de un
//! thread y le habla por TCP crudo.

use flate2::read::GzDecoder;
use http_lite::handlers;
use http_lite::router::Router;
use http_lite::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Helper: arranca un servidor con las rutas de la aplicación
fn start_server(directory: Option<PathBuf>) -> SocketAddr {
    let mut router = Router::new();
    handlers::register(&mut router, directory).expect("rutas válidas");

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let server = Server::new("127.0.0.1:0", router.freeze());
        server.start_listening(
            move |addr| tx.send(addr).expect("test vivo"),
            |e| panic!("bind failed: {}", e),
        );
    });

    rx.recv_timeout(Duration::from_secs(5)).expect("servidor listo")
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(request).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: separa headers (como texto) y body (bytes)
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("fin de headers");
    (
        String::from_utf8(response[..pos + 4].to_vec()).unwrap(),
        response[pos + 4..].to_vec(),
    )
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("http_lite_it_{}_{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_root_exact_response() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_echo_endpoint() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET /echo/abc HTTP/1.1\r\nHost: x\r\n\r\n");
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", head);
    assert!(head.contains("Content-Type: text/plain\r\n"));
    assert!(head.contains("Content-Length: 3\r\n"));
    assert_eq!(body, b"abc");
}

#[test]
fn test_echo_does_not_match_nested_path() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET /echo/abc/def HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_echo_gzip() {
    let addr = start_server(None);

    let response = send_raw(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: invalid-encoding, gzip, deflate\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(head.contains("Content-Encoding: gzip\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", body.len())));

    let mut decoded = String::new();
    GzDecoder::new(&body[..]).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "abc");
}

#[test]
fn test_echo_without_gzip_support() {
    let addr = start_server(None);

    let response = send_raw(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: invalid-encoding\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(!head.contains("Content-Encoding"));
    assert_eq!(body, b"abc");
}

#[test]
fn test_user_agent_endpoint() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n");
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, b"foobar/1.2.3");
}

#[test]
fn test_not_found() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET /nonexistent HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_method_not_allowed() {
    let addr = start_server(None);

    let response = send_raw(addr, b"POST /echo/abc HTTP/1.1\r\nContent-Length: 0\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
}

#[test]
fn test_bad_request() {
    let addr = start_server(None);

    let response = send_raw(addr, b"GET /echo/abc\r\n\r\n");
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(String::from_utf8(body).unwrap().contains("Malformed request line"));
}

#[test]
fn test_files_roundtrip() {
    let dir = scratch_dir("files");
    let addr = start_server(Some(dir.clone()));

    let created = send_raw(
        addr,
        b"POST /files/notes.txt HTTP/1.1\r\n\
          Content-Type: application/octet-stream\r\n\
          Content-Length: 12\r\n\r\nhello, files",
    );
    assert_eq!(created, b"HTTP/1.1 201 Created\r\n\r\n");
    assert_eq!(std::fs::read(dir.join("notes.txt")).unwrap(), b"hello, files");

    let response = send_raw(addr, b"GET /files/notes.txt HTTP/1.1\r\n\r\n");
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: application/octet-stream\r\n"));
    assert!(head.contains("Content-Length: 12\r\n"));
    assert_eq!(body, b"hello, files");
}

#[test]
fn test_missing_file() {
    let addr = start_server(Some(scratch_dir("missing")));

    let response = send_raw(addr, b"GET /files/non_existent_file HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_concurrent_connections() {
    let addr = start_server(None);

    let clients: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let request = format!("GET /echo/client{} HTTP/1.1\r\n\r\n", i);
                let response = send_raw(addr, request.as_bytes());
                let (_, body) = split_response(&response);
                assert_eq!(body, format!("client{}", i).as_bytes());
            })
        })
        .collect();

    for client in clients {
        client.join().unwrap();
    }
}
