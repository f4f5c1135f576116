// tests/fetch.rs
//
// URL sources against a one-shot local HTTP server.
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use bin_lookup::config::options::SourceOptions;
use bin_lookup::loader::{load, read_table};
use bin_lookup::source::Source;
use bin_lookup::status::{Notice, RecordingStatus};
use bin_lookup::store::TableStore;

/// Answer one request with `status` and `body`; the handle yields the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header.trim().is_empty() {
                break;
            }
        }

        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });

    (base, handle)
}

fn opts(location: String, cache_bust: bool) -> SourceOptions {
    SourceOptions { location, cache_bust, timeout_secs: 5 }
}

#[test]
fn not_found_status_is_fetch_error() {
    let (base, server) = serve_once("404 Not Found", "missing");
    let o = opts(format!("{base}/bins.csv"), true);
    let store = TableStore::new();
    let mut status = RecordingStatus::default();

    let err = load(&o.source(), &o, &store, &mut status).unwrap_err();
    server.join().unwrap();

    assert_eq!(err.kind(), "fetch");
    assert!(!store.is_ready());
    assert_eq!(status.notices, vec![Notice::Loading, Notice::LoadFailed]);
}

#[test]
fn url_source_carries_cache_buster() {
    let (base, server) = serve_once("200 OK", "ID,Value\nA1,Bin 1\n");
    let o = opts(format!("{base}/bins.csv"), true);

    let table = read_table(&o.source(), &o).unwrap();
    let request_line = server.join().unwrap();

    assert!(request_line.starts_with("GET /bins.csv?ts="), "{request_line}");
    assert_eq!(table.find("A1").map(|r| r.value.as_str()), Some("Bin 1"));
}

#[test]
fn cache_buster_can_be_disabled() {
    let (base, server) = serve_once("200 OK", "A1,Bin 1\n");
    let o = opts(format!("{base}/bins.csv"), false);

    let table = read_table(&Source::parse(&o.location), &o).unwrap();
    let request_line = server.join().unwrap();

    assert_eq!(request_line, "GET /bins.csv HTTP/1.1");
    assert_eq!(table.len(), 1);
}
