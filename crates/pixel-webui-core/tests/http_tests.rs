//! Integration tests for request-line parsing and response heads.

use pixel_webui_core::http::{
    ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TargetWriter, TextEncoding,
    find_head_end, parse_request_line, reason_phrase, request_line,
};

fn render(headers: &ResponseHeaders) -> String {
    let mut out = String::new();
    headers.write_to(&mut out).expect("String never fails");
    out
}

#[test]
fn parses_method_and_target() {
    let head = "GET /b?set=10 HTTP/1.1\r\nHost: 192.168.4.1\r\n\r\n";

    assert_eq!(parse_request_line(head), Some((HttpMethod::Get, "/b?set=10")));
}

#[test]
fn rejects_unknown_method_and_missing_target() {
    assert_eq!(parse_request_line("BREW /pot HTTP/1.1\r\n\r\n"), None);
    assert_eq!(parse_request_line("GET\r\n\r\n"), None);
    assert_eq!(parse_request_line(""), None);
}

#[test]
fn request_line_survives_a_truncated_head() {
    let mut head = b"GET /status HTTP/1.1\r\nUser-Agent: ".to_vec();
    head.extend(std::iter::repeat_n(b'x', 600));
    head.truncate(512);

    let line = request_line(&head).expect("first line is complete");

    assert_eq!(line, "GET /status HTTP/1.1");
    assert_eq!(parse_request_line(line), Some((HttpMethod::Get, "/status")));
}

#[test]
fn request_line_ignores_non_utf8_headers() {
    let head = b"GET /red HTTP/1.1\r\nCookie: \xff\xfe\r\n\r\n";

    assert_eq!(request_line(head), Some("GET /red HTTP/1.1"));
}

#[test]
fn request_line_needs_its_line_ending() {
    assert_eq!(request_line(b"GET /status HTTP/1.1"), None);
    assert_eq!(request_line(b"GET /\xff HTTP/1.1\r\n"), None);
}

#[test]
fn finds_end_of_head() {
    let request = b"GET / HTTP/1.1\r\nHost: x\r\n\r\nbody";

    assert_eq!(find_head_end(request), Some(request.len() - 4));
    assert_eq!(find_head_end(b"GET / HTTP/1.1\r\nHost: x\r\n"), None);
}

#[test]
fn writes_plain_text_head() {
    let headers = ResponseHeaders::success()
        .with_content(ContentHeaders::new(ContentType::TextPlain).with_length(13));

    assert_eq!(
        render(&headers),
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 13\r\nConnection: close\r\n\r\n"
    );
}

#[test]
fn writes_html_head_with_charset() {
    let headers = ResponseHeaders::success().with_content(
        ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(5),
    );

    assert_eq!(
        render(&headers),
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 5\r\nConnection: close\r\n\r\n"
    );
}

#[test]
fn not_found_head() {
    let headers = ResponseHeaders::not_found()
        .with_content(ContentHeaders::new(ContentType::TextPlain).with_length(9));

    assert_eq!(
        render(&headers),
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\nConnection: close\r\n\r\n"
    );
}

#[test]
fn bad_request_has_reason_phrase() {
    let headers = ResponseHeaders::from_code(400);

    assert_eq!(render(&headers), "HTTP/1.1 400 Bad Request\r\nConnection: close\r\n\r\n");
    assert_eq!(reason_phrase(404), "Not Found");
    assert_eq!(reason_phrase(414), "URI Too Long");
    assert_eq!(reason_phrase(500), "Internal Server Error");
}
