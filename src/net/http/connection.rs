use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::{String, Vec};
use pixel_webui_core::http::{
    ContentHeaders,
    ContentType,
    HttpMethod,
    ResponseHeaders,
    StatusCode,
    TargetWriter as _,
    TextEncoding,
    find_head_end,
    parse_request_line,
    request_line,
};

use super::{Error, HttpResult};

const HEADER_BUFFER_SIZE: usize = 512;
const STREAM_CHUNK_SIZE: usize = 1024;
const TARGET_CAPACITY: usize = 128;

/// HTTP connection context
///
/// Holds one request head. Bodies are never read; every registered path is
/// driven by its target alone.
pub(crate) struct HttpConnection<'a> {
    pub(crate) method: HttpMethod,

    target: String<TARGET_CAPACITY>,
    socket: TcpSocket<'a>,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Read and parse the request head from an accepted socket.
    ///
    /// Heads longer than the buffer are cut short; only the request line
    /// is needed. Unusable request lines are answered before the socket is
    /// dropped.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut header_buf = Vec::<u8, HEADER_BUFFER_SIZE>::new();
        let _ = header_buf.resize_default(HEADER_BUFFER_SIZE);
        let header_len = read_heading(header_buf.as_mut_slice(), &mut socket).await?;

        let Some(line) = request_line(&header_buf[..header_len]) else {
            return Err(if header_len == HEADER_BUFFER_SIZE {
                reject(socket, 414, Error::TooLarge).await
            } else {
                reject(socket, 400, Error::Parse).await
            });
        };
        let Some((method, raw_target)) = parse_request_line(line) else {
            return Err(reject(socket, 400, Error::Parse).await);
        };

        let mut target = String::new();
        if target.push_str(raw_target).is_err() {
            return Err(reject(socket, 414, Error::TooLarge).await);
        }
        header_buf.clear();

        Ok(Self {
            method,
            target,
            socket,
            header_buf,
        })
    }

    /// Request target, path plus optional query.
    pub(crate) fn target(&self) -> &str {
        self.target.as_str()
    }

    /// Write the headers to the connection
    pub(crate) async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut self.header_buf)?;
        self.socket.write_all(self.header_buf.as_slice()).await?;
        Ok(())
    }

    /// Write the body to the connection
    pub(crate) async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.socket.write_all(chunk).await?;
        }
        self.socket.flush().await?;
        Ok(())
    }

    /// Write a `text/plain` response.
    pub(crate) async fn write_text(&mut self, headers: ResponseHeaders, text: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextPlain).with_length(text.len());
        self.write_headers(&headers.with_content(content)).await?;
        self.write_body(text.as_bytes()).await
    }

    /// Write the web page.
    pub(crate) async fn write_page(&mut self, html: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(html.len());
        self.write_headers(&ResponseHeaders::success().with_content(content))
            .await?;
        self.write_body(html.as_bytes()).await
    }

    /// Send FIN and wait until everything queued has left the socket.
    pub(crate) async fn close(mut self) {
        self.socket.close();
        let _ = self.socket.flush().await;
    }
}

/// Read until the blank line that ends the head or the buffer is full.
///
/// Returns the number of bytes read.
async fn read_heading(buf: &mut [u8], socket: &mut TcpSocket<'_>) -> Result<usize, Error> {
    let mut header_len = 0;
    loop {
        let n = socket.read(&mut buf[header_len..]).await?;
        if n == 0 {
            return Err(Error::Closed);
        }
        header_len += n;
        if find_head_end(&buf[..header_len]).is_some() || header_len >= buf.len() {
            return Ok(header_len);
        }
    }
}

/// Answer with a bare status line and close.
async fn reject(mut socket: TcpSocket<'_>, status: StatusCode, error: Error) -> Error {
    let mut head = Vec::<u8, 64>::new();
    if ResponseHeaders::from_code(status).write_to(&mut head).is_ok() {
        let _ = socket.write_all(&head).await;
    }
    socket.close();
    let _ = socket.flush().await;
    error
}
