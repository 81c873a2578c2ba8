use embassy_time::{Duration, Timer};
use log::{debug, info};
use pixel_webui_core::{
    Body,
    CommandRequest,
    CommandRouter,
    FollowUp,
    PixelDriver,
    Reply,
    SystemRestart,
};
use pixel_webui_core::http::ResponseHeaders;
use pixel_webui_page::INDEX_HTML;

use crate::net::http::{HttpConnection, HttpHandler, HttpResult};

const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Bridges the HTTP transport to the [`CommandRouter`].
///
/// Runs the restart follow-up once the reply has left the socket.
pub struct PixelHttpController<D: PixelDriver + 'static, R: SystemRestart> {
    router: CommandRouter<'static, D>,
    restart: R,
    restart_grace: Duration,
}

impl<D: PixelDriver + 'static, R: SystemRestart> PixelHttpController<D, R> {
    pub fn new(router: CommandRouter<'static, D>, restart: R, restart_grace: Duration) -> Self {
        Self {
            router,
            restart,
            restart_grace,
        }
    }
}

impl<D: PixelDriver + 'static, R: SystemRestart> HttpHandler for PixelHttpController<D, R> {
    async fn handle_request(&mut self, mut conn: HttpConnection<'_>) -> HttpResult {
        debug!("http: {:?} {}", conn.method, conn.target());

        let request = CommandRequest::from_target(conn.target());
        let Some(reply) = self.router.route(&request) else {
            return serve_404(conn).await;
        };

        let written = write_reply(&mut conn, &reply).await;
        conn.close().await;

        if reply.follow_up == Some(FollowUp::Restart) {
            info!("Restarting in {} ms", self.restart_grace.as_millis());
            Timer::after(self.restart_grace).await;
            self.restart.restart();
        }
        written
    }
}

async fn write_reply(conn: &mut HttpConnection<'_>, reply: &Reply) -> HttpResult {
    match &reply.body {
        Body::Page => conn.write_page(INDEX_HTML).await,
        Body::Text(text) => {
            conn.write_text(ResponseHeaders::from_code(reply.status), text)
                .await
        }
    }
}

async fn serve_404(mut conn: HttpConnection<'_>) -> HttpResult {
    let written = conn
        .write_text(ResponseHeaders::not_found(), NOT_FOUND_MESSAGE)
        .await;
    conn.close().await;
    written
}
