// WebSocket test utilities

use std::net::TcpListener;

use actix_web::{web, App, HttpServer};
use backend::middleware::request_log::RequestLog;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;

/// Start a test HTTP server with the full route set
///
/// Creates a real HTTP server bound to a random port, allowing tests to
/// connect via real WebSocket clients (tokio-tungstenite).
///
/// # Returns
/// Returns a tuple of (server_handle, socket_addr, join_handle) where:
/// - `server_handle` can be used to gracefully stop the server
/// - `socket_addr` is the address the server is listening on
/// - `join_handle` can be awaited to wait for server shutdown
pub async fn start_test_server(
    state: AppState,
) -> Result<
    (
        actix_web::dev::ServerHandle,
        std::net::SocketAddr,
        tokio::task::JoinHandle<Result<(), std::io::Error>>,
    ),
    Box<dyn std::error::Error>,
> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLog)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    // Start server in background and return handle + join
    let server_handle = server.handle();
    let join = tokio::spawn(server);

    Ok((server_handle, addr, join))
}
