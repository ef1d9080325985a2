//! Stub HTTP backend served on an ephemeral local port

use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on 127.0.0.1 and return its base URL
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend");
    });

    format!("http://{}", addr)
}

/// A base URL nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}
