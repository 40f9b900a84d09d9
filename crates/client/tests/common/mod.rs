//! Shared stub-backend plumbing for the client integration tests.
//!
//! Each test builds an [`axum::Router`] that scripts exactly the
//! backend behavior it needs, serves it on an ephemeral local port,
//! and points a real [`reviewer_client::ReviewerApi`] at it.

use axum::Router;

use reviewer_client::ReviewerApi;

/// Serve `router` under the `/api` prefix on an ephemeral port and
/// return a client configured against it.
pub async fn client_for(router: Router) -> ReviewerApi {
    let app = Router::new().nest("/api", router);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend exited");
    });
    ReviewerApi::new(format!("http://{addr}/api"))
}
