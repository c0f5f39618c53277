#![allow(dead_code)]

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const EXAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>  Example Domain  </title>
    <meta name="description" content=" An example page for tests. ">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <h1>Example</h1>
    <img src="images/hero.png" alt="hero">
    <a href="https://www.linkedin.com/company/example">LinkedIn</a>
    <a href="/about">About</a>
    <a href="https://twitter.com/example">Twitter</a>
</body>
</html>"#;

/// Serves `app` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A localhost address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
