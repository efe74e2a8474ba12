#[tokio::main]
async fn main() {
    rescue_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("no JWT_SECRET in the environment, falling back to the dev secret");
        "dev-secret".to_string()
    });
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = rescue_api::app::build_app(jwt_secret);

    let listener = tokio::net::TcpListener::bind(bind_addr.as_str())
        .await
        .unwrap_or_else(|e| panic!("cannot bind {bind_addr}: {e}"));

    tracing::info!(addr = %listener.local_addr().unwrap(), "rescue backend up");

    axum::serve(listener, app).await.unwrap();
}
