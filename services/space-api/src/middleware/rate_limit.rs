use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::state::AppState;

/// Per-client request counters: (count, window start)
pub type RateLimiter = Arc<RwLock<HashMap<String, (u32, Instant)>>>;

pub fn new_rate_limiter() -> RateLimiter {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Fixed-window rate limiting keyed by the client address
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client_ip = client_key(&req);
    let max_requests = state.config.rate_limit_max_requests;
    let window = Duration::from_secs(state.config.rate_limit_window_secs);

    check_rate(&state.limiter, &client_ip, max_requests, window, Instant::now()).await?;

    Ok(next.run(req).await)
}

/// Forwarded address first, then the peer address of the connection
fn client_key(req: &Request) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .or_else(|| {
            req.headers()
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
        });

    match forwarded {
        Some(ip) => ip.to_string(),
        None => req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

async fn check_rate(
    limiter: &RateLimiter,
    client: &str,
    max_requests: u32,
    window: Duration,
    now: Instant,
) -> Result<(), ApiError> {
    let mut limiter = limiter.write().await;

    // Drop clients whose window has expired
    limiter.retain(|_, (_, started)| now.duration_since(*started) < window);

    let entry = limiter.entry(client.to_string()).or_insert((0, now));
    entry.0 += 1;

    if entry.0 > max_requests {
        return Err(ApiError::rate_limit(format!(
            "Rate limit exceeded: {} requests per {} seconds",
            max_requests,
            window.as_secs()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};

    fn limiter() -> RateLimiter {
        new_rate_limiter()
    }

    #[tokio::test]
    async fn blocks_after_max_requests_in_window() {
        let limiter = limiter();
        let window = Duration::from_secs(60);
        let now = Instant::now();

        for _ in 0..3 {
            check_rate(&limiter, "10.0.0.1", 3, window, now).await.unwrap();
        }
        let err = check_rate(&limiter, "10.0.0.1", 3, window, now)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);

        // Other clients are counted separately
        check_rate(&limiter, "10.0.0.2", 3, window, now).await.unwrap();
    }

    #[tokio::test]
    async fn window_expiry_resets_the_count() {
        let limiter = limiter();
        let window = Duration::from_secs(60);
        let start = Instant::now();

        check_rate(&limiter, "10.0.0.1", 1, window, start).await.unwrap();
        assert!(check_rate(&limiter, "10.0.0.1", 1, window, start).await.is_err());

        let later = start + Duration::from_secs(61);
        check_rate(&limiter, "10.0.0.1", 1, window, later).await.unwrap();
    }

    #[test]
    fn client_key_prefers_forwarded_header_then_peer_address() {
        let req = HttpRequest::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_key(&req), "203.0.113.7");

        let mut req = HttpRequest::builder().body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([198, 51, 100, 4], 50000))));
        assert_eq!(client_key(&req), "198.51.100.4");

        let req = HttpRequest::builder().body(Body::empty()).unwrap();
        assert_eq!(client_key(&req), "unknown");
    }
}
