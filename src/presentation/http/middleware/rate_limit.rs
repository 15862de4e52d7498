// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type LoginLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Sign-in attempts a client may fire back to back.
pub const LOGIN_BURST: u32 = 5;
/// Seconds before one more attempt is granted.
pub const LOGIN_REFILL_SECONDS: u64 = 6;

/// Per-client limit on `/api/v1/auth/login`, keyed on forwarding headers
/// first and the peer address otherwise. Shared by every router built in
/// the process.
pub fn login_rate_limit_layer() -> LoginLimiter {
    static LOGIN_LIMITER: OnceLock<LoginLimiter> = OnceLock::new();

    LOGIN_LIMITER
        .get_or_init(|| {
            let config = GovernorConfigBuilder::default()
                .per_second(LOGIN_REFILL_SECONDS)
                .burst_size(LOGIN_BURST)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("login limits are non-zero");
            tracing::debug!(
                burst = LOGIN_BURST,
                refill_seconds = LOGIN_REFILL_SECONDS,
                "login rate limiter ready"
            );

            GovernorLayer::new(config)
        })
        .clone()
}
