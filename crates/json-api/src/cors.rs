//! Cross-origin policy.

use std::time::Duration;

use salvo::{
    cors::{Any, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
};

const MAX_AGE: Duration = Duration::from_secs(600);

/// Browsers on any origin may call the API with a bearer token.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![CONTENT_TYPE, AUTHORIZATION])
        .expose_headers(vec![CONTENT_LENGTH])
        .max_age(MAX_AGE)
        .into_handler()
}
