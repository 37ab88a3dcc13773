//! App Router

use salvo::Router;

use crate::{auth, healthcheck, records};

/// Health and record routes, mounted under `base_path`.
pub(crate) fn app_router(base_path: &str) -> Router {
    let records = Router::with_path("records")
        .hoop(auth::middleware::handler)
        .get(records::index::handler)
        .post(records::create::handler)
        .push(
            Router::with_path("{id}")
                .get(records::get::handler)
                .delete(records::delete::handler),
        );

    let api = Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(records);

    match base_path.trim_matches('/') {
        "" => api,
        prefix => Router::with_path(prefix.to_owned()).push(api),
    }
}
