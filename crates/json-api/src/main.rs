//! Sea Life JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use thiserror::Error;
use tracing::{error, info};

use sealife_app::context::{AppContext, AppInitError};

use crate::{
    config::{ServerConfig, storage::StorageBackend},
    observability::{Observability, metrics_handler, request_logging},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod cors;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod records;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

#[derive(Debug, Error)]
enum StartupError {
    #[error("DATABASE_URL is required for the postgres storage backend")]
    MissingDatabaseUrl,

    #[error("failed to initialize app context: {0}")]
    App(#[from] AppInitError),
}

/// Sea Life JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "observability failed to initialize, so no subscriber is available"
            )]
            {
                eprintln!("Observability error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let exit_code = match serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");

            ExitCode::FAILURE
        }
    };

    observability.shutdown();

    exit_code
}

async fn build_app_context(config: &ServerConfig) -> Result<AppContext, StartupError> {
    let api_token = config.auth.api_token.as_deref();

    match config.storage.backend {
        StorageBackend::Memory => Ok(AppContext::in_memory(api_token)),
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .as_deref()
                .ok_or(StartupError::MissingDatabaseUrl)?;

            Ok(AppContext::from_database_url(url, api_token).await?)
        }
    }
}

async fn serve(config: &ServerConfig) -> Result<(), StartupError> {
    let app = build_app_context(config).await?;

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(router::app_router(&config.server.base_path));

    let doc = OpenApi::new("Sea Life API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(Service::new(router).hoop(cors::handler()))
        .await;

    info!("server stopped");

    Ok(())
}
