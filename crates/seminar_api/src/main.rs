//! The seminar API program.
//!
//! The program also includes a [library](seminar_api_lib). Overall, it uses the [`seminar_lib`]
//! crate as a main dependency.

use actix_cors::Cors;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::{
    App, HttpServer,
    cookie::{Key, time::Duration as CookieDuration},
};
use anyhow::Context;
use migration::MigratorTrait;
use mkenv::prelude::*;
use seminar_api_lib::configure::{self, CustomRootSpanBuilder};
use seminar_lib::Database;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn session_key(raw: String) -> anyhow::Result<Key> {
    if cfg!(debug_assertions) && raw.is_empty() {
        tracing::warn!("No session key provided, using a random one");
        return Ok(Key::generate());
    }

    Key::try_from(raw.as_bytes())
        .map_err(|e| anyhow::anyhow!("invalid session key (at least 64 bytes expected): {e}"))
}

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }
    let env = seminar_api_lib::init_env()?;

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let db = Database::from_db_url(env.db_env.db_url.db_url.get())
        .await
        .context("Cannot connect to the database")?;

    migration::Migrator::up(&db.sql_conn, None)
        .await
        .context("Cannot run the migrations")?;

    tracing::info!(
        "Using max connections: {}",
        configure::max_connections(&db)
    );

    let sess_key = session_key(env.sess_key.sess_key.get())?;
    let session_ttl = CookieDuration::seconds(env.session_ttl.get() as i64);
    #[cfg(not(debug_assertions))]
    let host = env.host.host.get();

    HttpServer::new(move || {
        let cors = Cors::default()
            .supports_credentials()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["accept", "content-type"])
            .max_age(3600);
        #[cfg(debug_assertions)]
        let cors = cors.allow_any_origin();
        #[cfg(not(debug_assertions))]
        let cors = cors.allowed_origin(&host);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::<CustomRootSpanBuilder>::new())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), sess_key.clone())
                    .cookie_secure(cfg!(not(debug_assertions)))
                    .cookie_content_security(CookieContentSecurity::Private)
                    .session_lifecycle(PersistentSession::default().session_ttl(session_ttl))
                    .build(),
            )
            .configure(|cfg| configure::configure(cfg, db.clone()))
    })
    .bind(("0.0.0.0", env.port.get()))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}
