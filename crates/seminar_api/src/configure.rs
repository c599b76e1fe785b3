use actix_web::{Responder, web};
use seminar_lib::Database;
use tracing_actix_web::{DefaultRootSpanBuilder, RequestId, RootSpanBuilder};

use crate::{FitRequestId as _, SeminarErrorKind, SeminarResponse};

/// The actix route handler for the Not Found response.
async fn not_found(req_id: RequestId) -> SeminarResponse<impl Responder> {
    Err::<String, _>(SeminarErrorKind::EndpointNotFound).fit(req_id)
}

/// Records the state of the connection pool in the root span of each request.
pub struct CustomRootSpanBuilder;

impl RootSpanBuilder for CustomRootSpanBuilder {
    fn on_request_start(request: &actix_web::dev::ServiceRequest) -> tracing::Span {
        let (pool_size, pool_num_idle) = request
            .app_data::<Database>()
            .map(pool_state)
            .unwrap_or_default();

        tracing_actix_web::root_span!(
            request,
            pool_size = pool_size,
            pool_num_idle = pool_num_idle,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

fn pool_state(db: &Database) -> (u32, usize) {
    #[allow(unreachable_patterns)]
    match db.sql_conn {
        #[cfg(feature = "mysql")]
        sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(_) => {
            let pool = db.sql_conn.get_mysql_connection_pool();
            (pool.size(), pool.num_idle())
        }
        #[cfg(feature = "postgres")]
        sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(_) => {
            let pool = db.sql_conn.get_postgres_connection_pool();
            (pool.size(), pool.num_idle())
        }
        #[cfg(feature = "sqlite")]
        sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(_) => {
            let pool = db.sql_conn.get_sqlite_connection_pool();
            (pool.size(), pool.num_idle())
        }
        _ => (0, 0),
    }
}

/// Returns the maximum amount of connections of the pool.
pub fn max_connections(db: &Database) -> u32 {
    #[allow(unreachable_patterns)]
    match db.sql_conn {
        #[cfg(feature = "mysql")]
        sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(_) => db
            .sql_conn
            .get_mysql_connection_pool()
            .options()
            .get_max_connections(),
        #[cfg(feature = "postgres")]
        sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(_) => db
            .sql_conn
            .get_postgres_connection_pool()
            .options()
            .get_max_connections(),
        #[cfg(feature = "sqlite")]
        sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(_) => db
            .sql_conn
            .get_sqlite_connection_pool()
            .options()
            .get_max_connections(),
        _ => 0,
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, db: Database) {
    cfg.app_data(db)
        .service(crate::http::api_route())
        .default_service(web::to(not_found));
}
