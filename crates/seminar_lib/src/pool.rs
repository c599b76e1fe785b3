//! Contains the type representing the database of the service.

use sea_orm::DbConn;

/// Represents the database of the service.
#[derive(Clone)]
pub struct Database {
    /// The SQL database connection pool.
    pub sql_conn: DbConn,
}

impl From<DbConn> for Database {
    fn from(sql_conn: DbConn) -> Self {
        Self { sql_conn }
    }
}

impl Database {
    /// Returns the database from the URL to the SQL database.
    pub async fn from_db_url(db_url: String) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self { sql_conn })
    }
}
