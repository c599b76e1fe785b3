use anyhow::Context as _;
use migration::MigratorTrait as _;
use sea_orm::ConnectOptions;
use seminar_lib::Database;
use tracing_subscriber::fmt::TestWriter;

pub trait IntoResult {
    type Out;

    fn into_result(self) -> anyhow::Result<Self::Out>;
}

impl IntoResult for () {
    type Out = ();

    fn into_result(self) -> anyhow::Result<Self::Out> {
        Ok(())
    }
}

impl<T, E> IntoResult for Result<T, E>
where
    anyhow::Error: From<E>,
{
    type Out = T;

    fn into_result(self) -> anyhow::Result<Self::Out> {
        self.map_err(From::from)
    }
}

pub fn init_env() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(TestWriter::new())
        .try_init();

    Ok(())
}

/// Runs the provided test with a fresh migrated database.
///
/// The database lives in memory, and is dropped with its only connection at the end of the
/// test.
pub async fn wrap<F, R>(test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: AsyncFnOnce(Database) -> R,
    R: IntoResult,
{
    init_env()?;

    // Each connection to `sqlite::memory:` opens its own database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .context("couldn't open in-memory database")?;
    migration::Migrator::up(&db, None)
        .await
        .context("couldn't run migrations")?;
    tracing::info!("Created in-memory test database");

    test(Database::from(db)).await.into_result()
}
