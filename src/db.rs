use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::StoreResult;

const SCHEMA: &str = include_str!("../migrations/001_initial.sql");

pub async fn connect_and_migrate(opts: impl Into<ConnectOptions>) -> StoreResult<DatabaseConnection> {
    let db = Database::connect(opts).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA journal_mode=WAL".to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA synchronous=NORMAL".to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys=ON".to_string(),
    ))
    .await?;

    run_sql(&db, SCHEMA).await?;
    tracing::info!("database schema applied");
    Ok(db)
}

async fn run_sql(db: &DatabaseConnection, sql: &str) -> StoreResult<()> {
    for stmt in sql.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(db.get_database_backend(), stmt.to_string())).await?;
    }
    Ok(())
}
