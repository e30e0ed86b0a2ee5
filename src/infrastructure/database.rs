use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::infrastructure::{entity::users, settings::Settings};

pub async fn connect(settings: &Settings) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(settings.database_url.clone());
    opt.max_connections(settings.db_max_connections)
        .min_connections(settings.db_min_connections)
        .sqlx_logging(true);

    Database::connect(opt).await
}

/// Create the `users` table from the entity definition unless it already exists
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut table = Schema::new(backend).create_table_from_entity(users::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    info!("users table ready");
    Ok(())
}
