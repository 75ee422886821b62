//! Migrate command - manual control over the schema version.

use common::{AppError, AppResult};
use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("cannot reach the hotel database: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(failed("apply"))?;
            tracing::info!("Hotel schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(failed("roll back"))?;
            tracing::info!("Reverted the latest hotel schema migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await.map_err(failed("inspect"))?;
            let pending = status.iter().filter(|(_, applied)| !applied).count();

            print!("{}", render_status(&status));
            tracing::info!(total = status.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping guests, hotels, apartments and bookings");
            db.fresh_migrations().await.map_err(failed("recreate"))?;
            tracing::info!("Hotel schema recreated with seeded apartment classes");
        }
    }

    Ok(())
}

fn failed(step: &'static str) -> impl Fn(DbErr) -> AppError {
    move |e| AppError::internal(format!("could not {} migrations: {}", step, e))
}

/// One line per migration, pending ones marked with `*`.
fn render_status(status: &[(String, bool)]) -> String {
    status
        .iter()
        .map(|(name, applied)| {
            let mark = if *applied { ' ' } else { '*' };
            format!("{} {}\n", mark, name)
        })
        .collect()
}
