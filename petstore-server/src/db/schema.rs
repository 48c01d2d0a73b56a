//! Schema bootstrap for the pets table and its statistics view

use sqlx::PgPool;

/// Create the `pets` table and `pet_statistics` view if missing.
///
/// Safe to run on every start.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring pets schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pets (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            age INT NOT NULL,
            owner_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Largest groups first; ties broken by type so the order is stable.
    sqlx::query(
        r#"
        CREATE OR REPLACE VIEW pet_statistics AS
        SELECT
            (SELECT COUNT(*) FROM pets) AS total_pets,
            type,
            COUNT(*) AS count
        FROM pets
        GROUP BY type
        ORDER BY count DESC, type ASC
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Pets schema ready");
    Ok(())
}
