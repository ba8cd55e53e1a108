//! Repository for the `clients` table.

use parklot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::client::{Client, CreateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, surname, credit_card, car_number, email, created_at, updated_at";

/// Registration and lookup for clients. Clients are never updated here.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// A duplicate email fails with a unique violation on `uq_clients_email`.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, surname, credit_card, car_number, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.credit_card)
            .bind(&input.car_number)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id ASC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Whether a client with the given ID exists, checked inside a transaction.
    ///
    /// Takes a key-share lock so the row cannot be deleted before the
    /// transaction ends.
    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM clients WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(row.is_some())
    }
}
