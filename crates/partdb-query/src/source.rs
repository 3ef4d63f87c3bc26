//! Inventory source backends.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::QueryError;
use crate::records::{LocationRecord, PartRecord};

// Inner join: a part whose storage location is gone, or a location
// without a resolvable parent, is excluded from the export.
const PARTS_QUERY: &str = r"SELECT
    parts.id,
    parts.name,
    parts.comment,
    parts.description,
    parts.instock,
    storelocations.name AS Lagerplatz
FROM
    parts
INNER JOIN storelocations ON
    parts.id_storelocation = storelocations.id
WHERE parts.id >= ?
ORDER BY parts.id";

const LOCATIONS_QUERY: &str = r"SELECT
    a.id, a.name, a.comment,
    b.name AS Lagerort
FROM
    storelocations a
        INNER JOIN storelocations b ON
            b.id = a.parent_id
WHERE a.id >= ?
ORDER BY a.id";

/// Read access to the inventory tables.
///
/// `start_id` is an inclusive lower bound on the primary key; rows
/// come back ordered ascending by id. Pass 0 for everything, or the
/// last seen id plus one to resume a partial export.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn fetch_parts(&self, start_id: i64) -> Result<Vec<PartRecord>, QueryError>;
    async fn fetch_locations(&self, start_id: i64) -> Result<Vec<LocationRecord>, QueryError>;
}

/// Inventory source backed by the Part-DB MySQL schema.
pub struct MySqlInventorySource {
    pool: MySqlPool,
}

impl MySqlInventorySource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventorySource for MySqlInventorySource {
    async fn fetch_parts(&self, start_id: i64) -> Result<Vec<PartRecord>, QueryError> {
        let rows: Vec<PartRecord> = sqlx::query_as(PARTS_QUERY)
            .bind(start_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(PartRecord::normalize).collect())
    }

    async fn fetch_locations(&self, start_id: i64) -> Result<Vec<LocationRecord>, QueryError> {
        let rows: Vec<LocationRecord> = sqlx::query_as(LOCATIONS_QUERY)
            .bind(start_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(LocationRecord::normalize).collect())
    }
}
