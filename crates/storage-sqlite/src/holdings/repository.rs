use diesel::prelude::*;
use std::sync::Arc;

use super::model::HoldingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::holdings::dsl::*;
use folionest_core::errors::Result;
use folionest_core::holdings::{Holding, HoldingsRepositoryTrait};

pub struct HoldingsRepository {
    pool: Arc<DbPool>,
}

impl HoldingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        HoldingsRepository { pool }
    }
}

impl HoldingsRepositoryTrait for HoldingsRepository {
    fn list(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<HoldingDB> = holdings
            .order(symbol.asc())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Holding::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_by_symbol(&self, sym: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let row: Option<HoldingDB> = holdings
            .filter(symbol.eq(sym))
            .first::<HoldingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        row.map(|r| Holding::try_from(r).map_err(Into::into))
            .transpose()
    }

    fn upsert(&self, holding: &Holding) -> Result<Holding> {
        let mut conn = get_connection(&self.pool)?;
        let row = HoldingDB::from_domain(holding);
        // Leaves created_at untouched when the row already exists.
        diesel::insert_into(holdings)
            .values(&row)
            .on_conflict(symbol)
            .do_update()
            .set((
                quantity.eq(row.quantity.clone()),
                unit_cost.eq(row.unit_cost.clone()),
                updated_at.eq(row.updated_at),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(holding.clone())
    }

    fn delete(&self, sym: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let removed = diesel::delete(holdings.filter(symbol.eq(sym)))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(removed)
    }

    fn delete_all(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let removed = diesel::delete(holdings)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(removed)
    }
}
