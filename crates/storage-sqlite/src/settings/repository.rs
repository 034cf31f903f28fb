use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::app_settings::dsl::*;
use folionest_core::errors::Result;
use folionest_core::settings::SettingsRepositoryTrait;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value: Option<String> = app_settings
            .filter(setting_key.eq(key))
            .select(setting_value)
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(AppSettingDB {
                setting_key: key.to_string(),
                setting_value: value.to_string(),
            })
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
