use diesel::prelude::*;

use crate::schema::app_settings;

#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = app_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppSettingDB {
    pub setting_key: String,
    pub setting_value: String,
}
