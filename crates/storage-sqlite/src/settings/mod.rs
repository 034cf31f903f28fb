pub mod model;
pub mod repository;

pub use model::AppSettingDB;
pub use repository::SettingsRepository;
