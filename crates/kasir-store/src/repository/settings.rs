//! # Settings Repository
//!
//! The singleton branding record.

use kasir_core::AppSettings;
use tracing::info;

use crate::database::{Operation, Shared};
use crate::error::StoreResult;

#[derive(Clone)]
pub struct SettingsRepository {
    shared: Shared,
}

impl SettingsRepository {
    pub(crate) fn new(shared: Shared) -> Self {
        SettingsRepository { shared }
    }

    pub async fn get_app_settings(&self) -> StoreResult<AppSettings> {
        self.shared.latency(Operation::GetAppSettings).await;
        Ok(self.shared.tables.read().await.settings.clone())
    }

    /// Replaces the settings and returns the stored copy.
    pub async fn save_app_settings(&self, settings: AppSettings) -> StoreResult<AppSettings> {
        self.shared.latency(Operation::SaveAppSettings).await;
        let mut tables = self.shared.tables.write().await;
        tables.settings = settings;
        info!(app_name = %tables.settings.app_name, "App settings saved");
        Ok(tables.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use kasir_core::AppSettings;

    #[tokio::test]
    async fn test_save_and_get() {
        let db = Database::in_memory();
        assert_eq!(
            db.settings().get_app_settings().await.unwrap().app_name,
            "KasirCerdas"
        );

        let saved = db
            .settings()
            .save_app_settings(AppSettings {
                app_name: "Warung Kopi".to_string(),
                logo: "data:image/png;base64,AAAA".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(db.settings().get_app_settings().await.unwrap(), saved);
    }
}
