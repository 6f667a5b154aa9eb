//! # Theme Manager
//!
//! Tracks the light/dark selection with a lifecycle independent of the
//! session. The persisted preference wins; on first run the manager falls
//! back to the device-reported color scheme injected by the platform
//! layer. Storage failures are logged and ignored - theme is non-critical
//! and never blocks a transition.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::service::SessionVault;

/// Light/dark selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Owns the theme selection and its persistence.
pub struct ThemeManager {
    vault: Arc<dyn SessionVault>,
    /// Fallback when nothing is persisted yet.
    device_scheme: ThemeMode,
    mode: parking_lot::RwLock<ThemeMode>,
}

impl ThemeManager {
    pub fn new(vault: Arc<dyn SessionVault>, device_scheme: ThemeMode) -> Self {
        Self {
            vault,
            device_scheme,
            mode: parking_lot::RwLock::new(device_scheme),
        }
    }

    /// Current selection.
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Load the persisted preference, falling back to the device scheme.
    ///
    /// Read failures also fall back; they do not surface to the user.
    pub async fn load(&self) -> ThemeMode {
        let loaded = match self.vault.theme().await {
            Ok(Some(mode)) => mode,
            Ok(None) => self.device_scheme,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load persisted theme, using device scheme");
                self.device_scheme
            }
        };
        *self.mode.write() = loaded;
        loaded
    }

    /// Persist and apply an explicit selection.
    pub async fn set_theme(&self, mode: ThemeMode) -> ThemeMode {
        if let Err(e) = self.vault.store_theme(mode).await {
            tracing::warn!(error = %e, theme = mode.as_str(), "Failed to persist theme selection");
        }
        *self.mode.write() = mode;
        mode
    }

    /// Flip between light and dark.
    pub async fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_theme(next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryVault;

    #[tokio::test]
    async fn test_first_run_uses_device_scheme() {
        let vault = Arc::new(MemoryVault::new());
        let manager = ThemeManager::new(vault, ThemeMode::Dark);

        assert_eq!(manager.load().await, ThemeMode::Dark);
        assert_eq!(manager.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_persisted_preference_wins_over_device_scheme() {
        let vault = Arc::new(MemoryVault::new());
        vault.store_theme(ThemeMode::Dark).await.expect("seed theme");

        let manager = ThemeManager::new(vault, ThemeMode::Light);
        assert_eq!(manager.load().await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_set_theme_persists_selection() {
        let vault = Arc::new(MemoryVault::new());
        let manager = ThemeManager::new(vault.clone(), ThemeMode::Light);

        manager.set_theme(ThemeMode::Dark).await;

        assert_eq!(manager.mode(), ThemeMode::Dark);
        assert_eq!(vault.theme().await.expect("read"), Some(ThemeMode::Dark));
    }

    #[tokio::test]
    async fn test_storage_failure_is_swallowed() {
        let vault = Arc::new(MemoryVault::new());
        vault.fail_writes(true);
        let manager = ThemeManager::new(vault, ThemeMode::Light);

        // Selection still applies in memory even though persistence failed
        assert_eq!(manager.set_theme(ThemeMode::Dark).await, ThemeMode::Dark);
        assert_eq!(manager.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_toggle_flips_mode() {
        let vault = Arc::new(MemoryVault::new());
        let manager = ThemeManager::new(vault, ThemeMode::Light);

        assert_eq!(manager.toggle().await, ThemeMode::Dark);
        assert_eq!(manager.toggle().await, ThemeMode::Light);
    }
}
