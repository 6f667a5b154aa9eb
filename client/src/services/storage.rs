//! # Persisted Session Vault
//!
//! File-backed implementation of [`SessionVault`]: a single JSON document
//! holding the bearer token, the serialized user profile, and the theme
//! preference. Each key is independently absent-able; a missing file is
//! the valid first-run state.
//!
//! Writes go through a read-modify-write cycle under an async mutex, so
//! `store_session` persists token and profile as one logical write. Every
//! write completes before the call returns, which is what lets the session
//! manager order persistence ahead of in-memory mutation.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::dto::user::UserProfile;
use tokio::sync::Mutex;

use crate::app::ThemeMode;
use crate::core::error::{AppError, Result};
use crate::core::service::SessionVault;

/// On-disk shape of the vault document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct VaultDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme_mode: Option<ThemeMode>,
}

/// File-backed session vault.
pub struct FileVault {
    path: PathBuf,
    /// Serializes read-modify-write cycles; reads go lock-free.
    write_guard: Mutex<()>,
}

impl FileVault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<VaultDocument> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(VaultDocument::default()),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }

    async fn save(&self, document: &VaultDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    async fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut VaultDocument),
    {
        let _guard = self.write_guard.lock().await;
        let mut document = self.load().await?;
        apply(&mut document);
        self.save(&document).await
    }
}

#[async_trait]
impl SessionVault for FileVault {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.load().await?.user_token)
    }

    async fn user(&self) -> Result<Option<UserProfile>> {
        Ok(self.load().await?.user_data)
    }

    async fn theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.load().await?.theme_mode)
    }

    async fn store_session(&self, token: &str, user: &UserProfile) -> Result<()> {
        let token = token.to_string();
        let user = user.clone();
        self.mutate(move |doc| {
            doc.user_token = Some(token);
            doc.user_data = Some(user);
        })
        .await
    }

    async fn store_user(&self, user: &UserProfile) -> Result<()> {
        let user = user.clone();
        self.mutate(move |doc| doc.user_data = Some(user)).await
    }

    async fn store_theme(&self, mode: ThemeMode) -> Result<()> {
        self.mutate(move |doc| doc.theme_mode = Some(mode)).await
    }

    async fn clear_session(&self) -> Result<()> {
        self.mutate(|doc| {
            doc.user_token = None;
            doc.user_data = None;
        })
        .await
    }
}

/// In-memory vault for tests and previews.
///
/// Behaves like [`FileVault`] without touching the filesystem, and can be
/// told to fail writes to exercise storage-error paths.
#[derive(Default)]
pub struct MemoryVault {
    document: parking_lot::RwLock<VaultDocument>,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the vault with a persisted session, as if a prior run signed in.
    pub fn with_session(token: &str, user: &UserProfile) -> Self {
        let vault = Self::default();
        vault.document.write().user_token = Some(token.to_string());
        vault.document.write().user_data = Some(user.clone());
        vault
    }

    /// Make every subsequent write fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            Err(AppError::Storage("simulated write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionVault for MemoryVault {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.document.read().user_token.clone())
    }

    async fn user(&self) -> Result<Option<UserProfile>> {
        Ok(self.document.read().user_data.clone())
    }

    async fn theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.document.read().theme_mode)
    }

    async fn store_session(&self, token: &str, user: &UserProfile) -> Result<()> {
        self.check_writable()?;
        let mut doc = self.document.write();
        doc.user_token = Some(token.to_string());
        doc.user_data = Some(user.clone());
        Ok(())
    }

    async fn store_user(&self, user: &UserProfile) -> Result<()> {
        self.check_writable()?;
        self.document.write().user_data = Some(user.clone());
        Ok(())
    }

    async fn store_theme(&self, mode: ThemeMode) -> Result<()> {
        self.check_writable()?;
        self.document.write().theme_mode = Some(mode);
        Ok(())
    }

    async fn clear_session(&self) -> Result<()> {
        self.check_writable()?;
        let mut doc = self.document.write();
        doc.user_token = None;
        doc.user_data = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            avatar: None,
            is_verified: true,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_file_vault_first_run_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = FileVault::new(dir.path().join("session.json"));

        assert!(vault.token().await.expect("read").is_none());
        assert!(vault.user().await.expect("read").is_none());
        assert!(vault.theme().await.expect("read").is_none());
    }

    #[tokio::test]
    async fn test_file_vault_session_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = FileVault::new(dir.path().join("session.json"));
        let user = sample_user();

        vault.store_session("tok-1", &user).await.expect("store");

        assert_eq!(vault.token().await.expect("read").as_deref(), Some("tok-1"));
        assert_eq!(vault.user().await.expect("read"), Some(user));
    }

    #[tokio::test]
    async fn test_file_vault_clear_session_keeps_theme() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = FileVault::new(dir.path().join("session.json"));

        vault
            .store_session("tok-1", &sample_user())
            .await
            .expect("store");
        vault.store_theme(ThemeMode::Dark).await.expect("theme");
        vault.clear_session().await.expect("clear");

        assert!(vault.token().await.expect("read").is_none());
        assert!(vault.user().await.expect("read").is_none());
        assert_eq!(vault.theme().await.expect("read"), Some(ThemeMode::Dark));
    }

    #[tokio::test]
    async fn test_file_vault_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vault = FileVault::new(dir.path().join("session.json"));

        vault.clear_session().await.expect("clear on empty vault");
        vault.clear_session().await.expect("second clear");
        assert!(vault.token().await.expect("read").is_none());
    }

    #[tokio::test]
    async fn test_memory_vault_write_failure_injection() {
        let vault = MemoryVault::new();
        vault.fail_writes(true);

        let err = vault
            .store_session("tok", &sample_user())
            .await
            .expect_err("write should fail");
        assert!(matches!(err, AppError::Storage(_)));

        // Reads keep working and show nothing was written
        assert!(vault.token().await.expect("read").is_none());
    }
}
