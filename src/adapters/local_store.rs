use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::model::{NewUser, User};
use crate::domain::ports::UserStore;
use crate::utils::error::{Result, SizerError};
use crate::utils::validation::validate_non_empty_string;

pub const USERS_STORAGE_KEY: &str = "body-calculator-users";

/// File-backed user list standing in for browser local storage. The whole
/// list lives under one key, serialized as a JSON array.
#[derive(Debug)]
pub struct LocalUserStore {
    path: PathBuf,
    next_id: Mutex<u32>,
}

impl LocalUserStore {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let users = read_users(&path).await?;
        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);

        tracing::debug!(
            "Opened user store {} ({} users, next id {})",
            path.display(),
            users.len(),
            next_id
        );

        Ok(Self {
            path,
            next_id: Mutex::new(next_id),
        })
    }

    /// Opens `<dir>/body-calculator-users.json`.
    pub async fn open_in_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::open(dir.as_ref().join(format!("{}.json", USERS_STORAGE_KEY))).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save_users(&self, users: &[User]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(users)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

async fn read_users(path: &Path) -> Result<Vec<User>> {
    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    // 空檔案視為沒有任何使用者
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&data).map_err(|e| SizerError::StorageError {
        message: format!("Malformed user records in {}: {}", path.display(), e),
    })
}

impl UserStore for LocalUserStore {
    async fn get_user(&self, id: u32) -> Result<Option<User>> {
        let users = read_users(&self.path).await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = read_users(&self.path).await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        validate_non_empty_string("username", &user.username)?;

        // 持有鎖直到寫入完成，避免同一個 id 被分配兩次
        let mut next_id = self.next_id.lock().await;
        let mut users = read_users(&self.path).await?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(SizerError::StorageError {
                message: format!("Username '{}' is already taken", user.username),
            });
        }

        let created = User {
            id: *next_id,
            username: user.username,
            password: user.password,
        };
        users.push(created.clone());
        self.save_users(&users).await?;
        *next_id += 1;

        tracing::info!("👤 Created user {} ({})", created.id, created.username);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let dir = TempDir::new().unwrap();
        let store = LocalUserStore::open_in_dir(dir.path()).await.unwrap();

        let a = store.create_user(new_user("amal")).await.unwrap();
        let b = store.create_user(new_user("badr")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get_user(2).await.unwrap().unwrap().username, "badr");
        assert!(store.get_user(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_duplicate_and_blank_usernames() {
        let dir = TempDir::new().unwrap();
        let store = LocalUserStore::open_in_dir(dir.path()).await.unwrap();

        store.create_user(new_user("amal")).await.unwrap();
        assert!(matches!(
            store.create_user(new_user("amal")).await,
            Err(SizerError::StorageError { .. })
        ));
        assert!(store.create_user(new_user("  ")).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = LocalUserStore::open(&path).await.unwrap_err();
        assert!(matches!(err, SizerError::StorageError { .. }));
    }
}
