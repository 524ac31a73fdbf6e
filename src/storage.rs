use std::{env, path::Path, path::PathBuf};

use tokio::fs;
use tracing::error;

use crate::models::AppData;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/goals.json"))
}

/// Missing or unreadable state starts the app empty rather than refusing
/// to boot; the broken file is logged and left alone until the next write.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), std::io::Error> {
    let payload = serde_json::to_vec_pretty(data).map_err(std::io::Error::other)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AppData};
    use uuid::Uuid;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_data(&dir.path().join("absent.json")).await;
        assert!(data.accounts.is_empty());
        assert!(data.goals.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"{not json").await.unwrap();

        let data = load_data(&path).await;
        assert!(data.accounts.is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut data = AppData::default();
        data.accounts.push(Account {
            id: Uuid::new_v4(),
            login: "alice@goals.local".to_string(),
            email: None,
            password_digest: "digest".to_string(),
            salt: "salt".to_string(),
        });

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.accounts.len(), 1);
        assert_eq!(loaded.accounts[0].login, "alice@goals.local");
    }
}
