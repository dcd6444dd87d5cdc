use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").to_string_lossy().into_owned();

        let storage = LocalStorage::new(base.clone());
        storage.write_file("price.csv", b"a,b\n").await.unwrap();

        let written = fs::read(Path::new(&base).join("price.csv")).unwrap();
        assert_eq!(written, b"a,b\n");
    }
}
