use std::path::{Path, PathBuf};
use std::fs;
use std::io;
use std::sync::Arc;
use std::env;
use tokio::sync::Mutex;
use sha2::{Sha256, Digest};

use crate::classifier::Corpus;
use crate::datasets::{parse_tsv, DatasetInfo};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset not downloaded: {0}")]
    NotDownloaded(String),
    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Dataset verification failed")]
    VerificationFailed,
    #[error("Hash mismatch for dataset {name}: expected {expected}, got {actual}")]
    HashMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("Dataset contains no labeled sentences: {0}")]
    EmptyDataset(String),
}

/// Reads a tab-separated dataset from disk
pub fn load_tsv_file<P: AsRef<Path>>(path: P) -> Result<Corpus, DatasetError> {
    let path = path.as_ref();
    log::info!("Loading dataset from {:?}", path);
    let text = fs::read_to_string(path)?;
    let corpus = parse_tsv(&text);
    if corpus.is_empty() {
        return Err(DatasetError::EmptyDataset(path.display().to_string()));
    }
    log::info!("Loaded {} labeled sentences", corpus.len());
    Ok(corpus)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Downloads datasets and keeps them in an on-disk cache
#[derive(Clone)]
pub struct DatasetManager {
    datasets_dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl DatasetManager {
    /// Creates a new DatasetManager with the default datasets directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::get_default_datasets_dir())
    }

    /// Returns the default datasets directory path
    pub fn get_default_datasets_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("SPAMFILTER_CACHE") {
            return PathBuf::from(path).join("datasets");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("spamfilter").join("datasets");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("spamfilter").join("datasets");
        }

        // 4. Platform temp directory
        env::temp_dir().join("spamfilter").join("datasets")
    }

    pub fn new<P: AsRef<Path>>(datasets_dir: P) -> io::Result<Self> {
        let datasets_dir = datasets_dir.as_ref().to_path_buf();
        fs::create_dir_all(&datasets_dir)?;
        Ok(Self {
            datasets_dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn datasets_dir(&self) -> &Path {
        &self.datasets_dir
    }

    pub fn get_dataset_path(&self, info: &DatasetInfo) -> PathBuf {
        self.datasets_dir.join(&info.name).join("dataset.tsv")
    }

    pub fn is_dataset_downloaded(&self, info: &DatasetInfo) -> bool {
        let path = self.get_dataset_path(info);
        log::debug!("Dataset path: {:?} (exists: {})", path, path.exists());
        path.exists()
    }

    fn verify_file(&self, path: &Path, expected_hash: Option<&str>) -> Result<bool, DatasetError> {
        let bytes = fs::read(path)?;
        let hash = sha256_hex(&bytes);
        log::debug!("Read {} bytes from {:?}, hash {}", bytes.len(), path, hash);
        match expected_hash {
            Some(expected) => Ok(hash == expected),
            None => {
                log::info!("No expected hash for {:?}, accepting file (sha256 {})", path, hash);
                Ok(true)
            }
        }
    }

    /// Checks that the cached dataset exists and matches its expected hash
    pub fn verify_dataset(&self, info: &DatasetInfo) -> Result<bool, DatasetError> {
        let path = self.get_dataset_path(info);
        if !path.exists() {
            log::info!("Dataset file {:?} does not exist", path);
            return Ok(false);
        }
        let ok = self.verify_file(&path, info.hash.as_deref())?;
        log::info!("Dataset '{}' verification: {}", info.name, ok);
        Ok(ok)
    }

    /// Fetches the dataset into the cache, replacing a file that fails verification
    pub async fn download_dataset(&self, info: &DatasetInfo) -> Result<(), DatasetError> {
        let _lock = self.download_lock.lock().await;
        let path = self.get_dataset_path(info);

        if path.exists() {
            if self.verify_file(&path, info.hash.as_deref())? {
                log::info!("Existing dataset file verified successfully");
                return Ok(());
            }
            log::warn!("Dataset file verification failed, redownloading");
        }

        match self.download_and_verify(info, &path).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("Failed to download dataset '{}': {}", info.name, e);
                let _ = self.remove_download(info);
                Err(e)
            }
        }
    }

    async fn download_and_verify(&self, info: &DatasetInfo, path: &Path) -> Result<(), DatasetError> {
        log::info!("Downloading dataset '{}' from {} to {:?}", info.name, info.url, path);
        let response = reqwest::get(&info.url).await?.error_for_status()?;
        log::info!("Download response status: {}", response.status());
        let bytes = response.bytes().await?;
        log::info!("Downloaded {} bytes", bytes.len());

        let hash = sha256_hex(&bytes);
        if let Some(expected) = &info.hash {
            if &hash != expected {
                log::error!("Dataset hash mismatch: expected {}, got {}", expected, hash);
                return Err(DatasetError::HashMismatch {
                    name: info.name.clone(),
                    expected: expected.clone(),
                    actual: hash,
                });
            }
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;

        if !self.verify_file(path, info.hash.as_deref())? {
            return Err(DatasetError::VerificationFailed);
        }

        log::info!("Dataset '{}' downloaded and verified successfully", info.name);
        Ok(())
    }

    pub fn remove_download(&self, info: &DatasetInfo) -> Result<(), DatasetError> {
        let path = self.get_dataset_path(info);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Ensures that a dataset is downloaded and verified.
    /// If it doesn't exist, it will be downloaded.
    /// If verification fails, it will be re-downloaded.
    pub async fn ensure_dataset_downloaded(&self, info: &DatasetInfo) -> Result<(), DatasetError> {
        if !self.is_dataset_downloaded(info) {
            log::info!("Dataset '{}' not found, downloading...", info.name);
            return self.download_dataset(info).await;
        }
        if !self.verify_dataset(info)? {
            log::info!("Dataset '{}' verification failed, re-downloading...", info.name);
            self.remove_download(info)?;
            self.download_dataset(info).await?;
        }
        Ok(())
    }

    /// Parses the cached copy of a dataset
    pub fn load_dataset(&self, info: &DatasetInfo) -> Result<Corpus, DatasetError> {
        if !self.is_dataset_downloaded(info) {
            return Err(DatasetError::NotDownloaded(info.name.clone()));
        }
        load_tsv_file(self.get_dataset_path(info))
    }
}
