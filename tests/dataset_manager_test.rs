use spamfilter::{
    load_tsv_file, BuiltinDataset, Classifier, DatasetError, DatasetInfo, DatasetManager, Label,
};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("spamfilter-tests").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_tsv_file() -> Result<(), DatasetError> {
    let dir = scratch_dir("load");
    let path = dir.join("data.tsv");
    fs::write(&path, "Gana dinero GRATIS!\t1\nHola, ¿cómo estás?\t0\nlinea rota\n")?;

    let corpus = load_tsv_file(&path)?;
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.count_label(Label::Spam), 1);

    let mut classifier = Classifier::new();
    classifier.train(&corpus);
    assert_eq!(classifier.classify("dinero gratis").unwrap(), Label::Spam);
    Ok(())
}

#[test]
fn test_load_empty_dataset() {
    let dir = scratch_dir("empty");
    let path = dir.join("data.tsv");
    fs::write(&path, "\n\nsin etiqueta\n").unwrap();

    assert!(matches!(load_tsv_file(&path), Err(DatasetError::EmptyDataset(_))));
}

#[test]
fn test_load_missing_file() {
    let dir = scratch_dir("missing");
    assert!(matches!(load_tsv_file(dir.join("nope.tsv")), Err(DatasetError::IoError(_))));
}

#[test]
fn test_cached_dataset_skips_download() -> Result<(), DatasetError> {
    let manager = DatasetManager::new(scratch_dir("cached"))?;
    // The URL is unreachable; a verified cached copy must be used as is
    let info = DatasetInfo::new("offline", "http://127.0.0.1:9/unreachable.tsv");

    let path = manager.get_dataset_path(&info);
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(&path, "premio gratis\t1\nnos vemos luego\t0\n")?;

    tokio_test::block_on(manager.ensure_dataset_downloaded(&info))?;
    let corpus = manager.load_dataset(&info)?;
    assert_eq!(corpus.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_download_leaves_no_file() {
    let manager = DatasetManager::new(scratch_dir("failed")).unwrap();
    let info = DatasetInfo::new("offline", "http://127.0.0.1:9/unreachable.tsv");

    let result = manager.download_dataset(&info).await;
    assert!(matches!(result, Err(DatasetError::DownloadError(_))));
    assert!(!manager.is_dataset_downloaded(&info));
}

#[test]
fn test_builtin_dataset_paths() -> Result<(), DatasetError> {
    let manager = DatasetManager::new(scratch_dir("paths"))?;
    let path = manager.get_dataset_path(&BuiltinDataset::Spam01.info());
    assert!(path.ends_with("spam01/dataset.tsv"));
    assert!(!manager.is_dataset_downloaded(&BuiltinDataset::Spam01.info()));
    Ok(())
}
