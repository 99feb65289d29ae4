use gazetteer::{
    geonames::{self, Config, Geonames},
    repository::Repository,
};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub struct AppState {
    pub data_path: PathBuf,
    pub repository: RwLock<Repository>,
}

impl AppState {
    pub fn new(data_path: PathBuf, repository: Repository) -> Self {
        Self {
            data_path,
            repository: RwLock::new(repository),
        }
    }

    /// Builds a fresh repository from the dataset on disk. Zip archives are
    /// expected to carry the default member file name; anything else is read
    /// as a plain TSV.
    pub fn load_repository(path: &Path) -> Result<Repository, geonames::Error> {
        let geonames = match path.extension().and_then(|ext| ext.to_str()) {
            Some("zip") => Geonames::new(Config::default()).from_zip(path.to_owned()),
            _ => Geonames::new(Config::default()).from_tsv(path.to_owned()),
        };
        Repository::new().with_geonames(geonames)
    }
}
