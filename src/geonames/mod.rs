use csv::StringRecord;
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub use config::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Tsv(PathBuf),
    Zip(PathBuf),
}

/// Handle over a raw GeoNames dataset: headerless tab-separated rows with a
/// variable field count and literal quote characters in values.
#[derive(Default)]
pub struct Geonames {
    config: Config,
    storage: StorageType,
}

impl Geonames {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_tsv(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Tsv(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    /// Streams raw gazetteer rows in file order. Rows keep whatever width the
    /// source line had; consumers apply their own defaults.
    pub fn stream_cities<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, StringRecord)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Tsv(path) => {
                let file = File::open(path)?;
                stream_rows(file, f)
            }
            StorageType::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let file = get_file(&mut archive, &self.config.cities_file_name)?;
                stream_rows(file, f)
            }
        }
    }
}

fn stream_rows<R, F>(reader: R, mut f: F) -> Result<(), self::Error>
where
    R: Read,
    F: FnMut((usize, StringRecord)),
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut count = 0;
    for (i, row) in reader.records().enumerate() {
        f((i, row?));
        count += 1;
    }
    debug!("streamed {count} gazetteer rows");
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
