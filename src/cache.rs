//! The on-disk copy of the vendor registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use futures::TryStreamExt;
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio_util::io::StreamReader;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::errors::*;
use crate::oui::VendorRecord;
use crate::table::VendorTable;

type RegistryReader = Pin<Box<dyn AsyncBufRead + Send>>;

pub struct RegistryCache {
    path: PathBuf,
    source_url: String,
    client: Client,
}

impl RegistryCache {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().chain_err(|| "Failed to create HTTP client")?;

        Ok(RegistryCache {
            path: config.cache_path.clone(),
            source_url: config.source_url.clone(),
            client,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Builds the cache from the configured source if it is missing.
    /// Returns whether a download happened.
    pub async fn ensure(&self, table: &mut VendorTable) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }

        self.refresh(&self.source_url, table).await?;
        Ok(true)
    }

    /// Replaces the cache with the registry at `url`. On success `table`
    /// holds exactly the records written; on failure both are untouched.
    pub async fn refresh(&self, url: &str, table: &mut VendorTable) -> Result<usize> {
        debug!(url, "Downloading MAC vendor list");
        let reader = self.open_source(url).await?;
        self.refresh_from_reader(reader, url, table).await
    }

    /// Streams registry text from any reader into the cache.
    pub async fn refresh_from_reader<R>(&self, mut reader: R, source: &str, table: &mut VendorTable) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut writer = CacheWriter::create(&self.path)?;
        let mut staged = VendorTable::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .chain_err(|| ErrorKind::SourceUnavailable(source.to_string()))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(record) = VendorRecord::from_registry_line(&line) {
                writer.write(&record).await?;
                staged.insert(record);
            }
        }

        writer.commit().await?;
        *table = staged;

        info!(entries = table.len(), path = %self.path.display(), "Vendor cache refreshed");
        Ok(table.len())
    }

    /// Writes `records` as the complete cache.
    pub async fn store<'a, I>(&self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a VendorRecord>,
    {
        let mut writer = CacheWriter::create(&self.path)?;
        for record in records {
            writer.write(record).await?;
        }
        writer.commit().await
    }

    pub async fn read(&self) -> Result<VendorTable> {
        debug!(path = %self.path.display(), "Loading vendor list from cache");

        // One read then split is far faster than streaming line by line.
        let content = tokio::fs::read(&self.path)
            .await
            .chain_err(|| ErrorKind::CacheReadFailure(self.path.clone()))?;
        let (table, skipped) = VendorTable::from_cache(&String::from_utf8_lossy(&content));

        if skipped > 0 {
            warn!(skipped, path = %self.path.display(), "Skipped malformed vendor cache lines");
        }

        Ok(table)
    }

    async fn open_source(&self, url: &str) -> Result<RegistryReader> {
        let unavailable = || ErrorKind::SourceUnavailable(url.to_string());
        let parsed = Url::parse(url).chain_err(unavailable)?;

        match parsed.scheme() {
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|_| Error::from(format!("{} is not a local path", url)))
                    .chain_err(unavailable)?;
                let file = tokio::fs::File::open(&path).await.chain_err(unavailable)?;
                Ok(Box::pin(BufReader::new(file)))
            }
            "http" | "https" => {
                let response = self
                    .client
                    .get(parsed)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .chain_err(unavailable)?;
                let body = response.bytes_stream().map_err(io::Error::other);
                Ok(Box::pin(StreamReader::new(body)))
            }
            scheme => Err(Error::from(format!("unsupported scheme {}", scheme))).chain_err(unavailable),
        }
    }
}

/// Writes a cache next to its destination and renames it into place on
/// commit. Dropping it uncommitted removes the partial file.
struct CacheWriter {
    path: PathBuf,
    temp: NamedTempFile,
    out: BufWriter<tokio::fs::File>,
}

impl CacheWriter {
    fn create(path: &Path) -> Result<Self> {
        let failed = || ErrorKind::CacheWriteFailure(path.to_path_buf());
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Already existing is fine, anything else shows up when creating the file.
        let _ = fs::create_dir_all(dir);

        let temp = tempfile::Builder::new()
            .prefix(".mac-vendors")
            .suffix(".tmp")
            .tempfile_in(dir)
            .chain_err(failed)?;

        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(temp.path(), meta.permissions()).chain_err(failed)?;
        }

        let file = temp.as_file().try_clone().chain_err(failed)?;

        Ok(CacheWriter {
            path: path.to_path_buf(),
            temp,
            out: BufWriter::new(tokio::fs::File::from_std(file)),
        })
    }

    async fn write(&mut self, record: &VendorRecord) -> Result<()> {
        self.out
            .write_all(record.to_cache_line().as_bytes())
            .await
            .chain_err(|| ErrorKind::CacheWriteFailure(self.path.clone()))
    }

    async fn commit(mut self) -> Result<()> {
        let failed = || ErrorKind::CacheWriteFailure(self.path.clone());
        self.out.flush().await.chain_err(failed)?;
        self.out.get_ref().sync_all().await.chain_err(failed)?;
        self.temp.persist(&self.path).chain_err(failed)?;
        Ok(())
    }
}
