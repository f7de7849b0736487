//! File processing API
//!
//!     The boundary between the file system and the pure pipeline: reads a file, resolves
//!     its [FileKind] from the configured extension lists, and hands the contents to the
//!     [DocumentAssembler].
//!
//!     Reading is the only suspension point. Files are independent of each other, so
//!     [process_files] runs them concurrently (bounded by `processing.concurrency`) and
//!     returns one outcome per input path, in input order. A failure affects only the file
//!     it happened in.

use crate::docs::assembler::{DocumentAssembler, FileKind};
use crate::docs::ast::Document;
use crate::docs::config::{ComdocConfig, FilesConfig};
use crate::docs::error::ProcessingError;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Option<Document>, ProcessingError>,
}

impl FileOutcome {
    pub fn document(&self) -> Option<&Document> {
        self.result.as_ref().ok().and_then(|doc| doc.as_ref())
    }
}

/// Resolve the pipeline for `path`, rejecting extensions no pipeline handles
pub fn resolve_file_kind(path: &Path, files: &FilesConfig) -> Result<FileKind, ProcessingError> {
    files
        .kind_for(path)
        .ok_or_else(|| ProcessingError::UnsupportedFileKind {
            filename: path.to_path_buf(),
        })
}

/// Process a single file with the settings from `config`
pub async fn process_file(
    path: impl AsRef<Path>,
    config: &ComdocConfig,
) -> Result<Option<Document>, ProcessingError> {
    let assembler = DocumentAssembler::from_config(config);
    process_file_with(path.as_ref(), &assembler, &config.files).await
}

/// Process a single file with an explicit assembler
pub async fn process_file_with(
    path: &Path,
    assembler: &DocumentAssembler,
    files: &FilesConfig,
) -> Result<Option<Document>, ProcessingError> {
    let kind = resolve_file_kind(path, files)?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ProcessingError::Io {
            filename: path.to_path_buf(),
            source,
        })?;

    let filename = path.to_string_lossy();
    debug!(filename = %filename, %kind, bytes = bytes.len(), "read file");
    let source = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = source {
        warn!(filename = %filename, "invalid UTF-8 replaced with U+FFFD");
    }

    let document = assembler.assemble(&filename, kind, &source)?;
    match &document {
        Some(doc) => info!(filename = %filename, title = %doc.title, "documented file"),
        None => info!(filename = %filename, "no documentation found"),
    }
    Ok(document)
}

/// Process many files concurrently, returning outcomes in input order
pub async fn process_files(paths: Vec<PathBuf>, config: &ComdocConfig) -> Vec<FileOutcome> {
    let assembler = DocumentAssembler::from_config(config);
    let files = Arc::new(config.files.clone());
    let permits = Arc::new(Semaphore::new(config.processing.concurrency.max(1)));

    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        let assembler = assembler.clone();
        let files = Arc::clone(&files);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let result = process_file_with(&path, &assembler, &files).await;
            (index, result)
        });
    }

    let mut results: Vec<Option<Result<Option<Document>, ProcessingError>>> =
        paths.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => results[index] = Some(result),
            Err(error) => debug!(%error, "processing task did not complete"),
        }
    }

    paths
        .into_iter()
        .zip(results)
        .map(|(path, result)| FileOutcome {
            path,
            result: result.unwrap_or_else(|| {
                Err(ProcessingError::Task("processing task did not complete".to_string()))
            }),
        })
        .collect()
}
