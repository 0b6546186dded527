//! Reads resumes and job descriptions from disk as plain text

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads documents by path, remembering the text of files already read.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cached(path) {
            debug!("Using cached text for: {}", path.display());
            return Ok(text.to_string());
        }

        let text = read_document(path).await?;
        info!("Read {} characters from {}", text.len(), path.display());

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    fn cached(&self, path: &Path) -> Option<&str> {
        if !self.enable_cache {
            return None;
        }
        self.cache.get(path).map(String::as_str)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

async fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ResumeRankerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match FileType::from_path(path) {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(ResumeRankerError::UnsupportedDocument(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache_rereads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "Junior python developer").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Junior python developer");

        std::fs::write(&path, "Senior python developer").unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Senior python developer");
        assert_eq!(manager.cache_size(), 0);
    }
}
