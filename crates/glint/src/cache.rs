//! Content-keyed memoization.
//!
//! The engine is pure, so `(content, language)` fully determines an analysis. A cache entry
//! has no lifecycle beyond "superseded by a newer content key": one entry per cache, newest
//! key wins. Hosts typically hold one cache per open file.

use crate::analysis::{Analyzer, FileAnalysis};
use glint_lang::LanguageTag;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    content_hash: u64,
    content_len: usize,
    language: Option<LanguageTag>,
}

impl CacheKey {
    fn new(content: &str, language: Option<LanguageTag>) -> Self {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        Self {
            content_hash: hasher.finish(),
            content_len: content.len(),
            language,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    key: CacheKey,
    analysis: Arc<FileAnalysis>,
}

/// A single-entry analysis memo keyed by content hash + length + language.
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    entry: Option<CacheEntry>,
}

impl AnalysisCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached analysis for `(content, language)`, computing and storing it on a
    /// miss. A hit returns a clone of the same `Arc`, so repeated calls on unchanged input
    /// are allocation-free and bit-identical.
    pub fn get_or_compute(
        &mut self,
        analyzer: &Analyzer,
        content: &str,
        language: Option<LanguageTag>,
    ) -> Arc<FileAnalysis> {
        let key = CacheKey::new(content, language);

        if let Some(entry) = &self.entry {
            if entry.key == key {
                return Arc::clone(&entry.analysis);
            }
        }

        let analysis = Arc::new(analyzer.analyze(content, language));
        self.entry = Some(CacheEntry {
            key,
            analysis: Arc::clone(&analysis),
        });
        analysis
    }

    /// Returns `true` if the cache currently holds `(content, language)`.
    pub fn contains(&self, content: &str, language: Option<LanguageTag>) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.key == CacheKey::new(content, language))
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
