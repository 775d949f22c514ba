//! Advice replies and their citations.

use serde::{Deserialize, Serialize};

/// Maximum number of citations attached to a single reply.
pub const MAX_SOURCES: usize = 3;

/// A citation pointing at an external reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// An answer plus up to [`MAX_SOURCES`] citations, unique by url.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub answer: String,

    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Reply {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: Vec::new(),
        }
    }

    /// Builder form of [`Reply::push_source`].
    pub fn cite(mut self, source: Source) -> Self {
        self.push_source(source);
        self
    }

    /// Add a citation unless its url is already present or the list is full.
    /// Returns whether it was added.
    pub fn push_source(&mut self, source: Source) -> bool {
        if self.sources.len() >= MAX_SOURCES || self.sources.iter().any(|s| s.url == source.url) {
            return false;
        }
        self.sources.push(source);
        true
    }

    /// Re-apply the citation invariants to a reply built elsewhere.
    pub fn normalized(self) -> Self {
        let mut out = Reply::new(self.answer);
        for source in self.sources {
            out.push_source(source);
        }
        out
    }
}
