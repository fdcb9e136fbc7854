use std::{fmt, sync::Arc};

use codemap::{File, SpanLoc};

/// The file a node was parsed from
#[derive(Clone)]
pub struct FileInfo {
    pub file: Arc<File>,

    /// Whether the file was brought in with `@import (reference)`
    pub reference: bool,
}

impl FileInfo {
    pub fn new(file: Arc<File>) -> Self {
        Self {
            file,
            reference: false,
        }
    }

    pub fn filename(&self) -> &str {
        self.file.name()
    }

    /// Resolves a byte offset into this file to a line and column.
    ///
    /// Offsets past the end of the file are clamped to the end.
    pub fn location(&self, index: usize) -> SpanLoc {
        let offset = index.min(self.file.source().len()) as u64;
        let span = self.file.span.subspan(offset, offset);
        let begin = self.file.find_line_col(span.low());

        SpanLoc {
            file: Arc::clone(&self.file),
            begin,
            end: begin,
        }
    }
}

impl fmt::Debug for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileInfo")
            .field("filename", &self.filename())
            .field("reference", &self.reference)
            .finish()
    }
}

impl PartialEq for FileInfo {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.file, &other.file) && self.reference == other.reference
    }
}

/// Whether a node survives to the final CSS output
///
/// `blocks` counts the reasons a node is hidden (e.g. the number of
/// `(reference)` imports it came through), while `node_visible` is an explicit
/// override set by later passes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub blocks: u32,
    pub node_visible: Option<bool>,
}

impl Visibility {
    pub const fn blocks_visibility(&self) -> bool {
        self.blocks != 0
    }

    pub fn add_visibility_block(&mut self) {
        self.blocks += 1;
    }

    pub fn remove_visibility_block(&mut self) {
        self.blocks = self.blocks.saturating_sub(1);
    }

    pub fn ensure_visibility(&mut self) {
        self.node_visible = Some(true);
    }

    pub fn ensure_invisibility(&mut self) {
        self.node_visible = Some(false);
    }

    /// An explicit override wins; otherwise a node is visible unless something
    /// blocks it.
    pub fn is_visible(&self) -> bool {
        self.node_visible
            .unwrap_or_else(|| !self.blocks_visibility())
    }
}
