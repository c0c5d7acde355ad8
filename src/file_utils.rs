use crate::core::OutputDocument;
use crate::errors::{MergerError, MergerResult};
use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// A directory entry that may be offered for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: OsString,
}

impl SourceFile {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &OsString {
        &self.name
    }

    // Name as shown in prompts and logs
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Case-sensitive suffix check on the entry name
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.name.to_string_lossy().ends_with(suffix)
    }
}

/// Source of directory entries and their contents
pub trait DirectorySource {
    /// Directory the entries belong to
    fn root(&self) -> &Path;

    /// All entries, in listing order
    fn entries(&self) -> MergerResult<Vec<SourceFile>>;

    /// Raw bytes of one entry
    fn read_entry(&self, entry: &SourceFile) -> MergerResult<Vec<u8>>;
}

/// Directory on the local filesystem
pub struct FsDirectory {
    root: PathBuf,
}

impl FsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_of(&self, entry: &SourceFile) -> PathBuf {
        self.root.join(entry.name())
    }
}

impl DirectorySource for FsDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn entries(&self) -> MergerResult<Vec<SourceFile>> {
        let list_error = |source| MergerError::ListDirectory {
            path: self.root.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            entries.push(SourceFile::new(entry.file_name()));
        }
        Ok(entries)
    }

    fn read_entry(&self, entry: &SourceFile) -> MergerResult<Vec<u8>> {
        let path = self.path_of(entry);
        std::fs::read(&path).map_err(|source| MergerError::ReadSource { path, source })
    }
}

/// Create or truncate `path` and write the document as UTF-8
pub fn write_document(path: &Path, document: &OutputDocument) -> MergerResult<()> {
    let write_error = |source| MergerError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    document.write_to(&mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
