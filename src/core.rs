// ============================================================================
// Core Module - Dictionary Merge
//
// `ProcessingCore::process` drives one interactive run:
//   1. list the directory
//   2. ask for the encoding
//   3. offer every dictionary file and merge the confirmed ones
//   4. sort the merge set and prepend the entry count
//   5. ask for the output name and write the document
//
// The directory and the console are injected (`DirectorySource`, `Prompter`);
// the set and document types below are plain data with no I/O of their own.
// ============================================================================

use crate::config::{Config, DEFAULT_STRIP_CHARS};
use crate::encoding::{EncodingChoice, EncodingConverter};
use crate::errors::MergerResult;
use crate::file_utils::{self, DirectorySource, SourceFile};
use crate::progress::{MergeSummary, ProgressTracker};
use crate::prompt::{self, Prompter};
use log::{debug, info};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

/// Removes a fixed set of characters from dictionary lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCleaner {
    strip: Vec<char>,
}

impl LineCleaner {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            strip: chars.into_iter().collect(),
        }
    }

    /// Copy of `line` with every stripped character removed
    pub fn clean(&self, line: &str) -> String {
        line.chars().filter(|c| !self.strip.contains(c)).collect()
    }
}

impl Default for LineCleaner {
    fn default() -> Self {
        Self::new(DEFAULT_STRIP_CHARS.chars())
    }
}

/// Deduplicated accumulation of cleaned lines
#[derive(Debug, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already cleaned line; false if it was present
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    /// Clean and insert every line of one file, returning how many lines were taken
    ///
    /// With `skip_count_header` the first line of the file is dropped before cleaning.
    pub fn extend_cleaned<I>(&mut self, lines: I, cleaner: &LineCleaner, skip_count_header: bool) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let skip = usize::from(skip_count_header);
        let mut taken = 0;
        for line in lines.into_iter().skip(skip) {
            self.words.insert(cleaner.clean(line.as_ref()));
            taken += 1;
        }
        taken
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Sort the set by code point and prepend the count line
    pub fn into_document(self) -> OutputDocument {
        let count = self.words.len();
        let mut entries: Vec<String> = self.words.into_iter().collect();
        entries.sort_unstable();

        let mut lines = Vec::with_capacity(entries.len() + 1);
        lines.push(format!("{}\n", count));
        lines.extend(entries);
        OutputDocument { lines }
    }
}

/// `[count line] + sorted entries`, written once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<String>,
}

impl OutputDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn count_line(&self) -> &str {
        &self.lines[0]
    }

    pub fn entries(&self) -> &[String] {
        &self.lines[1..]
    }

    /// Write every line verbatim; no terminators are added
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Merge already decoded dictionary texts into an output document
pub fn merge_texts<'a, I>(texts: I, cleaner: &LineCleaner, skip_count_header: bool) -> OutputDocument
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = WordSet::new();
    for text in texts {
        set.extend_cleaned(
            EncodingConverter::split_text_lines(text),
            cleaner,
            skip_count_header,
        );
    }
    set.into_document()
}

// Drives one interactive merge run
pub struct ProcessingCore {
    config: Config,
    cleaner: LineCleaner,
    tracker: ProgressTracker,
}

impl ProcessingCore {
    pub fn new(config: Config, verbose: bool) -> Self {
        let cleaner = config.line_cleaner();
        Self {
            config,
            cleaner,
            tracker: ProgressTracker::new(verbose),
        }
    }

    /// Run the full prompt sequence against `directory` and write the merged dictionary
    pub fn process<D, P>(&mut self, directory: &D, prompter: &mut P) -> MergerResult<MergeSummary>
    where
        D: DirectorySource + ?Sized,
        P: Prompter + ?Sized,
    {
        let entries = directory.entries()?;
        info!(
            "Found {} entries in {}",
            entries.len(),
            directory.root().display()
        );

        let answer = prompter.ask(prompt::ENCODING_PROMPT)?;
        let choice = EncodingChoice::from_answer(&answer, &self.config.default_encoding);
        debug!("Encoding answer {:?} -> {}", answer, choice.label());

        let extension = self.config.extension.clone();
        let mut set = WordSet::new();
        for entry in entries.iter().filter(|entry| entry.has_suffix(&extension)) {
            self.offer(directory, prompter, entry, &choice, &mut set)?;
        }

        let document = set.into_document();
        let output = prompter.ask(prompt::OUTPUT_PROMPT)?;
        file_utils::write_document(Path::new(&output), &document)?;
        info!(
            "Wrote {} entries to {}",
            document.entries().len(),
            output
        );

        let summary = self.tracker.finish(document.entries().len());
        info!("{}", summary);
        Ok(summary)
    }

    // Ask about one dictionary and merge it when confirmed
    fn offer<D, P>(
        &mut self,
        directory: &D,
        prompter: &mut P,
        entry: &SourceFile,
        choice: &EncodingChoice,
        set: &mut WordSet,
    ) -> MergerResult<()>
    where
        D: DirectorySource + ?Sized,
        P: Prompter + ?Sized,
    {
        let name = entry.display_name();
        self.tracker.file_offered();

        let answer = prompter.ask(&prompt::merge_prompt(&name))?;
        if !prompt::is_affirmative(&answer) {
            debug!("Skipping {}", name);
            self.tracker.file_skipped();
            return Ok(());
        }

        self.tracker.file_started(&name);
        let bytes = directory.read_entry(entry)?;
        let codec = choice.resolve()?;
        let lines =
            EncodingConverter::decode_lines(&directory.root().join(entry.name()), &bytes, codec)?;

        let taken = set.extend_cleaned(&lines, &self.cleaner, self.config.skip_count_header);
        info!(
            "Merged {} ({} lines, {} unique so far)",
            name,
            taken,
            set.len()
        );
        self.tracker.file_finished(&name, taken, set.len());
        Ok(())
    }
}
