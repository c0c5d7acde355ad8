//! End-to-end tests of the interactive merge, driven through scripted answers

use dicmerge::{
    config::Config,
    core::ProcessingCore,
    errors::{MergerError, MergerResult},
    file_utils::{DirectorySource, FsDirectory, SourceFile},
    prompt::{merge_prompt, ScriptedPrompter, ENCODING_PROMPT, OUTPUT_PROMPT},
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Directory with a fixed listing order that records which entries were read
struct MemoryDirectory {
    root: PathBuf,
    files: Vec<(String, Vec<u8>)>,
    reads: RefCell<Vec<String>>,
}

impl MemoryDirectory {
    fn new() -> Self {
        Self {
            root: PathBuf::from("memory"),
            files: Vec::new(),
            reads: RefCell::new(Vec::new()),
        }
    }

    fn with(mut self, name: &str, bytes: impl AsRef<[u8]>) -> Self {
        self.files.push((name.to_string(), bytes.as_ref().to_vec()));
        self
    }

    fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

impl DirectorySource for MemoryDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn entries(&self) -> MergerResult<Vec<SourceFile>> {
        Ok(self
            .files
            .iter()
            .map(|(name, _)| SourceFile::new(name))
            .collect())
    }

    fn read_entry(&self, entry: &SourceFile) -> MergerResult<Vec<u8>> {
        let name = entry.display_name();
        self.reads.borrow_mut().push(name.clone());
        Ok(self
            .files
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, bytes)| bytes.clone())
            .unwrap_or_default())
    }
}

fn output_in(dir: &TempDir) -> (PathBuf, String) {
    let path = dir.path().join("merged.dic");
    let answer = path.to_string_lossy().into_owned();
    (path, answer)
}

fn run(
    directory: &dyn DirectorySource,
    config: Config,
    answers: Vec<String>,
) -> (MergerResult<dicmerge::progress::MergeSummary>, ScriptedPrompter) {
    let mut prompter = ScriptedPrompter::new(answers);
    let mut core = ProcessingCore::new(config, false);
    let result = core.process(directory, &mut prompter);
    (result, prompter)
}

#[test]
fn merges_example_dictionaries_from_disk() -> MergerResult<()> {
    let work = tempdir()?;
    std::fs::write(work.path().join("a.dic"), "3\ncat\ndog\n")?;
    std::fs::write(work.path().join("b.dic"), "2\ndog\neel^\n")?;
    std::fs::write(work.path().join("notes.txt"), "zebra\n")?;
    std::fs::write(work.path().join("c.DIC"), "yak\n")?;

    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let directory = FsDirectory::new(work.path());
    let answers = vec![String::new(), "y".into(), "y".into(), out_answer];
    let (result, prompter) = run(&directory, Config::default(), answers);
    let summary = result?;

    assert_eq!(
        std::fs::read_to_string(&out_path)?,
        "5\n2\n3\ncat\ndog\neel\n"
    );
    assert_eq!(summary.files_merged, 2);
    assert_eq!(summary.unique_entries, 5);

    let asked = prompter.asked();
    assert_eq!(asked.len(), 4);
    assert_eq!(asked[0], ENCODING_PROMPT);
    assert_eq!(asked[3], OUTPUT_PROMPT);
    assert!(asked.contains(&merge_prompt("a.dic")));
    assert!(asked.contains(&merge_prompt("b.dic")));
    assert!(!asked.iter().any(|p| p.contains("notes.txt") || p.contains("c.DIC")));
    Ok(())
}

#[test]
fn declined_files_are_never_read() -> MergerResult<()> {
    let directory = MemoryDirectory::new()
        .with("keep.dic", b"alpha\n")
        .with("no.dic", b"bravo\n")
        .with("empty.dic", b"charlie\n")
        .with("yes.dic", b"delta\n")
        .with("upper.dic", b"echo\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let answers = vec![
        String::new(),
        "y".into(),
        "N".into(),
        String::new(),
        "yes".into(),
        "Y".into(),
        out_answer,
    ];
    let (result, prompter) = run(&directory, Config::default(), answers);
    let summary = result?;

    assert_eq!(directory.reads(), vec!["keep.dic", "upper.dic"]);
    assert_eq!(std::fs::read_to_string(&out_path)?, "2\nalpha\necho\n");
    assert_eq!(summary.entries_offered, 5);
    assert_eq!(summary.files_skipped, 3);
    assert_eq!(prompter.remaining(), 0);
    Ok(())
}

#[test]
fn prompts_follow_listing_order() -> MergerResult<()> {
    let directory = MemoryDirectory::new()
        .with("z.dic", b"z\n")
        .with("readme.md", b"# notes\n")
        .with("a.dic", b"a\n");
    let out_dir = tempdir()?;
    let (_, out_answer) = output_in(&out_dir);

    let (result, prompter) = run(
        &directory,
        Config::default(),
        vec![String::new(), "n".into(), "n".into(), out_answer],
    );
    result?;

    assert_eq!(
        prompter.asked(),
        [
            ENCODING_PROMPT.to_string(),
            merge_prompt("z.dic"),
            merge_prompt("a.dic"),
            OUTPUT_PROMPT.to_string(),
        ]
    );
    Ok(())
}

#[test]
fn nothing_selected_writes_zero_count() -> MergerResult<()> {
    let directory = MemoryDirectory::new().with("a.dic", b"word\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, _) = run(
        &directory,
        Config::default(),
        vec!["not-a-codec".into(), "n".into(), out_answer],
    );
    result?;

    // An unknown codec is harmless while no file is read
    assert_eq!(std::fs::read_to_string(&out_path)?, "0\n");
    Ok(())
}

#[test]
fn unknown_encoding_fails_on_first_read() -> MergerResult<()> {
    let directory = MemoryDirectory::new().with("a.dic", b"word\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, prompter) = run(
        &directory,
        Config::default(),
        vec!["not-a-codec".into(), "y".into(), out_answer],
    );

    assert!(matches!(result, Err(MergerError::UnknownEncoding(label)) if label == "not-a-codec"));
    assert!(!out_path.exists());
    assert_eq!(prompter.remaining(), 1);
    Ok(())
}

#[test]
fn invalid_bytes_abort_without_output() -> MergerResult<()> {
    let work = tempdir()?;
    std::fs::write(work.path().join("latin.dic"), b"caf\xE9\n")?;
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let directory = FsDirectory::new(work.path());
    let (result, _) = run(
        &directory,
        Config::default(),
        vec![String::new(), "y".into(), out_answer],
    );

    match result {
        Err(MergerError::Decoding { path, encoding }) => {
            assert_eq!(path, work.path().join("latin.dic"));
            assert_eq!(encoding, "UTF-8");
        }
        other => panic!("expected decoding error, got {:?}", other),
    }
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn unreadable_selection_aborts_without_output() -> MergerResult<()> {
    let work = tempdir()?;
    std::fs::create_dir(work.path().join("sub.dic"))?;
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let directory = FsDirectory::new(work.path());
    let (result, prompter) = run(
        &directory,
        Config::default(),
        vec![String::new(), "y".into(), out_answer],
    );

    match result {
        Err(MergerError::ReadSource { path, .. }) => {
            assert_eq!(path, work.path().join("sub.dic"));
        }
        other => panic!("expected read error, got {:?}", other),
    }
    assert!(!out_path.exists());
    assert_eq!(prompter.remaining(), 1);
    Ok(())
}

#[test]
fn latin1_keeps_c1_bytes_as_code_points() -> MergerResult<()> {
    let directory = MemoryDirectory::new().with("c1.dic", b"\x80x\n\x9Dy\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, _) = run(
        &directory,
        Config::default(),
        vec!["latin1".into(), "y".into(), out_answer],
    );
    result?;

    assert_eq!(
        std::fs::read(&out_path)?,
        b"2\n\xC2\x80x\n\xC2\x9Dy\n".to_vec()
    );
    Ok(())
}

#[test]
fn windows_code_page_rejects_undefined_bytes() -> MergerResult<()> {
    let directory = MemoryDirectory::new().with("c1.dic", b"\x81x\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, _) = run(
        &directory,
        Config::default(),
        vec!["1252".into(), "y".into(), out_answer],
    );

    assert!(matches!(
        result,
        Err(MergerError::Decoding { encoding: "windows-1252", .. })
    ));
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn windows_code_page_is_converted_to_utf8() -> MergerResult<()> {
    let directory = MemoryDirectory::new().with("latin.dic", b"1\r\ncaf\xE9 au lait\r\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, _) = run(
        &directory,
        Config::default(),
        vec!["1252".into(), "y".into(), out_answer],
    );
    result?;

    assert_eq!(std::fs::read(&out_path)?, "2\n1\ncaféaulait\n".as_bytes());
    Ok(())
}

#[test]
fn configured_extension_and_header_skip() -> MergerResult<()> {
    let directory = MemoryDirectory::new()
        .with("a.words", b"2\nfoo\nbar\n")
        .with("b.dic", b"1\nignored\n")
        .with("c.words", b"1\nfoo\n");
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let config = Config {
        extension: ".words".to_string(),
        skip_count_header: true,
        ..Config::default()
    };
    let (result, prompter) = run(
        &directory,
        config,
        vec![String::new(), "y".into(), "y".into(), out_answer],
    );
    result?;

    assert_eq!(std::fs::read_to_string(&out_path)?, "2\nbar\nfoo\n");
    assert!(!prompter.asked().iter().any(|p| p.contains("b.dic")));
    Ok(())
}

#[test]
fn merged_output_satisfies_dictionary_properties() -> MergerResult<()> {
    let first: String = (0..200)
        .map(|i| format!("{}w^o rd{}$\n", i % 7, i % 50))
        .collect();
    let second: String = (0..150)
        .map(|i| format!("$ {}x{}\n", i % 11, i % 3))
        .collect();
    let directory = MemoryDirectory::new()
        .with("first.dic", first.as_bytes())
        .with("second.dic", second.as_bytes());
    let out_dir = tempdir()?;
    let (out_path, out_answer) = output_in(&out_dir);

    let (result, _) = run(
        &directory,
        Config::default(),
        vec![String::new(), "y".into(), "y".into(), out_answer],
    );
    let summary = result?;

    let content = std::fs::read_to_string(&out_path)?;
    let mut lines = content.lines();
    let count: usize = lines.next().and_then(|l| l.parse().ok()).unwrap_or(usize::MAX);
    let entries: Vec<&str> = lines.collect();

    assert_eq!(count, entries.len());
    assert_eq!(count, summary.unique_entries);
    assert!(entries.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(entries
        .iter()
        .all(|entry| !entry.contains(&[' ', '^', '$'][..])));
    Ok(())
}

#[test]
fn missing_prompt_answer_is_an_error() {
    let directory = MemoryDirectory::new().with("a.dic", b"word\n");
    let (result, _) = run(&directory, Config::default(), vec![String::new()]);
    assert!(matches!(result, Err(MergerError::Prompt(_))));
}
