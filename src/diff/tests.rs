//! Tests for hunk and file diff parsing.

use super::*;
use crate::error::HunkNavError;
use std::path::PathBuf;

fn hunk(text: &str) -> HunkDiff {
    HunkDiff::parse(text, TrailingRuns::Drop).unwrap()
}

fn add(start: usize, end: usize) -> DiffRegion {
    DiffRegion::lines(RegionKind::Add, start, end)
}

fn del(start: usize, end: usize) -> DiffRegion {
    DiffRegion::lines(RegionKind::Del, start, end)
}

/// Pure addition: a marker on the old side, the added span on the new side.
#[test]
fn test_pure_addition() {
    let h = hunk("@@ -3,0 +3,2 @@\n+hello\n+world");

    assert_eq!(h.hunk_type, HunkType::Add);
    assert_eq!(h.old_regions(), &[del(3, 3)]);
    assert_eq!(h.new_regions(), &[add(3, 5)]);
    assert!(h.old_regions()[0].is_marker());
}

/// Pure deletion: the removed span on the old side, a marker on the new side.
#[test]
fn test_pure_deletion() {
    let h = hunk("@@ -10,2 +10,0 @@\n-foo\n-bar");

    assert_eq!(h.hunk_type, HunkType::Del);
    assert_eq!(h.old_regions(), &[del(10, 12)]);
    assert_eq!(h.new_regions(), &[add(10, 10)]);
    assert!(h.new_regions()[0].is_marker());
}

/// A context line closes the add run before the delete run.
#[test]
fn test_modification_with_context() {
    let h = hunk("@@ -1,3 +1,3 @@\n a\n-b\n+c\n d");

    assert_eq!(h.hunk_type, HunkType::Mod);
    // "-b" opens at old=2/new=2, "+c" at old=3/new=3, " d" sits on cursor 4.
    assert_eq!(
        h.old_regions(),
        &[DiffRegion::marker(RegionKind::Del, 3), del(2, 4)]
    );
    assert_eq!(
        h.new_regions(),
        &[add(3, 4), DiffRegion::marker(RegionKind::Add, 2)]
    );
}

/// Old and new lists stay in lockstep: one real span and one marker per pair.
#[test]
fn test_regions_are_paired() {
    let h = hunk("@@ -1,7 +1,7 @@\n a\n+b\n c\n-d\n-e\n f\n-g\n+h\n+i\n j");

    assert_eq!(h.old_regions().len(), h.new_regions().len());
    assert_eq!(h.old_regions().len(), 4);
    for (old, new) in h.old_regions().iter().zip(h.new_regions()) {
        assert!(old.is_marker() != new.is_marker(), "{} / {}", old, new);
        assert!(old.end_line >= old.start_line);
        assert!(new.end_line >= new.start_line);
    }
}

/// Consecutive added lines extend one run.
#[test]
fn test_consecutive_adds_form_one_region() {
    let h = hunk("@@ -5,2 +5,5 @@\n a\n+b\n+c\n+d\n e");

    assert_eq!(h.new_regions(), &[add(6, 9)]);
    assert_eq!(h.old_regions(), &[DiffRegion::marker(RegionKind::Del, 6)]);
}

/// A run open at the end of the body is dropped by default.
#[test]
fn test_trailing_run_is_dropped_by_default() {
    let h = hunk("@@ -1,2 +1,2 @@\n a\n-b\n+c");

    assert!(h.old_regions().is_empty());
    assert!(h.new_regions().is_empty());
}

/// Flush mode closes trailing runs as a context line would.
#[test]
fn test_trailing_run_is_flushed_in_strict_mode() {
    let h = HunkDiff::parse("@@ -1,2 +1,2 @@\n a\n-b\n+c", TrailingRuns::Flush).unwrap();

    assert_eq!(
        h.old_regions(),
        &[DiffRegion::marker(RegionKind::Del, 3), del(2, 4)]
    );
    assert_eq!(
        h.new_regions(),
        &[add(3, 4), DiffRegion::marker(RegionKind::Add, 2)]
    );
}

/// Flush mode makes no difference when the body ends on context.
#[test]
fn test_flush_is_noop_after_context() {
    let text = "@@ -1,3 +1,3 @@\n a\n-b\n+c\n d";
    let dropped = HunkDiff::parse(text, TrailingRuns::Drop).unwrap();
    let flushed = HunkDiff::parse(text, TrailingRuns::Flush).unwrap();
    assert_eq!(dropped.regions(), flushed.regions());
}

/// Unknown prefixes are skipped but still advance both cursors.
#[test]
fn test_unexpected_line_is_skipped() {
    let h = hunk("@@ -1,2 +1,2 @@\n-a\n\\ No newline at end of file\n+b\n c");

    assert_eq!(
        h.old_regions(),
        &[DiffRegion::marker(RegionKind::Del, 3), del(1, 4)]
    );
    assert_eq!(
        h.new_regions(),
        &[add(3, 4), DiffRegion::marker(RegionKind::Add, 1)]
    );
    assert_eq!(h.regions().old_end_line, 5);
    assert_eq!(h.regions().new_end_line, 5);
}

/// Cursors end at start + length when the body matches the declared lengths.
#[test]
fn test_cursors_end_at_declared_length() {
    let h = hunk("@@ -4,3 +7,3 @@\n a\n b\n c");

    assert_eq!(h.regions().old_end_line, 4 + 3);
    assert_eq!(h.regions().new_end_line, 7 + 3);
    assert!(h.old_regions().is_empty());
}

/// Building regions again yields the same lists, not duplicates.
#[test]
fn test_parse_diff_is_idempotent() {
    let h = hunk("@@ -1,3 +1,3 @@\n a\n-b\n+c\n d");

    let first = h.parse_diff(TrailingRuns::Drop);
    let second = h.parse_diff(TrailingRuns::Drop);
    assert_eq!(first, second);
    assert_eq!(&first, h.regions());
}

/// Missing header lengths mean one line on that side.
#[test]
fn test_header_defaults_make_single_line_mod() {
    let h = hunk("@@ -5 +10 @@\n-x\n+y\n z");

    assert_eq!(h.old_hunk_len, 1);
    assert_eq!(h.new_hunk_len, 1);
    assert_eq!(h.hunk_type, HunkType::Mod);
}

/// Windows line endings split the same as Unix ones.
#[test]
fn test_crlf_body() {
    let unix = hunk("@@ -1,3 +1,3 @@\n a\n-b\n+c\n d\n");
    let windows = hunk("@@ -1,3 +1,3 @@\r\n a\r\n-b\r\n+c\r\n d\r\n");

    assert_eq!(unix.lines, windows.lines);
    assert_eq!(unix.regions(), windows.regions());
}

/// Header context is kept apart from the body.
#[test]
fn test_context_is_not_a_body_line() {
    let h = hunk("@@ -3,0 +3,1 @@ impl Foo {\n+bar");
    assert_eq!(h.context, "impl Foo {");
    assert_eq!(h.lines, vec!["+bar".to_string()]);
}

/// An unparseable header refuses to build a hunk.
#[test]
fn test_malformed_header_is_an_error() {
    let err = HunkDiff::parse("@@ -x +1 @@\n+a", TrailingRuns::Drop).unwrap_err();
    assert!(matches!(err, HunkNavError::MalformedHunkHeader(_)));

    let err = HunkDiff::parse("", TrailingRuns::Drop).unwrap_err();
    assert!(matches!(err, HunkNavError::MalformedHunkHeader(_)));
}

/// Line counts skip markers and follow the closed regions.
#[test]
fn test_changed_line_counts() {
    let h = hunk("@@ -1,3 +1,3 @@\n a\n-b\n+c\n d");
    assert_eq!(h.changed_line_counts(), (2, 1));

    let h = hunk("@@ -4,0 +5,3 @@\n+a\n+b\n+c");
    assert_eq!(h.changed_line_counts(), (0, 3));
}

/// Huge line numbers are refused at the header instead of overflowing.
#[test]
fn test_overflowing_header_is_an_error() {
    let text = format!("@@ -{},1 +1,0 @@\n-x", usize::MAX);
    let err = HunkDiff::parse(&text, TrailingRuns::Drop).unwrap_err();
    assert!(matches!(err, HunkNavError::MalformedHunkHeader(_)));
}

/// Cursors stop at `usize::MAX` for hand-built headers near the limit.
#[test]
fn test_cursors_saturate_near_usize_max() {
    let header = HunkHeader {
        old_line_start: usize::MAX - 1,
        old_hunk_len: 1,
        new_line_start: usize::MAX - 1,
        new_hunk_len: 1,
        context: String::new(),
    };
    let lines = vec!["-a".to_string(), "+b".to_string(), " c".to_string()];
    let h = HunkDiff::from_parts(header, lines, TrailingRuns::Flush);

    assert_eq!(h.regions().old_end_line, usize::MAX);
    assert_eq!(h.regions().new_end_line, usize::MAX);
    assert_eq!(h.old_regions().len(), 2);
    assert_eq!(h.new_regions().len(), 2);
}

/// Chunk sorting works off the hunk body.
#[test]
fn test_hunk_sort_chunks() {
    let h = hunk("@@ -1,2 +1,2 @@\n-a\n+b\n~\n c\n+d");
    let (add_chunks, del_chunks) = h.sort_chunks();

    assert_eq!(
        add_chunks,
        vec![vec!["+b".to_string()], vec![" c".to_string(), "+d".to_string()]]
    );
    assert_eq!(
        del_chunks,
        vec![vec!["-a".to_string()], vec![" c".to_string()]]
    );
}

const GIT_FILE_DIFF: &str = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -3,0 +4,2 @@ fn existing() {
+    let x = 42;
+    let y = 43;
@@ -20,2 +21,0 @@ fn helper() {
-    old();
-    older();
@@ -30 +29 @@
-    a();
+    b();
"#;

fn git_file() -> FileDiff {
    FileDiff::new(
        "src/lib.rs",
        PathBuf::from("/repo/src/lib.rs"),
        GIT_FILE_DIFF,
        TrailingRuns::Drop,
    )
    .unwrap()
}

/// One hunk per `@@` header; the preamble is ignored.
#[test]
fn test_file_diff_splits_hunks() {
    let file = git_file();

    assert_eq!(file.hunks.len(), 3);
    assert_eq!(file.hunks[0].hunk_type, HunkType::Add);
    assert_eq!(file.hunks[0].lines.len(), 2);
    assert_eq!(file.hunks[0].new_regions(), &[add(4, 6)]);

    assert_eq!(file.hunks[1].hunk_type, HunkType::Del);
    assert_eq!(file.hunks[1].old_regions(), &[del(20, 22)]);
    assert_eq!(file.hunks[1].new_regions(), &[add(21, 21)]);

    // -U0 replacement: no trailing context, so nothing is emitted by default.
    assert_eq!(file.hunks[2].hunk_type, HunkType::Mod);
    assert!(file.hunks[2].new_regions().is_empty());
}

/// Strict mode recovers the last region of zero-context replacements.
#[test]
fn test_file_diff_strict_mode() {
    let file = FileDiff::new("src/lib.rs", "/repo/src/lib.rs", GIT_FILE_DIFF, TrailingRuns::Flush)
        .unwrap();

    let last = &file.hunks[2];
    assert_eq!(last.old_regions().len(), 2);
    assert_eq!(last.new_regions().len(), 2);
    assert_eq!(last.new_regions()[0], add(30, 31));
    // The add run opened one line later, so the delete run spans both lines.
    assert_eq!(last.old_regions()[1], del(30, 32));
}

/// SVN banners before the first header are ignored too.
#[test]
fn test_file_diff_svn_preamble() {
    let text = "Index: README.txt\n\
                ===================================================================\n\
                --- README.txt\t(revision 4)\n\
                +++ README.txt\t(working copy)\n\
                @@ -1,3 +1,3 @@\n first\n-second\n+2nd\n third\n";
    let file = FileDiff::new("README.txt", "/wc/README.txt", text, TrailingRuns::Drop).unwrap();

    assert_eq!(file.hunks.len(), 1);
    assert_eq!(file.hunks[0].lines.len(), 4);
    assert_eq!(file.hunks[0].old_regions()[1], del(2, 4));
}

/// A bad header anywhere fails the whole file.
#[test]
fn test_file_diff_malformed_header() {
    let text = "@@ -1 +1 @@\n-a\n+b\n@@ -oops @@\n+c\n";
    let err = FileDiff::new("a.txt", "/r/a.txt", text, TrailingRuns::Drop).unwrap_err();
    assert!(matches!(err, HunkNavError::MalformedHunkHeader(ref l) if l == "@@ -oops @@"));
}

/// Diff text without hunks yields an empty file diff.
#[test]
fn test_file_diff_without_hunks() {
    let text = "diff --git a/img.png b/img.png\nBinary files differ\n";
    let file = FileDiff::new("img.png", "/r/img.png", text, TrailingRuns::Drop).unwrap();
    assert!(file.hunks.is_empty());
}

/// Full and concise descriptions.
#[test]
fn test_hunk_descriptions() {
    let file = git_file();

    assert_eq!(
        file.hunk_description(&file.hunks[0], false),
        vec![
            "src/lib.rs : 4".to_string(),
            "fn existing() {".to_string(),
            "2 | ++".to_string(),
        ]
    );
    assert_eq!(
        file.hunk_description(&file.hunks[2], false)[2],
        "2 | +-".to_string()
    );
    assert_eq!(
        file.hunk_description(&file.hunks[1], true),
        vec!["src/lib.rs:21".to_string()]
    );
}

/// Filespecs point at the old name and the absolute new path.
#[test]
fn test_filespecs() {
    let file = git_file();
    assert_eq!(
        file.filespecs(&file.hunks[1]),
        ("src/lib.rs:20".to_string(), "/repo/src/lib.rs:21".to_string())
    );

    let mut file = file;
    file.old_file = "src/lib.rs@HEAD".to_string();
    assert_eq!(file.filespecs(&file.hunks[0]).0, "src/lib.rs@HEAD:3");
}
