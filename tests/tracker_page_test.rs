use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use tracker_patch::app::patches::tracker_page;
use tracker_patch::{LocalFiles, PatchRunner};

const NEW_STATUS_BLOCK: [&str; 11] = [
    "const STATUS_OPTIONS = [",
    "  \"리뷰\",",
    "  \"추천\",",
    "  \"보류\",",
    "  \"본문 작성\",",
    "  \"본문 완료\",",
    "  \"이미지 생성\",",
    "  \"이미지 완료\",",
    "  \"업로드 예정\",",
    "  \"중복\",",
    "];",
];

/// TrackerPage.tsx with the boards on lines 24-25 and a status array on lines 26-30.
fn page_fixture() -> String {
    let mut lines: Vec<String> = (0..24).map(|i| format!("import line{} from \"./line{}\";", i, i)).collect();
    lines.push("const STATUS_BOARD = [\"리뷰\"];".to_string());
    lines.push("const IMAGE_STATUS_BOARD = [\"이미지 생성\"];".to_string());
    lines.push("const STATUS_OPTIONS = [".to_string());
    lines.push("  \"리뷰\",".to_string());
    lines.push("  \"추천\",".to_string());
    lines.push("  \"보류\",".to_string());
    lines.push("];".to_string());
    lines.push("".to_string());
    lines.push("export default function TrackerPage() {".to_string());
    lines.push("}".to_string());
    lines.join("\n") + "\n"
}

fn setup(content: &[u8]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::create_dir_all(temp_dir.path().join("src/pages"))?;
    fs::write(temp_dir.path().join(tracker_page::PATH), content)?;
    Ok(temp_dir)
}

fn read_lines(temp_dir: &TempDir) -> Result<Vec<String>> {
    let text = fs::read_to_string(temp_dir.path().join(tracker_page::PATH))?;
    Ok(text.split('\n').map(str::to_string).collect())
}

#[test]
fn test_page_patch_rewrites_boards_and_status_block() -> Result<()> {
    let temp_dir = setup(page_fixture().as_bytes())?;
    let runner = PatchRunner::new(LocalFiles::new(temp_dir.path()));

    let outcome = runner.run(&tracker_page::patch())?;
    assert!(outcome.changed);
    assert_eq!(outcome.lines_before, 34);
    assert_eq!(outcome.lines_after, 40);

    let lines = read_lines(&temp_dir)?;
    assert_eq!(lines[23], "import line23 from \"./line23\";");
    assert_eq!(
        lines[24],
        r#"const STATUS_BOARD = ["리뷰", "추천", "본문 작성", "본문 완료"];"#
    );
    assert_eq!(
        lines[25],
        r#"const IMAGE_STATUS_BOARD = ["이미지 생성", "이미지 완료", "업로드 예정"];"#
    );
    assert_eq!(&lines[26..37], &NEW_STATUS_BLOCK.map(String::from)[..]);
    assert_eq!(lines[37], "");
    assert_eq!(lines[38], "export default function TrackerPage() {");
    assert_eq!(lines.last().map(String::as_str), Some("}"));
    Ok(())
}

#[test]
fn test_page_output_has_no_trailing_newline() -> Result<()> {
    let temp_dir = setup(page_fixture().as_bytes())?;
    PatchRunner::new(LocalFiles::new(temp_dir.path())).run(&tracker_page::patch())?;

    let text = fs::read_to_string(temp_dir.path().join(tracker_page::PATH))?;
    assert!(text.ends_with('}'));
    Ok(())
}

#[test]
fn test_page_patch_rerun_keeps_terminator_alignment() -> Result<()> {
    let temp_dir = setup(page_fixture().as_bytes())?;
    let runner = PatchRunner::new(LocalFiles::new(temp_dir.path()));

    runner.run(&tracker_page::patch())?;
    let first = fs::read_to_string(temp_dir.path().join(tracker_page::PATH))?;

    let outcome = runner.run(&tracker_page::patch())?;
    let second = fs::read_to_string(temp_dir.path().join(tracker_page::PATH))?;

    assert!(!outcome.changed);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_page_patch_tolerates_invalid_utf8() -> Result<()> {
    let mut content = b"// \xff broken\n".to_vec();
    content.extend_from_slice(page_fixture().as_bytes());
    let temp_dir = setup(&content)?;

    // the extra leading line shifts every fixed index by one
    PatchRunner::new(LocalFiles::new(temp_dir.path())).run(&tracker_page::patch())?;

    let lines = read_lines(&temp_dir)?;
    assert_eq!(lines[0], "// \u{FFFD} broken");
    assert!(lines[24].starts_with("const STATUS_BOARD = [\"리뷰\", \"추천\""));
    Ok(())
}

#[test]
fn test_page_patch_short_file_is_untouched() -> Result<()> {
    let short = "const A = 1;\nconst B = 2;\n";
    let temp_dir = setup(short.as_bytes())?;

    let result = PatchRunner::new(LocalFiles::new(temp_dir.path())).run(&tracker_page::patch());

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(temp_dir.path().join(tracker_page::PATH))?, short);
    Ok(())
}
