use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

// ============================================================
// Dry run
// ============================================================

#[test]
fn test_dry_run_previews_without_writing() -> Result<()> {
    let test = CliTest::with_file("app.ts", "const x = 1;\n")?;

    let output = test.run({
        let mut cmd = test.toggle_command();
        cmd.arg("app.ts");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--> app.ts:1"));
    assert!(output.stdout.contains("1 - const x = 1;"));
    assert!(output.stdout.contains("1 + // const x = 1;"));
    assert!(output.stdout.contains("Would rewrite 1 line(s) in app.ts (line, per-line)."));
    assert!(output.stdout.contains("--apply"));
    assert_eq!(test.read_file("app.ts")?, "const x = 1;\n");

    Ok(())
}

// ============================================================
// Apply
// ============================================================

#[test]
fn test_apply_cycles_markup_line() -> Result<()> {
    let test = CliTest::with_file("index.html", "<p>\n  <div>x</div>\n</p>\n")?;
    let toggle = || {
        let mut cmd = test.toggle_command();
        cmd.args(["index.html", "--lines", "2", "--apply"]);
        cmd
    };

    assert_eq!(test.run(toggle())?.code, Some(0));
    assert_eq!(
        test.read_file("index.html")?,
        "<p>\n  <!-- <div>x</div> -->\n</p>\n"
    );

    test.run(toggle())?;
    assert_eq!(
        test.read_file("index.html")?,
        "<p>\n  <!-- /* <div>x</div> */ -->\n</p>\n"
    );

    let output = test.run(toggle())?;
    assert!(output.stdout.contains("Toggled 1 line(s) in index.html (line, strip-outer)."));
    assert_eq!(test.read_file("index.html")?, "<p>\n  <div>x</div>\n</p>\n");

    Ok(())
}

#[test]
fn test_apply_block_wraps_and_unwraps() -> Result<()> {
    let original = "a();\nb();\nc();\n";
    let test = CliTest::with_file("main.js", original)?;
    let toggle = || {
        let mut cmd = test.toggle_command();
        cmd.args(["main.js", "--apply"]);
        cmd
    };

    let output = test.run(toggle())?;
    assert!(output.stdout.contains("(block, wrap)"));
    assert_eq!(test.read_file("main.js")?, "/* a();\nb();\nc(); */\n");

    let output = test.run(toggle())?;
    assert!(output.stdout.contains("(block, unwrap)"));
    assert_eq!(test.read_file("main.js")?, original);

    Ok(())
}

#[test]
fn test_per_line_flag() -> Result<()> {
    let test = CliTest::with_file("main.go", "a()\nb()")?;

    let mut cmd = test.toggle_command();
    cmd.args(["main.go", "--per-line", "--apply"]);
    test.run(cmd)?;

    assert_eq!(test.read_file("main.go")?, "// a()\n// b()");
    Ok(())
}

#[test]
fn test_config_per_line_default() -> Result<()> {
    let test = CliTest::with_file("main.go", "a()\nb()\n")?;
    test.write_file(".nestcommentrc.json", r#"{ "perLine": true }"#)?;

    let mut cmd = test.toggle_command();
    cmd.args(["main.go", "--apply"]);
    test.run(cmd)?;

    assert_eq!(test.read_file("main.go")?, "// a()\n// b()\n");
    Ok(())
}

#[test]
fn test_preserves_crlf() -> Result<()> {
    let test = CliTest::with_file("style.css", "a {\r\n  color: red;\r\n}\r\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["style.css", "--lines", "2", "--apply"]);
    test.run(cmd)?;

    assert_eq!(
        test.read_file("style.css")?,
        "a {\r\n  /* color: red; */\r\n}\r\n"
    );
    Ok(())
}

#[test]
fn test_preserves_mixed_line_endings() -> Result<()> {
    let test = CliTest::with_file("main.js", "a();\r\nb();\nc();\r\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["main.js", "--lines", "3", "--apply"]);
    test.run(cmd)?;

    assert_eq!(test.read_file("main.js")?, "a();\r\nb();\n// c();\r\n");
    Ok(())
}

#[test]
fn test_column_selection_ending_at_line_start() -> Result<()> {
    let test = CliTest::with_file("lib.rs", "let a = 1;\nlet b = 2;\nlet c = 3;\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["lib.rs", "--lines", "1:1-3:1", "--apply"]);
    test.run(cmd)?;

    assert_eq!(
        test.read_file("lib.rs")?,
        "/* let a = 1;\nlet b = 2; */\nlet c = 3;\n"
    );
    Ok(())
}

#[test]
fn test_blank_selection_is_noop() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = 1\n\n\ny = 2\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["a.py", "--lines", "2-3", "--apply"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Nothing to toggle"));
    assert_eq!(test.read_file("a.py")?, "x = 1\n\n\ny = 2\n");
    Ok(())
}

// ============================================================
// Language resolution
// ============================================================

#[test]
fn test_language_flag_overrides_extension() -> Result<()> {
    let test = CliTest::with_file("page.txt", "<b>hi</b>\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["page.txt", "--language", "html", "--apply"]);
    test.run(cmd)?;

    assert_eq!(test.read_file("page.txt")?, "<!-- <b>hi</b> -->\n");
    Ok(())
}

#[test]
fn test_config_extension_mapping() -> Result<()> {
    let test = CliTest::with_file("notes.mdx", "hello\n")?;
    test.write_file(
        ".nestcommentrc.json",
        r#"{ "extensions": { "mdx": "markdown" } }"#,
    )?;

    let mut cmd = test.toggle_command();
    cmd.args(["notes.mdx", "--apply"]);
    test.run(cmd)?;

    assert_eq!(test.read_file("notes.mdx")?, "# hello\n");
    Ok(())
}

#[test]
fn test_unsupported_language_exits_1() -> Result<()> {
    let test = CliTest::with_file("prog.cob", "DISPLAY 'HI'.\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["prog.cob", "--language", "cobol"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stderr
            .contains("nested comments are not supported for language `cobol`")
    );
    Ok(())
}

#[test]
fn test_unknown_extension_exits_1() -> Result<()> {
    let test = CliTest::with_file("Makefile", "all:\n")?;

    let mut cmd = test.toggle_command();
    cmd.arg("Makefile");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("pass --language"));
    Ok(())
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_selection_outside_file_exits_2() -> Result<()> {
    let test = CliTest::with_file("a.c", "int x;\n")?;

    let mut cmd = test.toggle_command();
    cmd.args(["a.c", "--lines", "3"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("selection line 3 is outside the file (1 lines)"));
    Ok(())
}

#[test]
fn test_missing_file_exits_2() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.toggle_command();
    cmd.arg("nope.rs");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to read source file"));
    Ok(())
}

#[test]
fn test_invalid_config_exits_2() -> Result<()> {
    let test = CliTest::with_file("a.rs", "x\n")?;
    test.write_file(".nestcommentrc.json", r#"{ "extensions": { "x": "klingon" } }"#)?;

    let mut cmd = test.toggle_command();
    cmd.arg("a.rs");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("klingon"));
    Ok(())
}
