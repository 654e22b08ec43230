use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

#[test]
fn test_languages_lists_every_id() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("languages");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    let rows: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(rows.len(), 22);

    let html = rows
        .iter()
        .find(|row| row.starts_with("html "))
        .expect("html row");
    assert!(html.contains("markup"));
    assert!(html.contains("three-state"));

    let ruby = rows
        .iter()
        .find(|row| row.starts_with("ruby "))
        .expect("ruby row");
    assert!(ruby.contains("literal-block"));
    assert!(ruby.contains("two-state"));

    let vue = rows.iter().find(|row| row.starts_with("vue ")).expect("vue row");
    assert!(vue.contains("per region"));

    Ok(())
}

#[test]
fn test_languages_listing_snapshot() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("languages");
        cmd
    })?;

    assert_snapshot!(output.stdout, @r"
    vue              markup+code-slash+style-block per region
    javascript       code-slash     two-state
    javascriptreact  markup         three-state
    typescript       code-slash     two-state
    typescriptreact  markup         three-state
    html             markup         three-state
    css              style-block    two-state
    scss             style-block    two-state
    less             style-block    two-state
    json             code-slash     two-state
    jsonc            code-slash     two-state
    markdown         script-hash    two-state
    xml              markup         three-state
    php              code-slash     two-state
    python           script-hash    two-state
    java             code-slash     two-state
    c                code-slash     two-state
    cpp              code-slash     two-state
    csharp           code-slash     two-state
    go               code-slash     two-state
    rust             code-slash     two-state
    ruby             literal-block  two-state
    ");

    Ok(())
}
