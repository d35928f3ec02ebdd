use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup_example(test: &CliTest) -> Result<()> {
    test.write_file("src/a.js", "FOO_BAR=1")?;
    test.write_file("src/b.js", "unrelated")?;
    test.write_file("strings.dict", "FOO_BAR=hello\nBAZ=world\n")?;
    Ok(())
}

#[test]
fn test_split_used_and_ignored() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;

    let output = test.split("src", "strings.dict", "js")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("build/strings.dict")?, "FOO_BAR=hello\n");
    assert_eq!(test.read_file("build/ignored_strings.dict")?, "BAZ=world\n");
    Ok(())
}

#[test]
fn test_split_extension_not_allowed() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;
    test.write_file("src/c.ts", "nothing relevant")?;

    let output = test.split("src", "strings.dict", "ts")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("build/strings.dict")?, "");
    assert_snapshot!(test.read_file("build/ignored_strings.dict")?.trim_end(), @r"
    BAZ=world
    FOO_BAR=hello
    ");
    Ok(())
}

#[test]
fn test_split_no_eligible_files_leaves_both_outputs_empty() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;

    let output = test.split("src", "strings.dict", "ts")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("build/strings.dict")?, "");
    assert_eq!(test.read_file("build/ignored_strings.dict")?, "");
    assert!(stdout(&output).contains("Scanned 0 source files against 1 dictionary"));
    Ok(())
}

#[test]
fn test_split_key_with_space_before_separator() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "GREETING\nother")?;
    test.write_file("en.dict", "GREETING =Hello\nMISSING =Nope\n")?;

    test.split("src", "en.dict", "js")?;

    assert_eq!(test.read_file("build/en.dict")?, "GREETING =Hello\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "MISSING =Nope\n");
    Ok(())
}

#[test]
fn test_split_prints_header_and_summary() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;

    let output = test.split("src", "strings.dict", "js")?;
    let out = stdout(&output);

    assert!(out.contains("Root folder: src"));
    assert!(out.contains("Dictionary files: strings.dict"));
    assert!(out.contains("Used extensions: js"));
    assert!(out.contains("strings.dict  1 used, 1 ignored"));
    assert!(out.contains("Scanned 2 source files against 1 dictionary"));
    Ok(())
}

#[test]
fn test_split_used_in_any_file_wins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "t('HELLO')")?;
    test.write_file("src/b.js", "nothing")?;
    test.write_file("src/c.js", "still nothing")?;
    test.write_file("en.dict", "HELLO=Hello\n")?;

    test.split("src", "en.dict", "js")?;

    assert_eq!(test.read_file("build/en.dict")?, "HELLO=Hello\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "");
    Ok(())
}

#[test]
fn test_split_skips_comments_blank_and_malformed_lines() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "GREETING FAREWELL")?;
    test.write_file(
        "en.dict",
        "# header comment\n\nGREETING=Hi\n   \nnot an entry\nUNUSED=x\n  # FAREWELL=Bye\n",
    )?;

    test.split("src", "en.dict", "js")?;

    assert_eq!(test.read_file("build/en.dict")?, "GREETING=Hi\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "UNUSED=x\n");
    Ok(())
}

#[test]
fn test_split_keys_are_regular_expressions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "label('btn.cancel')")?;
    test.write_file("en.dict", "btn\\.(ok|cancel)=Button\nbtn\\.save=Save\n")?;

    test.split("src", "en.dict", "js")?;

    assert_eq!(test.read_file("build/en.dict")?, "btn\\.(ok|cancel)=Button\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "btn\\.save=Save\n");
    Ok(())
}

#[test]
fn test_split_multiple_dictionaries_and_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.tsx", "t('TITLE')")?;
    test.write_file("src/lib/util.jsx", "t('SAVE')")?;
    test.write_file("src/readme.md", "TITLE SAVE CANCEL")?;
    test.write_file("i18n/en.dict", "TITLE=Title\nSUBTITLE=Sub\n")?;
    test.write_file("i18n/actions.dict", "SAVE=Save\nCANCEL=Cancel\n")?;

    let output = test.split("src", "i18n/en.dict,i18n/actions.dict", "ts,js")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("build/en.dict")?, "TITLE=Title\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "SUBTITLE=Sub\n");
    assert_eq!(test.read_file("build/actions.dict")?, "SAVE=Save\n");
    assert_eq!(test.read_file("build/ignored_actions.dict")?, "CANCEL=Cancel\n");
    Ok(())
}

#[test]
fn test_split_clears_build_directory() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;
    test.write_file("build/leftover.txt", "old run")?;
    test.write_file("build/strings.dict", "STALE=1\n")?;

    test.split("src", "strings.dict", "js")?;

    assert!(!test.exists("build/leftover.txt"));
    assert_eq!(test.read_file("build/strings.dict")?, "FOO_BAR=hello\n");
    Ok(())
}

#[test]
fn test_split_rerun_does_not_accumulate() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;

    test.split("src", "strings.dict", "js")?;
    test.split("src", "strings.dict", "js")?;

    assert_eq!(test.read_file("build/strings.dict")?, "FOO_BAR=hello\n");
    Ok(())
}

#[test]
fn test_split_missing_dictionary_warns_and_continues() -> Result<()> {
    let test = CliTest::new()?;
    setup_example(&test)?;

    let output = test.split("src", "missing.dict,strings.dict", "js")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: cannot read dictionary file missing.dict"));
    assert_eq!(test.read_file("build/missing.dict")?, "");
    assert_eq!(test.read_file("build/ignored_missing.dict")?, "");
    assert_eq!(test.read_file("build/strings.dict")?, "FOO_BAR=hello\n");
    Ok(())
}

#[test]
fn test_split_invalid_pattern_warns_and_skips_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "price( OK")?;
    test.write_file("en.dict", "price(=Price\nOK=ok\n")?;

    let output = test.split("src", "en.dict", "js")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("skipping key \"price(\" in en.dict"));
    assert_eq!(test.read_file("build/en.dict")?, "OK=ok\n");
    assert_eq!(test.read_file("build/ignored_en.dict")?, "");
    Ok(())
}

#[test]
fn test_split_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("strings.dict", "FOO=1\n")?;

    let output = test.split("does-not-exist", "strings.dict", "js")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));
    assert!(!test.exists("build/strings.dict"));
    Ok(())
}
