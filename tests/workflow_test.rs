//! End-to-end workflow tests.
//!
//! Drives the full generation pipeline the way the binary does: build a
//! configuration, assemble the context, render the page, and write the
//! output tree.

use anyhow::Result;
use downpage::{Config, Direction, build_context, pages, write_css_assets};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Builds a configuration pointing at a temporary workspace.
fn test_config(output: PathBuf) -> Config {
    Config {
        output,
        site_name: Some("Example".to_string()),
        slogan: Some("Back soon".to_string()),
        logo: None,
        logo_alt: "Home".to_string(),
        lang: "en".to_string(),
        dir: Direction::Ltr,
        page_title: "Site under maintenance".to_string(),
        head_title: None,
        notice: None,
        content: None,
        header: None,
        sidebar_first: None,
        sidebar_second: None,
        footer: None,
        open: false,
    }
}

/// Tests the default pipeline with no input files at all.
#[test]
fn test_generate_with_defaults() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let output = dir.path().join("dist");
    let config = test_config(output.clone());
    config.validate()?;

    // Act
    let context = build_context(&config)?;
    let html = pages::maintenance::render(&context).into_string();

    fs::create_dir_all(&output)?;
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir)?;
    write_css_assets(&assets_dir)?;
    fs::write(output.join("index.html"), &html)?;

    // Assert
    let page = fs::read_to_string(output.join("index.html"))?;
    assert!(page.starts_with("<!DOCTYPE html>"), "Page should be a full document");
    assert!(
        page.contains("Example is currently under maintenance"),
        "Default content should name the site"
    );
    assert!(
        page.contains("<h1>Site under maintenance</h1>"),
        "Default heading should render"
    );
    assert!(
        page.contains("<title>Site under maintenance | Example</title>"),
        "Browser title should compose heading and site name"
    );
    assert!(
        output.join("assets").join("maintenance.css").exists(),
        "Stylesheet bundle should be written"
    );

    Ok(())
}

/// Tests the pipeline with every region file populated.
#[test]
fn test_generate_with_all_regions() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let output = dir.path().join("dist");

    let content_path = dir.path().join("message.md");
    fs::write(
        &content_path,
        "We are **upgrading** our servers.\n\nSee the [status page](https://status.example.com).",
    )?;

    let sidebar_path = dir.path().join("sidebar.md");
    fs::write(&sidebar_path, "Questions? Email support@example.com")?;

    let footer_path = dir.path().join("footer.md");
    fs::write(&footer_path, "© 2026 Example")?;

    let logo_path = dir.path().join("logo.png");
    fs::write(&logo_path, PNG_MAGIC)?;

    let mut config = test_config(output.clone());
    config.content = Some(content_path);
    config.sidebar_first = Some(sidebar_path);
    config.footer = Some(footer_path);
    config.logo = Some(logo_path);
    config.notice = Some("Scheduled window: 02:00-04:00 UTC".to_string());
    config.validate()?;

    // Act
    let context = build_context(&config)?;
    let html = pages::maintenance::render(&context).into_string();

    fs::create_dir_all(&output)?;
    fs::write(output.join("index.html"), &html)?;

    // Assert
    let page = fs::read_to_string(output.join("index.html"))?;
    assert!(
        page.contains("<strong>upgrading</strong>"),
        "Content markdown should be rendered: {}",
        page
    );
    assert!(
        page.contains("href=\"https://status.example.com\""),
        "Content links should survive rendering"
    );
    assert!(
        page.contains("data:image/png;base64,"),
        "Logo should be inlined as a data URI"
    );
    assert!(
        page.contains("Scheduled window: 02:00-04:00 UTC"),
        "Notice should render in the messages banner"
    );
    assert!(page.contains("l-sidebar-first"), "Sidebar region should render");
    assert!(!page.contains("l-sidebar-second"), "Unset sidebar stays suppressed");
    assert!(page.contains("one-sidebar"), "Body classes should track sidebar count");
    assert!(
        page.contains("<footer role=\"contentinfo\">"),
        "Footer region should render"
    );

    Ok(())
}

/// Tests that validation rejects a configuration pointing at missing files.
#[test]
fn test_validation_rejects_missing_files() {
    // Arrange
    let mut config = test_config(PathBuf::from("dist"));
    config.content = Some(PathBuf::from("no/such/message.md"));

    // Act
    let result = config.validate();

    // Assert
    assert!(result.is_err(), "Missing content file should fail validation");
}

/// Tests an RTL localized configuration end to end.
#[test]
fn test_generate_rtl_page() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let logo_path = dir.path().join("logo.png");
    fs::write(&logo_path, PNG_MAGIC)?;

    let mut config = test_config(dir.path().join("dist"));
    config.lang = "ar".to_string();
    config.dir = Direction::Rtl;
    config.logo = Some(logo_path);
    config.logo_alt = "الرئيسية".to_string();
    config.validate()?;

    // Act
    let context = build_context(&config)?;
    let html = pages::maintenance::render(&context).into_string();

    // Assert
    assert!(html.contains("lang=\"ar\""), "Language code should propagate");
    assert!(html.contains("dir=\"rtl\""), "Direction should propagate");
    assert!(
        html.contains("alt=\"الرئيسية\""),
        "Localized alt text should reach the logo image"
    );

    Ok(())
}
