use crate::error::{ComposerError, Result};
use crate::sections::{self, SectionRequest, SECTIONS};
use crate::templates::CATALOG;
use crate::types::Screen;
use crate::{
    auto_layout, compose_sections, generate_screen_with_options, match_template, parse_description,
    resolve_overlaps,
};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;

/// Page width when a sections file does not name one
const DEFAULT_PAGE_WIDTH: f64 = 1440.0;

/// Sections input: either a bare request list or `{width, sections}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SectionsInput {
    List(Vec<SectionRequest>),
    Page {
        #[serde(default)]
        width: Option<f64>,
        sections: Vec<SectionRequest>,
    },
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| ComposerError::option(id, "missing required argument"))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| ComposerError::FileNotFound {
        path: format!("{}: {}", path, e),
    })?;
    serde_json::from_str(&content).map_err(|e| ComposerError::format(format!("{}: {}", path, e)))
}

fn write_output<T: Serialize>(value: &T, output: Option<&String>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ComposerError::format(format!("Failed to serialize output: {}", e)))?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("✅ Wrote {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

// --- GENERATE ---
pub fn handle_generate_command(cli: &super::ComposerCli, matches: &ArgMatches) -> Result<()> {
    let description = required(matches, "description")?;
    let options = cli.build_composer_options(matches)?;

    let screen = generate_screen_with_options(description, &options)?;
    log::info!(
        "Generated {} element(s) from {:?} ({} confidence)",
        screen.elements.len(),
        screen.match_info.template,
        screen.match_info.confidence
    );
    if !screen.match_info.is_match() {
        log::warn!(
            "No template matched '{}'. Try one of: {}",
            description,
            screen.match_info.suggestions.join(", ")
        );
    }

    write_output(&screen, matches.get_one::<String>("output"))
}

// --- PARSE ---
#[derive(Serialize)]
struct ParseReport {
    parsed: crate::ParseResult,
    matched: crate::MatchResult,
}

pub fn handle_parse_command(matches: &ArgMatches) -> Result<()> {
    let description = required(matches, "description")?;
    let parsed = parse_description(description);
    let matched = match_template(&parsed);
    write_output(&ParseReport { parsed, matched }, None)
}

// --- TEMPLATES ---
#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct CatalogReport {
    templates: Vec<CatalogEntry>,
    sections: Vec<CatalogEntry>,
}

pub fn handle_templates_command(matches: &ArgMatches) -> Result<()> {
    let report = CatalogReport {
        templates: CATALOG
            .iter()
            .map(|t| CatalogEntry {
                name: t.name,
                description: t.description,
            })
            .collect(),
        sections: SECTIONS
            .iter()
            .map(|s| CatalogEntry {
                name: s.name,
                description: s.description,
            })
            .collect(),
    };

    if matches.get_flag("json") {
        return write_output(&report, None);
    }

    println!("📋 Templates:");
    for entry in &report.templates {
        println!("   {:<12} {}", entry.name, entry.description);
    }
    println!();
    println!("🧩 Sections:");
    for entry in &report.sections {
        println!("   {:<12} {}", entry.name, entry.description);
    }
    Ok(())
}

// --- LAYOUT ---
pub fn handle_layout_command(cli: &super::ComposerCli, matches: &ArgMatches) -> Result<()> {
    let input = required(matches, "input")?;
    let mut screen: Screen = read_json(input)?;
    let options = cli.build_layout_options(matches)?;

    screen.elements = auto_layout(&screen.elements, screen.width, screen.height, &options)?;
    log::info!("Arranged {} element(s) ({:?})", screen.elements.len(), options.direction);

    write_output(&screen, matches.get_one::<String>("output"))
}

// --- RESOLVE ---
pub fn handle_resolve_command(matches: &ArgMatches) -> Result<()> {
    let input = required(matches, "input")?;
    let mut screen: Screen = read_json(input)?;

    screen.elements = resolve_overlaps(&screen.elements, screen.width)?;

    write_output(&screen, matches.get_one::<String>("output"))
}

// --- SECTIONS ---
pub fn handle_sections_command(matches: &ArgMatches) -> Result<()> {
    let input = required(matches, "input")?;
    let (width, requests) = match read_json::<SectionsInput>(input)? {
        SectionsInput::List(requests) => (DEFAULT_PAGE_WIDTH, requests),
        SectionsInput::Page { width, sections } => (width.unwrap_or(DEFAULT_PAGE_WIDTH), sections),
    };

    if let Some(unknown) = requests.iter().find(|r| sections::get_section(&r.name).is_none()) {
        log::warn!(
            "Unknown section '{}'. Available: {}",
            unknown.name,
            sections::available_sections().join(", ")
        );
    }

    let page = compose_sections(width, &requests)?;
    log::info!("Composed {} section(s), page height {}", requests.len(), page.height);

    write_output(&page, matches.get_one::<String>("output"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_screen() {
        let file = write_temp(
            r#"{"width": 393, "height": 852, "elements": [{"type": "button", "x": 16, "y": 100, "width": 120, "height": 44}]}"#,
        );
        let screen: Screen = read_json(file.path().to_str().unwrap()).unwrap();
        assert_eq!(screen.width, 393.0);
        assert_eq!(screen.elements.len(), 1);
        assert_eq!(screen.elements[0].element_type, "button");
    }

    #[test]
    fn test_read_errors() {
        let broken = write_temp("[1, 2");
        assert!(matches!(
            read_json::<Screen>(broken.path().to_str().unwrap()),
            Err(ComposerError::InvalidFormat { .. })
        ));
        assert!(matches!(
            read_json::<Screen>("/no/such/screen.json"),
            Err(ComposerError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_sections_input_shapes() {
        let list: SectionsInput = serde_json::from_str(r#"[{"name": "hero"}, {"name": "footer"}]"#).unwrap();
        assert!(matches!(list, SectionsInput::List(ref r) if r.len() == 2));

        let page: SectionsInput =
            serde_json::from_str(r#"{"width": 393, "sections": [{"name": "navbar", "props": {"title": "Acme"}}]}"#)
                .unwrap();
        match page {
            SectionsInput::Page { width, sections } => {
                assert_eq!(width, Some(393.0));
                assert_eq!(sections[0].props["title"], "Acme");
            }
            SectionsInput::List(_) => panic!("expected page input"),
        }
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.json").to_string_lossy().into_owned();
        let screen = Screen {
            width: 320.0,
            height: 480.0,
            elements: Vec::new(),
        };
        write_output(&screen, Some(&path)).unwrap();

        let back: Screen = read_json(&path).unwrap();
        assert_eq!(back, screen);
    }
}
