use anyhow::{Context, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use std::path::Path;

const PROJECT: &[u8] = b"project";
const PROPERTIES: &[u8] = b"properties";
const HASH: &[u8] = b"hash";

/// Record `hash` as `project/properties/hash` in POM content.
///
/// Replaces an existing hash, adds one to an existing `<properties>`, or appends a new
/// `<properties>` block to the project. Everything else is written back unchanged.
///
/// # Errors
/// Returns error if the content is not well-formed XML or its root is not `<project>`.
pub fn attach_publish_metadata(content: &str, hash: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let indent = detect_indent(content);

    let mut buf = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut saw_project = false;
    let mut saw_properties = false;
    let mut hash_written = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if path.is_empty() {
                    ensure_project(&name)?;
                    saw_project = true;
                }
                path.push(name);
                writer.write_event(Event::Start(e.clone()))?;
                if in_hash(&path) {
                    writer.write_event(Event::Text(BytesText::new(hash)))?;
                    hash_written = true;
                }
            }
            Ok(Event::End(e)) => {
                if in_properties(&path) {
                    saw_properties = true;
                    if !hash_written {
                        write_hash(&mut writer, hash, indent, indent)?;
                        hash_written = true;
                    }
                } else if path.len() == 1 && !saw_properties {
                    write_text(&mut writer, indent)?;
                    write_properties(&mut writer, hash, indent)?;
                    write_text(&mut writer, "\n")?;
                    saw_properties = true;
                }
                path.pop();
                writer.write_event(Event::End(e.clone()))?;
            }
            Ok(Event::Empty(e)) => {
                let name = e.local_name().as_ref().to_vec();
                let is_root = path.is_empty();
                if is_root {
                    ensure_project(&name)?;
                    saw_project = true;
                }
                path.push(name);
                if is_root {
                    writer.write_event(Event::Start(e.clone()))?;
                    write_properties(&mut writer, hash, indent)?;
                    writer.write_event(Event::End(e.to_end().into_owned()))?;
                    saw_properties = true;
                } else if in_properties(&path) && !saw_properties {
                    write_properties(&mut writer, hash, indent)?;
                    saw_properties = true;
                } else if in_hash(&path) {
                    writer.write_event(Event::Start(BytesStart::new("hash")))?;
                    writer.write_event(Event::Text(BytesText::new(hash)))?;
                    writer.write_event(Event::End(BytesEnd::new("hash")))?;
                    hash_written = true;
                } else {
                    writer.write_event(Event::Empty(e.clone()))?;
                }
                path.pop();
            }
            Ok(Event::Text(e)) => {
                // the replacement was written with the start tag
                if !in_hash(&path) {
                    writer.write_event(Event::Text(e.clone()))?;
                }
            }
            Ok(Event::CData(e)) => {
                if !in_hash(&path) {
                    writer.write_event(Event::CData(e.clone()))?;
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if !in_hash(&path) {
                    writer.write_event(Event::GeneralRef(e.clone()))?;
                }
            }
            Ok(Event::Comment(e)) => {
                writer.write_event(Event::Comment(e.clone()))?;
            }
            Ok(Event::Decl(e)) => {
                writer.write_event(Event::Decl(e.clone()))?;
            }
            Ok(Event::PI(e)) => {
                writer.write_event(Event::PI(e.clone()))?;
            }
            Ok(Event::DocType(e)) => {
                writer.write_event(Event::DocType(e.clone()))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
        }
        buf.clear();
    }

    if !saw_project {
        anyhow::bail!("POM has no <project> element");
    }

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).context("Failed to convert XML to UTF-8")
}

/// Rewrite the POM at `path` in place with [`attach_publish_metadata`].
///
/// # Errors
/// Returns error if the file cannot be read, rewritten or written back.
pub async fn attach_publish_metadata_to_file(path: &Path, hash: &str) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let updated = attach_publish_metadata(&content, hash)
        .with_context(|| format!("Failed to update {}", path.display()))?;
    tokio::fs::write(path, updated)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), hash, "attached publish hash");
    Ok(())
}

fn ensure_project(name: &[u8]) -> Result<()> {
    if name != PROJECT {
        anyhow::bail!(
            "Expected <project> root element, found <{}>",
            String::from_utf8_lossy(name)
        );
    }
    Ok(())
}

fn in_properties(path: &[Vec<u8>]) -> bool {
    path.len() == 2 && path[1] == PROPERTIES
}

fn in_hash(path: &[Vec<u8>]) -> bool {
    path.len() == 3 && path[1] == PROPERTIES && path[2] == HASH
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write `<hash>` preceded by `lead` and followed by `trail`
fn write_hash<W: std::io::Write>(
    writer: &mut Writer<W>,
    hash: &str,
    lead: &str,
    trail: &str,
) -> Result<()> {
    write_text(writer, lead)?;
    writer.write_event(Event::Start(BytesStart::new("hash")))?;
    writer.write_event(Event::Text(BytesText::new(hash)))?;
    writer.write_event(Event::End(BytesEnd::new("hash")))?;
    write_text(writer, &format!("\n{trail}"))?;
    Ok(())
}

fn write_properties<W: std::io::Write>(writer: &mut Writer<W>, hash: &str, indent: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("properties")))?;
    write_hash(writer, hash, &format!("\n{indent}{indent}"), indent)?;
    writer.write_event(Event::End(BytesEnd::new("properties")))?;
    Ok(())
}

/// Detect indentation style from XML content
fn detect_indent(content: &str) -> &'static str {
    for line in content.lines() {
        if line.starts_with("    ") {
            return "    ";
        } else if line.starts_with("  ") {
            return "  ";
        } else if line.starts_with('\t') {
            return "\t";
        }
    }
    "  "
}
