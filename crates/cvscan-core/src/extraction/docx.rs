use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ScanError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract body paragraph text from DOCX bytes, one line per paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ScanError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ScanError::ParseFailure(format!("failed to open docx: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ScanError::ParseFailure(format!("'{DOCUMENT_PART}' not found: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ScanError::ParseFailure(format!("failed to read {DOCUMENT_PART}: {e}")))?;

    parse_document_xml(&xml)
}

/// Collect the text of every `w:p` that is a direct child of `w:body`.
///
/// Paragraphs inside tables, text boxes and other containers are skipped.
/// Within a paragraph, `w:t` contributes its text, `w:tab` a tab and
/// `w:br`/`w:cr` a newline.
pub fn parse_document_xml(xml: &str) -> Result<String, ScanError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ScanError::ParseFailure(format!(
                "malformed {DOCUMENT_PART} near byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && parent_is(&open, b"body") {
                    current = Some(String::new());
                }
                open.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"p" if parent_is(&open, b"body") => paragraphs.push(String::new()),
                    b"tab" if in_body_run(&open) => push_to(&mut current, "\t"),
                    b"br" | b"cr" if in_body_run(&open) => push_to(&mut current, "\n"),
                    _ => {}
                }
            }
            Event::End(_) => {
                if let Some(name) = open.pop() {
                    if name == b"p" && parent_is(&open, b"body") {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                }
            }
            Event::Text(t) if in_body_text(&open) => {
                let text = t.unescape().map_err(|e| {
                    ScanError::ParseFailure(format!("bad text in {DOCUMENT_PART}: {e}"))
                })?;
                push_to(&mut current, &text);
            }
            Event::CData(c) if in_body_text(&open) => {
                push_to(&mut current, &String::from_utf8_lossy(&c));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn push_to(current: &mut Option<String>, s: &str) {
    if let Some(text) = current.as_mut() {
        text.push_str(s);
    }
}

fn parent_is(open: &[Vec<u8>], name: &[u8]) -> bool {
    open.last().is_some_and(|n| n == name)
}

/// Number of open `w:p` elements; 1 means we are in a body paragraph's own runs.
fn paragraph_depth(open: &[Vec<u8>]) -> usize {
    open.iter().filter(|n| n.as_slice() == b"p").count()
}

fn in_body_run(open: &[Vec<u8>]) -> bool {
    parent_is(open, b"r") && paragraph_depth(open) == 1
}

fn in_body_text(open: &[Vec<u8>]) -> bool {
    parent_is(open, b"t") && paragraph_depth(open) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        )
    }

    #[test]
    fn paragraphs_joined_with_newline() {
        let xml = document(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t xml:space=\"preserve\">Data </w:t></w:r><w:r><w:t>Scientist</w:t></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "Jane Doe\nData Scientist");
    }

    #[test]
    fn empty_paragraphs_kept_as_blank_lines() {
        let xml = document(
            "<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p><w:pPr><w:jc w:val=\"left\"/></w:pPr></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "A\n\n\nB");
    }

    #[test]
    fn table_text_ignored() {
        let xml = document(
            "<w:p><w:r><w:t>Before</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>After</w:t></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "Before\nAfter");
    }

    #[test]
    fn tabs_breaks_and_entities() {
        let xml = document(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>R&amp;D</w:t><w:tab/><w:t>Lead</w:t><w:br/><w:t>2019</w:t></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "R&D\tLead\n2019");
    }

    #[test]
    fn hyperlink_text_included() {
        let xml = document(
            "<w:p><w:r><w:t xml:space=\"preserve\">Mail: </w:t></w:r><w:hyperlink><w:r><w:t>a@b.com</w:t></w:r></w:hyperlink></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "Mail: a@b.com");
    }

    #[test]
    fn textbox_paragraphs_ignored() {
        let xml = document(
            "<w:p><w:r><w:t>Main</w:t></w:r><w:r><w:drawing><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></w:drawing></w:r></w:p>",
        );
        assert_eq!(parse_document_xml(&xml).unwrap(), "Main");
    }

    #[test]
    fn empty_body_yields_empty_text() {
        assert_eq!(parse_document_xml(&document("")).unwrap(), "");
    }

    #[test]
    fn malformed_xml_is_parse_failure() {
        let result = parse_document_xml("<w:document><w:body><w:p></w:body>");
        assert!(matches!(result, Err(ScanError::ParseFailure(_))));
    }
}
