//! HTML export — renders the active record into the fixed syllabus layout
//! and writes it next to the working directory, named from a sanitized
//! course-name slug. Turning the HTML into a PDF is the rendering tool's
//! job, not ours; the document is the interface boundary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::syllabus::record::{Field, SyllabusRecord, UNSPECIFIED};

/// Short fields shown under the course-name heading, in layout order.
const HEADER_FIELDS: [Field; 7] = [
    Field::Semester,
    Field::EctsCredits,
    Field::TotalHours,
    Field::LectureHours,
    Field::TutorialHours,
    Field::PracticalHours,
    Field::ProjectHours,
];

/// Staffing and modality fields, second section of the layout.
const STAFF_FIELDS: [Field; 4] = [
    Field::MainTeacher,
    Field::TeachingTeam,
    Field::TeachingMethod,
    Field::Language,
];

/// Long-form fields, rendered as their own sections.
const BODY_FIELDS: [Field; 6] = [
    Field::Objectives,
    Field::Prerequisites,
    Field::Content,
    Field::Skills,
    Field::Evaluation,
    Field::References,
];

/// Renders the record into the fixed HTML layout.
pub fn render_html(record: &SyllabusRecord) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n</head>\n<body>\n",
        escape_html(record.get(Field::CourseName))
    ));
    html.push_str(&format!(
        "<h1>{}</h1>\n",
        escape_html(record.get(Field::CourseName))
    ));

    push_section(&mut html, record, &HEADER_FIELDS);
    html.push_str("<hr>\n");
    push_section(&mut html, record, &STAFF_FIELDS);
    html.push_str("<hr>\n");
    for field in BODY_FIELDS {
        html.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n",
            escape_html(field.label()),
            escape_html(record.get(field)).replace('\n', "<br>\n")
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_section(html: &mut String, record: &SyllabusRecord, fields: &[Field]) {
    for &field in fields {
        html.push_str(&format!(
            "<div><span class=\"label\">{} :</span> {}</div>\n",
            escape_html(field.label()),
            escape_html(record.get(field))
        ));
    }
}

/// Writes the rendered document to `<slug>.html` under `dir`, returning the
/// path. An existing export with the same name is overwritten.
pub fn write_html(record: &SyllabusRecord, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.html", slug(record.get(Field::CourseName))));
    fs::write(&path, render_html(record))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Sanitized file-name slug from the course name: lowercase, alphanumeric
/// runs joined by `-`. An unnamed course falls back to `syllabus`.
pub fn slug(course_name: &str) -> String {
    if course_name == UNSPECIFIED {
        return "syllabus".to_string();
    }
    let mut out = String::new();
    let mut pending_dash = false;
    for c in course_name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        "syllabus".to_string()
    } else {
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
