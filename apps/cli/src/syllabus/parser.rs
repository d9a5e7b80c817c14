//! Syllabus parser — maps raw model text to a fully-populated [`SyllabusRecord`].
//!
//! The extraction is table-driven: one entry per field naming its canonical
//! label and whether the value is a single line or a block running to the next
//! recognized label. Label matching is case-insensitive and literal — no fuzzy
//! or partial matching — but tolerates markdown decoration (`**`, `#`, list
//! bullets) around the heading. Any field whose label is absent, or whose
//! value is empty after trimming, holds [`UNSPECIFIED`] in the result.

use crate::syllabus::record::{Field, SyllabusRecord};

/// How a field's value is delimited in the model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// Value runs from the separator to the end of the labeled line.
    Line,
    /// Value runs from the separator to the next recognized label or end of text.
    Block,
}

struct FieldSpec {
    field: Field,
    capture: Capture,
}

/// One entry per field. Long-form narrative fields take block capture, every
/// hour/name/credit field is a single line.
static FIELD_TABLE: [FieldSpec; 18] = [
    FieldSpec { field: Field::CourseName, capture: Capture::Line },
    FieldSpec { field: Field::Semester, capture: Capture::Line },
    FieldSpec { field: Field::EctsCredits, capture: Capture::Line },
    FieldSpec { field: Field::TotalHours, capture: Capture::Line },
    FieldSpec { field: Field::LectureHours, capture: Capture::Line },
    FieldSpec { field: Field::TutorialHours, capture: Capture::Line },
    FieldSpec { field: Field::PracticalHours, capture: Capture::Line },
    FieldSpec { field: Field::ProjectHours, capture: Capture::Line },
    FieldSpec { field: Field::MainTeacher, capture: Capture::Line },
    FieldSpec { field: Field::TeachingTeam, capture: Capture::Line },
    FieldSpec { field: Field::TeachingMethod, capture: Capture::Line },
    FieldSpec { field: Field::Language, capture: Capture::Line },
    FieldSpec { field: Field::Objectives, capture: Capture::Block },
    FieldSpec { field: Field::Prerequisites, capture: Capture::Block },
    FieldSpec { field: Field::Content, capture: Capture::Block },
    FieldSpec { field: Field::Skills, capture: Capture::Block },
    FieldSpec { field: Field::Evaluation, capture: Capture::Block },
    FieldSpec { field: Field::References, capture: Capture::Block },
];

fn capture_kind(field: Field) -> Capture {
    FIELD_TABLE
        .iter()
        .find(|spec| spec.field == field)
        .map(|spec| spec.capture)
        .unwrap_or(Capture::Line)
}

/// Parses a model reply into a complete record. Pure and deterministic:
/// the same text always yields field-for-field identical records.
pub fn parse(text: &str) -> SyllabusRecord {
    let lines: Vec<&str> = text.lines().collect();

    // Locate every labeled line first; block captures end at the next hit.
    let hits: Vec<(usize, Field, &str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| match_label(line).map(|(f, rest)| (idx, f, rest)))
        .collect();

    let mut record = SyllabusRecord::default();
    for (i, &(line_idx, field, inline)) in hits.iter().enumerate() {
        let value = match capture_kind(field) {
            Capture::Line => inline.trim().to_string(),
            Capture::Block => {
                let end = hits.get(i + 1).map(|h| h.0).unwrap_or(lines.len());
                let mut parts: Vec<&str> = Vec::with_capacity(end - line_idx);
                parts.push(inline);
                parts.extend(
                    lines[line_idx + 1..end]
                        .iter()
                        .filter(|l| !is_decoration_line(l))
                        .copied(),
                );
                parts.join("\n").trim().to_string()
            }
        };
        // Empty after trim means "label present, value absent" — keep the sentinel.
        if !value.is_empty() {
            record.set(field, &value);
        }
    }
    record
}

/// Checks whether a line opens with a canonical label followed by `:`,
/// returning the field and the text after the separator.
fn match_label(line: &str) -> Option<(Field, &str)> {
    let stripped =
        line.trim_start_matches(|c: char| c == '#' || c == '*' || c == '-' || c.is_whitespace());
    for field in Field::ALL {
        if let Some(rest) = strip_prefix_ignore_case(stripped, field.label()) {
            // Allow closing markdown bold between the label and the separator.
            let rest = rest.trim_start_matches(|c: char| c == '*' || c.is_whitespace());
            if let Some(value) = rest.strip_prefix(':') {
                let value = value.trim_start_matches(|c: char| c == '*' || c.is_whitespace());
                return Some((field, value));
            }
        }
    }
    None
}

/// Case-insensitive literal prefix strip. Works on the label's exact
/// characters (accents included) — it never skips or reorders anything.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text;
    for expected in prefix.chars() {
        let mut chars = rest.chars();
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = chars.as_str();
    }
    Some(rest)
}

/// Horizontal rules and similar markdown separators carry no field content.
fn is_decoration_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | '*' | '_' | '#' | '='))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::record::UNSPECIFIED;

    const FULL_REPLY: &str = "\
Nom du Cours : Systèmes distribués
Semestre : S7
Crédits ECTS : 5
Nombre d'heures dispensées : 60
Cours Magistraux : 20
Travaux Dirigés : 15
Travaux Pratiques : 20
Projets : 5
Enseignant référent : Dr. Martin
Equipe d'enseignants : Dr. Martin, Mme Dupont
Modalité pédagogique : Présentiel
Langue : Français
Objectifs pédagogiques : Comprendre les architectures réparties.
Maîtriser la tolérance aux pannes.
Pré requis : Réseaux, programmation concurrente.
Contenu : Consensus, réplication, horloges logiques.
Compétences à acquérir : Conception de systèmes résilients.
Modalités d'évaluation : Examen écrit (60%), projet (40%).
Références externes : Tanenbaum & van Steen, Distributed Systems.";

    #[test]
    fn test_full_reply_populates_every_field() {
        let record = parse(FULL_REPLY);
        assert_eq!(record.course_name, "Systèmes distribués");
        assert_eq!(record.semester, "S7");
        assert_eq!(record.ects_credits, "5");
        assert_eq!(record.total_hours, "60");
        assert_eq!(record.lecture_hours, "20");
        assert_eq!(record.tutorial_hours, "15");
        assert_eq!(record.practical_hours, "20");
        assert_eq!(record.project_hours, "5");
        assert_eq!(record.main_teacher, "Dr. Martin");
        assert_eq!(record.teaching_team, "Dr. Martin, Mme Dupont");
        assert_eq!(record.teaching_method, "Présentiel");
        assert_eq!(record.language, "Français");
        assert_eq!(
            record.objectives,
            "Comprendre les architectures réparties.\nMaîtriser la tolérance aux pannes."
        );
        assert_eq!(record.prerequisites, "Réseaux, programmation concurrente.");
        assert_eq!(record.content, "Consensus, réplication, horloges logiques.");
        assert_eq!(record.skills, "Conception de systèmes résilients.");
        assert_eq!(record.evaluation, "Examen écrit (60%), projet (40%).");
        assert_eq!(
            record.references,
            "Tanenbaum & van Steen, Distributed Systems."
        );
    }

    #[test]
    fn test_markdown_decorated_labels_are_recognized() {
        let record = parse("**Crédits ECTS** : 5\n**Langue** : Français");
        assert_eq!(record.ects_credits, "5");
        assert_eq!(record.language, "Français");
        for field in Field::ALL {
            if field != Field::EctsCredits && field != Field::Language {
                assert_eq!(record.get(field), UNSPECIFIED, "field {}", field.name());
            }
        }
    }

    #[test]
    fn test_empty_value_after_label_yields_sentinel() {
        let record = parse("Crédits ECTS: \nLangue: Français");
        assert_eq!(record.ects_credits, UNSPECIFIED);
        assert_eq!(record.language, "Français");
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        let record = parse("crédits ects : 3\nLANGUE : Anglais");
        assert_eq!(record.ects_credits, "3");
        assert_eq!(record.language, "Anglais");
    }

    #[test]
    fn test_partial_label_does_not_match() {
        // "Langues" and "Contenu détaillé" are not canonical labels.
        let record = parse("Langues : Français, Anglais\nContenu détaillé : tout");
        assert_eq!(record.language, UNSPECIFIED);
        assert_eq!(record.content, UNSPECIFIED);
    }

    #[test]
    fn test_label_without_separator_does_not_match() {
        let record = parse("Langue Français");
        assert_eq!(record.language, UNSPECIFIED);
    }

    #[test]
    fn test_block_field_stops_at_next_label() {
        let text = "Objectifs pédagogiques : Ligne un.\nLigne deux.\nLangue : Français";
        let record = parse(text);
        assert_eq!(record.objectives, "Ligne un.\nLigne deux.");
        assert_eq!(record.language, "Français");
    }

    #[test]
    fn test_block_field_runs_to_end_of_text() {
        let text = "Références externes : Ouvrage A.\nOuvrage B.";
        let record = parse(text);
        assert_eq!(record.references, "Ouvrage A.\nOuvrage B.");
    }

    #[test]
    fn test_horizontal_rules_are_dropped_from_blocks() {
        let text = "Contenu : Chapitre 1.\n---\nChapitre 2.\nLangue : Français";
        let record = parse(text);
        assert_eq!(record.content, "Chapitre 1.\nChapitre 2.");
    }

    #[test]
    fn test_unrecognized_text_yields_all_sentinels() {
        let record = parse("Voici un syllabus sans aucune rubrique reconnue.");
        assert!(record.is_fully_unspecified());
    }

    #[test]
    fn test_empty_input_yields_all_sentinels() {
        assert!(parse("").is_fully_unspecified());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse(FULL_REPLY);
        let second = parse(FULL_REPLY);
        assert_eq!(first, second);
    }

    #[test]
    fn test_heading_style_labels_are_recognized() {
        let record = parse("## Objectifs pédagogiques : Apprendre.\n## Langue : Français");
        assert_eq!(record.objectives, "Apprendre.");
        assert_eq!(record.language, "Français");
    }

    #[test]
    fn test_later_duplicate_label_wins() {
        let record = parse("Langue : Français\nLangue : Anglais");
        assert_eq!(record.language, "Anglais");
    }

    #[test]
    fn test_table_covers_every_field() {
        for field in Field::ALL {
            assert!(FIELD_TABLE.iter().any(|spec| spec.field == field));
        }
    }
}
