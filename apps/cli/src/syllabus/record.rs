//! Syllabus record — the structured, field-complete description of a course.
//!
//! ARCHITECTURAL RULE: every field is always present. A field the parser or
//! the user never filled holds [`UNSPECIFIED`], never an empty string —
//! downstream rendering (display, export) assumes total coverage.

use serde::{Deserialize, Serialize};

/// Placeholder for any field with no known value.
pub const UNSPECIFIED: &str = "Non spécifié";

/// The closed set of syllabus fields.
///
/// Historical prompt variants used smaller field sets; this is the canonical
/// 18-field superset. Shorter model replies simply leave the extra fields at
/// the [`UNSPECIFIED`] default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CourseName,
    Semester,
    EctsCredits,
    TotalHours,
    LectureHours,
    TutorialHours,
    PracticalHours,
    ProjectHours,
    MainTeacher,
    TeachingTeam,
    TeachingMethod,
    Language,
    Objectives,
    Prerequisites,
    Content,
    Skills,
    Evaluation,
    References,
}

impl Field {
    /// Every field, in template order (short fields first, then long-form).
    pub const ALL: [Field; 18] = [
        Field::CourseName,
        Field::Semester,
        Field::EctsCredits,
        Field::TotalHours,
        Field::LectureHours,
        Field::TutorialHours,
        Field::PracticalHours,
        Field::ProjectHours,
        Field::MainTeacher,
        Field::TeachingTeam,
        Field::TeachingMethod,
        Field::Language,
        Field::Objectives,
        Field::Prerequisites,
        Field::Content,
        Field::Skills,
        Field::Evaluation,
        Field::References,
    ];

    /// The exact French heading sent in the prompt and matched in the reply.
    pub fn label(self) -> &'static str {
        match self {
            Field::CourseName => "Nom du Cours",
            Field::Semester => "Semestre",
            Field::EctsCredits => "Crédits ECTS",
            Field::TotalHours => "Nombre d'heures dispensées",
            Field::LectureHours => "Cours Magistraux",
            Field::TutorialHours => "Travaux Dirigés",
            Field::PracticalHours => "Travaux Pratiques",
            Field::ProjectHours => "Projets",
            Field::MainTeacher => "Enseignant référent",
            Field::TeachingTeam => "Equipe d'enseignants",
            Field::TeachingMethod => "Modalité pédagogique",
            Field::Language => "Langue",
            Field::Objectives => "Objectifs pédagogiques",
            Field::Prerequisites => "Pré requis",
            Field::Content => "Contenu",
            Field::Skills => "Compétences à acquérir",
            Field::Evaluation => "Modalités d'évaluation",
            Field::References => "Références externes",
        }
    }

    /// Stable snake_case identifier, used by the `/edit` command and logs.
    pub fn name(self) -> &'static str {
        match self {
            Field::CourseName => "course_name",
            Field::Semester => "semester",
            Field::EctsCredits => "ects_credits",
            Field::TotalHours => "total_hours",
            Field::LectureHours => "lecture_hours",
            Field::TutorialHours => "tutorial_hours",
            Field::PracticalHours => "practical_hours",
            Field::ProjectHours => "project_hours",
            Field::MainTeacher => "main_teacher",
            Field::TeachingTeam => "teaching_team",
            Field::TeachingMethod => "teaching_method",
            Field::Language => "language",
            Field::Objectives => "objectives",
            Field::Prerequisites => "prerequisites",
            Field::Content => "content",
            Field::Skills => "skills",
            Field::Evaluation => "evaluation",
            Field::References => "references",
        }
    }

    /// Resolves a snake_case identifier back to a field.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// The single active syllabus record. Replaced wholesale on each parse,
/// mutated field-by-field on user edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusRecord {
    pub course_name: String,
    pub semester: String,
    pub ects_credits: String,
    pub total_hours: String,
    pub lecture_hours: String,
    pub tutorial_hours: String,
    pub practical_hours: String,
    pub project_hours: String,
    pub main_teacher: String,
    pub teaching_team: String,
    pub teaching_method: String,
    pub language: String,
    pub objectives: String,
    pub prerequisites: String,
    pub content: String,
    pub skills: String,
    pub evaluation: String,
    pub references: String,
}

impl Default for SyllabusRecord {
    fn default() -> Self {
        let u = || UNSPECIFIED.to_string();
        SyllabusRecord {
            course_name: u(),
            semester: u(),
            ects_credits: u(),
            total_hours: u(),
            lecture_hours: u(),
            tutorial_hours: u(),
            practical_hours: u(),
            project_hours: u(),
            main_teacher: u(),
            teaching_team: u(),
            teaching_method: u(),
            language: u(),
            objectives: u(),
            prerequisites: u(),
            content: u(),
            skills: u(),
            evaluation: u(),
            references: u(),
        }
    }
}

impl SyllabusRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CourseName => &self.course_name,
            Field::Semester => &self.semester,
            Field::EctsCredits => &self.ects_credits,
            Field::TotalHours => &self.total_hours,
            Field::LectureHours => &self.lecture_hours,
            Field::TutorialHours => &self.tutorial_hours,
            Field::PracticalHours => &self.practical_hours,
            Field::ProjectHours => &self.project_hours,
            Field::MainTeacher => &self.main_teacher,
            Field::TeachingTeam => &self.teaching_team,
            Field::TeachingMethod => &self.teaching_method,
            Field::Language => &self.language,
            Field::Objectives => &self.objectives,
            Field::Prerequisites => &self.prerequisites,
            Field::Content => &self.content,
            Field::Skills => &self.skills,
            Field::Evaluation => &self.evaluation,
            Field::References => &self.references,
        }
    }

    /// Sets one field. A value that is empty after trimming falls back to
    /// [`UNSPECIFIED`] so the total-coverage invariant holds.
    pub fn set(&mut self, field: Field, value: &str) {
        let trimmed = value.trim();
        let stored = if trimmed.is_empty() {
            UNSPECIFIED.to_string()
        } else {
            trimmed.to_string()
        };
        let slot = match field {
            Field::CourseName => &mut self.course_name,
            Field::Semester => &mut self.semester,
            Field::EctsCredits => &mut self.ects_credits,
            Field::TotalHours => &mut self.total_hours,
            Field::LectureHours => &mut self.lecture_hours,
            Field::TutorialHours => &mut self.tutorial_hours,
            Field::PracticalHours => &mut self.practical_hours,
            Field::ProjectHours => &mut self.project_hours,
            Field::MainTeacher => &mut self.main_teacher,
            Field::TeachingTeam => &mut self.teaching_team,
            Field::TeachingMethod => &mut self.teaching_method,
            Field::Language => &mut self.language,
            Field::Objectives => &mut self.objectives,
            Field::Prerequisites => &mut self.prerequisites,
            Field::Content => &mut self.content,
            Field::Skills => &mut self.skills,
            Field::Evaluation => &mut self.evaluation,
            Field::References => &mut self.references,
        };
        *slot = stored;
    }

    /// True when no field carries a real value.
    pub fn is_fully_unspecified(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f) == UNSPECIFIED)
    }
}
