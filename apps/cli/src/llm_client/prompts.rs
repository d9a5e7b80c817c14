// Prompt constants for syllabus generation.
// The request carries exactly one user message, so the formatting
// instructions live in the prompt itself rather than a system message.

/// Syllabus generation prompt template. Replace `{topic}` before sending.
///
/// The headings listed here are the canonical labels the parser matches on
/// the way back — they must stay character-for-character identical to
/// `Field::label`, casing aside.
pub const SYLLABUS_PROMPT_TEMPLATE: &str = r#"Génère un syllabus de cours universitaire pour : {topic}

Structure ta réponse avec exactement les rubriques suivantes, une rubrique par ligne, au format `Rubrique : valeur`. N'ajoute aucune autre rubrique et ne reformule pas les intitulés.

Nom du Cours :
Semestre :
Crédits ECTS :
Nombre d'heures dispensées :
Cours Magistraux :
Travaux Dirigés :
Travaux Pratiques :
Projets :
Enseignant référent :
Equipe d'enseignants :
Modalité pédagogique :
Langue :
Objectifs pédagogiques :
Pré requis :
Contenu :
Compétences à acquérir :
Modalités d'évaluation :
Références externes :

Les rubriques horaires et crédits attendent une valeur numérique. Les rubriques Objectifs pédagogiques, Pré requis, Contenu, Compétences à acquérir, Modalités d'évaluation et Références externes peuvent s'étendre sur plusieurs lignes."#;

/// Builds the outbound prompt for one user-submitted topic.
pub fn build_prompt(topic: &str) -> String {
    SYLLABUS_PROMPT_TEMPLATE.replace("{topic}", topic)
}
