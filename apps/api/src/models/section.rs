use serde::{Deserialize, Serialize};

use crate::models::document::DocumentKind;

/// One addressable part of a document. The wizard is always on exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    PersonalInfo,
    Summary,
    WorkExperience,
    Education,
    Skills,
    Projects,
    CoverLetter,
}

const RESUME_SECTIONS: &[SectionId] = &[
    SectionId::PersonalInfo,
    SectionId::Summary,
    SectionId::WorkExperience,
    SectionId::Education,
    SectionId::Skills,
    SectionId::Projects,
];

const COVER_LETTER_SECTIONS: &[SectionId] = &[SectionId::CoverLetter];

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::PersonalInfo => "personalInfo",
            SectionId::Summary => "summary",
            SectionId::WorkExperience => "workExperience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::CoverLetter => "coverLetter",
        }
    }

    /// Sections whose `useAI` flag routes through the generation gateway.
    /// For every other section the flag is ignored.
    pub fn supports_generation(&self) -> bool {
        matches!(
            self,
            SectionId::Summary
                | SectionId::WorkExperience
                | SectionId::Skills
                | SectionId::Projects
                | SectionId::CoverLetter
        )
    }

    pub fn document_kind(&self) -> DocumentKind {
        match self {
            SectionId::CoverLetter => DocumentKind::CoverLetter,
            _ => DocumentKind::Resume,
        }
    }

    /// Sections offered for a document kind, in display order.
    pub fn all_for(kind: DocumentKind) -> &'static [SectionId] {
        match kind {
            DocumentKind::Resume => RESUME_SECTIONS,
            DocumentKind::CoverLetter => COVER_LETTER_SECTIONS,
        }
    }

    /// The section a fresh wizard opens on.
    pub fn initial(kind: DocumentKind) -> SectionId {
        match kind {
            DocumentKind::Resume => SectionId::PersonalInfo,
            DocumentKind::CoverLetter => SectionId::CoverLetter,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
