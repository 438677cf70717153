//! Document model: the record a wizard session assembles.
//!
//! Pure data. The only mutation path is [`Document::merge`], which replaces a singular
//! field or appends to an ordered collection depending on the fragment kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::section::SectionId;

/// Literal stored in an end-date field when the entry is ongoing.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Resume => f.write_str("resume"),
            DocumentKind::CoverLetter => f.write_str("cover letter"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub country: String,
    /// Only meaningful while `country` is set. Always a member of that country's city list.
    pub city: String,
    pub phone_country_code: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl PersonalInfo {
    /// Changes the country. A different country invalidates the chosen city.
    pub fn set_country(&mut self, country: &str) {
        if self.country != country {
            self.city.clear();
            self.country = country.to_string();
        }
    }

    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    pub position: String,
    pub company: String,
    pub start_date: String,
    /// "Month Year" or [`PRESENT`].
    pub end_date: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year_started: String,
    /// "Month Year" or [`PRESENT`].
    pub year_graduated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub role: String,
    pub description: String,
    /// Comma-delimited tag list, kept as entered.
    pub technologies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProjectEntry {
    pub fn technology_tags(&self) -> Vec<&str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Insertion order is meaningful. Duplicates are kept.
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterDocument {
    pub personal_info: PersonalInfo,
    pub recipient_name: String,
    pub company_name: String,
    pub company_address: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Document {
    Resume(ResumeDocument),
    CoverLetter(CoverLetterDocument),
}

/// A validated piece of a document, produced by the normalizer and merged into the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    PersonalInfo(PersonalInfo),
    Summary(String),
    WorkExperience(WorkExperienceEntry),
    Education(EducationEntry),
    Skills(Vec<String>),
    Project(ProjectEntry),
    CoverLetter(CoverLetterDocument),
}

impl Fragment {
    pub fn section(&self) -> SectionId {
        match self {
            Fragment::PersonalInfo(_) => SectionId::PersonalInfo,
            Fragment::Summary(_) => SectionId::Summary,
            Fragment::WorkExperience(_) => SectionId::WorkExperience,
            Fragment::Education(_) => SectionId::Education,
            Fragment::Skills(_) => SectionId::Skills,
            Fragment::Project(_) => SectionId::Projects,
            Fragment::CoverLetter(_) => SectionId::CoverLetter,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a {section} fragment cannot be merged into a {kind} document")]
pub struct MergeError {
    pub section: SectionId,
    pub kind: DocumentKind,
}

impl Document {
    /// A structurally valid, empty document of the given kind.
    pub fn empty(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Resume => Document::Resume(ResumeDocument::default()),
            DocumentKind::CoverLetter => Document::CoverLetter(CoverLetterDocument::default()),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Resume(_) => DocumentKind::Resume,
            Document::CoverLetter(_) => DocumentKind::CoverLetter,
        }
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        match self {
            Document::Resume(resume) => &resume.personal_info,
            Document::CoverLetter(letter) => &letter.personal_info,
        }
    }

    /// Merges a fragment: singular fields are replaced, collections are appended to.
    /// A fragment for the other document kind is rejected and nothing changes.
    pub fn merge(&mut self, fragment: Fragment) -> Result<(), MergeError> {
        match (self, fragment) {
            (Document::Resume(resume), Fragment::PersonalInfo(info)) => {
                resume.personal_info = info;
            }
            (Document::Resume(resume), Fragment::Summary(summary)) => {
                resume.summary = summary;
            }
            (Document::Resume(resume), Fragment::WorkExperience(entry)) => {
                resume.work_experience.push(entry);
            }
            (Document::Resume(resume), Fragment::Education(entry)) => {
                resume.education.push(entry);
            }
            (Document::Resume(resume), Fragment::Skills(skills)) => {
                resume.skills.extend(skills);
            }
            (Document::Resume(resume), Fragment::Project(entry)) => {
                resume.projects.push(entry);
            }
            (Document::CoverLetter(letter), Fragment::CoverLetter(replacement)) => {
                *letter = replacement;
            }
            (document, fragment) => {
                return Err(MergeError {
                    section: fragment.section(),
                    kind: document.kind(),
                });
            }
        }
        Ok(())
    }
}
