//! Raw form input for each section, as submitted by the client.
//!
//! Every field defaults to empty so partially filled forms still parse;
//! required-field checks happen in the normalizer.

use serde::Deserialize;
use serde_json::Value;

use crate::models::section::SectionId;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoForm {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub country: String,
    pub city: String,
    pub phone_country_code: String,
    pub phone: String,
    pub email: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryForm {
    pub summary: String,
    pub role: String,
    pub years_of_experience: String,
    pub expertise: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperienceForm {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_working: bool,
    pub achievements: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationForm {
    pub degree: String,
    pub custom_degree: String,
    pub school: String,
    pub custom_school: String,
    pub year_started: String,
    pub year_graduated: String,
    pub currently_studying: bool,
    pub gpa: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsForm {
    pub skills: String,
    pub role: String,
    pub focus_areas: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectForm {
    pub name: String,
    pub role: String,
    pub description: String,
    pub technologies: String,
    pub url: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

/// The cover letter is a single-section flow: sender, recipient, and either a
/// typed body or the facts the generator writes one from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverLetterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_country_code: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub job_title: String,
    pub recipient_name: String,
    pub company_name: String,
    pub company_address: String,
    pub industry: String,
    pub key_skills: String,
    pub experience_level: String,
    pub achievements: String,
    pub company_info: String,
    pub content: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

#[derive(Debug, Clone)]
pub enum SectionForm {
    PersonalInfo(PersonalInfoForm),
    Summary(SummaryForm),
    WorkExperience(WorkExperienceForm),
    Education(EducationForm),
    Skills(SkillsForm),
    Projects(ProjectForm),
    CoverLetter(CoverLetterForm),
}

impl SectionForm {
    /// Parses a JSON form body into the form type of the addressed section.
    pub fn parse(section: SectionId, input: Value) -> Result<Self, serde_json::Error> {
        Ok(match section {
            SectionId::PersonalInfo => SectionForm::PersonalInfo(serde_json::from_value(input)?),
            SectionId::Summary => SectionForm::Summary(serde_json::from_value(input)?),
            SectionId::WorkExperience => {
                SectionForm::WorkExperience(serde_json::from_value(input)?)
            }
            SectionId::Education => SectionForm::Education(serde_json::from_value(input)?),
            SectionId::Skills => SectionForm::Skills(serde_json::from_value(input)?),
            SectionId::Projects => SectionForm::Projects(serde_json::from_value(input)?),
            SectionId::CoverLetter => SectionForm::CoverLetter(serde_json::from_value(input)?),
        })
    }

    pub fn section(&self) -> SectionId {
        match self {
            SectionForm::PersonalInfo(_) => SectionId::PersonalInfo,
            SectionForm::Summary(_) => SectionId::Summary,
            SectionForm::WorkExperience(_) => SectionId::WorkExperience,
            SectionForm::Education(_) => SectionId::Education,
            SectionForm::Skills(_) => SectionId::Skills,
            SectionForm::Projects(_) => SectionId::Projects,
            SectionForm::CoverLetter(_) => SectionId::CoverLetter,
        }
    }

    /// The raw `useAI` checkbox. Personal info has no such field.
    pub fn use_ai(&self) -> bool {
        match self {
            SectionForm::PersonalInfo(_) => false,
            SectionForm::Summary(form) => form.use_ai,
            SectionForm::WorkExperience(form) => form.use_ai,
            SectionForm::Education(form) => form.use_ai,
            SectionForm::Skills(form) => form.use_ai,
            SectionForm::Projects(form) => form.use_ai,
            SectionForm::CoverLetter(form) => form.use_ai,
        }
    }
}
