//! Content Normalizer: turns typed or generated text into validated fragments.
//!
//! Pure and deterministic: no I/O, no clock. The two entry points dispatch on the
//! section kind of the form; nothing here touches the accumulator.

pub mod bullets;
pub mod dates;
pub mod sections;

use crate::errors::AppError;
use crate::models::document::{Document, Fragment};
use crate::models::forms::SectionForm;

/// Manual path. `current` supplies the stored personal info for the country/city rule.
pub fn normalize_manual(form: &SectionForm, current: &Document) -> Result<Fragment, AppError> {
    Ok(match form {
        SectionForm::PersonalInfo(f) => {
            Fragment::PersonalInfo(sections::personal_info(f, current.personal_info())?)
        }
        SectionForm::Summary(f) => Fragment::Summary(sections::summary_manual(f)?),
        SectionForm::WorkExperience(f) => {
            Fragment::WorkExperience(sections::work_experience_manual(f)?)
        }
        SectionForm::Education(f) => Fragment::Education(sections::education(f)?),
        SectionForm::Skills(f) => Fragment::Skills(sections::skills_manual(f)?),
        SectionForm::Projects(f) => Fragment::Project(sections::project_manual(f)?),
        SectionForm::CoverLetter(f) => Fragment::CoverLetter(sections::cover_letter_manual(f)?),
    })
}

/// Generated path. `raw` is the service text, absent when the reply carried none.
pub fn normalize_generated(form: &SectionForm, raw: Option<&str>) -> Result<Fragment, AppError> {
    Ok(match form {
        SectionForm::Summary(_) => Fragment::Summary(sections::summary_generated(raw)?),
        SectionForm::WorkExperience(f) => {
            Fragment::WorkExperience(sections::work_experience_generated(f, raw)?)
        }
        SectionForm::Skills(_) => Fragment::Skills(sections::skills_generated(raw)?),
        SectionForm::Projects(f) => Fragment::Project(sections::project_generated(f, raw)?),
        SectionForm::CoverLetter(f) => {
            Fragment::CoverLetter(sections::cover_letter_generated(f, raw)?)
        }
        SectionForm::PersonalInfo(_) | SectionForm::Education(_) => {
            return Err(AppError::Validation(format!(
                "section {} does not support generated content",
                form.section()
            )));
        }
    })
}

/// Validates the typed part of a form that is about to be sent for generation,
/// so the call is not spent on a submission that could never be merged.
pub fn check_generation_form(form: &SectionForm) -> Result<(), AppError> {
    match form {
        SectionForm::WorkExperience(f) => sections::work_experience_entry(f).map(drop),
        SectionForm::Projects(f) => sections::project_entry(f).map(drop),
        SectionForm::CoverLetter(f) => sections::cover_letter_shell(f).map(drop),
        SectionForm::Summary(_) | SectionForm::Skills(_) => Ok(()),
        SectionForm::PersonalInfo(_) | SectionForm::Education(_) => Err(AppError::Validation(
            format!("section {} does not support generated content", form.section()),
        )),
    }
}
