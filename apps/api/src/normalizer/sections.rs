//! Per-section normalizers. Each section kind has a manual path (typed text) and,
//! where generation is offered, a generated path (raw service text).
//!
//! Both paths share a `*_entry` builder that validates the typed fields, so a form
//! that would fail after generation is rejected before the call is made.

use crate::errors::AppError;
use crate::models::catalog::{self, DEGREE_OPTIONS, SCHOOL_OPTIONS};
use crate::models::document::{
    CoverLetterDocument, EducationEntry, PersonalInfo, ProjectEntry, WorkExperienceEntry,
};
use crate::models::forms::{
    CoverLetterForm, EducationForm, PersonalInfoForm, ProjectForm, SkillsForm, SummaryForm,
    WorkExperienceForm,
};
use crate::models::section::SectionId;
use crate::normalizer::bullets::{canonicalize_lines, non_blank_lines, split_comma_list};
use crate::normalizer::dates::{end_date, month_year};

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        Err(AppError::Validation(format!("{field} is required")))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Generated text must be present and non-blank before any section-specific parsing.
fn usable_text(section: SectionId, raw: Option<&str>) -> Result<&str, AppError> {
    match raw {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::MalformedGeneration { section }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// Builds personal info against the currently stored one.
///
/// City rules:
/// - no country → no city
/// - city in the country's list → kept, even when it is also a city of the old country
/// - country changed and the city is a leftover from the old country → cleared
/// - anything else is rejected
pub fn personal_info(
    form: &PersonalInfoForm,
    previous: &PersonalInfo,
) -> Result<PersonalInfo, AppError> {
    let country = form.country.trim();
    let known_country = catalog::find_country(country);
    if !country.is_empty() && known_country.is_none() {
        return Err(AppError::Validation(format!(
            "'{country}' is not a supported country"
        )));
    }

    let mut info = previous.clone();
    info.set_country(country);

    let city = form.city.trim();
    let stale_city = country != previous.country && city == previous.city;
    if country.is_empty() || city.is_empty() {
        info.city.clear();
    } else if known_country.is_some_and(|c| c.has_city(city)) {
        info.city = city.to_string();
    } else if stale_city {
        info.city.clear();
    } else {
        return Err(AppError::Validation(format!(
            "'{city}' is not a city in {country}"
        )));
    }

    let phone_country_code = match (form.phone_country_code.trim(), known_country) {
        ("", Some(c)) => c.dial_code.to_string(),
        (code, _) => code.to_string(),
    };
    if !phone_country_code.is_empty() && !is_dial_code(&phone_country_code) {
        return Err(AppError::Validation(format!(
            "'{phone_country_code}' is not a dial code"
        )));
    }

    let email = form.email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Err(AppError::Validation(format!(
            "'{email}' is not an email address"
        )));
    }

    info.first_name = required("firstName", &form.first_name)?;
    info.last_name = required("lastName", &form.last_name)?;
    info.job_title = form.job_title.trim().to_string();
    info.phone_country_code = phone_country_code;
    info.phone = form.phone.trim().to_string();
    info.email = email.to_string();
    info.photo = form.photo.as_deref().and_then(optional);
    Ok(info)
}

fn is_dial_code(code: &str) -> bool {
    code.strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

pub fn summary_manual(form: &SummaryForm) -> Result<String, AppError> {
    required("summary", &form.summary)?;
    Ok(form.summary.clone())
}

pub fn summary_generated(raw: Option<&str>) -> Result<String, AppError> {
    usable_text(SectionId::Summary, raw).map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// Work experience
// ────────────────────────────────────────────────────────────────────────────

/// Entry without achievements. Dates are normalized; "currently working" forces `Present`.
pub fn work_experience_entry(form: &WorkExperienceForm) -> Result<WorkExperienceEntry, AppError> {
    let position = required("position", &form.position)?;
    let company = required("company", &form.company)?;
    let start_date = month_year(&required("startDate", &form.start_date)?);
    let end_date = end_date(&form.end_date, form.currently_working);
    if end_date.is_empty() {
        return Err(AppError::Validation(
            "endDate is required unless currentlyWorking is set".to_string(),
        ));
    }
    Ok(WorkExperienceEntry {
        position,
        company,
        start_date,
        end_date,
        achievements: Vec::new(),
    })
}

/// Achievements: one per non-blank line, each kept verbatim.
pub fn work_experience_manual(form: &WorkExperienceForm) -> Result<WorkExperienceEntry, AppError> {
    let mut entry = work_experience_entry(form)?;
    entry.achievements = non_blank_lines(&form.achievements);
    Ok(entry)
}

/// Achievements: one per non-blank generated line, re-bulleted in the canonical style.
pub fn work_experience_generated(
    form: &WorkExperienceForm,
    raw: Option<&str>,
) -> Result<WorkExperienceEntry, AppError> {
    let text = usable_text(SectionId::WorkExperience, raw)?;
    let mut entry = work_experience_entry(form)?;
    entry.achievements = canonicalize_lines(text);
    if entry.achievements.is_empty() {
        return Err(AppError::MalformedGeneration {
            section: SectionId::WorkExperience,
        });
    }
    Ok(entry)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn education(form: &EducationForm) -> Result<EducationEntry, AppError> {
    let degree = catalog::resolve_option("degree", &form.degree, &form.custom_degree, DEGREE_OPTIONS)
        .map_err(AppError::Validation)?;
    let school = catalog::resolve_option("school", &form.school, &form.custom_school, SCHOOL_OPTIONS)
        .map_err(AppError::Validation)?;
    let year_started = month_year(&required("yearStarted", &form.year_started)?);
    let year_graduated = end_date(&form.year_graduated, form.currently_studying);
    if year_graduated.is_empty() {
        return Err(AppError::Validation(
            "yearGraduated is required unless currentlyStudying is set".to_string(),
        ));
    }
    Ok(EducationEntry {
        degree,
        school,
        year_started,
        year_graduated,
        gpa: optional(&form.gpa),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn skills_manual(form: &SkillsForm) -> Result<Vec<String>, AppError> {
    let skills = split_comma_list(&form.skills);
    if skills.is_empty() {
        return Err(AppError::Validation("skills is required".to_string()));
    }
    Ok(skills)
}

/// Same comma split as the manual path. Embedded newlines or numbering from the
/// generator stay inside the skill text.
pub fn skills_generated(raw: Option<&str>) -> Result<Vec<String>, AppError> {
    let skills = split_comma_list(usable_text(SectionId::Skills, raw)?);
    if skills.is_empty() {
        return Err(AppError::MalformedGeneration {
            section: SectionId::Skills,
        });
    }
    Ok(skills)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn project_entry(form: &ProjectForm) -> Result<ProjectEntry, AppError> {
    Ok(ProjectEntry {
        name: required("name", &form.name)?,
        role: form.role.trim().to_string(),
        description: String::new(),
        technologies: form.technologies.trim().to_string(),
        url: optional(&form.url),
    })
}

/// Description stored exactly as typed.
pub fn project_manual(form: &ProjectForm) -> Result<ProjectEntry, AppError> {
    let mut entry = project_entry(form)?;
    entry.description = form.description.clone();
    Ok(entry)
}

/// Description re-bulleted line by line, then joined back into one paragraph
/// with the line breaks preserved.
pub fn project_generated(form: &ProjectForm, raw: Option<&str>) -> Result<ProjectEntry, AppError> {
    let text = usable_text(SectionId::Projects, raw)?;
    let mut entry = project_entry(form)?;
    let lines = canonicalize_lines(text);
    if lines.is_empty() {
        return Err(AppError::MalformedGeneration {
            section: SectionId::Projects,
        });
    }
    entry.description = lines.join("\n");
    Ok(entry)
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// Cover letter without its body.
pub fn cover_letter_shell(form: &CoverLetterForm) -> Result<CoverLetterDocument, AppError> {
    let personal = PersonalInfoForm {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        job_title: form.job_title.clone(),
        country: form.country.clone(),
        city: form.city.clone(),
        phone_country_code: form.phone_country_code.clone(),
        phone: form.phone.clone(),
        email: form.email.clone(),
        photo: None,
    };
    Ok(CoverLetterDocument {
        personal_info: personal_info(&personal, &PersonalInfo::default())?,
        recipient_name: form.recipient_name.trim().to_string(),
        company_name: required("companyName", &form.company_name)?,
        company_address: form.company_address.trim().to_string(),
        content: String::new(),
    })
}

pub fn cover_letter_manual(form: &CoverLetterForm) -> Result<CoverLetterDocument, AppError> {
    let mut letter = cover_letter_shell(form)?;
    required("content", &form.content)?;
    letter.content = form.content.clone();
    Ok(letter)
}

pub fn cover_letter_generated(
    form: &CoverLetterForm,
    raw: Option<&str>,
) -> Result<CoverLetterDocument, AppError> {
    let text = usable_text(SectionId::CoverLetter, raw)?;
    let mut letter = cover_letter_shell(form)?;
    letter.content = text.to_string();
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::OTHER_OPTION;

    fn personal_form(country: &str, city: &str) -> PersonalInfoForm {
        PersonalInfoForm {
            first_name: "Mina".into(),
            last_name: "Park".into(),
            country: country.into(),
            city: city.into(),
            ..Default::default()
        }
    }

    fn work_form(achievements: &str) -> WorkExperienceForm {
        WorkExperienceForm {
            position: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2023-03-15".into(),
            end_date: "2024-06-30".into(),
            achievements: achievements.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_country_change_clears_stale_city() {
        let previous = personal_info(&personal_form("South Korea", "Seoul"), &PersonalInfo::default())
            .unwrap();
        assert_eq!(previous.city, "Seoul");

        let next = personal_info(&personal_form("Japan", "Seoul"), &previous).unwrap();
        assert_eq!(next.country, "Japan");
        assert!(next.city.is_empty());
    }

    #[test]
    fn test_country_change_accepts_new_valid_city() {
        let previous = personal_info(&personal_form("South Korea", "Seoul"), &PersonalInfo::default())
            .unwrap();
        let next = personal_info(&personal_form("Japan", "Osaka"), &previous).unwrap();
        assert_eq!(next.city, "Osaka");
    }

    #[test]
    fn test_city_shared_by_old_and_new_country_is_kept() {
        let previous = personal_info(
            &personal_form("United Kingdom", "London"),
            &PersonalInfo::default(),
        )
        .unwrap();
        assert_eq!(previous.city, "London");

        let next = personal_info(&personal_form("Canada", "London"), &previous).unwrap();
        assert_eq!(next.country, "Canada");
        assert_eq!(next.city, "London");
        assert_eq!(next.phone_country_code, "+1");
    }

    #[test]
    fn test_city_outside_country_is_rejected() {
        let err = personal_info(&personal_form("Japan", "Busan"), &PersonalInfo::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Busan")));
    }

    #[test]
    fn test_city_without_country_is_dropped() {
        let info = personal_info(&personal_form("", "Seoul"), &PersonalInfo::default()).unwrap();
        assert!(info.country.is_empty());
        assert!(info.city.is_empty());
    }

    #[test]
    fn test_unknown_country_is_rejected() {
        assert!(personal_info(&personal_form("Atlantis", ""), &PersonalInfo::default()).is_err());
    }

    #[test]
    fn test_dial_code_defaults_from_country() {
        let info = personal_info(&personal_form("Japan", "Tokyo"), &PersonalInfo::default()).unwrap();
        assert_eq!(info.phone_country_code, "+81");

        let mut form = personal_form("Japan", "Tokyo");
        form.phone_country_code = "81".into();
        assert!(personal_info(&form, &PersonalInfo::default()).is_err());
    }

    #[test]
    fn test_personal_info_requires_names() {
        let form = PersonalInfoForm::default();
        assert!(matches!(
            personal_info(&form, &PersonalInfo::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_manual_achievements_count_matches_non_blank_lines() {
        let raw = "• Led migration to Rust\n\n- Cut p99 by 40%\n   \nMentored 3 engineers\n";
        let entry = work_experience_manual(&work_form(raw)).unwrap();
        assert_eq!(entry.achievements.len(), 3);
        assert_eq!(entry.achievements[0], "• Led migration to Rust");
        assert!(entry
            .achievements
            .iter()
            .all(|a| !a.starts_with("• •") && !a.starts_with("••")));
    }

    #[test]
    fn test_currently_working_forces_present() {
        let mut form = work_form("");
        form.currently_working = true;
        form.end_date = "2030-12-01".into();
        let entry = work_experience_manual(&form).unwrap();
        assert_eq!(entry.start_date, "March 2023");
        assert_eq!(entry.end_date, "Present");
    }

    #[test]
    fn test_missing_end_date_without_flag_is_rejected() {
        let mut form = work_form("");
        form.end_date = " ".into();
        assert!(matches!(
            work_experience_manual(&form),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_generated_achievements_canonical_bullets() {
        let raw = "- Reduced build times by 35%\n• Led a team of 5\n\n* Shipped 3 releases\nOwned on-call rotation";
        let entry = work_experience_generated(&work_form(""), Some(raw)).unwrap();
        assert_eq!(
            entry.achievements,
            vec![
                "• Reduced build times by 35%",
                "• Led a team of 5",
                "• Shipped 3 releases",
                "• Owned on-call rotation",
            ]
        );
        assert_eq!(entry.end_date, "June 2024");
    }

    #[test]
    fn test_generated_empty_or_absent_is_malformed() {
        for raw in [None, Some(""), Some("  \n ")] {
            assert!(matches!(
                work_experience_generated(&work_form(""), raw),
                Err(AppError::MalformedGeneration {
                    section: SectionId::WorkExperience
                })
            ));
        }
        assert!(matches!(
            work_experience_generated(&work_form(""), Some("-\n•\n")),
            Err(AppError::MalformedGeneration { .. })
        ));
    }

    #[test]
    fn test_education_other_uses_custom_fields() {
        let form = EducationForm {
            degree: OTHER_OPTION.into(),
            custom_degree: "BFA in Game Design".into(),
            school: "Stanford University".into(),
            year_started: "2019-09-01".into(),
            currently_studying: true,
            year_graduated: "2023-06-01".into(),
            gpa: " 3.8/4.0 ".into(),
            ..Default::default()
        };
        let entry = education(&form).unwrap();
        assert_eq!(entry.degree, "BFA in Game Design");
        assert_eq!(entry.school, "Stanford University");
        assert_eq!(entry.year_started, "September 2019");
        assert_eq!(entry.year_graduated, "Present");
        assert_eq!(entry.gpa.as_deref(), Some("3.8/4.0"));
    }

    #[test]
    fn test_education_blank_gpa_is_absent() {
        let form = EducationForm {
            degree: "Master of Science".into(),
            school: OTHER_OPTION.into(),
            custom_school: "Open University".into(),
            year_started: "2015".into(),
            year_graduated: "2017".into(),
            ..Default::default()
        };
        let entry = education(&form).unwrap();
        assert_eq!(entry.school, "Open University");
        assert_eq!(entry.year_graduated, "2017");
        assert!(entry.gpa.is_none());
    }

    #[test]
    fn test_skills_generated_comma_list() {
        assert_eq!(
            skills_generated(Some("Python, Go, SQL")).unwrap(),
            vec!["Python", "Go", "SQL"]
        );
    }

    #[test]
    fn test_skills_generated_keeps_numbering() {
        let skills = skills_generated(Some("1. Python,\n2. Go")).unwrap();
        assert_eq!(skills, vec!["1. Python", "2. Go"]);
    }

    #[test]
    fn test_skills_manual_requires_a_token() {
        let form = SkillsForm {
            skills: " , ,".into(),
            ..Default::default()
        };
        assert!(matches!(skills_manual(&form), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_project_manual_description_untouched() {
        let form = ProjectForm {
            name: "Ledger".into(),
            description: "- raw\n\n  text ".into(),
            technologies: "Rust, SQLite".into(),
            url: "".into(),
            ..Default::default()
        };
        let entry = project_manual(&form).unwrap();
        assert_eq!(entry.description, "- raw\n\n  text ");
        assert!(entry.url.is_none());
    }

    #[test]
    fn test_project_generated_joins_canonical_lines() {
        let form = ProjectForm {
            name: "Ledger".into(),
            url: "https://example.com/ledger".into(),
            ..Default::default()
        };
        let entry =
            project_generated(&form, Some("* Built a ledger\n\n- Handles 1k tx/s")).unwrap();
        assert_eq!(entry.description, "• Built a ledger\n• Handles 1k tx/s");
        assert_eq!(entry.url.as_deref(), Some("https://example.com/ledger"));
    }

    #[test]
    fn test_cover_letter_generated_stored_verbatim() {
        let form = CoverLetterForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company_name: "Analytical Engines Ltd".into(),
            job_title: "Engineer".into(),
            ..Default::default()
        };
        let body = "Dear Hiring Manager,\n\nI am writing...\n\nSincerely,\nAda";
        let letter = cover_letter_generated(&form, Some(body)).unwrap();
        assert_eq!(letter.content, body);
        assert_eq!(letter.company_name, "Analytical Engines Ltd");
        assert_eq!(letter.personal_info.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_cover_letter_keeps_sender_dial_code() {
        let form = CoverLetterForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company_name: "Analytical Engines Ltd".into(),
            country: "Canada".into(),
            city: "Toronto".into(),
            phone_country_code: "+44".into(),
            phone: "20 7946 0000".into(),
            content: "Dear team,".into(),
            ..Default::default()
        };
        let letter = cover_letter_manual(&form).unwrap();
        assert_eq!(letter.personal_info.phone_country_code, "+44");

        let defaulted = cover_letter_manual(&CoverLetterForm {
            phone_country_code: String::new(),
            ..form
        })
        .unwrap();
        assert_eq!(defaulted.personal_info.phone_country_code, "+1");
    }

    #[test]
    fn test_summary_paths() {
        let form = SummaryForm {
            summary: "  Engineer who ships.  ".into(),
            ..Default::default()
        };
        assert_eq!(summary_manual(&form).unwrap(), "  Engineer who ships.  ");
        assert!(matches!(
            summary_generated(None),
            Err(AppError::MalformedGeneration {
                section: SectionId::Summary
            })
        ));
    }
}
