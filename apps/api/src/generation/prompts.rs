//! Section prompt templates and the facts interpolated into them.
//!
//! The requested output SHAPE is a contract with the normalizer:
//! - work experience → one achievement per line
//! - skills → one flat comma-separated line
//! - projects, summary → a short paragraph
//! - cover letter → a full business-letter body

use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::llm_client::prompts::NO_PREAMBLE_INSTRUCTION;
use crate::models::forms::SectionForm;
use crate::models::section::SectionId;
use crate::normalizer::dates::{end_date, month_year};

/// Field name → value, interpolated into a template as `{field}`.
pub type PromptFacts = BTreeMap<String, String>;

/// Work experience prompt. Replace: {company}, {position}, {duration}
pub const WORK_EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Generate a professional and impactful list of achievements and responsibilities for the following role:
Company: {company}
Position: {position}
Duration: {duration}

Please provide 4-5 bullet points that:
1. Start with strong action verbs
2. Include quantifiable results where possible
3. Highlight key achievements and impacts
4. Use industry-relevant terminology

Format each point on a new line, without bullet points or numbers."#;

/// Skills prompt. Replace: {role}, {focusAreas}
pub const SKILLS_PROMPT_TEMPLATE: &str = "Return only 10-12 relevant skills for a {role} position \
    with {focusAreas} focus. Format as a comma-separated list with no introduction or additional text.";

/// Project prompt. Replace: {name}, {technologies}
pub const PROJECT_PROMPT_TEMPLATE: &str = r#"Generate a compelling project description for:
Project Name: {name}
Technologies: {technologies}

Create a concise description that:
1. Explains the project's purpose and impact
2. Highlights technical challenges overcome
3. Emphasizes your role and contributions
4. Includes measurable outcomes

Keep it under 3-4 sentences, focusing on impact and technical excellence."#;

/// Summary prompt. Replace: {role}, {experience}, {expertise}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a professional summary for a {role} with {experience} years of experience.
Expertise: {expertise}

Create a compelling summary that:
1. Highlights your professional identity
2. Emphasizes key achievements
3. Mentions relevant technical skills
4. States your career objectives

Keep it under 3-4 sentences, making it impactful and memorable."#;

/// Cover letter prompt.
/// Replace: {jobTitle}, {companyName}, {industry}, {keySkills},
///          {experienceLevel}, {achievements}, {companyInfo}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Generate a professional cover letter with the following details:
Job Title: {jobTitle}
Company Name: {companyName}
Industry: {industry}
Key Skills: {keySkills}
Experience Level: {experienceLevel}
Specific Achievements: {achievements}
Company Research: {companyInfo}

Please create a compelling cover letter that:
1. Opens with a strong introduction showing enthusiasm for the role
2. Demonstrates knowledge of the company
3. Highlights relevant skills and experiences
4. Includes specific achievements that align with the role
5. Closes with a clear call to action
6. Maintains a professional yet engaging tone
7. Is structured in clear paragraphs

Format the letter in a professional business letter style."#;

fn template_for(section: SectionId) -> Option<&'static str> {
    match section {
        SectionId::WorkExperience => Some(WORK_EXPERIENCE_PROMPT_TEMPLATE),
        SectionId::Skills => Some(SKILLS_PROMPT_TEMPLATE),
        SectionId::Projects => Some(PROJECT_PROMPT_TEMPLATE),
        SectionId::Summary => Some(SUMMARY_PROMPT_TEMPLATE),
        SectionId::CoverLetter => Some(COVER_LETTER_PROMPT_TEMPLATE),
        SectionId::PersonalInfo | SectionId::Education => None,
    }
}

/// Fills the section template with `facts`. `None` for sections without a template.
/// Deterministic: the same facts always produce the same prompt.
pub fn build_prompt(section: SectionId, facts: &PromptFacts) -> Option<String> {
    let template = template_for(section)?;
    Some(format!(
        "{}\n\n{NO_PREAMBLE_INSTRUCTION}",
        fill_template(template, facts)
    ))
}

/// Single pass over the template. Substituted values are never rescanned, so a
/// value containing `{key}` stays literal. Unknown placeholders are left as written.
fn fill_template(template: &str, facts: &PromptFacts) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        filled.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').map(|close| (close, facts.get(&after[..close]))) {
            Some((close, Some(value))) => {
                filled.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                filled.push('{');
                rest = after;
            }
        }
    }
    filled.push_str(rest);
    filled
}

/// Draws the prompt-relevant subset of a form. Missing required facts are a validation error.
pub fn prompt_facts(form: &SectionForm) -> Result<PromptFacts, AppError> {
    let mut facts = PromptFacts::new();
    match form {
        SectionForm::WorkExperience(f) => {
            insert_required(&mut facts, "company", &f.company)?;
            insert_required(&mut facts, "position", &f.position)?;
            let start = month_year(&f.start_date);
            let end = end_date(&f.end_date, f.currently_working);
            let duration = match (start.is_empty(), end.is_empty()) {
                (false, false) => format!("{start} - {end}"),
                (false, true) => start,
                (true, _) => end,
            };
            insert_optional(&mut facts, "duration", &duration);
        }
        SectionForm::Skills(f) => {
            insert_required(&mut facts, "role", &f.role)?;
            insert_optional(&mut facts, "focusAreas", &f.focus_areas);
        }
        SectionForm::Projects(f) => {
            insert_required(&mut facts, "name", &f.name)?;
            insert_optional(&mut facts, "technologies", &f.technologies);
        }
        SectionForm::Summary(f) => {
            insert_required(&mut facts, "role", &f.role)?;
            insert_optional(&mut facts, "experience", &f.years_of_experience);
            insert_optional(&mut facts, "expertise", &f.expertise);
        }
        SectionForm::CoverLetter(f) => {
            insert_required(&mut facts, "jobTitle", &f.job_title)?;
            insert_required(&mut facts, "companyName", &f.company_name)?;
            insert_optional(&mut facts, "industry", &f.industry);
            insert_optional(&mut facts, "keySkills", &f.key_skills);
            insert_optional(&mut facts, "experienceLevel", &f.experience_level);
            insert_optional(&mut facts, "achievements", &f.achievements);
            insert_optional(&mut facts, "companyInfo", &f.company_info);
        }
        SectionForm::PersonalInfo(_) | SectionForm::Education(_) => {
            return Err(AppError::Validation(format!(
                "section {} does not support generated content",
                form.section()
            )));
        }
    }
    Ok(facts)
}

fn insert_required(facts: &mut PromptFacts, key: &str, value: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!(
            "{key} is required to generate content"
        )));
    }
    facts.insert(key.to_string(), value.to_string());
    Ok(())
}

/// Optional facts are always present so no `{placeholder}` survives into the prompt.
fn insert_optional(facts: &mut PromptFacts, key: &str, value: &str) {
    let value = value.trim();
    let value = if value.is_empty() { "not specified" } else { value };
    facts.insert(key.to_string(), value.to_string());
}
