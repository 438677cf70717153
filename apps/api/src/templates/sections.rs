//! Section blocks shared by every template. Each builder returns `None` for an
//! empty section, so all templates omit exactly the same sections.

use crate::models::document::{
    CoverLetterDocument, EducationEntry, PersonalInfo, ProjectEntry, WorkExperienceEntry,
};
use crate::models::section::SectionId;
use crate::templates::tree::{Node, TextStyle};

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn date_range(start: &str, end: &str) -> Option<String> {
    match (non_empty(start), non_empty(end)) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

fn section(id: SectionId, title: &str, mut body: Vec<Node>) -> Node {
    body.insert(0, Node::heading(2, title));
    Node::stack(id.as_str(), body)
}

pub fn header(info: &PersonalInfo) -> Option<Node> {
    let mut children = Vec::new();
    if let Some(photo) = info.photo.as_deref().and_then(non_empty) {
        children.push(Node::Image {
            src: photo.to_string(),
            alt: info.full_name(),
        });
    }
    if let Some(name) = non_empty(&info.full_name()) {
        children.push(Node::heading(1, name));
    }
    if let Some(title) = non_empty(&info.job_title) {
        children.push(Node::text(TextStyle::Subtitle, title));
    }

    let phone = non_empty(&info.phone).map(|phone| match non_empty(&info.phone_country_code) {
        Some(code) => format!("{code} {phone}"),
        None => phone.to_string(),
    });
    let location = match (non_empty(&info.city), non_empty(&info.country)) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (None, Some(country)) => Some(country.to_string()),
        _ => None,
    };
    let contact: Vec<String> = [non_empty(&info.email).map(str::to_string), phone, location]
        .into_iter()
        .flatten()
        .collect();
    if !contact.is_empty() {
        children.push(Node::text(TextStyle::Muted, contact.join(" | ")));
    }

    (!children.is_empty()).then(|| Node::stack(SectionId::PersonalInfo.as_str(), children))
}

pub fn summary(text: &str) -> Option<Node> {
    let text = non_empty(text)?;
    Some(section(
        SectionId::Summary,
        "Professional Summary",
        vec![Node::text(TextStyle::Body, text)],
    ))
}

fn experience_entry(entry: &WorkExperienceEntry) -> Node {
    let mut children = vec![
        Node::heading(3, &entry.position),
        Node::text(TextStyle::Subtitle, &entry.company),
    ];
    if let Some(dates) = date_range(&entry.start_date, &entry.end_date) {
        children.push(Node::text(TextStyle::Muted, dates));
    }
    if !entry.achievements.is_empty() {
        children.push(Node::BulletList {
            items: entry.achievements.clone(),
        });
    }
    Node::stack("entry", children)
}

pub fn work_experience(entries: &[WorkExperienceEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    Some(section(
        SectionId::WorkExperience,
        "Work Experience",
        entries.iter().map(experience_entry).collect(),
    ))
}

fn education_entry(entry: &EducationEntry) -> Node {
    let mut children = vec![
        Node::heading(3, &entry.degree),
        Node::text(TextStyle::Subtitle, &entry.school),
    ];
    if let Some(dates) = date_range(&entry.year_started, &entry.year_graduated) {
        children.push(Node::text(TextStyle::Muted, dates));
    }
    if let Some(gpa) = entry.gpa.as_deref().and_then(non_empty) {
        children.push(Node::text(TextStyle::Muted, format!("GPA: {gpa}")));
    }
    Node::stack("entry", children)
}

pub fn education(entries: &[EducationEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    Some(section(
        SectionId::Education,
        "Education",
        entries.iter().map(education_entry).collect(),
    ))
}

pub fn skills(skills: &[String]) -> Option<Node> {
    if skills.is_empty() {
        return None;
    }
    Some(section(
        SectionId::Skills,
        "Skills",
        vec![Node::TagList {
            tags: skills.to_vec(),
        }],
    ))
}

fn project_entry(entry: &ProjectEntry) -> Node {
    let mut children = vec![Node::heading(3, &entry.name)];
    if let Some(role) = non_empty(&entry.role) {
        children.push(Node::text(TextStyle::Subtitle, role));
    }
    if let Some(description) = non_empty(&entry.description) {
        children.push(Node::text(TextStyle::Body, description));
    }
    let tags = entry.technology_tags();
    if !tags.is_empty() {
        children.push(Node::TagList {
            tags: tags.into_iter().map(str::to_string).collect(),
        });
    }
    if let Some(url) = entry.url.as_deref().and_then(non_empty) {
        children.push(Node::Link {
            label: url.to_string(),
            href: url.to_string(),
        });
    }
    Node::stack("entry", children)
}

pub fn projects(entries: &[ProjectEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    Some(section(
        SectionId::Projects,
        "Projects",
        entries.iter().map(project_entry).collect(),
    ))
}

pub fn recipient(letter: &CoverLetterDocument) -> Option<Node> {
    let lines: Vec<Node> = [
        non_empty(&letter.recipient_name),
        non_empty(&letter.company_name),
        non_empty(&letter.company_address),
    ]
    .into_iter()
    .flatten()
    .map(|line| Node::text(TextStyle::Body, line))
    .collect();
    (!lines.is_empty()).then(|| Node::stack("recipient", lines))
}

/// Letter body split into paragraphs on blank lines.
pub fn letter_body(content: &str) -> Option<Node> {
    let paragraphs: Vec<Node> = content
        .split("\n\n")
        .filter_map(non_empty)
        .map(|paragraph| Node::text(TextStyle::Body, paragraph))
        .collect();
    (!paragraphs.is_empty()).then(|| Node::stack(SectionId::CoverLetter.as_str(), paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_are_omitted() {
        assert!(header(&PersonalInfo::default()).is_none());
        assert!(summary("   ").is_none());
        assert!(work_experience(&[]).is_none());
        assert!(skills(&[]).is_none());
        assert!(letter_body("\n\n  \n\n").is_none());
    }

    #[test]
    fn test_optional_fields_have_no_placeholder_nodes() {
        let entry = EducationEntry {
            degree: "Bachelor of Science".into(),
            school: "University of Tokyo".into(),
            year_started: "April 2014".into(),
            year_graduated: "March 2018".into(),
            gpa: None,
        };
        let Some(Node::Container { children, .. }) = education(&[entry]) else {
            panic!("expected education block");
        };
        let Node::Container { children: fields, .. } = &children[1] else {
            panic!("expected entry");
        };
        assert_eq!(fields.len(), 3);
        assert!(!fields
            .iter()
            .any(|n| matches!(n, Node::Text { text, .. } if text.starts_with("GPA"))));
    }

    #[test]
    fn test_header_contact_line() {
        let info = PersonalInfo {
            first_name: "Mina".into(),
            last_name: "Park".into(),
            country: "South Korea".into(),
            city: "Seoul".into(),
            phone_country_code: "+82".into(),
            phone: "10-1234-5678".into(),
            email: "mina@example.com".into(),
            ..Default::default()
        };
        let Some(Node::Container { children, .. }) = header(&info) else {
            panic!("expected header");
        };
        assert_eq!(children[0], Node::heading(1, "Mina Park"));
        assert_eq!(
            children[1],
            Node::text(
                TextStyle::Muted,
                "mina@example.com | +82 10-1234-5678 | Seoul, South Korea"
            )
        );
    }

    #[test]
    fn test_letter_body_paragraphs() {
        let Some(Node::Container { children, .. }) =
            letter_body("Dear Hiring Manager,\n\nI am writing.\n\n\nSincerely,\nAda")
        else {
            panic!("expected body");
        };
        assert_eq!(children.len(), 3);
        assert_eq!(children[2], Node::text(TextStyle::Body, "Sincerely,\nAda"));
    }
}
