//! Minimal: header, summary and experience full width; projects beside a
//! sidebar of education and skills.

use crate::models::document::{CoverLetterDocument, ResumeDocument};
use crate::templates::sections;
use crate::templates::tree::Node;

/// Wraps populated blocks in a container, or nothing when none are populated.
fn group(role: &'static str, blocks: Vec<Option<Node>>) -> Option<Node> {
    let children: Vec<Node> = blocks.into_iter().flatten().collect();
    (!children.is_empty()).then(|| Node::stack(role, children))
}

fn columns(role: &'static str, cols: Vec<Option<Node>>) -> Option<Node> {
    let children: Vec<Node> = cols.into_iter().flatten().collect();
    (!children.is_empty()).then(|| Node::columns(role, children))
}

pub fn resume(resume: &ResumeDocument) -> Node {
    let main = group("main", vec![sections::projects(&resume.projects)]);
    let sidebar = group(
        "sidebar",
        vec![
            sections::education(&resume.education),
            sections::skills(&resume.skills),
        ],
    );
    let children = [
        sections::header(&resume.personal_info),
        sections::summary(&resume.summary),
        sections::work_experience(&resume.work_experience),
        columns("body", vec![main, sidebar]),
    ];
    Node::stack("document", children.into_iter().flatten().collect())
}

pub fn cover_letter(letter: &CoverLetterDocument) -> Node {
    let children = [
        columns(
            "letterhead",
            vec![
                sections::header(&letter.personal_info),
                sections::recipient(letter),
            ],
        ),
        sections::letter_body(&letter.content),
    ];
    Node::stack("document", children.into_iter().flatten().collect())
}
