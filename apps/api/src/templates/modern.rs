//! Modern: one column, every populated section stacked in document order.

use crate::models::document::{CoverLetterDocument, ResumeDocument};
use crate::templates::sections;
use crate::templates::tree::Node;

pub fn resume(resume: &ResumeDocument) -> Node {
    let children = [
        sections::header(&resume.personal_info),
        sections::summary(&resume.summary),
        sections::work_experience(&resume.work_experience),
        sections::education(&resume.education),
        sections::skills(&resume.skills),
        sections::projects(&resume.projects),
    ];
    Node::stack("document", children.into_iter().flatten().collect())
}

pub fn cover_letter(letter: &CoverLetterDocument) -> Node {
    let children = [
        sections::header(&letter.personal_info),
        sections::recipient(letter),
        sections::letter_body(&letter.content),
    ];
    Node::stack("document", children.into_iter().flatten().collect())
}
