//! Projection layer: `Document` + template → presentation tree.
//!
//! Pure and total. No clock, no randomness; the same input always yields the same tree.

pub mod minimal;
pub mod modern;
pub mod sections;
pub mod tree;

use serde::Serialize;

use crate::models::document::Document;
use crate::templates::tree::{PresentationTree, TemplateId};

pub fn project(document: &Document, template: TemplateId) -> PresentationTree {
    let root = match (template, document) {
        (TemplateId::Modern, Document::Resume(resume)) => modern::resume(resume),
        (TemplateId::Modern, Document::CoverLetter(letter)) => modern::cover_letter(letter),
        (TemplateId::Minimal, Document::Resume(resume)) => minimal::resume(resume),
        (TemplateId::Minimal, Document::CoverLetter(letter)) => minimal::cover_letter(letter),
    };
    PresentationTree { template, root }
}

/// What the finish step hands to the exporter: the finished document, the chosen
/// template, and the tree it projects to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHandoff {
    pub template_id: TemplateId,
    pub document: Document,
    pub presentation: PresentationTree,
}

impl ExportHandoff {
    pub fn new(document: Document, template: TemplateId) -> Self {
        let presentation = project(&document, template);
        Self {
            template_id: template,
            document,
            presentation,
        }
    }
}
