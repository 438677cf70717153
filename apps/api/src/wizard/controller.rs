//! Wizard Controller: owns one accumulator and the active-section pointer.
//!
//! Everything here is synchronous. A generation-backed submission returns a
//! [`GenerationRequest`] which the caller resolves outside any lock and hands back
//! to [`WizardController::complete_generation`]; the accumulator is only written there,
//! after the call has fully resolved.

use std::collections::{BTreeMap, HashMap};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::gateway::GenerationError;
use crate::generation::prompts::{prompt_facts, PromptFacts};
use crate::models::document::{Document, DocumentKind, Fragment};
use crate::models::forms::SectionForm;
use crate::models::section::SectionId;
use crate::normalizer::{check_generation_form, normalize_generated, normalize_manual};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationStatus {
    Pending,
    Succeeded,
    Failed,
}

/// A generation the controller has admitted but not yet received a result for.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub id: Uuid,
    /// The accumulator this result belongs to. A restart issues a new one.
    pub document_id: Uuid,
    pub section: SectionId,
    pub facts: PromptFacts,
    pub form: SectionForm,
}

#[derive(Debug)]
pub enum Submission {
    /// Manual path; the fragment is already in the accumulator.
    Merged,
    /// Generation path; resolve the request and pass the outcome back.
    Generate(GenerationRequest),
}

/// Serialized view of a wizard for the HTTP surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub active_section: SectionId,
    pub sections: &'static [SectionId],
    pub generation: BTreeMap<SectionId, GenerationStatus>,
    pub document: Document,
}

#[derive(Debug)]
pub struct WizardController {
    id: Uuid,
    document_id: Uuid,
    document: Document,
    active_section: SectionId,
    /// At most one outstanding generation per section, keyed to its request id.
    in_flight: HashMap<SectionId, Uuid>,
    generation_status: BTreeMap<SectionId, GenerationStatus>,
}

impl WizardController {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id: Uuid::new_v4(),
            document: Document::empty(kind),
            active_section: SectionId::initial(kind),
            in_flight: HashMap::new(),
            generation_status: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> DocumentKind {
        self.document.kind()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn generation_status(&self, section: SectionId) -> Option<GenerationStatus> {
        self.generation_status.get(&section).copied()
    }

    /// Replaces the accumulator with an empty document of the same kind.
    /// Outstanding generations keep running but their results will be discarded.
    pub fn restart(&mut self) {
        let kind = self.kind();
        self.document = Document::empty(kind);
        self.document_id = Uuid::new_v4();
        self.active_section = SectionId::initial(kind);
        self.in_flight.clear();
        self.generation_status.clear();
        info!("Wizard {} restarted with an empty {kind}", self.id);
    }

    /// Direct navigation to any section of this document kind.
    pub fn select_section(&mut self, section: SectionId) -> Result<(), AppError> {
        self.ensure_section(section)?;
        self.active_section = section;
        Ok(())
    }

    /// Routes a section submission to the manual or generation path.
    ///
    /// On any error the accumulator is unchanged and the active section stays put.
    pub fn submit(&mut self, form: SectionForm) -> Result<Submission, AppError> {
        let section = form.section();
        self.ensure_section(section)?;
        if self.in_flight.contains_key(&section) {
            return Err(AppError::GenerationInFlight(section));
        }

        if form.use_ai() {
            if section.supports_generation() {
                return self.admit_generation(section, form).map(Submission::Generate);
            }
            debug!("useAI ignored for section {section}");
        }

        let fragment = normalize_manual(&form, &self.document)?;
        self.merge(fragment)?;
        Ok(Submission::Merged)
    }

    fn admit_generation(
        &mut self,
        section: SectionId,
        form: SectionForm,
    ) -> Result<GenerationRequest, AppError> {
        check_generation_form(&form)?;
        let facts = prompt_facts(&form)?;
        let request = GenerationRequest {
            id: Uuid::new_v4(),
            document_id: self.document_id,
            section,
            facts,
            form,
        };
        self.in_flight.insert(section, request.id);
        self.generation_status
            .insert(section, GenerationStatus::Pending);
        debug!("Wizard {} admitted generation {} for {section}", self.id, request.id);
        Ok(request)
    }

    /// Applies the outcome of a generation admitted by [`submit`](Self::submit).
    ///
    /// The result lands in its target section even if the user has since navigated
    /// elsewhere. A result for an accumulator that was replaced by a restart is dropped.
    pub fn complete_generation(
        &mut self,
        request: GenerationRequest,
        outcome: Result<Option<String>, GenerationError>,
    ) -> Result<(), AppError> {
        let section = request.section;
        if request.document_id != self.document_id {
            warn!(
                "Discarding {section} generation {} for wizard {}: wizard was restarted",
                request.id, self.id
            );
            return Ok(());
        }
        if self.in_flight.get(&section) == Some(&request.id) {
            self.in_flight.remove(&section);
        }

        let fragment = outcome
            .map_err(AppError::from)
            .and_then(|raw| normalize_generated(&request.form, raw.as_deref()));
        let merged = fragment.and_then(|fragment| self.merge(fragment));

        let status = match merged {
            Ok(()) => GenerationStatus::Succeeded,
            Err(_) => GenerationStatus::Failed,
        };
        self.generation_status.insert(section, status);
        merged
    }

    fn merge(&mut self, fragment: Fragment) -> Result<(), AppError> {
        let section = fragment.section();
        self.document
            .merge(fragment)
            .map_err(|e| AppError::Internal(anyhow!(e)))?;
        info!("Wizard {} merged {section}", self.id);
        Ok(())
    }

    fn ensure_section(&self, section: SectionId) -> Result<(), AppError> {
        if section.document_kind() != self.kind() {
            return Err(AppError::Validation(format!(
                "section {section} is not part of a {}",
                self.kind()
            )));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let kind = self.kind();
        WizardSnapshot {
            id: self.id,
            kind,
            active_section: self.active_section,
            sections: SectionId::all_for(kind),
            generation: self.generation_status.clone(),
            document: self.document.clone(),
        }
    }
}
