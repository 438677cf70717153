//! Session registry and the async half of section submission.
//!
//! The session map lock is held only for synchronous controller calls, never
//! across the generation call, so other sections (and other wizards) stay
//! responsive while a generation is outstanding.
//!
//! Wizards live until deleted or until left idle for longer than the configured
//! TTL. Expired wizards are dropped when looked up and swept when a new one starts.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::gateway::GenerationGateway;
use crate::models::document::DocumentKind;
use crate::models::forms::SectionForm;
use crate::models::section::SectionId;
use crate::templates::tree::{PresentationTree, TemplateId};
use crate::templates::{self, ExportHandoff};
use crate::wizard::controller::{Submission, WizardController, WizardSnapshot};

struct Session {
    controller: WizardController,
    last_touched: Instant,
}

type Sessions = Arc<Mutex<HashMap<Uuid, Session>>>;

#[derive(Clone)]
pub struct WizardService {
    sessions: Sessions,
    gateway: GenerationGateway,
    idle_ttl: Duration,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("wizard {id} not found"))
}

/// Looks up a live wizard and marks it as touched. An expired one is removed instead.
fn touch(
    sessions: &mut HashMap<Uuid, Session>,
    id: Uuid,
    idle_ttl: Duration,
) -> Result<&mut WizardController, AppError> {
    let now = Instant::now();
    let last_touched = sessions.get(&id).ok_or_else(|| not_found(id))?.last_touched;
    if now.saturating_duration_since(last_touched) > idle_ttl {
        sessions.remove(&id);
        info!("Wizard {id} expired after {}s idle", idle_ttl.as_secs());
        return Err(not_found(id));
    }
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
    session.last_touched = now;
    Ok(&mut session.controller)
}

impl WizardService {
    pub fn new(gateway: GenerationGateway, idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            gateway,
            idle_ttl,
        }
    }

    pub async fn start(&self, kind: DocumentKind) -> WizardSnapshot {
        let controller = WizardController::new(kind);
        let snapshot = controller.snapshot();
        let now = Instant::now();

        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_touched) <= self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle wizard(s)");
        }
        sessions.insert(
            controller.id(),
            Session {
                controller,
                last_touched: now,
            },
        );

        info!("Started {kind} wizard {}", snapshot.id);
        snapshot
    }

    /// Drops a wizard and its accumulator. A generation still running for it
    /// finishes with nowhere to land and its result is discarded.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .lock()
            .await
            .remove(&id)
            .ok_or_else(|| not_found(id))?;
        info!("Deleted wizard {id}");
        Ok(())
    }

    /// Runs `f` against one wizard under the session lock.
    async fn with_wizard<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardController) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.lock().await;
        f(touch(&mut sessions, id, self.idle_ttl)?)
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<WizardSnapshot, AppError> {
        self.with_wizard(id, |c| Ok(c.snapshot())).await
    }

    pub async fn restart(&self, id: Uuid) -> Result<WizardSnapshot, AppError> {
        self.with_wizard(id, |c| {
            c.restart();
            Ok(c.snapshot())
        })
        .await
    }

    pub async fn select_section(
        &self,
        id: Uuid,
        section: SectionId,
    ) -> Result<WizardSnapshot, AppError> {
        self.with_wizard(id, |c| {
            c.select_section(section)?;
            Ok(c.snapshot())
        })
        .await
    }

    /// `submitSection`: manual input is merged immediately; a generation-backed
    /// submission resolves the call and merges the result before returning.
    ///
    /// The generation runs on its own task, so a caller that goes away does not
    /// cancel it and the result still lands in the accumulator.
    pub async fn submit_section(
        &self,
        id: Uuid,
        section: SectionId,
        input: Value,
    ) -> Result<WizardSnapshot, AppError> {
        let form = SectionForm::parse(section, input)
            .map_err(|e| AppError::Validation(format!("invalid {section} form: {e}")))?;

        let request = match self.with_wizard(id, |c| c.submit(form)).await? {
            Submission::Merged => return self.snapshot(id).await,
            Submission::Generate(request) => request,
        };

        let sessions = Arc::clone(&self.sessions);
        let gateway = self.gateway.clone();
        let idle_ttl = self.idle_ttl;
        let task = tokio::spawn(async move {
            let outcome = gateway.generate(request.section, &request.facts).await;
            let mut sessions = sessions.lock().await;
            let controller = touch(&mut sessions, id, idle_ttl)?;
            controller.complete_generation(request, outcome)?;
            Ok::<_, AppError>(controller.snapshot())
        });

        task.await.context("generation task did not complete")?
    }

    pub async fn preview(
        &self,
        id: Uuid,
        template: TemplateId,
    ) -> Result<PresentationTree, AppError> {
        self.with_wizard(id, |c| Ok(templates::project(c.document(), template)))
            .await
    }

    /// Export hand-off. Finishing is not a state change; the wizard stays editable.
    pub async fn finish(&self, id: Uuid, template: TemplateId) -> Result<ExportHandoff, AppError> {
        let handoff = self
            .with_wizard(id, |c| Ok(ExportHandoff::new(c.document().clone(), template)))
            .await?;
        info!("Wizard {id} handed off for export with template {template}");
        Ok(handoff)
    }
}
