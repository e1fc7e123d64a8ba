//! Versioned holder of the wizard state, the sizing result and the narrative.

use derive_more::Display;

use crate::{
    api::narrative::Narrative,
    core::{project::ProjectDescription, result::SizingResult, sizing::Engine},
    lookup::LookupProvider,
    prelude::*,
    wizard::{ValidationError, Wizard},
};

/// User-visible message for any narrative failure.
pub const NARRATIVE_FAILURE: &str =
    "Failed to generate the proposal text, check the API key and the connection.";

/// Monotonically increasing version of the session inputs.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Revision(u64);

/// Handle of a pending narrative request.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NarrativeTicket {
    revision: Revision,
}

/// What happened to a completed narrative request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    Applied,
    Failed,

    /// The inputs have changed since the request was made, the response was dropped.
    Stale,
}

pub struct Session<'a, L> {
    engine: Engine<'a, L>,
    wizard: Wizard,
    revision: Revision,
    sizing: Option<SizingResult>,
    narrative: Option<Narrative>,
    error: Option<&'static str>,
}

impl<'a, L: LookupProvider> Session<'a, L> {
    pub const fn new(engine: Engine<'a, L>, wizard: Wizard) -> Self {
        Self { engine, wizard, revision: Revision(0), sizing: None, narrative: None, error: None }
    }

    pub const fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub const fn revision(&self) -> Revision {
        self.revision
    }

    pub const fn sizing(&self) -> Option<&SizingResult> {
        self.sizing.as_ref()
    }

    pub const fn narrative(&self) -> Option<&Narrative> {
        self.narrative.as_ref()
    }

    /// User-visible message of the last narrative failure.
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Replace the wizard state, invalidating everything derived from the previous one.
    pub fn edit(&mut self, wizard: Wizard) {
        self.wizard = wizard;
        self.revision = Revision(self.revision.0 + 1);
        self.sizing = None;
        self.narrative = None;
        self.error = None;
        debug!(revision = %self.revision, step = %self.wizard.step(), "edited");
    }

    /// Advance the wizard, leaving the session untouched on a validation error.
    pub fn next(&mut self) -> Result<(), ValidationError> {
        let wizard = self.wizard.next()?;
        self.edit(wizard);
        Ok(())
    }

    pub fn back(&mut self) {
        self.edit(self.wizard.back());
    }

    /// Size the project from scratch, dropping the previous narrative.
    pub fn calculate(&mut self) -> Result<&SizingResult, ValidationError> {
        let project = self.wizard.ready()?;
        let sizing = self.engine.size(project);
        self.narrative = None;
        self.error = None;
        Ok(&*self.sizing.insert(sizing))
    }

    /// Start a narrative request for the current sizing.
    ///
    /// The caller performs the request with the returned inputs and hands the outcome
    /// back to [`Session::complete_narrative`].
    pub fn begin_narrative(
        &mut self,
    ) -> Result<(NarrativeTicket, ProjectDescription, SizingResult), ValidationError> {
        let sizing = self.sizing.ok_or(ValidationError::NotCalculated)?;
        self.narrative = None;
        self.error = None;
        let ticket = NarrativeTicket { revision: self.revision };
        Ok((ticket, self.wizard.project().clone(), sizing))
    }

    pub fn complete_narrative(
        &mut self,
        ticket: NarrativeTicket,
        outcome: Result<Narrative>,
    ) -> Completion {
        if ticket.revision != self.revision {
            warn!(
                ticket = %ticket.revision,
                current = %self.revision,
                "dropping a stale narrative"
            );
            return Completion::Stale;
        }
        match outcome {
            Ok(narrative) => {
                self.narrative = Some(narrative);
                Completion::Applied
            }
            Err(error) => {
                error!("failed to generate the narrative: {error:#}");
                self.error = Some(NARRATIVE_FAILURE);
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::InverterCatalog, core::system_type::SystemType, lookup::StaticLookup};

    fn narrative() -> Narrative {
        Narrative { text: "text".to_string(), sources: Vec::new() }
    }

    fn ready_wizard() -> Wizard {
        let project =
            ProjectDescription { system_type: Some(SystemType::Hybrid), ..Default::default() };
        Wizard::complete(project).unwrap()
    }

    #[test]
    fn calculate_requires_last_step() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), Wizard::default());
        assert!(matches!(session.calculate(), Err(ValidationError::NotReady(_))));
        assert_eq!(session.begin_narrative().err(), Some(ValidationError::NotCalculated));
    }

    #[test]
    fn narrative_applied() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        assert!(session.calculate().is_ok());
        let (ticket, project, sizing) = session.begin_narrative().unwrap();
        assert_eq!(project.system_type, Some(SystemType::Hybrid));
        assert_eq!(Some(&sizing), session.sizing());
        assert_eq!(session.complete_narrative(ticket, Ok(narrative())), Completion::Applied);
        assert_eq!(session.narrative(), Some(&narrative()));
    }

    #[test]
    fn stale_narrative_dropped() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        assert!(session.calculate().is_ok());
        let (ticket, _, _) = session.begin_narrative().unwrap();

        session.back();
        assert!(session.sizing().is_none());
        assert!(session.next().is_ok());
        assert!(session.calculate().is_ok());

        assert_eq!(session.complete_narrative(ticket, Ok(narrative())), Completion::Stale);
        assert!(session.narrative().is_none());
    }

    #[test]
    fn failure_keeps_sizing() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        let sizing = *session.calculate().unwrap();
        let (ticket, _, _) = session.begin_narrative().unwrap();
        let completion = session.complete_narrative(ticket, Err(anyhow::anyhow!("HTTP 403")));
        assert_eq!(completion, Completion::Failed);
        assert_eq!(session.error(), Some(NARRATIVE_FAILURE));
        assert_eq!(session.sizing(), Some(&sizing));
    }

    #[test]
    fn edit_bumps_revision_and_clears() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        assert!(session.calculate().is_ok());
        let revision = session.revision();
        let wizard = session.wizard().edit(|project| project.monthly_consumption = 500.into());
        session.edit(wizard);
        assert!(session.revision() > revision);
        assert!(session.sizing().is_none());
    }

    #[test]
    fn edit_clears_applied_narrative() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        assert!(session.calculate().is_ok());
        let (ticket, _, _) = session.begin_narrative().unwrap();
        assert_eq!(session.complete_narrative(ticket, Ok(narrative())), Completion::Applied);
        assert!(session.narrative().is_some());

        let wizard = session.wizard().edit(|project| project.backup_hours = 6.into());
        session.edit(wizard);
        assert!(session.narrative().is_none());
        assert!(session.error().is_none());
        assert!(session.sizing().is_none());
    }

    #[test]
    fn edit_clears_narrative_failure() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), ready_wizard());
        assert!(session.calculate().is_ok());
        let (ticket, _, _) = session.begin_narrative().unwrap();
        let completion = session.complete_narrative(ticket, Err(anyhow::anyhow!("timeout")));
        assert_eq!(completion, Completion::Failed);

        session.back();
        assert!(session.error().is_none());
        assert!(session.narrative().is_none());
    }

    #[test]
    fn failed_transition_keeps_revision() {
        let catalog = InverterCatalog::default();
        let mut session = Session::new(Engine::new(&StaticLookup, &catalog), Wizard::default());
        let revision = session.revision();
        assert_eq!(session.next(), Err(ValidationError::MissingSystemType));
        assert_eq!(session.revision(), revision);
    }
}
