//! Profile wizard step controller.
//!
//! [`Wizard`] owns the single [`WizardState`] for a session together with the
//! current step, the last validation result and per-field upload flags. Step
//! views read and edit slices of the state through it; navigation is gated by
//! the role's step validators.
//!
//! ```text
//!   step 1 --go_next--> step 2 --go_next--> ... --go_next--> step N (review)
//!          <--go_prev--         <--go_prev--      <--jump_to--
//!   step N --submit--> Submitted (terminal)
//! ```

use std::collections::HashSet;

use crate::address::ResolvedLocation;
use crate::error::CoreError;
use crate::model::{UploadTarget, WizardState};
use crate::submission::{self, CreateProfileResponse, ProfilePayload};
use crate::types::Role;
use crate::validation::{self, pet_owner, trainer, veterinarian, FormErrors, SUBMIT_ERROR_KEY};

/// First step of every wizard (1-based).
pub const FIRST_STEP: u8 = 1;

/// Message shown when the backend rejects a submission without saying why.
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to create your profile. Please try again.";

/// Human-readable label for `step` of `role`'s wizard.
pub fn step_label(role: Role, step: u8) -> Option<&'static str> {
    match role {
        Role::PetOwner => pet_owner::step_label(step),
        Role::Veterinarian => veterinarian::step_label(step),
        Role::Trainer => trainer::step_label(step),
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the given step.
    Moved(u8),
    /// Validation failed; the UI should focus `focus`.
    Blocked { focus: String },
    /// Already at the boundary; nothing changed.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStatus {
    Editing,
    /// The profile was created. The wizard is done and should be dropped.
    Submitted { redirect_to: Option<String> },
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    current_step: u8,
    errors: FormErrors,
    uploading: HashSet<UploadTarget>,
    status: WizardStatus,
}

impl Wizard {
    /// Start a wizard for `role` with that role's default state.
    pub fn new(role: Role) -> Self {
        Self::with_state(WizardState::new(role))
    }

    /// Start a wizard from an existing state (e.g. a prefilled draft).
    pub fn with_state(state: WizardState) -> Self {
        Self {
            state,
            current_step: FIRST_STEP,
            errors: FormErrors::new(),
            uploading: HashSet::new(),
            status: WizardStatus::Editing,
        }
    }

    // -- accessors --

    pub fn role(&self) -> Role {
        self.state.role()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Mutable access for step views. Field edits do not re-run validation.
    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn total_steps(&self) -> u8 {
        self.role().total_steps()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> &WizardStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, WizardStatus::Submitted { .. })
    }

    // -- navigation --

    /// Validate the current step and advance on success.
    pub fn go_next(&mut self) -> StepOutcome {
        if self.is_submitted() {
            return StepOutcome::Unchanged;
        }
        let errors = validation::validate_step(self.current_step, &self.state);
        if let Some(focus) = errors.first_key().map(str::to_string) {
            self.errors = errors;
            return StepOutcome::Blocked { focus };
        }
        self.errors = FormErrors::new();
        if self.is_last_step() {
            return StepOutcome::Unchanged;
        }
        self.current_step += 1;
        StepOutcome::Moved(self.current_step)
    }

    /// Go back one step without validating.
    pub fn go_prev(&mut self) -> StepOutcome {
        if self.is_submitted() || self.current_step == FIRST_STEP {
            return StepOutcome::Unchanged;
        }
        self.current_step -= 1;
        self.errors = FormErrors::new();
        StepOutcome::Moved(self.current_step)
    }

    /// Jump from the review step back to an earlier step to edit it.
    pub fn jump_to(&mut self, step: u8) -> Result<StepOutcome, CoreError> {
        if self.is_submitted() {
            return Ok(StepOutcome::Unchanged);
        }
        if !self.is_last_step() {
            return Err(CoreError::Validation(format!(
                "Can only jump between steps from the review step ({}), currently on step {}",
                self.total_steps(),
                self.current_step
            )));
        }
        if step < FIRST_STEP || step > self.total_steps() {
            return Err(CoreError::Validation(format!(
                "Step {step} is out of range ({FIRST_STEP}..{})",
                self.total_steps()
            )));
        }
        if step == self.current_step {
            return Ok(StepOutcome::Unchanged);
        }
        self.current_step = step;
        self.errors = FormErrors::new();
        Ok(StepOutcome::Moved(step))
    }

    // -- submission --

    /// Validate every step and build the payload. On failure the aggregated
    /// errors replace the current ones and are returned; nothing should be
    /// sent to the backend.
    pub fn prepare_submission(&mut self) -> Result<ProfilePayload, FormErrors> {
        let errors = validation::validate_all(&self.state);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = FormErrors::new();
        Ok(submission::assemble(&self.state))
    }

    /// Apply the backend's answer to a submission.
    pub fn apply_submit_response(&mut self, response: CreateProfileResponse) {
        if response.success {
            self.status = WizardStatus::Submitted {
                redirect_to: response.redirect_to,
            };
            self.errors = FormErrors::new();
        } else {
            self.record_submit_error(response.message.as_deref());
        }
    }

    /// Keep the state and surface a submission failure under `submit`.
    pub fn record_submit_error(&mut self, message: Option<&str>) {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_SUBMIT_ERROR);
        self.errors = FormErrors::new();
        self.errors.insert(SUBMIT_ERROR_KEY, message);
    }

    // -- location --

    /// Write a resolved map location into the role's location fields.
    pub fn apply_location(&mut self, location: &ResolvedLocation) {
        self.state.set_geolocation(location.point);
        let locality = self.state.locality_mut();
        locality.set_governorate(location.governorate.clone());
        locality.set_delegation(location.delegation.clone());
    }

    // -- uploads --

    pub fn is_uploading(&self, target: UploadTarget) -> bool {
        self.uploading.contains(&target)
    }

    /// Mark `target` as uploading and clear its previous error.
    pub fn begin_upload(&mut self, target: UploadTarget) -> Result<(), CoreError> {
        if !self.state.supports_upload(target) {
            return Err(CoreError::Validation(format!(
                "Field '{}' does not exist on the {} profile",
                target.key(),
                self.role().as_str()
            )));
        }
        self.uploading.insert(target);
        self.errors.remove(target.key());
        Ok(())
    }

    /// Finish a single-image upload with either the stored URL or a
    /// field-scoped error message.
    pub fn finish_upload(
        &mut self,
        target: UploadTarget,
        result: Result<String, String>,
    ) -> Result<(), CoreError> {
        self.uploading.remove(&target);
        match result {
            Ok(url) => self.state.set_uploaded_image(target, url),
            Err(message) => {
                self.errors.insert(target.key(), message);
                Ok(())
            }
        }
    }

    /// Finish a gallery upload. Successful URLs are appended; if every file
    /// failed, the field gets an error.
    pub fn finish_photo_uploads(
        &mut self,
        target: UploadTarget,
        urls: Vec<String>,
        failed: usize,
    ) -> Result<(), CoreError> {
        self.uploading.remove(&target);
        if urls.is_empty() && failed > 0 {
            self.errors
                .insert(target.key(), "Failed to upload photos. Please try again.");
            return Ok(());
        }
        self.state.append_uploaded_photos(target, urls)
    }
}
