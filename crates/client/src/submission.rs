//! Final submission: validate every step, send the payload, apply the
//! backend's answer.

use pawlink_core::validation::FormErrors;
use pawlink_core::wizard::{Wizard, WizardStatus};

use crate::traits::ProfileCreator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed somewhere; nothing was sent. The wizard carries
    /// the same errors.
    Invalid(FormErrors),
    /// The profile was created.
    Submitted { redirect_to: Option<String> },
    /// The backend refused or could not be reached. The message is stored
    /// under the `submit` error key and the state is kept for a retry.
    Rejected { message: String },
}

/// Submit the wizard through `creator`. The collaborator is only called
/// once every step validates.
pub async fn submit(wizard: &mut Wizard, creator: &dyn ProfileCreator) -> SubmitOutcome {
    if let WizardStatus::Submitted { redirect_to } = wizard.status() {
        return SubmitOutcome::Submitted {
            redirect_to: redirect_to.clone(),
        };
    }

    let payload = match wizard.prepare_submission() {
        Ok(payload) => payload,
        Err(errors) => {
            tracing::info!(
                role = wizard.role().as_str(),
                error_count = errors.len(),
                first = errors.first_key().unwrap_or_default(),
                "Submission blocked by validation",
            );
            return SubmitOutcome::Invalid(errors);
        }
    };

    match creator.create_profile(&payload).await {
        Ok(response) => {
            wizard.apply_submit_response(response);
        }
        Err(e) => {
            tracing::warn!(error = %e, role = wizard.role().as_str(), "Create profile request failed");
            wizard.record_submit_error(Some(&e.user_message()));
        }
    }

    match wizard.status() {
        WizardStatus::Submitted { redirect_to } => {
            tracing::info!(role = wizard.role().as_str(), "Profile created");
            SubmitOutcome::Submitted {
                redirect_to: redirect_to.clone(),
            }
        }
        WizardStatus::Editing => {
            let message = wizard
                .errors()
                .get(pawlink_core::validation::SUBMIT_ERROR_KEY)
                .unwrap_or_default()
                .to_string();
            tracing::info!(role = wizard.role().as_str(), message = %message, "Profile rejected");
            SubmitOutcome::Rejected { message }
        }
    }
}
