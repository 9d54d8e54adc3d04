//! Delete flow of the recipe page: `Idle` → `Confirming` → `Deleting`, after which the page
//! navigates away. The DELETE request is issued by the transition into `Deleting` itself, so
//! it happens at most once no matter how often the page renders.

use crate::client::{ClientError, RecipeApi};
use models::RecipeId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

/// User input driving the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteEvent {
    /// The primary Delete button.
    Request,
    Cancel,
    /// Delete inside the confirmation panel.
    Confirm,
}

/// Side effect requested by a transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Delete,
}

impl DeleteFlow {
    /// Apply `event`. Events that do not fit the current state are ignored.
    pub fn handle(&mut self, event: DeleteEvent) -> Option<Effect> {
        match (*self, event) {
            (Self::Idle, DeleteEvent::Request) => {
                *self = Self::Confirming;
                None
            }
            (Self::Confirming, DeleteEvent::Cancel) => {
                *self = Self::Idle;
                None
            }
            (Self::Confirming, DeleteEvent::Confirm) => {
                *self = Self::Deleting;
                Some(Effect::Delete)
            }
            _ => None,
        }
    }

    /// Whether the confirmation panel is showing.
    pub fn confirm(&self) -> bool {
        *self == Self::Confirming
    }

    pub fn is_deleting(&self) -> bool {
        *self == Self::Deleting
    }
}

#[derive(Debug)]
pub enum Outcome {
    Deleted,
    Failed(ClientError),
}

/// Send the DELETE for `id`. Failures end up in the log and nowhere else.
pub async fn delete_recipe(api: &dyn RecipeApi, id: &RecipeId) -> Outcome {
    match api.delete(id).await {
        Ok(()) => {
            log::info!("Deleted recipe {id}");
            Outcome::Deleted
        }
        Err(err) => {
            log::error!("Deleting recipe {id} failed: {err}");
            Outcome::Failed(err)
        }
    }
}
