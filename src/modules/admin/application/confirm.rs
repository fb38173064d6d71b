//! Two-step guard in front of every destructive action.
//!
//! The dialog itself is stateless: whether it is open derives from the
//! controller's pending-delete id. Confirm routes through the controller's
//! `confirm_delete`, never straight to the gateway, so a failed delete
//! leaves the dialog open for a retry.

use crate::admin::application::editor::ContentEditor;
use crate::admin::application::ports::outgoing::notifier::Notifier;
use crate::content::application::codec::Editable;
use crate::content::application::ports::outgoing::entity_gateway::{EntityGateway, EntityRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    message: String,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Renders nothing while the controller has no pending delete.
    pub fn view<'a, T, G, N>(
        &'a self,
        editor: &ContentEditor<T, G, N>,
    ) -> Option<DialogView<'a>>
    where
        T: Editable + EntityRecord,
        G: EntityGateway<T>,
        N: Notifier,
    {
        editor.pending_delete().map(|_| DialogView {
            title: &self.title,
            message: &self.message,
        })
    }

    /// Exactly one of confirm or cancel fires per interaction.
    pub async fn resolve<T, G, N>(
        &self,
        editor: &mut ContentEditor<T, G, N>,
        decision: Decision,
    ) where
        T: Editable + EntityRecord,
        G: EntityGateway<T>,
        N: Notifier,
    {
        match decision {
            Decision::Confirm => editor.confirm_delete().await,
            Decision::Cancel => editor.cancel_delete(),
        }
    }
}
