//! Generic list-and-edit controller backing every admin manager screen.
//!
//! Holds the cached collection for one entity type, the currently open edit
//! draft (or none) and the pending-delete target (or none). The cached list
//! is never the source of truth: every successful mutation reloads it
//! wholesale from the gateway.

use uuid::Uuid;

use crate::admin::application::ports::outgoing::notifier::Notifier;
use crate::content::application::codec::Editable;
use crate::content::application::ports::outgoing::entity_gateway::{
    EntityGateway, EntityRecord,
};

pub struct ContentEditor<T, G, N>
where
    T: Editable + EntityRecord,
    G: EntityGateway<T>,
    N: Notifier,
{
    gateway: G,
    notifier: N,
    saved_message: &'static str,
    items: Vec<T>,
    draft: Option<T::Draft>,
    form_visible: bool,
    pending_delete: Option<Uuid>,
}

impl<T, G, N> ContentEditor<T, G, N>
where
    T: Editable + EntityRecord,
    G: EntityGateway<T>,
    N: Notifier,
{
    pub fn new(gateway: G, notifier: N, saved_message: &'static str) -> Self {
        Self {
            gateway,
            notifier,
            saved_message,
            items: Vec::new(),
            draft: None,
            form_visible: false,
            pending_delete: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        self.draft.as_ref()
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    /// Replaces the cached list with the store's current rows. A fetch
    /// failure is logged and leaves the list stale; it never surfaces a
    /// toast, so a transient backend hiccup does not block the screen.
    pub async fn load(&mut self) {
        match self.gateway.list(T::ADMIN_ORDER).await {
            Ok(rows) => self.items = rows,
            Err(e) => tracing::error!("Error fetching {}: {e}", T::TABLE),
        }
    }

    /// Opens the form with the entity type's empty template.
    pub fn begin_create(&mut self) {
        self.draft = Some(T::Draft::default());
        self.form_visible = true;
    }

    /// Opens the form with a decoded copy of an existing row.
    pub fn begin_edit(&mut self, item: &T) {
        self.draft = Some(item.decode());
        self.form_visible = true;
    }

    /// Merges an edit into the open draft. No-op when no form is open.
    pub fn update_draft(&mut self, apply: impl FnOnce(&mut T::Draft)) {
        if let Some(draft) = self.draft.as_mut() {
            apply(draft);
        }
    }

    /// Encodes the draft and upserts it. On success the list is reloaded
    /// and the form closes; on failure the draft stays open untouched so
    /// the admin can fix the input and resubmit.
    pub async fn submit(&mut self) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };

        let record = T::encode(draft);
        match self.gateway.upsert(&record).await {
            Ok(()) => {
                self.notifier.success(self.saved_message);
                self.load().await;
                self.form_visible = false;
                self.draft = None;
            }
            Err(e) => self.notifier.error(&format!("Error: {e}")),
        }
    }

    pub fn cancel(&mut self) {
        self.form_visible = false;
        self.draft = None;
    }

    /// Marks a row for deletion; nothing is deleted until confirmed.
    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    /// Deletes the marked row. On failure the pending id is kept so the
    /// confirmation dialog stays open for a retry.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete else {
            return;
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.notifier.success("Deleted!");
                self.load().await;
                self.pending_delete = None;
            }
            Err(e) => self.notifier.error(&format!("Error: {e}")),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
