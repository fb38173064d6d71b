//! Editor for the singleton profile row.
//!
//! Unlike the list managers there is no collection and no delete: the form
//! is always open on the one draft. The first save generates the id
//! client-side and keeps it in the draft without refetching.

use crate::admin::application::ports::outgoing::notifier::Notifier;
use crate::content::application::codec::Editable;
use crate::content::application::domain::drafts::ProfileDraft;
use crate::content::application::domain::entities::Profile;
use crate::content::application::ports::outgoing::entity_gateway::{EntityGateway, EntityRecord};

pub struct ProfileEditor<G, N>
where
    G: EntityGateway<Profile>,
    N: Notifier,
{
    gateway: G,
    notifier: N,
    draft: ProfileDraft,
    loading: bool,
    saving: bool,
}

impl<G, N> ProfileEditor<G, N>
where
    G: EntityGateway<Profile>,
    N: Notifier,
{
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            draft: ProfileDraft::default(),
            loading: true,
            saving: false,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    /// Fetches the singleton row. A missing row is not an error, it just
    /// means the profile has never been saved; fetch failures are logged
    /// and leave the empty draft in place.
    pub async fn load(&mut self) {
        match self.gateway.list(Profile::ADMIN_ORDER).await {
            Ok(rows) => {
                if let Some(profile) = rows.into_iter().next() {
                    self.draft = profile.decode();
                }
            }
            Err(e) => tracing::error!("Error fetching profile: {e}"),
        }
        self.loading = false;
    }

    pub fn update(&mut self, apply: impl FnOnce(&mut ProfileDraft)) {
        apply(&mut self.draft);
    }

    /// Upserts the profile, assigning a fresh id on the first save. The
    /// assigned id is kept in the draft so the next save updates the same
    /// row; failures keep the draft untouched.
    pub async fn save(&mut self) {
        self.saving = true;

        let record = Profile::encode(&self.draft);
        match self.gateway.upsert(&record).await {
            Ok(()) => {
                self.draft = record.decode();
                self.notifier.success("Profile updated successfully!");
            }
            Err(e) => self
                .notifier
                .error(&format!("Error updating profile: {e}")),
        }

        self.saving = false;
    }
}
