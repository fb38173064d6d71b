//! Entry point to the admin surface.
//!
//! The dashboard owns one editor per entity type and can only be opened
//! against a signed-in session; an unauthenticated caller never reaches a
//! controller. This is the structural counterpart of a protected route.

use crate::admin::application::editor::ContentEditor;
use crate::admin::application::ports::outgoing::notifier::Notifier;
use crate::admin::application::profile_editor::ProfileEditor;
use crate::auth::application::ports::outgoing::session_gate::{
    AuthError, SessionGate, SessionState,
};
use crate::content::application::domain::entities::{
    Education, Profile, Project, TechStackItem, WorkExperience,
};
use crate::content::application::ports::outgoing::entity_gateway::EntityGateway;

pub struct AdminDashboard<G, S, N>
where
    G: EntityGateway<Profile>
        + EntityGateway<WorkExperience>
        + EntityGateway<Education>
        + EntityGateway<TechStackItem>
        + EntityGateway<Project>
        + Clone,
    S: SessionGate,
    N: Notifier + Clone,
{
    session: S,
    notifier: N,
    pub profile: ProfileEditor<G, N>,
    pub work: ContentEditor<WorkExperience, G, N>,
    pub education: ContentEditor<Education, G, N>,
    pub tech_stack: ContentEditor<TechStackItem, G, N>,
    pub projects: ContentEditor<Project, G, N>,
}

impl<G, S, N> AdminDashboard<G, S, N>
where
    G: EntityGateway<Profile>
        + EntityGateway<WorkExperience>
        + EntityGateway<Education>
        + EntityGateway<TechStackItem>
        + EntityGateway<Project>
        + Clone,
    S: SessionGate,
    N: Notifier + Clone,
{
    /// Refuses to construct the admin surface for a signed-out session.
    pub async fn open(gateway: G, session: S, notifier: N) -> Result<Self, AuthError> {
        match session.state().await {
            SessionState::SignedIn(_) => {}
            SessionState::SignedOut => return Err(AuthError::NotSignedIn),
        }

        Ok(Self {
            profile: ProfileEditor::new(gateway.clone(), notifier.clone()),
            work: ContentEditor::new(gateway.clone(), notifier.clone(), "Work experience saved!"),
            education: ContentEditor::new(gateway.clone(), notifier.clone(), "Education saved!"),
            tech_stack: ContentEditor::new(gateway.clone(), notifier.clone(), "Technology saved!"),
            projects: ContentEditor::new(gateway, notifier.clone(), "Project saved!"),
            session,
            notifier,
        })
    }

    /// Tears the session down; the dashboard must be dropped afterwards.
    pub async fn log_out(&self) -> Result<(), AuthError> {
        self.session.sign_out().await?;
        self.notifier.success("Logged out successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use mockall::mock;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::session_gate::AdminUser;
    use crate::content::application::ports::outgoing::entity_gateway::{
        EntityRecord, GatewayError, ListOrder,
    };

    mock! {
        pub SessionGateMock {}
        #[async_trait]
        impl SessionGate for SessionGateMock {
            async fn state(&self) -> SessionState;
            async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, AuthError>;
            async fn sign_out(&self) -> Result<(), AuthError>;
        }
    }

    #[derive(Clone, Default)]
    struct EmptyGateway;

    #[async_trait]
    impl<T: EntityRecord> EntityGateway<T> for EmptyGateway {
        async fn list(&self, _order: ListOrder) -> Result<Vec<T>, GatewayError> {
            Ok(Vec::new())
        }

        async fn upsert(&self, _record: &T) -> Result<(), GatewayError> {
            Ok(())
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.events.lock().unwrap().push(format!("success: {message}"));
        }

        fn error(&self, message: &str) {
            self.events.lock().unwrap().push(format!("error: {message}"));
        }
    }

    fn signed_in_user() -> AdminUser {
        AdminUser {
            id: "user-1".to_string(),
            email: "admin@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_open_refuses_signed_out_session() {
        let mut session = MockSessionGateMock::new();
        session
            .expect_state()
            .times(1)
            .returning(|| SessionState::SignedOut);

        let result =
            AdminDashboard::open(EmptyGateway, session, RecordingNotifier::default()).await;

        assert!(matches!(result, Err(AuthError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_open_builds_editors_for_signed_in_session() {
        let mut session = MockSessionGateMock::new();
        session
            .expect_state()
            .times(1)
            .returning(|| SessionState::SignedIn(signed_in_user()));

        let dashboard =
            AdminDashboard::open(EmptyGateway, session, RecordingNotifier::default())
                .await
                .unwrap();

        assert!(dashboard.work.items().is_empty());
        assert!(!dashboard.projects.form_visible());
    }

    #[tokio::test]
    async fn test_log_out_tears_down_and_toasts() {
        let mut session = MockSessionGateMock::new();
        session
            .expect_state()
            .returning(|| SessionState::SignedIn(signed_in_user()));
        session.expect_sign_out().times(1).returning(|| Ok(()));

        let notifier = RecordingNotifier::default();
        let dashboard = AdminDashboard::open(EmptyGateway, session, notifier.clone())
            .await
            .unwrap();

        dashboard.log_out().await.unwrap();

        assert_eq!(
            notifier.events(),
            vec!["success: Logged out successfully".to_string()]
        );
    }
}
