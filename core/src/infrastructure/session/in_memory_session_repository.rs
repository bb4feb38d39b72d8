use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, session::entities::SessionData,
    session::ports::{SessionRepository, SessionUpdate},
};

/// Sessions live for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SessionData>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get_session(&self, session_id: Uuid) -> Result<SessionData, CoreError> {
        let sessions = self.sessions.read().await;

        Ok(sessions.get(&session_id).cloned().unwrap_or_default())
    }

    async fn update_session(
        &self,
        session_id: Uuid,
        update: SessionUpdate,
    ) -> Result<SessionData, CoreError> {
        let mut sessions = self.sessions.write().await;

        let mut data = sessions.get(&session_id).cloned().unwrap_or_default();
        update(&mut data)?;
        sessions.insert(session_id, data.clone());

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn add_cola(quantity: u32) -> SessionUpdate {
        Box::new(move |data: &mut SessionData| data.cart.add("Cola", "1.50", quantity))
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let repository = InMemorySessionRepository::new();

        let session = repository.get_session(generate_uuid_v7()).await.unwrap();

        assert_eq!(session, SessionData::default());
    }

    #[tokio::test]
    async fn test_updated_session_is_returned() {
        let repository = InMemorySessionRepository::new();
        let session_id = generate_uuid_v7();

        let data = repository
            .update_session(session_id, add_cola(2))
            .await
            .unwrap();

        assert_eq!(data.cart.item_count(), 2);
        assert_eq!(repository.get_session(session_id).await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_session_untouched() {
        let repository = InMemorySessionRepository::new();
        let session_id = generate_uuid_v7();
        repository
            .update_session(session_id, add_cola(1))
            .await
            .unwrap();

        let result = repository
            .update_session(
                session_id,
                Box::new(|data: &mut SessionData| -> Result<(), CoreError> {
                    data.cart.remove("Cola");
                    Err(CoreError::InvalidInput("rejected".to_string()))
                }),
            )
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        assert_eq!(
            repository.get_session(session_id).await.unwrap().cart.item_count(),
            1
        );
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let repository = InMemorySessionRepository::new();
        let session_id = generate_uuid_v7();

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository.update_session(session_id, add_cola(1)).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let session = repository.get_session(session_id).await.unwrap();
        assert_eq!(session.cart.item_count(), 50);
    }
}
