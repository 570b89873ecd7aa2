use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::interview::InterviewSession;

pub type SharedSession = Arc<Mutex<InterviewSession>>;

/// In-memory registry of live sessions. Each session has its own lock; the map
/// lock is held only to look a session up, insert or remove it.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub async fn insert(&self, session: InterviewSession) -> SharedSession {
        let id = session.id;
        let shared = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, shared.clone());
        shared
    }

    pub async fn get(&self, id: Uuid) -> Result<SharedSession, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                info!("Session {id} removed");
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Session {id} not found"))),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::UserRole;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = SessionStore::default();
        let shared = store
            .insert(InterviewSession::new(UserRole::Candidate, None, Some(1)))
            .await;
        let id = shared.lock().await.id;

        assert_eq!(store.len().await, 1);
        assert!(Arc::ptr_eq(&store.get(id).await.unwrap(), &shared));

        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::default();
        let a = store
            .insert(InterviewSession::new(UserRole::Candidate, None, Some(1)))
            .await;
        let b = store
            .insert(InterviewSession::new(UserRole::Candidate, None, Some(1)))
            .await;

        a.lock().await.start_interview().unwrap();
        a.lock().await.next_question();

        assert_eq!(a.lock().await.sequencer().index(), 1);
        assert_eq!(b.lock().await.sequencer().index(), 0);
        assert_eq!(store.len().await, 2);
    }
}
