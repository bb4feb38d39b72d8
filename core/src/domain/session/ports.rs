use std::future::Future;

use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, session::entities::SessionData};

/// A change applied to one session while no other change to it can run.
pub type SessionUpdate = Box<dyn FnOnce(&mut SessionData) -> Result<(), CoreError> + Send>;

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    /// Unknown sessions read as empty ones.
    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<SessionData, CoreError>> + Send;

    /// Read, change and store a session in one step and return the stored
    /// value. A failing update leaves the session untouched.
    fn update_session(
        &self,
        session_id: Uuid,
        update: SessionUpdate,
    ) -> impl Future<Output = Result<SessionData, CoreError>> + Send;
}
