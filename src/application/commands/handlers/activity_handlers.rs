//! Activity Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    SignUpCommand, SignUpResponse, UnregisterCommand, UnregisterResponse,
};
use crate::application::error::ApplicationError;
use crate::application::ports::ActivityRepositoryPort;

// ============================================================================
// SignUp
// ============================================================================

/// SignUp Handler - 为学生报名活动
pub struct SignUpHandler {
    activity_repo: Arc<dyn ActivityRepositoryPort>,
}

impl SignUpHandler {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryPort>) -> Self {
        Self { activity_repo }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResponse, ApplicationError> {
        let activity = self.activity_repo.sign_up(&cmd.activity_name, &cmd.email)?;

        tracing::info!(
            activity = %cmd.activity_name,
            email = %cmd.email,
            teacher = %cmd.teacher,
            participants = activity.participants().len(),
            max_participants = activity.max_participants(),
            "Student signed up"
        );

        Ok(SignUpResponse {
            message: format!("Signed up {} for {}", cmd.email, cmd.activity_name),
            participant_count: activity.participants().len(),
        })
    }
}

// ============================================================================
// Unregister
// ============================================================================

/// Unregister Handler - 取消学生报名
pub struct UnregisterHandler {
    activity_repo: Arc<dyn ActivityRepositoryPort>,
}

impl UnregisterHandler {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryPort>) -> Self {
        Self { activity_repo }
    }

    pub async fn handle(
        &self,
        cmd: UnregisterCommand,
    ) -> Result<UnregisterResponse, ApplicationError> {
        let activity = self
            .activity_repo
            .unregister(&cmd.activity_name, &cmd.email)?;

        tracing::info!(
            activity = %cmd.activity_name,
            email = %cmd.email,
            teacher = %cmd.teacher,
            participants = activity.participants().len(),
            "Student unregistered"
        );

        Ok(UnregisterResponse {
            message: format!("Unregistered {} from {}", cmd.email, cmd.activity_name),
            participant_count: activity.participants().len(),
        })
    }
}
