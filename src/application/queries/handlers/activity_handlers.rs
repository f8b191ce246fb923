//! Activity Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ActivityRepositoryPort;
use crate::application::queries::ListActivities;
use crate::domain::activity::Activity;

// ============================================================================
// Response DTOs
// ============================================================================

/// 活动详情响应
#[derive(Debug, Clone)]
pub struct ActivityResponse {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            name: activity.name().to_string(),
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity.participants().to_vec(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListActivities Handler
pub struct ListActivitiesHandler {
    activity_repo: Arc<dyn ActivityRepositoryPort>,
}

impl ListActivitiesHandler {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryPort>) -> Self {
        Self { activity_repo }
    }

    pub async fn handle(
        &self,
        _query: ListActivities,
    ) -> Result<Vec<ActivityResponse>, ApplicationError> {
        let activities = self.activity_repo.list();
        Ok(activities.into_iter().map(ActivityResponse::from).collect())
    }
}
