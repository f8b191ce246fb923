//! In-Memory Activity Store Implementation
//!
//! 每个活动的"检查 + 修改"在 DashMap 写锁内完成，不同活动互不阻塞

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::ActivityRepositoryPort;
use crate::domain::activity::{Activity, ActivityError};

/// 内存活动存储
pub struct InMemoryActivityStore {
    activities: DashMap<String, Activity>,
    /// 目录顺序，活动集合在运行期不增删
    order: Vec<String>,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        let map = DashMap::with_capacity(activities.len());
        let mut order = Vec::with_capacity(activities.len());

        for activity in activities {
            let name = activity.name().to_string();
            if map.insert(name.clone(), activity).is_some() {
                tracing::warn!(activity = %name, "Duplicate activity in catalog, keeping the last one");
            } else {
                order.push(name);
            }
        }

        Self {
            activities: map,
            order,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 在单个活动的写锁内执行修改
    fn modify<F>(&self, name: &str, f: F) -> Result<Activity, ActivityError>
    where
        F: FnOnce(&mut Activity) -> Result<(), ActivityError>,
    {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| ActivityError::NotFound(name.to_string()))?;
        f(activity.value_mut())?;
        Ok(activity.clone())
    }
}

impl ActivityRepositoryPort for InMemoryActivityStore {
    fn list(&self) -> Vec<Activity> {
        self.order
            .iter()
            .filter_map(|name| self.activities.get(name).map(|a| a.clone()))
            .collect()
    }

    fn find(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|a| a.clone())
    }

    fn sign_up(&self, name: &str, email: &str) -> Result<Activity, ActivityError> {
        self.modify(name, |activity| activity.sign_up(email))
    }

    fn unregister(&self, name: &str, email: &str) -> Result<Activity, ActivityError> {
        self.modify(name, |activity| activity.unregister(email))
    }
}
