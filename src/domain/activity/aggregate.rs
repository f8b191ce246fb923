//! Activity Context - Aggregate Root

use serde::Serialize;

use super::ActivityError;

/// Activity 聚合根
///
/// 不变量:
/// - max_participants > 0
/// - participants.len() <= max_participants
/// - participants 中不存在重复邮箱，顺序即报名顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Vec<String>,
}

impl Activity {
    /// 创建空名单的活动
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Result<Self, ActivityError> {
        if max_participants == 0 {
            return Err(ActivityError::InvalidCapacity);
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        })
    }

    /// 创建带初始名单的活动，初始名单同样经过报名校验
    pub fn with_participants<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: I,
    ) -> Result<Self, ActivityError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut activity = Self::new(name, description, schedule, max_participants)?;
        for email in participants {
            activity.sign_up(email)?;
        }
        Ok(activity)
    }

    /// 报名
    ///
    /// 先检查容量，再检查重复；任一失败时名单不变
    pub fn sign_up(&mut self, email: impl Into<String>) -> Result<(), ActivityError> {
        let email = email.into();

        if self.is_full() {
            return Err(ActivityError::AtCapacity);
        }
        if self.has_participant(&email) {
            return Err(ActivityError::AlreadySignedUp);
        }

        self.participants.push(email);
        Ok(())
    }

    /// 取消报名，只移除一次出现
    pub fn unregister(&mut self, email: &str) -> Result<(), ActivityError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::NotSignedUp)?;

        self.participants.remove(position);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// 剩余名额
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }
}
