//! Activity Repository Port - 活动名单存取
//!
//! 定义活动存储的抽象接口，具体实现在 infrastructure/memory 层

use crate::domain::activity::{Activity, ActivityError};

/// Activity Repository Port
///
/// 报名与取消报名必须在单个活动的临界区内完成"检查 + 修改"，
/// 失败时名单保持不变
pub trait ActivityRepositoryPort: Send + Sync {
    /// 按目录顺序获取所有活动快照
    fn list(&self) -> Vec<Activity>;

    /// 根据名称查找活动
    fn find(&self, name: &str) -> Option<Activity>;

    /// 报名，返回修改后的活动快照
    fn sign_up(&self, name: &str, email: &str) -> Result<Activity, ActivityError>;

    /// 取消报名，返回修改后的活动快照
    fn unregister(&self, name: &str, email: &str) -> Result<Activity, ActivityError>;
}
