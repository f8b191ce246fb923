//! Activity Commands - 报名相关命令

/// 报名命令 - 教师为学生报名
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub activity_name: String,
    pub email: String,
    /// 执行操作的教师用户名
    pub teacher: String,
}

/// 报名响应
#[derive(Debug, Clone)]
pub struct SignUpResponse {
    pub message: String,
    pub participant_count: usize,
}

/// 取消报名命令
#[derive(Debug, Clone)]
pub struct UnregisterCommand {
    pub activity_name: String,
    pub email: String,
    pub teacher: String,
}

/// 取消报名响应
#[derive(Debug, Clone)]
pub struct UnregisterResponse {
    pub message: String,
    pub participant_count: usize,
}
