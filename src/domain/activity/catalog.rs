//! 初始活动目录
//!
//! 服务启动时用于填充内存活动表，顺序即列表返回顺序

use super::{Activity, ActivityError};

/// (名称, 描述, 时间安排, 最大人数, 初始报名学生)
type CatalogEntry = (
    &'static str,
    &'static str,
    &'static str,
    usize,
    [&'static str; 2],
);

const CATALOG: &[CatalogEntry] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        ["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        ["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        ["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        ["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        ["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        ["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// 构建默认活动列表
pub fn default_activities() -> Result<Vec<Activity>, ActivityError> {
    CATALOG
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            Activity::with_participants(*name, *description, *schedule, *max, *participants)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let activities = default_activities().unwrap();
        assert_eq!(activities.len(), 9);
        assert_eq!(activities[0].name(), "Chess Club");
        assert_eq!(activities[8].name(), "Debate Team");
    }

    #[test]
    fn test_chess_club_seed() {
        let activities = default_activities().unwrap();
        let chess = activities.iter().find(|a| a.name() == "Chess Club").unwrap();

        assert_eq!(chess.max_participants(), 12);
        assert_eq!(
            chess.participants(),
            &["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_catalog_names_unique() {
        let activities = default_activities().unwrap();
        let mut names: Vec<&str> = activities.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), activities.len());
    }
}
