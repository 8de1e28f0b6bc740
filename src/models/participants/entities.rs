use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程成员角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/participant.ts")]
pub enum ParticipantRole {
    Teacher, // 教师（课程创建者）
    Parent,  // 家长
    Student, // 学生
}

impl ParticipantRole {
    pub const TEACHER: &'static str = "teacher";
    pub const PARENT: &'static str = "parent";
    pub const STUDENT: &'static str = "student";

    /// 是否需要完成作业
    pub fn is_learner(&self) -> bool {
        !matches!(self, ParticipantRole::Teacher)
    }
}

impl<'de> Deserialize<'de> for ParticipantRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的成员角色: '{s}'. 支持的角色: teacher, parent, student"
            ))
        })
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Teacher => write!(f, "{}", Self::TEACHER),
            ParticipantRole::Parent => write!(f, "{}", Self::PARENT),
            ParticipantRole::Student => write!(f, "{}", Self::STUDENT),
        }
    }
}

impl std::str::FromStr for ParticipantRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::TEACHER => Ok(ParticipantRole::Teacher),
            Self::PARENT => Ok(ParticipantRole::Parent),
            Self::STUDENT => Ok(ParticipantRole::Student),
            _ => Err(format!("Invalid participant role: {s}")),
        }
    }
}

/// 名册协作方返回的课程成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/participant.ts")]
pub struct Participant {
    pub user_id: i64,
    pub display_name: String,
    pub role: ParticipantRole,
}
