//! 评分校验
//!
//! 分数范围固定为 [0, 100]；重新评分直接替换原成绩。

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::errors::{CourseworkError, Result};
use crate::models::grades::entities::{Grade, GradeBand};
use crate::models::submissions::entities::Submission;
use crate::utils::non_blank;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// 解析表单传入的分数，接受数字和数字字符串
pub fn parse_score(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|s| s.is_finite())
        .ok_or_else(|| CourseworkError::score_missing(format!("无效的分数: {value}")))
}

/// 校验分数存在且在范围内
pub fn validate_score(score: Option<f64>) -> Result<f64> {
    let score = score
        .filter(|s| !s.is_nan())
        .ok_or_else(|| CourseworkError::score_missing("请填写分数"))?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CourseworkError::score_out_of_range(format!(
            "分数必须在 {MIN_SCORE} 到 {MAX_SCORE} 之间: {score}"
        )));
    }

    Ok(score)
}

/// 生成带新成绩的提交副本，原提交不变
pub fn apply_grade(
    submission: &Submission,
    score: Option<f64>,
    comment: Option<String>,
    grader_id: i64,
    now: DateTime<Utc>,
) -> Result<Submission> {
    let score = validate_score(score)?;

    Ok(Submission {
        grade: Some(Grade {
            score,
            graded_at: now,
            grader_id,
            comment: non_blank(comment),
        }),
        ..submission.clone()
    })
}

/// 展示用的成绩标签
pub fn grade_band(score: f64, passing_score: f64) -> GradeBand {
    if score >= passing_score {
        GradeBand::Approved
    } else {
        GradeBand::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submissions::status::tests::{at, submission};
    use serde_json::json;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(&json!(85)).unwrap(), 85.0);
        assert_eq!(parse_score(&json!(72.5)).unwrap(), 72.5);
        assert_eq!(parse_score(&json!(" 90 ")).unwrap(), 90.0);
        assert_eq!(parse_score(&json!("abc")).unwrap_err().code(), "E003");
        assert_eq!(parse_score(&json!(null)).unwrap_err().code(), "E003");
        assert_eq!(parse_score(&json!(true)).unwrap_err().code(), "E003");
        assert_eq!(parse_score(&json!("NaN")).unwrap_err().code(), "E003");
    }

    #[test]
    fn test_score_bounds() {
        for ok in [0.0, 70.0, 100.0] {
            assert_eq!(validate_score(Some(ok)).unwrap(), ok);
        }
        assert_eq!(validate_score(Some(-1.0)).unwrap_err().code(), "E002");
        assert_eq!(validate_score(Some(101.0)).unwrap_err().code(), "E002");
        assert_eq!(validate_score(None).unwrap_err().code(), "E003");
    }

    #[test]
    fn test_apply_grade_replaces_previous() {
        let sent = submission(Some(at("2025-03-05T10:00:00Z")));

        let first = apply_grade(&sent, Some(60.0), None, 1, at("2025-03-06T10:00:00Z")).unwrap();
        let second = apply_grade(
            &first,
            Some(85.0),
            Some("  Much better ".to_string()),
            2,
            at("2025-03-07T10:00:00Z"),
        )
        .unwrap();

        let grade = second.grade.unwrap();
        assert_eq!(grade.score, 85.0);
        assert_eq!(grade.grader_id, 2);
        assert_eq!(grade.graded_at, at("2025-03-07T10:00:00Z"));
        assert_eq!(grade.comment.as_deref(), Some("Much better"));
        assert!(sent.grade.is_none());
    }

    #[test]
    fn test_invalid_grade_leaves_submission() {
        let sent = submission(Some(at("2025-03-05T10:00:00Z")));
        let err = apply_grade(&sent, Some(101.0), None, 1, at("2025-03-06T10:00:00Z")).unwrap_err();
        assert!(err.is_validation());
        assert!(sent.grade.is_none());
    }

    #[test]
    fn test_grade_band() {
        assert_eq!(grade_band(70.0, 70.0), GradeBand::Approved);
        assert_eq!(grade_band(69.9, 70.0), GradeBand::NeedsImprovement);
        assert_eq!(grade_band(0.0, 70.0), GradeBand::NeedsImprovement);
    }
}
