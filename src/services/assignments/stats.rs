use std::collections::HashMap;

use tracing::debug;

use super::AssignmentService;
use super::detail::obligors_from_roster;
use crate::errors::Result;
use crate::models::assignments::responses::{
    AssignmentStatsResponse, PendingParticipant, ScoreRange, ScoreStats,
};
use crate::models::submissions::entities::Submission;
use crate::services::grades::validate::MAX_SCORE;
use crate::services::submissions::status::resolve_assignment_state;

/// 分数区间，按从高到低排列
const SCORE_BANDS: [(&str, f64); 5] = [
    ("90-100", 90.0),
    ("80-89", 80.0),
    ("70-79", 70.0),
    ("60-69", 60.0),
    ("0-59", f64::NEG_INFINITY),
];

pub async fn assignment_stats(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<AssignmentStatsResponse> {
    let ctx = service.context();
    let assignment = ctx.load_assignment(assignment_id).await?;

    let (participants, submissions) = futures_util::try_join!(
        ctx.roster.roster(assignment.course_id),
        ctx.storage.list_assignment_submissions(assignment_id)
    )?;

    let obligors = obligors_from_roster(&assignment, &participants);
    let total_obligors = obligors.len() as i64;

    // 只统计义务人的已提交记录，并为每个成员只保留最新一次
    let mut latest: HashMap<i64, &Submission> = HashMap::new();
    for submission in &submissions {
        if !obligors.contains(&submission.submitter_id) || !submission.is_sent() {
            continue;
        }
        let entry = latest.entry(submission.submitter_id).or_insert(submission);
        if (submission.created_at, submission.id) > (entry.created_at, entry.id) {
            *entry = submission;
        }
    }

    let submitted_count = latest.len() as i64;
    let on_time_count = latest
        .values()
        .filter(|s| s.created_at.is_some_and(|at| at <= assignment.deadline))
        .count() as i64;
    let late_count = submitted_count - on_time_count;

    let scores: Vec<f64> = latest
        .values()
        .filter_map(|s| s.grade.as_ref().map(|g| g.score))
        .collect();
    let graded_count = scores.len() as i64;
    let passing_score = ctx.config.grading.passing_score;
    let passing_count = scores.iter().filter(|&&s| s >= passing_score).count() as i64;

    // 计算分数统计
    let score_stats = if !scores.is_empty() {
        let sum: f64 = scores.iter().sum();
        let average = sum / scores.len() as f64;
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        Some(ScoreStats {
            average: round2(average),
            max,
            min,
        })
    } else {
        None
    };

    let score_distribution = calculate_score_distribution(&scores, MAX_SCORE);

    // 计算提交率
    let submission_rate = if total_obligors > 0 {
        round2(submitted_count as f64 / total_obligors as f64 * 100.0)
    } else {
        0.0
    };

    // 未提交成员，按名册顺序
    let pending_participants: Vec<PendingParticipant> = participants
        .iter()
        .filter(|p| obligors.contains(&p.user_id) && !latest.contains_key(&p.user_id))
        .map(|p| PendingParticipant {
            user_id: p.user_id,
            display_name: p.display_name.clone(),
        })
        .collect();

    debug!(
        "Assignment {} stats: {}/{} submitted, {} graded",
        assignment_id, submitted_count, total_obligors, graded_count
    );

    Ok(AssignmentStatsResponse {
        assignment_id,
        state: resolve_assignment_state(&assignment, ctx.now()),
        total_obligors,
        submitted_count,
        on_time_count,
        late_count,
        graded_count,
        passing_count,
        submission_rate,
        score_stats,
        score_distribution,
        pending_participants,
    })
}

/// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 计算分数分布
fn calculate_score_distribution(scores: &[f64], max_score: f64) -> Vec<ScoreRange> {
    if max_score <= 0.0 {
        return vec![];
    }

    let mut counts = [0i64; SCORE_BANDS.len()];
    for &score in scores {
        // 将分数换算为百分比后分组
        let percentage = (score / max_score) * 100.0;
        if let Some(index) = SCORE_BANDS
            .iter()
            .position(|(_, lower)| percentage >= *lower)
        {
            counts[index] += 1;
        }
    }

    SCORE_BANDS
        .iter()
        .zip(counts)
        .map(|((range, _), count)| ScoreRange {
            range: range.to_string(),
            count,
        })
        .collect()
}
