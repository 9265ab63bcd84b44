//! Heuristic credit score for an address.
//!
//! Three independent factors are summed: balance (max 30), transaction count
//! (max 40) and account age (max 30). Every bracket uses a strict `>`, so an
//! account active for exactly 365 days lands in the 180-day bracket.

use crate::constants::*;
use crate::models::{RiskTier, ScoreResult};

fn bracket_points<T: Copy>(brackets: &[(T, u32)], exceeds: impl Fn(T) -> bool) -> u32 {
    brackets
        .iter()
        .find(|(threshold, _)| exceeds(*threshold))
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// 0, 10, 20 or 30 points for the balance in ether
pub fn balance_factor(balance_eth: f64) -> u32 {
    bracket_points(&BALANCE_BRACKETS, |threshold| balance_eth > threshold)
}

/// 0, 10, 20, 30 or 40 points for the number of transactions
pub fn transaction_factor(total_transactions: u64) -> u32 {
    bracket_points(&TRANSACTION_BRACKETS, |threshold| total_transactions > threshold)
}

/// 0, 10, 20 or 30 points for days between first and last activity
pub fn age_factor(days_active: f64) -> u32 {
    bracket_points(&ACCOUNT_AGE_BRACKETS, |threshold| days_active > threshold)
}

pub fn days_active(first_activity: i64, last_activity: i64) -> f64 {
    (last_activity - first_activity) as f64 / SECONDS_PER_DAY
}

pub fn risk_tier(score: u32) -> RiskTier {
    if score < HIGH_RISK_BELOW {
        RiskTier::High
    } else if score < MEDIUM_RISK_BELOW {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Score an address. With no transactions the activity timestamps are
/// meaningless and both count as 0.
pub fn score(balance_eth: f64, total_transactions: u64, first_activity: i64, last_activity: i64) -> ScoreResult {
    let (first_activity, last_activity) = if total_transactions == 0 {
        (0, 0)
    } else {
        (first_activity, last_activity)
    };

    let mut recommendations = Vec::new();

    let balance_points = balance_factor(balance_eth);
    if balance_points == 0 {
        recommendations.push(RECOMMEND_HIGHER_BALANCE.to_string());
    }

    let transaction_points = transaction_factor(total_transactions);
    if transaction_points == 0 {
        recommendations.push(RECOMMEND_MORE_ACTIVITY.to_string());
    }

    let age_points = age_factor(days_active(first_activity, last_activity));
    if age_points == 0 {
        recommendations.push(RECOMMEND_CONSISTENT_ACTIVITY.to_string());
    }

    let score = (balance_points + transaction_points + age_points).min(MAX_SCORE);

    ScoreResult {
        score,
        risk_tier: risk_tier(score),
        recommendations,
    }
}
