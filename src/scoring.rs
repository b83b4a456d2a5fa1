//! Lead scoring, out of 10 points.
//!
//! | dimension | source field | points |
//! |---|---|---|
//! | life situation | `profile` | 0-2 |
//! | blocker | `freno` | 0-2 |
//! | discomfort | `satisfaction` (1 = none, 5 = heavy) | 0-2 |
//! | time horizon | `intent` | 0-3 |
//! | ownership duration | `purchaseRange` | 0-1 |
//!
//! `analysisCommitment` only qualifies the follow-up call and does not score.
//! Options that carry no signal score 0; nothing subtracts points.

use crate::models::{
    Blocker, Category, Intent, Profile, PurchaseRange, ScoreResult, WizardAnswers,
};
use serde::Serialize;

/// Upper bound of the interest score.
pub const MAX_SCORE: u8 = 10;

/// Answer dimension contributing to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    LifeSituation,
    Blocker,
    Discomfort,
    TimeHorizon,
    OwnershipDuration,
}

/// Points awarded by one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub dimension: Dimension,
    pub points: u8,
}

/// Per-dimension points behind a score, kept for sales triage logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    /// Sum of all components before clamping.
    pub fn raw_total(&self) -> u32 {
        self.components.iter().map(|c| u32::from(c.points)).sum()
    }

    /// Clamped score and its category.
    pub fn result(&self) -> ScoreResult {
        let score = self.raw_total().min(u32::from(MAX_SCORE)) as u8;
        ScoreResult {
            score,
            category: Category::from_score(score),
        }
    }
}

/// Scores a validated submission.
pub fn compute_score(answers: &WizardAnswers) -> ScoreResult {
    score_breakdown(answers).result()
}

/// Point contributions of every dimension, in table order.
pub fn score_breakdown(answers: &WizardAnswers) -> ScoreBreakdown {
    ScoreBreakdown {
        components: vec![
            ScoreComponent {
                dimension: Dimension::LifeSituation,
                points: profile_points(answers.profile),
            },
            ScoreComponent {
                dimension: Dimension::Blocker,
                points: answers.freno.map_or(0, blocker_points),
            },
            ScoreComponent {
                dimension: Dimension::Discomfort,
                points: discomfort_points(answers.satisfaction),
            },
            ScoreComponent {
                dimension: Dimension::TimeHorizon,
                points: intent_points(answers.intent),
            },
            ScoreComponent {
                dimension: Dimension::OwnershipDuration,
                points: ownership_points(answers.purchase_range),
            },
        ],
    }
}

/// High-urgency life situations score more.
pub fn profile_points(profile: Profile) -> u8 {
    match profile {
        Profile::InheritedProperty
        | Profile::TiredLandlord
        | Profile::VacantWithCosts
        | Profile::FamilyMatter => 2,
        Profile::LifeChangeBlocked | Profile::LockedCapital => 1,
        Profile::ValuationOnly => 0,
    }
}

/// The more concrete the blocker (and the easier for an agency to remove),
/// the more it scores.
pub fn blocker_points(blocker: Blocker) -> u8 {
    match blocker {
        Blocker::UnknownValue => 2,
        Blocker::UnsureTiming | Blocker::FearOfRegret | Blocker::Paperwork => 1,
        // slower process / low urgency
        Blocker::FamilyDisagreement | Blocker::JustBrowsing => 0,
    }
}

/// Discomfort scale: 1 means the property does not weigh on the owner,
/// 5 means heavy stress or cost.
pub fn discomfort_points(satisfaction: u8) -> u8 {
    match satisfaction {
        4..=5 => 2,
        3 => 1,
        _ => 0,
    }
}

pub fn intent_points(intent: Intent) -> u8 {
    match intent {
        Intent::WithinSixMonths => 3,
        Intent::SixToTwelveMonths => 2,
        Intent::TwelveToTwentyFourMonths | Intent::NotSure => 1,
        Intent::Later => 0,
    }
}

/// Long ownership means accumulated gains and more motivation to act.
pub fn ownership_points(range: PurchaseRange) -> u8 {
    match range {
        PurchaseRange::OverTwentyYears
        | PurchaseRange::TenToTwentyYears
        | PurchaseRange::Inherited => 1,
        PurchaseRange::UnderFiveYears | PurchaseRange::FiveToTenYears => 0,
    }
}
