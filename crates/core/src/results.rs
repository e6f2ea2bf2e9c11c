use chrono::Duration;

use crate::model::QuestionKind;

/// Qualitative band for the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultBand {
    /// 70% and above.
    Excellent,
    /// 40% up to 70%.
    GoodEffort,
    /// Below 40%.
    KeepPracticing,
}

impl ResultBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            70.. => Self::Excellent,
            40..=69 => Self::GoodEffort,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::GoodEffort => "Good effort!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Points earned on a single question when it was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub kind: Option<QuestionKind>,
    pub earned: u32,
    pub available: u32,
}

/// Final tally of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    score: u32,
    max_points: u32,
    question_count: usize,
    percentage: u32,
    band: ResultBand,
    elapsed: Option<Duration>,
    outcomes: Vec<QuestionOutcome>,
}

impl QuizResults {
    #[must_use]
    pub fn new(score: u32, max_points: u32, question_count: usize) -> Self {
        let percentage = percentage(score, max_points);
        Self {
            score,
            max_points,
            question_count,
            percentage,
            band: ResultBand::from_percentage(percentage),
            elapsed: None,
            outcomes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    #[must_use]
    pub fn with_outcomes(mut self, outcomes: Vec<QuestionOutcome>) -> Self {
        self.outcomes = outcomes;
        self
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn band(&self) -> ResultBand {
        self.band
    }

    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }
}

/// Rounded percentage, half away from zero. Zero when nothing was attainable.
fn percentage(score: u32, max_points: u32) -> u32 {
    if max_points == 0 {
        return 0;
    }
    let scaled = (u64::from(score) * 200 + u64::from(max_points)) / (u64::from(max_points) * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
