use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Matching;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of picking a right-column item while a left item is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pair is correct and is now locked in.
    Matched { left: usize, right: usize },
    /// The pair is wrong; the board is unchanged apart from transient feedback.
    Mismatched { left: usize, position: usize },
    /// Nothing to check: no left item selected, or the item is already locked.
    Ignored,
}

/// Transient highlight on a right-column position after a pairing attempt.
///
/// `seq` identifies the attempt so a delayed clear never removes newer feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFeedback {
    pub position: usize,
    pub correct: bool,
    pub seq: u64,
}

//
// ─── BOARD ─────────────────────────────────────────────────────────────────────
//

/// Answer buffer for a matching question.
///
/// Right-column items are displayed in `order`: display position `p` shows original
/// right item `order[p]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingBoard {
    order: Vec<usize>,
    selected_left: Option<usize>,
    completed: Vec<usize>,
    feedback: Option<MatchFeedback>,
    feedback_seq: u64,
}

impl MatchingBoard {
    /// Build a board with a freshly shuffled right column.
    pub fn shuffled<R: Rng + ?Sized>(question: &Matching, rng: &mut R) -> Self {
        Self::with_order(shuffled_order(question.right.len(), rng))
    }

    /// Build a board with a fixed display order. `order` must be a permutation.
    #[must_use]
    pub fn with_order(order: Vec<usize>) -> Self {
        Self {
            order,
            selected_left: None,
            completed: Vec::new(),
            feedback: None,
            feedback_seq: 0,
        }
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn selected_left(&self) -> Option<usize> {
        self.selected_left
    }

    /// Left items paired so far, in the order they were matched.
    #[must_use]
    pub fn completed(&self) -> &[usize] {
        &self.completed
    }

    #[must_use]
    pub fn feedback(&self) -> Option<MatchFeedback> {
        self.feedback
    }

    #[must_use]
    pub fn is_left_locked(&self, left: usize) -> bool {
        self.completed.contains(&left)
    }

    /// The left item locked to the right item shown at `position`, if any.
    #[must_use]
    pub fn matched_left_for(&self, question: &Matching, position: usize) -> Option<usize> {
        let right = *self.order.get(position)?;
        self.completed
            .iter()
            .copied()
            .find(|&left| question.is_pair(left, right))
    }

    #[must_use]
    pub fn is_complete(&self, question: &Matching) -> bool {
        self.completed.len() == question.left.len()
    }

    /// Select a left item. Locked items and out-of-range indices are ignored.
    pub fn select_left(&mut self, question: &Matching, left: usize) -> bool {
        if left >= question.left.len() || self.is_left_locked(left) {
            return false;
        }
        self.selected_left = Some(left);
        true
    }

    /// Try pairing the selected left item with the right item at display `position`.
    pub fn select_right(&mut self, question: &Matching, position: usize) -> MatchOutcome {
        let Some(left) = self.selected_left else {
            return MatchOutcome::Ignored;
        };
        let Some(&right) = self.order.get(position) else {
            return MatchOutcome::Ignored;
        };
        if self.is_left_locked(left) || self.matched_left_for(question, position).is_some() {
            return MatchOutcome::Ignored;
        }

        self.feedback_seq += 1;
        if question.is_pair(left, right) {
            self.completed.push(left);
            self.selected_left = None;
            self.feedback = Some(MatchFeedback {
                position,
                correct: true,
                seq: self.feedback_seq,
            });
            MatchOutcome::Matched { left, right }
        } else {
            self.feedback = Some(MatchFeedback {
                position,
                correct: false,
                seq: self.feedback_seq,
            });
            MatchOutcome::Mismatched { left, position }
        }
    }

    /// Clear the feedback highlight if it still belongs to attempt `seq`.
    pub fn clear_feedback(&mut self, seq: u64) -> bool {
        if self.feedback.is_some_and(|feedback| feedback.seq == seq) {
            self.feedback = None;
            return true;
        }
        false
    }
}

/// Uniform shuffle of `0..len` over the non-identity orders.
///
/// With two or more items the shuffle is re-rolled until the right column no longer
/// mirrors the left.
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    while len > 1 && is_identity(&order) {
        order.shuffle(rng);
    }
    order
}

fn is_identity(order: &[usize]) -> bool {
    order.iter().enumerate().all(|(position, &index)| position == index)
}
