mod question;
mod question_set;
mod record;

pub use question::{
    AcceptedAnswer, BlankFill, ErrorCorrection, Example, Matching, MultipleChoice, Question,
    QuestionBody, QuestionDataError, QuestionKind, RewriteItem, SelectCorrectWord,
    SentenceOrdering, SentenceRewrite, blank_parts,
};
pub use question_set::{QuestionSet, QuestionSetError};
