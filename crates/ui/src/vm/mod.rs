mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{IntentEffect, QuizIntent, QuizScreen, QuizVm};
pub use time_fmt::format_elapsed;
