#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session refused an action, e.g. a second multiple-choice pick.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Rejected => "That action isn't available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
