/// Which screen the application is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with the call to action.
    Welcome,
    /// Instructions shown before the first question.
    Intro,
    /// The question-answering flow.
    Quiz,
    /// Final score and share text.
    Results,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}
