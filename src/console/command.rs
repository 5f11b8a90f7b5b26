pub trait Executable: Send + Sync {
    fn execute(&self) -> CommandRes;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRes {
    /// Text appended to the history under the submitted command.
    Output(String),
    /// Empties the history.
    Clear,
    /// Closes the console overlay.
    Exit,
    /// Toggles matrix mode; the text is recorded as the command's output.
    Matrix(String),
    /// Moves to the next theme; the text is recorded as the command's output.
    Theme(String),
    /// Nothing was submitted.
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmd {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Clear,
    Matrix,
    Theme,
    Exit,
    Unknown,
}

impl From<&str> for Cmd {
    fn from(value: &str) -> Self {
        match value {
            "help" => Self::Help,
            "about" => Self::About,
            "skills" => Self::Skills,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            "clear" => Self::Clear,
            "matrix" => Self::Matrix,
            "theme" => Self::Theme,
            "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

impl Cmd {
    pub fn all() -> Vec<&'static str> {
        vec![
            "help", "about", "skills", "projects", "contact", "clear", "matrix", "theme", "exit",
        ]
    }
}
