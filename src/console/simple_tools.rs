use super::command::{CommandRes, Executable};
use crate::content::Portfolio;

pub const HELP_TEXT: &str = "Available commands:
  - about: Learn about me
  - skills: View technical skills
  - projects: List all projects
  - contact: Get contact information
  - clear: Clear terminal
  - matrix: Toggle matrix effect
  - theme: Change theme
  - exit: Close terminal";

const MATRIX_TEXT: &str = "Matrix mode toggled.";
const THEME_TEXT: &str = "Switching to the next theme.";
const TOP_SKILLS: usize = 7;
const NAMED_PROJECTS: usize = 3;

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Output(HELP_TEXT.to_string())
    }
}

/// A command whose output is fixed when the console is built.
pub struct TextCommand {
    text: String,
}

impl TextCommand {
    pub fn about(portfolio: &Portfolio) -> Self {
        Self {
            text: portfolio.profile.summary.clone(),
        }
    }

    pub fn skills(portfolio: &Portfolio) -> Self {
        let mut skills = portfolio.skills.iter().collect::<Vec<_>>();
        // stable sort keeps content order among equal proficiencies
        skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
        let names = skills
            .iter()
            .take(TOP_SKILLS)
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let text = if skills.len() > TOP_SKILLS {
            format!("{names}, and more...")
        } else {
            names
        };
        Self { text }
    }

    pub fn projects(portfolio: &Portfolio) -> Self {
        let count = portfolio.projects.len();
        let titles = portfolio
            .projects
            .iter()
            .take(NAMED_PROJECTS)
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let text = match count {
            0 => "No projects yet.".to_string(),
            n if n > NAMED_PROJECTS => format!("{n} projects including {titles}, and more."),
            n => format!("{n} projects: {titles}."),
        };
        Self { text }
    }

    pub fn contact(portfolio: &Portfolio) -> Self {
        let profile = &portfolio.profile;
        let mut parts = vec![format!("Email: {}", profile.email)];
        parts.extend(
            profile
                .socials
                .iter()
                .filter(|s| !s.url.starts_with("mailto:"))
                .map(|s| {
                    let url = s.url.trim_start_matches("https://");
                    format!("{}: {url}", s.label)
                }),
        );
        Self {
            text: parts.join(" | "),
        }
    }
}

impl Executable for TextCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Output(self.text.clone())
    }
}

pub struct ClearCommand;

impl Executable for ClearCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Clear
    }
}

pub struct ExitCommand;

impl Executable for ExitCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Exit
    }
}

pub struct MatrixCommand;

impl Executable for MatrixCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Matrix(MATRIX_TEXT.to_string())
    }
}

pub struct ThemeCommand;

impl Executable for ThemeCommand {
    fn execute(&self) -> CommandRes {
        CommandRes::Theme(THEME_TEXT.to_string())
    }
}
