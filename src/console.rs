mod command;
mod simple_tools;

pub use command::CommandRes;
pub use simple_tools::HELP_TEXT;

use std::collections::{HashMap, VecDeque};

use command::{Cmd, Executable};
use simple_tools::{
    ClearCommand, ExitCommand, HelpCommand, MatrixCommand, TextCommand, ThemeCommand,
};

use crate::content::Portfolio;

static RECALL_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
}

/// The command console behind the Ctrl+` overlay.
///
/// Input is trimmed and lower-cased, then looked up in a fixed command table.
/// The output history is only emptied by `clear`; it is never truncated.
pub struct Console {
    history: Vec<HistoryEntry>,
    inputs: VecDeque<String>,
    commands: HashMap<Cmd, Box<dyn Executable>>,
}

impl Console {
    pub fn new(portfolio: &Portfolio) -> Self {
        let mut console = Self {
            history: Vec::new(),
            inputs: VecDeque::new(),
            commands: HashMap::new(),
        };
        console.initialize_commands(portfolio);
        console
    }

    fn initialize_commands(&mut self, portfolio: &Portfolio) {
        self.commands.insert(Cmd::Help, Box::new(HelpCommand));
        self.commands
            .insert(Cmd::About, Box::new(TextCommand::about(portfolio)));
        self.commands
            .insert(Cmd::Skills, Box::new(TextCommand::skills(portfolio)));
        self.commands
            .insert(Cmd::Projects, Box::new(TextCommand::projects(portfolio)));
        self.commands
            .insert(Cmd::Contact, Box::new(TextCommand::contact(portfolio)));

        // Directives handled by the page
        self.commands.insert(Cmd::Clear, Box::new(ClearCommand));
        self.commands.insert(Cmd::Exit, Box::new(ExitCommand));
        self.commands.insert(Cmd::Matrix, Box::new(MatrixCommand));
        self.commands.insert(Cmd::Theme, Box::new(ThemeCommand));
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn handle_command(&mut self, input: &str) -> CommandRes {
        let cmd_text = input.trim().to_lowercase();
        if cmd_text.is_empty() {
            return CommandRes::Nothing;
        }
        self.inputs.push_back(cmd_text.clone());
        if self.inputs.len() > RECALL_SIZE {
            self.inputs.pop_front();
        }

        let res = match self.commands.get(&Cmd::from(cmd_text.as_str())) {
            Some(command) => command.execute(),
            None => CommandRes::Output(format!(
                "command not found: {cmd_text}. Type 'help' for available commands."
            )),
        };

        match &res {
            CommandRes::Output(text) | CommandRes::Matrix(text) | CommandRes::Theme(text) => {
                self.history.push(HistoryEntry {
                    command: cmd_text,
                    output: text.clone(),
                });
            }
            CommandRes::Clear => self.history.clear(),
            CommandRes::Exit | CommandRes::Nothing => {}
        }
        res
    }

    /// Previously submitted inputs starting with `input`, oldest first.
    pub fn handle_start_recall(&self, input: &str) -> Vec<String> {
        let prefix = input.trim().to_lowercase();
        self.inputs
            .iter()
            .filter(|s| s.starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Command names starting with `input`, for tab completion.
    pub fn handle_start_tab(&self, input: &str) -> Vec<&'static str> {
        let prefix = input.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        let mut opts = Cmd::all()
            .into_iter()
            .filter(|s| s.starts_with(&prefix))
            .collect::<Vec<_>>();
        opts.sort();
        opts
    }
}
