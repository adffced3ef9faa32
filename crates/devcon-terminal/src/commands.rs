//! Built-in commands: quit, help.

use devcon_types::error::{ConsoleError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the built-in commands.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(QuitCmd));
    reg.register(Box::new(HelpCmd));
}

// ---------------------------------------------------------------------------
// quit
// ---------------------------------------------------------------------------

struct QuitCmd;
impl Command for QuitCmd {
    fn name(&self) -> &str {
        "Quit"
    }
    fn token(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Quits the application"
    }
    fn help(&self) -> &str {
        "Use with no arguments to force quit the game."
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        if !args.is_empty() {
            return Err(ConsoleError::ParametersAmount);
        }
        Ok(CommandOutput::Quit)
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "Help"
    }
    fn token(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Lists commands or shows help for one"
    }
    fn help(&self) -> &str {
        "Use with no arguments to list every command, or 'help <command>' for details."
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args {
            [] => {
                let cmds = env.registry.list_commands();
                let width = cmds.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
                let mut out = format!("Commands ({}):", cmds.len());
                for (token, desc) in &cmds {
                    out.push_str(&format!("\n  {token:width$}  {desc}"));
                }
                Ok(CommandOutput::Text(out))
            },
            [token] => {
                let cmd = env
                    .registry
                    .lookup(token)
                    .ok_or(ConsoleError::NotRecognized)?;
                Ok(CommandOutput::Text(format!(
                    "{} ({})\n  {}\n  {}",
                    cmd.name(),
                    cmd.token(),
                    cmd.description(),
                    cmd.help()
                )))
            },
            _ => Err(ConsoleError::ParametersAmount),
        }
    }
}
