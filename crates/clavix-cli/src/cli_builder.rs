//! CLI argument parsing and command building
//!
//! Builds the clap command tree. Parsing stays here; behavior lives in the
//! command handlers.

use clap::{Arg, ArgAction, Command};

/// Build the main CLI command structure
pub fn build_cli() -> Command {
    Command::new("clavix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffolds AI slash commands and optimizes prompts before you spend tokens on them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("init")
                .about("Initialize a .clavix/ workspace and generate slash commands")
                .arg(
                    Arg::new("targets")
                        .short('t')
                        .long("targets")
                        .value_name("TOOLS")
                        .help("Comma-separated tool tags (claude,cursor,copilot,windsurf,gemini,codex)")
                        .required(false),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the interactive menu; use detected tools or the default")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("optimize")
                .about("Run a prompt through the optimization pipeline")
                .arg(
                    Arg::new("prompt")
                        .help("Prompt text (omit when using --file)")
                        .required(false),
                )
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Read the prompt from a file")
                        .required(false),
                )
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("fast, deep, prd or conversational (default from config)")
                        .required(false),
                )
                .arg(
                    Arg::new("intent")
                        .long("intent")
                        .value_name("INTENT")
                        .help("Force an intent category instead of detecting one")
                        .required(false),
                )
                .arg(
                    Arg::new("no-save")
                        .long("no-save")
                        .help("Do not write a prompt record")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("prd")
                .about("Validate one PRD interview answer")
                .arg(Arg::new("answer").help("The answer text").required(true))
                .arg(
                    Arg::new("question")
                        .short('q')
                        .long("question")
                        .value_name("ID")
                        .help("Question id (q1..q5)")
                        .default_value("q1"),
                ),
        )
        .subcommand(Command::new("status").about("Show workspace, task and session status"))
        .subcommand(
            Command::new("update")
                .about("Regenerate slash-command files for the configured targets"),
        )
        .subcommand(
            Command::new("tasks")
                .about("List or edit the .clavix/tasks.md checklist")
                .arg(
                    Arg::new("add")
                        .long("add")
                        .value_name("TEXT")
                        .help("Append a new open task")
                        .required(false),
                )
                .arg(
                    Arg::new("done")
                        .long("done")
                        .value_name("LINE")
                        .help("Toggle the task at the given line number")
                        .required(false),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optimize_invocation() {
        let matches = build_cli()
            .try_get_matches_from(["clavix", "optimize", "Build a login page", "--mode", "deep"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "optimize");
        assert_eq!(sub.get_one::<String>("mode").unwrap(), "deep");
    }

    #[test]
    fn prd_requires_an_answer() {
        assert!(build_cli().try_get_matches_from(["clavix", "prd"]).is_err());
        let matches = build_cli()
            .try_get_matches_from(["clavix", "prd", "idk", "-q", "q2"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("question").unwrap(), "q2");
    }

    #[test]
    fn bare_invocation_is_an_error() {
        assert!(build_cli().try_get_matches_from(["clavix"]).is_err());
    }
}
