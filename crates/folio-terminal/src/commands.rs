//! Built-in commands: help, banner, about, projects, contact, clear.

use folio_types::config::ShellConfig;
use folio_types::content::ContentSource;

use crate::interpreter::{CLEAR_COMMAND, Command, CommandOutput, CommandRegistry};
use crate::output::{LinkBlock, OutputLine};

/// Register every built-in command, in the order they are listed by `help`.
pub fn register_builtins(reg: &mut CommandRegistry, config: &ShellConfig) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(BannerCmd {
        step_ms: config.banner_step_ms,
    }));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ClearCmd));
}

fn lines(text: &[&str]) -> Vec<OutputLine> {
    text.iter().map(|s| OutputLine::text(*s)).collect()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

const HELP_TABLES: &[&str] = &[
    "┌─────────────────────────────────────────────────────────────┐",
    "│  COMMAND          │  DESCRIPTION                           │",
    "├───────────────────┼─────────────────────────────────────────┤",
    "│  help             │  Show this help menu                   │",
    "│  banner           │  Display the welcome banner            │",
    "│  about            │  Learn about me                        │",
    "│  projects         │  View my projects                      │",
    "│  contact          │  Get my contact information            │",
    "│  clear            │  Clear the terminal                    │",
    "└─────────────────────────────────────────────────────────────┘",
    "",
    "┌─────────────────────────────────────────────────────────────┐",
    "│  SHORTCUT         │  ACTION                                │",
    "├───────────────────┼─────────────────────────────────────────┤",
    "│  Tab              │  Auto-complete command                 │",
    "│  ↑ / ↓            │  Navigate command history              │",
    "│  Esc / Ctrl+C     │  Clear current input                   │",
    "│  Enter            │  Execute command                       │",
    "│  F1 - F6          │  Run a quick command                   │",
    "└─────────────────────────────────────────────────────────────┘",
];

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help menu"
    }
    fn execute(&self, _content: &ContentSource) -> CommandOutput {
        CommandOutput::Lines(lines(HELP_TABLES))
    }
}

// ---------------------------------------------------------------------------
// banner
// ---------------------------------------------------------------------------

struct BannerCmd {
    step_ms: u64,
}
impl Command for BannerCmd {
    fn name(&self) -> &str {
        "banner"
    }
    fn description(&self) -> &str {
        "Display the welcome banner"
    }
    fn execute(&self, content: &ContentSource) -> CommandOutput {
        let out = content
            .ascii
            .iter()
            .enumerate()
            .map(|(i, line)| OutputLine::banner(line.clone(), i as u64 * self.step_ms))
            .collect();
        CommandOutput::Lines(out)
    }
}

// ---------------------------------------------------------------------------
// about / projects / contact
// ---------------------------------------------------------------------------

const RULE: &str = "───────────────────────────────────────────────────────────────";

fn header(title: &str) -> Vec<OutputLine> {
    vec![
        OutputLine::text("╔══════════════════════════════════════════════════════════════╗"),
        OutputLine::text(format!("║  {title:<60}║")),
        OutputLine::text("╚══════════════════════════════════════════════════════════════╝"),
        OutputLine::text(""),
    ]
}

fn social_block(content: &ContentSource) -> OutputLine {
    OutputLine::links(LinkBlock::Social(content.social.as_slice().to_vec()))
}

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn execute(&self, content: &ContentSource) -> CommandOutput {
        let mut out = header("ABOUT");
        out.push(OutputLine::text(content.identity.greeting.clone()));
        out.extend(lines(&[
            "",
            "I build things with code, write about emerging tech, and help",
            "developers ship products faster. Currently focused on AI, Web3,",
            "and the future of developer tooling.",
            "",
            RULE,
            "",
        ]));
        out.push(social_block(content));
        CommandOutput::Lines(out)
    }
}

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "View my projects"
    }
    fn execute(&self, content: &ContentSource) -> CommandOutput {
        let mut out = header("PROJECTS");
        out.push(OutputLine::links(LinkBlock::Projects(content.projects.clone())));
        CommandOutput::Lines(out)
    }
}

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get my contact information"
    }
    fn execute(&self, content: &ContentSource) -> CommandOutput {
        let mut out = header("CONTACT");
        out.extend(lines(&[
            "Feel free to reach out! I'm always happy to chat about new",
            "projects, collaborations, or just to say hello.",
            "",
        ]));
        out.push(social_block(content));
        CommandOutput::Lines(out)
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

/// Registered so completion and `help` see it; the interpreter handles the
/// reset itself.
struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        CLEAR_COMMAND
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn execute(&self, _content: &ContentSource) -> CommandOutput {
        CommandOutput::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Interpreter, ResolvedAction};
    use crate::output::{LineContent, LineKind};
    use folio_types::content::{Identity, Project, SocialEntry, SocialLinks};

    fn content() -> ContentSource {
        ContentSource {
            identity: Identity {
                username: "ada".into(),
                hostname: "engine".into(),
                greeting: "Hello, I'm Ada.".into(),
            },
            ascii: vec!["#####".into(), "#   #".into(), "#####".into()],
            social: SocialLinks::new(vec![
                SocialEntry {
                    platform: "github".into(),
                    handle: "ada".into(),
                },
                SocialEntry {
                    platform: "email".into(),
                    handle: "ada@example.com".into(),
                },
            ]),
            projects: vec![
                Project {
                    name: "one".into(),
                    description: "first".into(),
                    link: "https://example.com/1".into(),
                },
                Project {
                    name: "two".into(),
                    description: "second".into(),
                    link: "https://example.com/2".into(),
                },
            ],
        }
    }

    fn interp() -> Interpreter {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &ShellConfig::default());
        Interpreter::new(reg, content())
    }

    fn run(name: &str) -> Vec<OutputLine> {
        match interp().resolve(name) {
            ResolvedAction::Dispatch(e) => e.output,
            other => panic!("expected dispatch for {name}, got {other:?}"),
        }
    }

    #[test]
    fn builtins_registered_in_order() {
        let i = interp();
        assert_eq!(
            i.registry().names(),
            ["help", "banner", "about", "projects", "contact", "clear"]
        );
    }

    #[test]
    fn help_is_two_tables() {
        let out = run("help");
        assert_eq!(out.len(), HELP_TABLES.len());
        assert!(out.iter().all(|l| l.kind == LineKind::Text));
        let blanks = out
            .iter()
            .filter(|l| l.content.as_text() == Some(""))
            .count();
        assert_eq!(blanks, 1);
    }

    #[test]
    fn help_lists_every_command() {
        let out = run("help");
        let text: Vec<&str> = out.iter().filter_map(|l| l.content.as_text()).collect();
        for name in interp().registry().names() {
            assert!(
                text.iter().any(|l| l.contains(&format!("│  {name} "))),
                "help is missing {name}"
            );
        }
    }

    #[test]
    fn banner_delays_step_by_forty() {
        let out = run("banner");
        assert_eq!(out.len(), 3);
        let delays: Vec<Option<u64>> = out.iter().map(|l| l.reveal_delay_ms).collect();
        assert_eq!(delays, [Some(0), Some(40), Some(80)]);
        assert!(out.iter().all(|l| l.kind == LineKind::Banner));
        assert_eq!(out[1].content.as_text(), Some("#   #"));
    }

    #[test]
    fn banner_step_follows_config() {
        let mut reg = CommandRegistry::new();
        let config = ShellConfig {
            banner_step_ms: 5,
            ..ShellConfig::default()
        };
        register_builtins(&mut reg, &config);
        let i = Interpreter::new(reg, content());
        let entry = i.startup_entry();
        assert_eq!(entry.output[2].reveal_delay_ms, Some(10));
    }

    #[test]
    fn about_ends_with_social_block_in_order() {
        let out = run("about");
        assert_eq!(out[4].content.as_text(), Some("Hello, I'm Ada."));
        let last = out.last().unwrap();
        assert_eq!(last.kind, LineKind::LinkBlock);
        match &last.content {
            LineContent::Links(LinkBlock::Social(entries)) => {
                let names: Vec<&str> = entries.iter().map(|e| e.platform.as_str()).collect();
                assert_eq!(names, ["github", "email"]);
            },
            other => panic!("expected social block, got {other:?}"),
        }
    }

    #[test]
    fn header_is_boxed_title() {
        let out = run("projects");
        assert_eq!(
            out[1].content.as_text(),
            Some("║  PROJECTS                                                    ║")
        );
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn projects_block_keeps_order() {
        let out = run("projects");
        match &out.last().unwrap().content {
            LineContent::Links(LinkBlock::Projects(p)) => {
                assert_eq!(p.len(), 2);
                assert_eq!(p[0].name, "one");
                assert_eq!(p[1].name, "two");
            },
            other => panic!("expected projects block, got {other:?}"),
        }
    }

    #[test]
    fn contact_uses_same_social_data_as_about() {
        let about = run("about");
        let contact = run("contact");
        assert_eq!(about.last(), contact.last());
        assert_ne!(about.len(), contact.len());
    }

    #[test]
    fn clear_builtin_resets() {
        assert_eq!(interp().resolve("clear"), ResolvedAction::Reset);
    }

    #[test]
    fn startup_entry_is_banner() {
        let e = interp().startup_entry();
        assert!(!e.has_command());
        assert_eq!(e.output.len(), 3);
        assert_eq!(e.output, run("banner"));
    }

    #[test]
    fn empty_content_still_renders() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &ShellConfig::default());
        let i = Interpreter::new(reg, ContentSource::default());
        let ResolvedAction::Dispatch(e) = i.resolve("banner") else {
            panic!("expected dispatch");
        };
        assert!(e.output.is_empty());
        assert!(matches!(i.resolve("projects"), ResolvedAction::Dispatch(_)));
    }
}
