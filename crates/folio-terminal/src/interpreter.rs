//! Command trait, registry, and dispatch logic.
//!
//! Input is never tokenized: the whole trimmed, lower-cased line is the
//! lookup key. Unknown commands are an ordinary outcome that produces an
//! error line, not a Rust error.

use folio_types::content::ContentSource;

use crate::history::{HistoryEntry, HistoryStore};
use crate::output::OutputLine;

/// Name of the command that wipes the transcript.
pub const CLEAR_COMMAND: &str = "clear";

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Lines to append to the transcript.
    Lines(Vec<OutputLine>),
    /// Signal to replace the transcript with an empty one.
    Clear,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types), lower case.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Produce the command's output from the static content.
    fn execute(&self, content: &ContentSource) -> CommandOutput;
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Registry of available commands, in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name
    /// in place, keeping its position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.commands.iter().position(|c| c.name() == cmd.name()) {
            Some(i) => self.commands[i] = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Look up a command by its normalized name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Return a list of (name, description) pairs in registration order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Names starting with the lower-cased `partial`.
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        let lower = partial.to_lowercase();
        self.commands
            .iter()
            .map(|c| c.name())
            .filter(|name| name.starts_with(&lower))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// What submitting a line does to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    /// Blank input: append the raw text with no output.
    Noop(HistoryEntry),
    /// A registered command ran.
    Dispatch(HistoryEntry),
    /// No such command: append an error line and a hint.
    NotFound(HistoryEntry),
    /// `clear`: empty the history, append nothing.
    Reset,
}

impl ResolvedAction {
    /// The entry to append, if any.
    pub fn entry(&self) -> Option<&HistoryEntry> {
        match self {
            ResolvedAction::Noop(e) | ResolvedAction::Dispatch(e) | ResolvedAction::NotFound(e) => {
                Some(e)
            },
            ResolvedAction::Reset => None,
        }
    }

    /// Apply the action to a history store.
    pub fn apply(self, history: &mut HistoryStore) {
        match self {
            ResolvedAction::Noop(e) | ResolvedAction::Dispatch(e) | ResolvedAction::NotFound(e) => {
                history.push(e);
            },
            ResolvedAction::Reset => history.reset(),
        }
    }
}

/// Resolves submitted lines against the registry and the static content.
pub struct Interpreter {
    registry: CommandRegistry,
    content: ContentSource,
}

impl Interpreter {
    pub fn new(registry: CommandRegistry, content: ContentSource) -> Self {
        Self { registry, content }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn content(&self) -> &ContentSource {
        &self.content
    }

    /// Decide what a submitted line does. Pure: history is not touched.
    pub fn resolve(&self, raw: &str) -> ResolvedAction {
        let key = normalize(raw);
        if key.is_empty() {
            return ResolvedAction::Noop(HistoryEntry::new(raw, Vec::new()));
        }
        if key == CLEAR_COMMAND {
            return ResolvedAction::Reset;
        }

        match self.registry.get(&key) {
            Some(cmd) => match cmd.execute(&self.content) {
                CommandOutput::Lines(lines) => {
                    log::debug!("dispatch {key}: {} lines", lines.len());
                    ResolvedAction::Dispatch(HistoryEntry::new(raw, lines))
                },
                CommandOutput::Clear => ResolvedAction::Reset,
            },
            None => {
                log::debug!("command not found: {key}");
                ResolvedAction::NotFound(HistoryEntry::new(raw, not_found_output(&key)))
            },
        }
    }

    /// Resolve a line and apply the result to `history`.
    pub fn execute(&self, raw: &str, history: &mut HistoryStore) {
        let action = self.resolve(raw);
        if action == ResolvedAction::Reset {
            log::info!("clearing {} history entries", history.len());
        }
        action.apply(history);
    }

    /// The synthetic entry shown at session start: banner output with no
    /// command line.
    pub fn startup_entry(&self) -> HistoryEntry {
        let output = match self.registry.get("banner").map(|c| c.execute(&self.content)) {
            Some(CommandOutput::Lines(lines)) => lines,
            _ => Vec::new(),
        };
        HistoryEntry::new("", output)
    }
}

fn not_found_output(key: &str) -> Vec<OutputLine> {
    vec![
        OutputLine::error(format!("Command not found: {key}")),
        OutputLine::text("Type 'help' to see available commands."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{LineContent, LineKind};
    use proptest::prelude::*;

    struct EchoName(&'static str);
    impl Command for EchoName {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "Print own name"
        }
        fn execute(&self, _: &ContentSource) -> CommandOutput {
            CommandOutput::Lines(vec![OutputLine::text(self.0)])
        }
    }

    struct Wipe;
    impl Command for Wipe {
        fn name(&self) -> &str {
            "clear"
        }
        fn description(&self) -> &str {
            "Clear"
        }
        fn execute(&self, _: &ContentSource) -> CommandOutput {
            CommandOutput::Clear
        }
    }

    fn interp() -> Interpreter {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoName("help")));
        reg.register(Box::new(EchoName("about")));
        reg.register(Box::new(Wipe));
        Interpreter::new(reg, ContentSource::default())
    }

    fn text_of(line: &OutputLine) -> &str {
        match &line.content {
            LineContent::Text(s) => s,
            LineContent::Links(_) => panic!("expected text"),
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  HeLp \t"), "help");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("Two Words"), "two words");
    }

    #[test]
    fn register_replaces_in_place() {
        struct Other;
        impl Command for Other {
            fn name(&self) -> &str {
                "help"
            }
            fn description(&self) -> &str {
                "other"
            }
            fn execute(&self, _: &ContentSource) -> CommandOutput {
                CommandOutput::Lines(Vec::new())
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoName("help")));
        reg.register(Box::new(EchoName("about")));
        reg.register(Box::new(Other));
        assert_eq!(reg.names(), ["help", "about"]);
        assert_eq!(reg.list_commands()[0], ("help", "other"));
    }

    #[test]
    fn completions_in_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoName("contact")));
        reg.register(Box::new(EchoName("clear")));
        reg.register(Box::new(EchoName("about")));
        assert_eq!(reg.completions("C"), ["contact", "clear"]);
        assert_eq!(reg.completions("ab"), ["about"]);
        assert!(reg.completions("zz").is_empty());
        assert_eq!(reg.completions("").len(), 3);
    }

    #[test]
    fn dispatch_registered_command() {
        let action = interp().resolve("help");
        match action {
            ResolvedAction::Dispatch(e) => {
                assert_eq!(e.raw_command, "help");
                assert_eq!(text_of(&e.output[0]), "help");
            },
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn raw_command_is_kept_verbatim() {
        let action = interp().resolve("  HELP ");
        assert_eq!(action.entry().unwrap().raw_command, "  HELP ");
    }

    #[test]
    fn unknown_command_two_lines() {
        let action = interp().resolve("Sudo Rm");
        let ResolvedAction::NotFound(e) = action else {
            panic!("expected not found");
        };
        assert_eq!(e.output.len(), 2);
        assert_eq!(e.output[0].kind, LineKind::Error);
        assert_eq!(text_of(&e.output[0]), "Command not found: sudo rm");
        assert_eq!(e.output[1].kind, LineKind::Text);
        assert_eq!(text_of(&e.output[1]), "Type 'help' to see available commands.");
    }

    #[test]
    fn arguments_are_not_parsed() {
        let action = interp().resolve("help me");
        assert!(matches!(action, ResolvedAction::NotFound(_)));
    }

    #[test]
    fn blank_input_is_noop_entry() {
        let action = interp().resolve("   ");
        let ResolvedAction::Noop(e) = action else {
            panic!("expected noop");
        };
        assert_eq!(e.raw_command, "   ");
        assert!(e.output.is_empty());
    }

    #[test]
    fn clear_resets_without_append() {
        let i = interp();
        let mut h = HistoryStore::new();
        i.execute("help", &mut h);
        i.execute("about", &mut h);
        assert_eq!(h.len(), 2);
        i.execute(" CLEAR ", &mut h);
        assert!(h.is_empty());
    }

    #[test]
    fn clear_twice_is_harmless() {
        let i = interp();
        let mut h = HistoryStore::new();
        i.execute("help", &mut h);
        i.execute("clear", &mut h);
        i.execute("clear", &mut h);
        assert!(h.is_empty());
        assert_eq!(h.generation(), 2);
    }

    #[test]
    fn clear_resets_even_without_registered_command() {
        let i = Interpreter::new(CommandRegistry::new(), ContentSource::default());
        assert_eq!(i.resolve("clear"), ResolvedAction::Reset);
    }

    #[test]
    fn every_other_action_appends_one_entry() {
        let i = interp();
        let mut h = HistoryStore::new();
        for (n, line) in ["help", "", "nope", "ABOUT"].iter().enumerate() {
            i.execute(line, &mut h);
            assert_eq!(h.len(), n + 1);
        }
    }

    #[test]
    fn startup_entry_without_banner_is_empty() {
        let e = interp().startup_entry();
        assert!(e.raw_command.is_empty());
        assert!(e.output.is_empty());
    }

    proptest! {
        #[test]
        fn unknown_input_yields_error_then_hint(s in "[a-z0-9 ]{1,16}") {
            let i = interp();
            let key = normalize(&s);
            prop_assume!(!key.is_empty() && i.registry().get(&key).is_none());
            let action = i.resolve(&s);
            let entry = action.entry().unwrap();
            prop_assert_eq!(entry.output.len(), 2);
            prop_assert_eq!(entry.output[0].kind, LineKind::Error);
            prop_assert!(text_of(&entry.output[0]).contains(&key));
        }

        #[test]
        fn case_and_padding_do_not_matter(
            name in prop::sample::select(vec!["help", "about"]),
            upper in prop::collection::vec(any::<bool>(), 5),
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
        ) {
            let cased: String = name
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let i = interp();
            let raw = format!("{left}{cased}{right}");
            let a = i.resolve(&raw);
            let b = i.resolve(name);
            prop_assert_eq!(&a.entry().unwrap().output, &b.entry().unwrap().output);
        }
    }
}
