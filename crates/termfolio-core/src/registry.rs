//! Static command registry.
//!
//! The registry's key set is the sole source of truth for "valid command".
//! Declaration order is significant: tab completion picks the first command
//! whose name starts with the typed prefix, in declaration order.

/// What a command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Reset the screen to the intro block.
    Clear,
    /// Switch to light mode.
    Light,
    /// Switch to dark mode.
    Dark,
    /// Look up a content fragment from the content table.
    Info,
}

/// One registered command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command name as typed by the user.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Dispatch classification.
    pub kind: CommandKind,
}

/// Built-in command set, in declaration order.
const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "skills", description: "Display skills.", kind: CommandKind::Info },
    CommandSpec {
        name: "experience",
        description: "Display work experience.",
        kind: CommandKind::Info,
    },
    CommandSpec { name: "projects", description: "Display projects.", kind: CommandKind::Info },
    CommandSpec { name: "research", description: "Display research.", kind: CommandKind::Info },
    CommandSpec {
        name: "contact",
        description: "Display contact information.",
        kind: CommandKind::Info,
    },
    CommandSpec { name: "clear", description: "Clear the terminal.", kind: CommandKind::Clear },
    CommandSpec { name: "light", description: "Switch to light mode.", kind: CommandKind::Light },
    CommandSpec { name: "dark", description: "Switch to dark mode.", kind: CommandKind::Dark },
];

/// Immutable, ordered command registry.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandSpec],
}

impl Default for Registry {
    fn default() -> Self {
        Self { commands: COMMANDS }
    }
}

impl Registry {
    /// Classification for `name`, or `None` if the command is not registered.
    pub fn kind_of(&self, name: &str) -> Option<CommandKind> {
        self.commands.iter().find(|spec| spec.name == name).map(|spec| spec.kind)
    }

    /// Description for `name`, or `None` if the command is not registered.
    pub fn describe(&self, name: &str) -> Option<&'static str> {
        self.commands.iter().find(|spec| spec.name == name).map(|spec| spec.description)
    }

    /// First command whose name starts with `prefix`, in declaration order.
    ///
    /// Matching is case-sensitive. An empty prefix matches the first
    /// registered command.
    pub fn complete(&self, prefix: &str) -> Option<&'static str> {
        self.commands.iter().find(|spec| spec.name.starts_with(prefix)).map(|spec| spec.name)
    }

    /// Command names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.commands.iter().map(|spec| spec.name)
    }

    /// All names joined with ` | `, as shown in the intro block.
    pub fn summary(&self) -> String {
        self.names().collect::<Vec<_>>().join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_registered_commands() {
        let registry = Registry::default();
        assert_eq!(registry.kind_of("skills"), Some(CommandKind::Info));
        assert_eq!(registry.kind_of("clear"), Some(CommandKind::Clear));
        assert_eq!(registry.kind_of("light"), Some(CommandKind::Light));
        assert_eq!(registry.kind_of("dark"), Some(CommandKind::Dark));
    }

    #[test]
    fn kind_of_unknown_command() {
        assert_eq!(Registry::default().kind_of("foobar"), None);
    }

    #[test]
    fn kind_of_is_case_sensitive() {
        // Dispatch lowercases before lookup; the registry itself does not.
        assert_eq!(Registry::default().kind_of("SKILLS"), None);
    }

    #[test]
    fn complete_prefix_match() {
        assert_eq!(Registry::default().complete("sk"), Some("skills"));
    }

    #[test]
    fn complete_no_match() {
        assert_eq!(Registry::default().complete("zz"), None);
    }

    #[test]
    fn complete_empty_prefix_is_first_command() {
        assert_eq!(Registry::default().complete(""), Some("skills"));
    }

    #[test]
    fn complete_prefers_declaration_order() {
        // "c" matches both "contact" and "clear"; "contact" is declared first.
        assert_eq!(Registry::default().complete("c"), Some("contact"));
    }

    #[test]
    fn summary_joins_names_in_order() {
        assert_eq!(
            Registry::default().summary(),
            "skills | experience | projects | research | contact | clear | light | dark"
        );
    }
}
