//! Command table: named editing actions mapped onto native host commands.
//!
//! The table is fixed at construction. The only runtime mutation is binding
//! toolbar controls to command names so their pressed state can be refreshed.

use std::fmt;
use std::str::FromStr;

use crate::host::{EditingEngine, EditorHost, PressedIndicator, SelectionHost};
use crate::selection::SelectionTracker;

/// Message shown when asking for a link target.
pub const LINK_PROMPT: &str = "Enter URL";

/// Every command the editor knows about.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Blockquote,
    UnorderedList,
    OrderedList,
    Link,
    Unlink,
    HorizontalRule,
    ClearFormatting,
    Undo,
    Redo,
}

impl CommandName {
    /// All commands in toolbar order.
    pub const ALL: [CommandName; 17] = [
        CommandName::Bold,
        CommandName::Italic,
        CommandName::Underline,
        CommandName::StrikeThrough,
        CommandName::Paragraph,
        CommandName::Heading1,
        CommandName::Heading2,
        CommandName::Heading3,
        CommandName::Blockquote,
        CommandName::UnorderedList,
        CommandName::OrderedList,
        CommandName::Link,
        CommandName::Unlink,
        CommandName::HorizontalRule,
        CommandName::ClearFormatting,
        CommandName::Undo,
        CommandName::Redo,
    ];

    /// Stable name used by the toolbar and the JS API.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Bold => "bold",
            CommandName::Italic => "italic",
            CommandName::Underline => "underline",
            CommandName::StrikeThrough => "strikeThrough",
            CommandName::Paragraph => "paragraph",
            CommandName::Heading1 => "h1",
            CommandName::Heading2 => "h2",
            CommandName::Heading3 => "h3",
            CommandName::Blockquote => "blockquote",
            CommandName::UnorderedList => "unorderedList",
            CommandName::OrderedList => "orderedList",
            CommandName::Link => "link",
            CommandName::Unlink => "unlink",
            CommandName::HorizontalRule => "hr",
            CommandName::ClearFormatting => "clear",
            CommandName::Undo => "undo",
            CommandName::Redo => "redo",
        }
    }

    /// The descriptor for this command.
    pub fn descriptor(self) -> CommandDescriptor {
        use CommandAction::*;

        let (action, state_query) = match self {
            CommandName::Bold => (Native("bold", None), Some("bold")),
            CommandName::Italic => (Native("italic", None), Some("italic")),
            CommandName::Underline => (Native("underline", None), Some("underline")),
            CommandName::StrikeThrough => (Native("strikeThrough", None), Some("strikeThrough")),
            CommandName::Paragraph => (Native("formatBlock", Some("p")), None),
            CommandName::Heading1 => (Native("formatBlock", Some("h1")), None),
            CommandName::Heading2 => (Native("formatBlock", Some("h2")), None),
            CommandName::Heading3 => (Native("formatBlock", Some("h3")), None),
            CommandName::Blockquote => (Native("formatBlock", Some("blockquote")), None),
            CommandName::UnorderedList => (
                Native("insertUnorderedList", None),
                Some("insertUnorderedList"),
            ),
            CommandName::OrderedList => {
                (Native("insertOrderedList", None), Some("insertOrderedList"))
            }
            CommandName::Link => (PromptLink, Some("createLink")),
            CommandName::Unlink => (Native("unlink", None), None),
            CommandName::HorizontalRule => (Native("insertHorizontalRule", None), None),
            CommandName::ClearFormatting => (Native("removeFormat", None), None),
            CommandName::Undo => (Native("undo", None), None),
            CommandName::Redo => (Native("redo", None), None),
        };

        CommandDescriptor {
            name: self,
            action,
            state_query,
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`CommandName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for CommandName {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// What running a command does.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Run a native command with an optional fixed argument.
    Native(&'static str, Option<&'static str>),
    /// Ask for a URL and run `createLink` with it.
    PromptLink,
}

/// A named pair of execute action and optional state query.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: CommandName,
    pub action: CommandAction,
    /// Native command whose state reflects this command being active.
    pub state_query: Option<&'static str>,
}

impl CommandDescriptor {
    /// Perform the action against the host. Returns whether the host ran it.
    pub fn run<H: EditorHost>(&self, host: &H) -> bool {
        match self.action {
            CommandAction::Native(command, value) => host.exec_command(command, value),
            CommandAction::PromptLink => {
                let url = host
                    .request_text(LINK_PROMPT)
                    .filter(|url| !url.trim().is_empty());
                match url {
                    Some(url) => host.exec_command("createLink", Some(&url)),
                    None => {
                        tracing::debug!(target: "weaver::commands", "link prompt cancelled");
                        false
                    }
                }
            }
        }
    }

    /// Evaluate the state query, if this command has one.
    pub fn state<E: EditingEngine>(&self, engine: &E) -> Option<bool> {
        self.state_query
            .map(|command| engine.query_command_state(command))
    }
}

/// The fixed command set plus the toolbar controls bound to it.
pub struct CommandTable<B> {
    descriptors: Vec<CommandDescriptor>,
    buttons: Vec<(CommandName, B)>,
}

impl<B> Default for CommandTable<B> {
    fn default() -> Self {
        Self {
            descriptors: CommandName::ALL.iter().map(|n| n.descriptor()).collect(),
            buttons: Vec::new(),
        }
    }
}

impl<B: PressedIndicator> CommandTable<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered command.
    pub fn get(&self, name: CommandName) -> Option<&CommandDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Look up a registered command by its string name.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        let name = name.parse::<CommandName>().ok()?;
        self.get(name)
    }

    /// Bind a toolbar control to a command for state refreshes.
    ///
    /// Re-registering a name replaces the previous control.
    pub fn register_button(&mut self, name: CommandName, button: B) {
        if let Some(slot) = self.buttons.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = button;
        } else {
            self.buttons.push((name, button));
        }
    }

    /// Run a command.
    ///
    /// Restores the saved selection first, runs the action, calls `on_sync`,
    /// then refreshes every bound control. Returns `false` without side
    /// effects if the command is not registered.
    pub fn exec<H, F>(
        &self,
        name: CommandName,
        host: &H,
        selection: &mut SelectionTracker<<H as SelectionHost>::Range>,
        on_sync: F,
    ) -> bool
    where
        H: EditorHost,
        F: FnOnce(),
    {
        let Some(descriptor) = self.get(name) else {
            return false;
        };

        selection.restore(host);
        let accepted = descriptor.run(host);
        tracing::debug!(target: "weaver::commands", command = %name, accepted, "executed command");

        on_sync();
        self.update_states(host);
        true
    }

    /// Set every bound control's pressed indicator from its state query.
    ///
    /// Controls whose command has no state query are left untouched.
    pub fn update_states<E: EditingEngine>(&self, engine: &E) {
        for (name, button) in &self.buttons {
            let Some(active) = self.get(*name).and_then(|d| d.state(engine)) else {
                continue;
            };
            button.set_pressed(active);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;
    use crate::host::TextPrompt;

    #[derive(Default)]
    struct FakeHost {
        log: RefCell<Vec<(String, Option<String>)>>,
        active: RefCell<HashSet<String>>,
        prompt_reply: RefCell<Option<String>>,
        prompts: Cell<usize>,
        applied: Cell<usize>,
    }

    impl EditingEngine for FakeHost {
        fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
            self.log
                .borrow_mut()
                .push((command.to_string(), value.map(str::to_string)));
            let mut active = self.active.borrow_mut();
            if !active.remove(command) {
                active.insert(command.to_string());
            }
            true
        }

        fn query_command_state(&self, command: &str) -> bool {
            self.active.borrow().contains(command)
        }
    }

    impl SelectionHost for FakeHost {
        type Range = u32;

        fn current_range(&self) -> Option<u32> {
            Some(1)
        }

        fn surface_contains(&self, _range: &u32) -> bool {
            true
        }

        fn clear_selection(&self) {}

        fn apply_range(&self, _range: &u32) {
            self.applied.set(self.applied.get() + 1);
        }
    }

    impl TextPrompt for FakeHost {
        fn request_text(&self, message: &str) -> Option<String> {
            assert_eq!(message, LINK_PROMPT);
            self.prompts.set(self.prompts.get() + 1);
            self.prompt_reply.borrow().clone()
        }
    }

    #[derive(Clone, Default)]
    struct FakeButton(Rc<Cell<Option<bool>>>);

    impl PressedIndicator for FakeButton {
        fn set_pressed(&self, pressed: bool) {
            self.0.set(Some(pressed));
        }
    }

    #[test]
    fn test_command_names_round_trip() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>(), Ok(name));
        }
        assert!("superscript".parse::<CommandName>().is_err());
    }

    #[test]
    fn test_descriptor_mapping() {
        let h2 = CommandName::Heading2.descriptor();
        assert_eq!(h2.action, CommandAction::Native("formatBlock", Some("h2")));
        assert_eq!(h2.state_query, None);

        let clear = CommandName::ClearFormatting.descriptor();
        assert_eq!(clear.action, CommandAction::Native("removeFormat", None));
        assert_eq!(clear.state_query, None);

        let ul = CommandName::UnorderedList.descriptor();
        assert_eq!(ul.state_query, Some("insertUnorderedList"));
    }

    #[test]
    fn test_exec_restores_selection_then_syncs() {
        let host = FakeHost::default();
        let table = CommandTable::<FakeButton>::new();
        let mut selection = SelectionTracker::new();
        selection.save(&host);

        let synced = Cell::new(false);
        assert!(table.exec(CommandName::Bold, &host, &mut selection, || synced.set(true)));
        assert!(synced.get());
        assert_eq!(host.applied.get(), 1);
        assert_eq!(host.log.borrow()[0], ("bold".to_string(), None));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let table = CommandTable::<FakeButton>::new();
        assert!(table.lookup("fontSize").is_none());
        assert!(table.lookup("h1").is_some());
    }

    #[test]
    fn test_update_states_skips_stateless_buttons() {
        let host = FakeHost::default();
        let mut table = CommandTable::new();
        let bold = FakeButton::default();
        let undo = FakeButton::default();
        table.register_button(CommandName::Bold, bold.clone());
        table.register_button(CommandName::Undo, undo.clone());

        table.update_states(&host);
        assert_eq!(bold.0.get(), Some(false));
        assert_eq!(undo.0.get(), None);
    }

    #[test]
    fn test_bold_toggles_pressed_state() {
        let host = FakeHost::default();
        let mut table = CommandTable::new();
        let bold = FakeButton::default();
        table.register_button(CommandName::Bold, bold.clone());
        let mut selection = SelectionTracker::new();

        table.exec(CommandName::Bold, &host, &mut selection, || {});
        assert_eq!(bold.0.get(), Some(true));
        table.exec(CommandName::Bold, &host, &mut selection, || {});
        assert_eq!(bold.0.get(), Some(false));
    }

    #[test]
    fn test_link_uses_prompted_url() {
        let host = FakeHost::default();
        *host.prompt_reply.borrow_mut() = Some("https://example.com".to_string());
        let table = CommandTable::<FakeButton>::new();
        let mut selection = SelectionTracker::new();

        table.exec(CommandName::Link, &host, &mut selection, || {});
        assert_eq!(
            host.log.borrow().as_slice(),
            &[(
                "createLink".to_string(),
                Some("https://example.com".to_string())
            )]
        );
    }

    #[test]
    fn test_link_cancelled_or_empty_is_noop() {
        let host = FakeHost::default();
        let table = CommandTable::<FakeButton>::new();
        let mut selection = SelectionTracker::new();

        table.exec(CommandName::Link, &host, &mut selection, || {});
        *host.prompt_reply.borrow_mut() = Some("   ".to_string());
        table.exec(CommandName::Link, &host, &mut selection, || {});

        assert_eq!(host.prompts.get(), 2);
        assert!(host.log.borrow().is_empty());
    }
}
