//! Editor controller: owns the components and the views, and reacts to input.
//!
//! The platform layer builds the scaffold, hands the pieces over as
//! [`EditorParts`], and forwards DOM events to the `handle_*` methods.
//! Timers and DOM restoration stay on the platform side.

use crate::actions::{KeyCombo, KeydownResult, shortcut_for};
use crate::commands::{CommandName, CommandTable};
use crate::config::EditorConfig;
use crate::debounce::{SyncDebouncer, SyncTicket};
use crate::host::{EditorPlatform, FieldSink, SelectionHost, StatusSink, ViewPane};
use crate::modes::ModeController;
use crate::selection::SelectionTracker;
use crate::serializer::serialize_view;
use crate::toolbar::{Toolbar, ToolbarControl};
use crate::types::{Mode, Phase};

/// Status bar text for a character count.
pub fn char_count_label(count: usize) -> String {
    format!("{count} characters")
}

/// The platform objects an editor is assembled from.
pub struct EditorParts<P: EditorPlatform> {
    pub host: P::Host,
    pub rendered: P::Rendered,
    pub source: P::Source,
    pub field: P::Field,
    pub status: P::Status,
}

type Range<P> = <<P as EditorPlatform>::Host as SelectionHost>::Range;

pub struct Editor<P: EditorPlatform> {
    name: String,
    phase: Phase,
    host: P::Host,
    rendered: P::Rendered,
    source: P::Source,
    field: P::Field,
    status: P::Status,
    selection: SelectionTracker<Range<P>>,
    commands: CommandTable<P::Button>,
    modes: ModeController,
    toolbar: Toolbar<P::Button>,
    debouncer: SyncDebouncer,
}

impl<P: EditorPlatform> Editor<P> {
    /// Assemble an editor and load `initial` into both views and the field.
    ///
    /// `name` is the already-resolved backing-field name; the config's own
    /// `name` is only consulted during resolution.
    pub fn new(name: String, parts: EditorParts<P>, config: EditorConfig, initial: &str) -> Self {
        let EditorConfig {
            sanitizer,
            formatter,
            ..
        } = config;

        let editor = Self {
            name,
            phase: Phase::Attached,
            host: parts.host,
            rendered: parts.rendered,
            source: parts.source,
            field: parts.field,
            status: parts.status,
            selection: SelectionTracker::new(),
            commands: CommandTable::new(),
            modes: ModeController::new()
                .with_formatter(formatter)
                .with_sanitizer(sanitizer),
            toolbar: Toolbar::new(),
            debouncer: SyncDebouncer::new(),
        };

        editor.rendered.set_content(initial);
        editor.rendered.set_visible(true);
        editor.source.set_content(initial);
        editor.source.set_visible(false);
        editor.sync_to_field();
        editor.update_char_count();

        tracing::debug!(target: "weaver::editor", name = %editor.name, "editor attached");
        editor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.phase == Phase::Attached
    }

    /// Current backing-field value.
    pub fn value(&self) -> String {
        self.field.value()
    }

    /// Bind a rendered toolbar control.
    pub fn bind_control(&mut self, control: ToolbarControl, button: P::Button) {
        match control {
            ToolbarControl::Command(name) => self.commands.register_button(name, button),
            ToolbarControl::ModeToggle => {
                self.toolbar.set_mode_toggle(button);
                self.toolbar.update_mode_toggle(self.modes.mode());
            }
        }
    }

    /// Register an observer called after every mode change.
    pub fn subscribe_mode(&mut self, listener: impl FnMut(Mode) + 'static) {
        self.modes.subscribe(listener);
    }

    /// A toolbar control was clicked.
    pub fn activate(&mut self, control: ToolbarControl) {
        match control {
            ToolbarControl::Command(name) => {
                self.exec(name);
            }
            ToolbarControl::ModeToggle => {
                self.toggle_mode();
            }
        }
    }

    /// Run a command. Returns `false` if the editor is detached.
    pub fn exec(&mut self, name: CommandName) -> bool {
        if !self.is_attached() {
            return false;
        }

        let Self {
            host,
            selection,
            commands,
            modes,
            rendered,
            source,
            field,
            ..
        } = self;
        let mode = modes.mode();
        let ran = commands.exec(name, &*host, selection, || {
            field.set_value(&current_markup(mode, &*rendered, &*source));
        });
        // The browser drops the `input` event fired mid-command, so refresh here.
        self.update_char_count();
        ran
    }

    /// Run a command by its string name. Unknown names are ignored.
    pub fn exec_named(&mut self, name: &str) -> bool {
        match name.parse::<CommandName>() {
            Ok(name) => self.exec(name),
            Err(e) => {
                tracing::debug!(target: "weaver::editor", "{e}");
                false
            }
        }
    }

    /// Switch mode. Returns whether a transition happened.
    pub fn set_mode(&mut self, target: Mode) -> bool {
        if !self.is_attached() || target == self.modes.mode() {
            return false;
        }

        if self.modes.mode() == Mode::Visual {
            self.selection.save(&self.host);
        }

        if !self
            .modes
            .set_mode(target, &self.rendered, &self.source)
        {
            return false;
        }
        self.on_mode_changed(target);
        true
    }

    /// Flip modes and return the new one.
    pub fn toggle_mode(&mut self) -> Mode {
        let target = self.modes.mode().flipped();
        self.set_mode(target);
        self.modes.mode()
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.toolbar.update_mode_toggle(mode);
        self.status.announce(mode.announcement());

        if mode == Mode::Visual {
            self.selection.restore(&self.host);
            self.update_char_count();
            self.sync_to_field();
        } else {
            self.update_char_count();
        }

        self.modes.notify();
    }

    /// Either view received input. Returns the ticket to arm the timer with.
    pub fn handle_input(&mut self) -> Option<SyncTicket> {
        if !self.is_attached() {
            return None;
        }
        Some(self.debouncer.schedule())
    }

    /// The settle timer for `ticket` elapsed.
    ///
    /// Writes the field only if no later input superseded the ticket and the
    /// editor is still attached.
    pub fn flush_sync(&mut self, ticket: SyncTicket) -> bool {
        if !self.debouncer.fire(ticket) || !self.is_attached() {
            return false;
        }
        self.sync_to_field();
        self.update_char_count();
        true
    }

    /// Key-up or mouse-up in the rendered view.
    pub fn handle_selection_change(&mut self) {
        if !self.is_attached() {
            return;
        }
        self.selection.save(&self.host);
        self.commands.update_states(&self.host);
    }

    /// Keydown in the rendered view.
    pub fn handle_keydown(&mut self, combo: &KeyCombo) -> KeydownResult {
        if !self.is_attached() {
            return KeydownResult::NotHandled;
        }
        match shortcut_for(combo) {
            Some(name) => {
                self.exec(name);
                KeydownResult::Handled
            }
            None => KeydownResult::NotHandled,
        }
    }

    /// Write the active view's content into the backing field.
    pub fn sync_to_field(&self) {
        let value = current_markup(self.modes.mode(), &self.rendered, &self.source);
        tracing::trace!(target: "weaver::editor", len = value.len(), "sync to field");
        self.field.set_value(&value);
        self.commands.update_states(&self.host);
    }

    /// Refresh the status bar from the active view.
    pub fn update_char_count(&self) {
        let count = match self.modes.mode() {
            Mode::Visual => self.rendered.text_len(),
            Mode::Source => self.source.text_len(),
        };
        self.status.show_char_count(count);
    }

    /// Final sync, then detach. Returns the final field value.
    ///
    /// Pending debounced work is cancelled. Calling this twice returns `None`
    /// the second time.
    pub fn destroy(&mut self) -> Option<String> {
        if !self.is_attached() {
            return None;
        }
        self.debouncer.cancel();
        self.sync_to_field();
        self.phase = Phase::Detached;
        tracing::debug!(target: "weaver::editor", name = %self.name, "editor detached");
        Some(self.field.value())
    }
}

fn current_markup<R: ViewPane, S: ViewPane>(mode: Mode, rendered: &R, source: &S) -> String {
    match mode {
        Mode::Source => source.content(),
        Mode::Visual => serialize_view(rendered),
    }
}
