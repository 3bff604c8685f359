//! A core `Editor` wired to a live page.
//!
//! `BrowserEditor` builds the scaffold, hands the elements to the core
//! controller, and installs the DOM listeners that drive it. The controller
//! sits in a `RefCell` shared with the listeners.
//!
//! `document.execCommand` dispatches `input` synchronously, so listeners can
//! fire while a command is still running. Listener callbacks therefore never
//! wait on the controller: if it is busy the event is dropped (the running
//! command syncs the field itself).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use weaver_rte_core::{
    Editor, EditorConfig, EditorParts, EditorPlatform, FieldSink, KeydownResult, Mode,
    NameSequence, SyncTicket, focus_target, resolve_name,
};

use crate::dom;
use crate::error::{EditorError, Result};
use crate::events::key_combo_from_event;
use crate::formatter::GlobalFormatter;
use crate::host::BrowserHost;
use crate::scaffold::{HostElement, Scaffold};
use crate::views::{BackingField, RenderedPane, SourcePane, StatusBar, ToolbarButton};

pub struct BrowserPlatform;

impl EditorPlatform for BrowserPlatform {
    type Host = BrowserHost;
    type Rendered = RenderedPane;
    type Source = SourcePane;
    type Field = BackingField;
    type Status = StatusBar;
    type Button = ToolbarButton;
}

pub type BrowserController = Editor<BrowserPlatform>;

type ModeObserver = Box<dyn FnMut(Mode)>;

/// State shared between the public handle and the DOM listeners.
struct Shared {
    editor: RefCell<BrowserController>,
    mode: Cell<Mode>,
    /// Mode changes not yet delivered to `observers`.
    mode_events: Rc<RefCell<Vec<Mode>>>,
    observers: RefCell<Vec<ModeObserver>>,
    dispatching: Cell<bool>,
    sync_timer: RefCell<Option<Timeout>>,
    sync_delay_ms: u32,
}

impl Shared {
    /// Run `f` against the controller unless it is already borrowed, then
    /// deliver any mode changes it produced.
    fn with_editor<R>(&self, f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        let result = match self.editor.try_borrow_mut() {
            Ok(mut editor) => Some(f(&mut editor)),
            Err(_) => {
                tracing::trace!(target: "weaver::browser", "controller busy, event dropped");
                None
            }
        };
        self.dispatch_mode_events();
        result
    }

    fn dispatch_mode_events(&self) {
        if self.dispatching.get() || self.editor.try_borrow_mut().is_err() {
            return;
        }
        self.dispatching.set(true);
        loop {
            let events = std::mem::take(&mut *self.mode_events.borrow_mut());
            if events.is_empty() {
                break;
            }
            // Observers may subscribe more observers; keep those too.
            let mut observers = std::mem::take(&mut *self.observers.borrow_mut());
            for mode in events {
                for observer in observers.iter_mut() {
                    observer(mode);
                }
            }
            let mut slot = self.observers.borrow_mut();
            let added = std::mem::replace(&mut *slot, observers);
            slot.extend(added);
        }
        self.dispatching.set(false);
    }
}

fn schedule_sync(shared: &Rc<Shared>) {
    let Some(Some(ticket)) = shared.with_editor(|editor| editor.handle_input()) else {
        return;
    };
    let weak = Rc::downgrade(shared);
    let timeout = Timeout::new(shared.sync_delay_ms, move || flush_sync(&weak, ticket));
    // Replacing the previous timeout cancels it.
    *shared.sync_timer.borrow_mut() = Some(timeout);
}

fn flush_sync(shared: &Weak<Shared>, ticket: SyncTicket) {
    if let Some(shared) = shared.upgrade() {
        shared.with_editor(|editor| editor.flush_sync(ticket));
    }
}

/// An editor attached to a page element.
pub struct BrowserEditor {
    shared: Rc<Shared>,
    scaffold: Scaffold,
    name: String,
    listeners: Vec<EventListener>,
}

impl BrowserEditor {
    /// Attach to the first element matching `selector`.
    pub fn attach_selector(
        selector: &str,
        config: EditorConfig,
        names: &mut NameSequence,
    ) -> Result<Self> {
        let document = dom::document()?;
        let target = dom::find_target(&document, selector)?;
        Self::attach(target, config, names)
    }

    /// Attach to `target`, replacing or hiding it.
    ///
    /// Without a configured formatter, `window.Formatter.format` is used
    /// when the page defines it.
    pub fn attach(target: Element, config: EditorConfig, names: &mut NameSequence) -> Result<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(EditorError::NoDocument)?;

        let host = HostElement::from_element(target)?;
        let name = resolve_name(config.name.as_deref(), &host.name_hints(), names);
        let initial = host.initial_markup();
        let config = match config.formatter {
            Some(_) => config,
            None => config.formatter(GlobalFormatter),
        };
        let sync_delay_ms = u32::try_from(config.sync_delay.as_millis()).unwrap_or(u32::MAX);

        let scaffold = Scaffold::build(&document, host, &name)?;
        let parts = EditorParts {
            host: BrowserHost::new(window, &document, scaffold.rendered.clone())?,
            rendered: RenderedPane(scaffold.rendered.clone()),
            source: SourcePane(scaffold.source.clone()),
            field: BackingField(scaffold.field.clone()),
            status: StatusBar {
                char_count: scaffold.char_count.clone(),
                live: scaffold.live.clone(),
            },
        };

        let mut editor = Editor::new(name.clone(), parts, config, &initial);
        for (control, button) in &scaffold.buttons {
            editor.bind_control(*control, ToolbarButton(button.clone()));
        }

        let mode_events = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::new(Shared {
            mode: Cell::new(editor.mode()),
            editor: RefCell::new(editor),
            mode_events: mode_events.clone(),
            observers: RefCell::new(Vec::new()),
            dispatching: Cell::new(false),
            sync_timer: RefCell::new(None),
            sync_delay_ms,
        });
        {
            let weak = Rc::downgrade(&shared);
            shared.editor.borrow_mut().subscribe_mode(move |mode| {
                if let Some(shared) = weak.upgrade() {
                    shared.mode.set(mode);
                }
                mode_events.borrow_mut().push(mode);
            });
        }

        let listeners = install_listeners(&shared, &scaffold);
        tracing::info!(target: "weaver::browser", name = %name, "editor attached");

        Ok(Self {
            shared,
            scaffold,
            name,
            listeners,
        })
    }

    /// Resolved backing-field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.shared.mode.get()
    }

    /// Current backing-field value.
    pub fn value(&self) -> String {
        BackingField(self.scaffold.field.clone()).value()
    }

    pub fn is_attached(&self) -> bool {
        self.shared
            .editor
            .try_borrow()
            .map(|editor| editor.is_attached())
            .unwrap_or(true)
    }

    pub fn scaffold(&self) -> &Scaffold {
        &self.scaffold
    }

    pub fn set_mode(&self, mode: Mode) -> bool {
        self.shared
            .with_editor(|editor| editor.set_mode(mode))
            .unwrap_or(false)
    }

    pub fn toggle_mode(&self) -> Mode {
        self.shared
            .with_editor(|editor| editor.toggle_mode())
            .unwrap_or_else(|| self.mode())
    }

    /// Run a command by name. Unknown names return `false`.
    pub fn exec(&self, name: &str) -> bool {
        self.shared
            .with_editor(|editor| editor.exec_named(name))
            .unwrap_or(false)
    }

    /// Register an observer for mode changes.
    pub fn on_mode_change(&self, observer: impl FnMut(Mode) + 'static) {
        self.shared.observers.borrow_mut().push(Box::new(observer));
    }

    /// Final sync, then restore the page. Returns the final value, or `None`
    /// if the editor was already destroyed.
    ///
    /// A container host is switched back to visual mode first, so the markup
    /// copied into it matches the returned value.
    pub fn destroy(&mut self) -> Option<String> {
        self.shared.sync_timer.borrow_mut().take();
        if !self.scaffold.host().is_textarea() {
            self.set_mode(Mode::Visual);
        }
        let value = self.shared.with_editor(|editor| editor.destroy()).flatten()?;
        self.listeners.clear();
        self.scaffold.teardown();
        tracing::info!(target: "weaver::browser", name = %self.name, "editor destroyed");
        Some(value)
    }
}

fn install_listeners(shared: &Rc<Shared>, scaffold: &Scaffold) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let rendered: &HtmlElement = &scaffold.rendered;

    for (control, button) in &scaffold.buttons {
        let control = *control;
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(button, "click", move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.with_editor(|editor| editor.activate(control));
            }
        }));
    }

    let buttons: Vec<HtmlElement> = scaffold.buttons.iter().map(|(_, b)| b.clone()).collect();
    listeners.push(EventListener::new_with_options(
        &scaffold.toolbar,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(active) = dom::document().ok().and_then(|d| d.active_element()) else {
                return;
            };
            let active: &Node = &active;
            let Some(current) = buttons.iter().position(|b| b.is_same_node(Some(active))) else {
                return;
            };
            let key = key_combo_from_event(event).key;
            if let Some(next) = focus_target(buttons.len(), current, &key) {
                let _ = buttons[next].focus();
                event.prevent_default();
            }
        },
    ));

    let source: &HtmlElement = &scaffold.source;
    for target in [rendered, source] {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(target, "input", move |_| {
            if let Some(shared) = weak.upgrade() {
                schedule_sync(&shared);
            }
        }));
    }

    for event_type in ["keyup", "mouseup"] {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(rendered, event_type, move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.with_editor(|editor| editor.handle_selection_change());
            }
        }));
    }

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        rendered,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let combo = key_combo_from_event(event);
            if shared.with_editor(|editor| editor.handle_keydown(&combo))
                == Some(KeydownResult::Handled)
            {
                event.prevent_default();
            }
        },
    ));

    listeners
}
