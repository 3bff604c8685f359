//! Visual/source mode switching.
//!
//! Every transition copies content from the view being left into the view
//! being entered: serialized (and optionally pretty-printed) markup going to
//! source, sanitized raw text going back to visual.

use crate::host::{HtmlFormatter, HtmlSanitizer, ViewPane};
use crate::serializer::serialize_view;
use crate::types::Mode;

/// Observer notified after every completed transition.
pub type ModeListener = Box<dyn FnMut(Mode)>;

/// Two-state machine over [`Mode`], starting in [`Mode::Visual`].
pub struct ModeController {
    mode: Mode,
    formatter: Option<Box<dyn HtmlFormatter>>,
    sanitizer: Option<Box<dyn HtmlSanitizer>>,
    listeners: Vec<ModeListener>,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: Mode::Visual,
            formatter: None,
            sanitizer: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_formatter(mut self, formatter: Option<Box<dyn HtmlFormatter>>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: Option<Box<dyn HtmlSanitizer>>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Register an observer for completed transitions.
    pub fn subscribe(&mut self, listener: impl FnMut(Mode) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switch to `target`, converting content between the views.
    ///
    /// Returns `false` and does nothing if already in `target`. Listeners are
    /// not called here; see [`ModeController::notify`].
    pub fn set_mode<R, S>(&mut self, target: Mode, rendered: &R, source: &S) -> bool
    where
        R: ViewPane,
        S: ViewPane,
    {
        if target == self.mode {
            return false;
        }

        match target {
            Mode::Source => {
                let html = serialize_view(rendered);
                let formatted = self.format(html);
                source.set_content(&formatted);
                rendered.set_visible(false);
                source.set_visible(true);
            }
            Mode::Visual => {
                let raw = source.content();
                let html = match &self.sanitizer {
                    Some(sanitizer) => sanitizer.sanitize(&raw),
                    None => raw,
                };
                rendered.set_content(&html);
                rendered.set_visible(true);
                source.set_visible(false);
            }
        }

        tracing::debug!(target: "weaver::modes", from = %self.mode, to = %target, "switched mode");
        self.mode = target;
        true
    }

    /// Flip between the two modes. Always transitions.
    pub fn toggle<R, S>(&mut self, rendered: &R, source: &S) -> Mode
    where
        R: ViewPane,
        S: ViewPane,
    {
        let target = self.mode.flipped();
        self.set_mode(target, rendered, source);
        target
    }

    /// Call every subscribed observer with the current mode.
    pub fn notify(&mut self) {
        let mode = self.mode;
        for listener in &mut self.listeners {
            listener(mode);
        }
    }

    /// Pretty-print through the formatter, falling back to the input on failure.
    fn format(&self, html: String) -> String {
        let Some(formatter) = &self.formatter else {
            return html;
        };
        match formatter.format(&html) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!(target: "weaver::modes", "{e}, using unformatted markup");
                html
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::host::FormatError;

    #[derive(Default)]
    struct FakePane {
        content: RefCell<String>,
        visible: Cell<bool>,
        writes: Cell<usize>,
    }

    impl FakePane {
        fn with(content: &str, visible: bool) -> Self {
            Self {
                content: RefCell::new(content.to_string()),
                visible: Cell::new(visible),
                writes: Cell::new(0),
            }
        }
    }

    impl ViewPane for FakePane {
        fn content(&self) -> String {
            self.content.borrow().clone()
        }

        fn set_content(&self, content: &str) {
            self.writes.set(self.writes.get() + 1);
            *self.content.borrow_mut() = content.to_string();
        }

        fn text_len(&self) -> usize {
            self.content.borrow().chars().count()
        }

        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
        }
    }

    #[test]
    fn test_to_source_and_back() {
        let rendered = FakePane::with("<b>hi</b>\n  ", true);
        let source = FakePane::with("", false);
        let mut modes = ModeController::new();

        assert!(modes.set_mode(Mode::Source, &rendered, &source));
        assert_eq!(source.content(), "<b>hi</b>");
        assert!(!rendered.visible.get());
        assert!(source.visible.get());

        assert!(modes.set_mode(Mode::Visual, &rendered, &source));
        assert_eq!(rendered.content(), "<b>hi</b>");
        assert!(rendered.visible.get());
        assert!(!source.visible.get());
    }

    #[test]
    fn test_repeated_target_converts_once() {
        let rendered = FakePane::with("<p>x</p>", true);
        let source = FakePane::default();
        let mut modes = ModeController::new();

        assert!(modes.set_mode(Mode::Source, &rendered, &source));
        assert!(!modes.set_mode(Mode::Source, &rendered, &source));
        assert_eq!(source.writes.get(), 1);
        assert_eq!(modes.mode(), Mode::Source);
    }

    #[test]
    fn test_failing_formatter_falls_back() {
        let rendered = FakePane::with("<p>x</p>", true);
        let source = FakePane::default();
        let formatter = |_: &str| -> Result<String, FormatError> { Err("boom".into()) };
        let mut modes = ModeController::new().with_formatter(Some(Box::new(formatter)));

        modes.set_mode(Mode::Source, &rendered, &source);
        assert_eq!(source.content(), "<p>x</p>");
    }

    #[test]
    fn test_formatter_output_used() {
        let rendered = FakePane::with("<p>x</p>", true);
        let source = FakePane::default();
        let formatter =
            |html: &str| -> Result<String, FormatError> { Ok(html.replace("<p>", "<p>\n  ")) };
        let mut modes = ModeController::new().with_formatter(Some(Box::new(formatter)));

        modes.set_mode(Mode::Source, &rendered, &source);
        insta::assert_snapshot!(source.content(), @r"
        <p>
          x</p>
        ");
    }

    #[test]
    fn test_sanitizer_applied_leaving_source() {
        let rendered = FakePane::with("", true);
        let source = FakePane::default();
        let sanitizer = |html: &str| html.replace("<script>", "");
        let mut modes = ModeController::new().with_sanitizer(Some(Box::new(sanitizer)));

        modes.set_mode(Mode::Source, &rendered, &source);
        source.set_content("<script><i>ok</i>");
        modes.set_mode(Mode::Visual, &rendered, &source);
        assert_eq!(rendered.content(), "<i>ok</i>");
    }

    #[test]
    fn test_toggle_and_listeners() {
        let rendered = FakePane::with("a", true);
        let source = FakePane::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut modes = ModeController::new();
        let sink = seen.clone();
        modes.subscribe(move |mode| sink.borrow_mut().push(mode));

        assert_eq!(modes.toggle(&rendered, &source), Mode::Source);
        modes.notify();
        assert_eq!(modes.toggle(&rendered, &source), Mode::Visual);
        modes.notify();
        assert_eq!(seen.borrow().as_slice(), &[Mode::Source, Mode::Visual]);
    }
}
