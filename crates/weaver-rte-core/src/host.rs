//! Host abstraction traits for editor operations.
//!
//! These traits define the interface between the editor logic and the page it
//! lives in (browser DOM, or an in-memory double in tests). The editor never
//! reaches for globals: every native editing command, selection lookup, and
//! prompt goes through one of these.

use thiserror::Error;

/// Error returned by an [`HtmlFormatter`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("formatter failed: {0}")]
pub struct FormatError(pub String);

impl From<&str> for FormatError {
    fn from(s: &str) -> Self {
        FormatError(s.to_string())
    }
}

impl From<String> for FormatError {
    fn from(s: String) -> Self {
        FormatError(s)
    }
}

/// The host's native document-editing engine.
///
/// Both operations are synchronous and act on the live selection.
pub trait EditingEngine {
    /// Run a named formatting command, optionally with an argument.
    ///
    /// Returns whether the host accepted the command.
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool;

    /// Whether a named formatting command is active at the current selection.
    fn query_command_state(&self, command: &str) -> bool;
}

/// Access to the host's selection, scoped to the editable surface.
pub trait SelectionHost {
    /// Opaque host range.
    type Range: Clone;

    /// The first range of the current selection, if there is one.
    fn current_range(&self) -> Option<Self::Range>;

    /// Whether the range's common ancestor lies within the editable surface.
    fn surface_contains(&self, range: &Self::Range) -> bool;

    /// Drop every range from the current selection.
    fn clear_selection(&self);

    /// Add a range to the current selection.
    fn apply_range(&self, range: &Self::Range);
}

/// Interactive text input (the link URL prompt).
pub trait TextPrompt {
    /// Ask the user for a string. `None` means the request was cancelled.
    fn request_text(&self, message: &str) -> Option<String>;
}

/// The host editing surface: engine, selection and prompt together.
pub trait EditorHost: EditingEngine + SelectionHost + TextPrompt {}

impl<T: EditingEngine + SelectionHost + TextPrompt> EditorHost for T {}

/// Optional pretty-printer applied when switching to source mode.
pub trait HtmlFormatter {
    fn format(&self, html: &str) -> Result<String, FormatError>;
}

impl<F> HtmlFormatter for F
where
    F: Fn(&str) -> Result<String, FormatError>,
{
    fn format(&self, html: &str) -> Result<String, FormatError> {
        self(html)
    }
}

/// Optional sanitizer applied when leaving source mode.
pub trait HtmlSanitizer {
    fn sanitize(&self, html: &str) -> String;
}

impl<F> HtmlSanitizer for F
where
    F: Fn(&str) -> String,
{
    fn sanitize(&self, html: &str) -> String {
        self(html)
    }
}

/// One of the two editing views.
///
/// For the rendered view `content` is its markup and `text_len` counts its
/// markup-stripped text. For the source view both refer to the raw text.
pub trait ViewPane {
    fn content(&self) -> String;
    fn set_content(&self, content: &str);
    fn text_len(&self) -> usize;
    fn set_visible(&self, visible: bool);
}

/// The backing field read by the surrounding page.
pub trait FieldSink {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Status bar and accessibility live region.
pub trait StatusSink {
    fn show_char_count(&self, count: usize);
    fn announce(&self, message: &str);
}

/// Pressed/active indicator of a toolbar control.
pub trait PressedIndicator {
    fn set_pressed(&self, pressed: bool);
}

/// Bundle of the concrete types an [`Editor`](crate::Editor) is built from.
pub trait EditorPlatform {
    type Host: EditorHost;
    type Rendered: ViewPane;
    type Source: ViewPane;
    type Field: FieldSink;
    type Status: StatusSink;
    type Button: PressedIndicator;
}
