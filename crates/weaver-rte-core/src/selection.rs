//! Selection tracking for the rendered view.
//!
//! Toolbar clicks move focus away from the editable surface, which collapses
//! or moves the host selection. The tracker remembers the last range the user
//! had inside the surface so commands can be applied to it.

use crate::host::SelectionHost;

/// Remembers at most one host range.
#[derive(Debug, Clone)]
pub struct SelectionTracker<R> {
    saved: Option<R>,
}

impl<R> Default for SelectionTracker<R> {
    fn default() -> Self {
        Self { saved: None }
    }
}

impl<R: Clone> SelectionTracker<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved range, if any.
    pub fn saved(&self) -> Option<&R> {
        self.saved.as_ref()
    }

    /// Record the host's current range if it lies within the editable surface.
    ///
    /// Returns whether a range was saved.
    pub fn save<H>(&mut self, host: &H) -> bool
    where
        H: SelectionHost<Range = R>,
    {
        let Some(range) = host.current_range() else {
            return false;
        };
        if !host.surface_contains(&range) {
            tracing::trace!(target: "weaver::selection", "selection outside surface, not saved");
            return false;
        }
        self.saved = Some(range);
        true
    }

    /// Re-apply the saved range.
    ///
    /// A range that no longer lies within the surface is discarded instead.
    /// Returns whether a range was applied.
    pub fn restore<H>(&mut self, host: &H) -> bool
    where
        H: SelectionHost<Range = R>,
    {
        let Some(range) = self.saved.as_ref() else {
            return false;
        };
        if !host.surface_contains(range) {
            tracing::trace!(target: "weaver::selection", "discarding stale saved range");
            self.saved = None;
            return false;
        }
        host.clear_selection();
        host.apply_range(range);
        true
    }
}
