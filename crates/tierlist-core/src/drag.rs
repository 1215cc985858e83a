// Rust guideline compliant 2026-10-12

//! Finite state machine for drag/drop reassignment.
//!
//! UI bindings translate their pointer events into [`DragEvent`]s and feed
//! them to a [`DragSession`]. The machine follows these transitions:
//!
//! - Idle → Dragging on `Start`
//! - Dragging / Hovering → Hovering on `Enter`
//! - Hovering → Dragging on `Leave`
//! - Dragging / Hovering → Idle on `Drop` (one store reassignment)
//! - Any → Idle on `End` or `Cancel` (no store mutation)

use crate::{Entry, Error, Result, TierRef, TierStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Data carried by a dragged entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Id of the dragged entry.
    pub id: String,
    /// Resource locator, used for the ghost preview.
    pub src: String,
}

impl DragPayload {
    /// Builds the payload for an entry.
    pub fn for_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id().to_string(),
            src: entry.src().to_string(),
        }
    }
}

/// Pointer messages understood by the drag/drop machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// An entry started being dragged.
    Start(DragPayload),
    /// The pointer entered a bucket's drop surface.
    Enter(TierRef),
    /// The pointer left the hovered drop surface.
    Leave,
    /// The entry was dropped on a bucket.
    Drop(TierRef),
    /// The platform finished the drag gesture.
    End,
    /// The drag was aborted, e.g. Escape or a drop outside any target.
    Cancel,
}

/// Kind of a [`DragEvent`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEventKind {
    Start,
    Enter,
    Leave,
    Drop,
    End,
    Cancel,
}

impl DragEvent {
    /// Returns the event kind.
    pub fn kind(&self) -> DragEventKind {
        match self {
            Self::Start(_) => DragEventKind::Start,
            Self::Enter(_) => DragEventKind::Enter,
            Self::Leave => DragEventKind::Leave,
            Self::Drop(_) => DragEventKind::Drop,
            Self::End => DragEventKind::End,
            Self::Cancel => DragEventKind::Cancel,
        }
    }
}

/// State of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// An entry is being dragged, not over any drop surface.
    Dragging {
        /// The dragged entry.
        payload: DragPayload,
    },
    /// An entry is being dragged over a drop surface.
    Hovering {
        /// The dragged entry.
        payload: DragPayload,
        /// The hovered bucket.
        target: TierRef,
    },
}

impl DragPhase {
    /// Checks if an event is accepted in this phase.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A drag starts while another one is active
    /// - `Enter`, `Leave` or `Drop` arrive while idle
    pub fn accepts(&self, event: DragEventKind) -> Result<()> {
        match (self, event) {
            (Self::Idle, DragEventKind::Start) => Ok(()),
            (Self::Idle, DragEventKind::End | DragEventKind::Cancel) => Ok(()),
            (Self::Idle, other) => Err(Error::InvalidTransition(format!(
                "Cannot handle {:?} while no drag is in progress",
                other
            ))),
            (_, DragEventKind::Start) => Err(Error::InvalidTransition(
                "Cannot start a drag while another drag is in progress".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Returns the events accepted in this phase.
    pub fn valid_events(&self) -> Vec<DragEventKind> {
        match self {
            Self::Idle => vec![
                DragEventKind::Start,
                DragEventKind::End,
                DragEventKind::Cancel,
            ],
            Self::Dragging { .. } | Self::Hovering { .. } => vec![
                DragEventKind::Enter,
                DragEventKind::Leave,
                DragEventKind::Drop,
                DragEventKind::End,
                DragEventKind::Cancel,
            ],
        }
    }

    /// Returns the payload of the active drag.
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Idle => None,
            Self::Dragging { payload } | Self::Hovering { payload, .. } => Some(payload),
        }
    }
}

/// Observable effect of handling a drag event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A drag started.
    Started,
    /// A ghost preview of `src` should be shown over `target`.
    Preview {
        /// Resource locator of the dragged entry.
        src: String,
        /// The hovered bucket.
        target: TierRef,
    },
    /// The ghost preview should be cleared.
    PreviewCleared,
    /// The entry was reassigned by the drop.
    Moved(Entry),
    /// The drag ended without touching the store.
    Ended,
    /// Nothing changed.
    Ignored,
}

/// Drag/drop state for one pointer.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns true if a drag is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, DragPhase::Idle)
    }

    /// Returns the ghost preview to render, if the pointer is over a target.
    pub fn ghost(&self) -> Option<(&str, &TierRef)> {
        match &self.phase {
            DragPhase::Hovering { payload, target } => Some((payload.src.as_str(), target)),
            _ => None,
        }
    }

    /// Feeds one event to the machine.
    ///
    /// A drop calls [`TierStore::change_entry_tier`] exactly once. The drag
    /// payload is cleared on drop even when that call fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not accepted in the current phase
    /// (the session is left unchanged), or if the store rejects the drop.
    pub fn handle(&mut self, event: DragEvent, store: &mut TierStore) -> Result<DragOutcome> {
        self.phase.accepts(event.kind())?;

        let phase = std::mem::take(&mut self.phase);
        match (phase, event) {
            (DragPhase::Idle, DragEvent::Start(payload)) => {
                debug!(entry = %payload.id, "drag started");
                self.phase = DragPhase::Dragging { payload };
                Ok(DragOutcome::Started)
            }
            (DragPhase::Idle, DragEvent::End | DragEvent::Cancel) => Ok(DragOutcome::Ignored),
            (
                DragPhase::Dragging { payload } | DragPhase::Hovering { payload, .. },
                DragEvent::Enter(target),
            ) => {
                let outcome = DragOutcome::Preview {
                    src: payload.src.clone(),
                    target: target.clone(),
                };
                self.phase = DragPhase::Hovering { payload, target };
                Ok(outcome)
            }
            (DragPhase::Hovering { payload, .. }, DragEvent::Leave) => {
                self.phase = DragPhase::Dragging { payload };
                Ok(DragOutcome::PreviewCleared)
            }
            (DragPhase::Dragging { payload }, DragEvent::Leave) => {
                self.phase = DragPhase::Dragging { payload };
                Ok(DragOutcome::Ignored)
            }
            (
                DragPhase::Dragging { payload } | DragPhase::Hovering { payload, .. },
                DragEvent::Drop(target),
            ) => {
                debug!(entry = %payload.id, target = %target, "drop");
                let entry = store.change_entry_tier(&payload.id, target)?;
                Ok(DragOutcome::Moved(entry))
            }
            (_, DragEvent::End | DragEvent::Cancel) => {
                debug!("drag ended without drop");
                Ok(DragOutcome::Ended)
            }
            (phase, event) => {
                // Rejected by `accepts` above.
                self.phase = phase;
                Err(Error::InvalidTransition(format!(
                    "Unhandled drag event {:?}",
                    event.kind()
                )))
            }
        }
    }
}
