//! Selection state machine: current era index plus the optional detail
//! overlay, with an explicit era-change event feed.
//!
//! Two independent pieces of state live here. The era index drives which
//! catalog record and which background batch is active; the detail
//! overlay is a modal surface layered on top. Changing one never touches
//! the other, which is how a detail opened under era A can legitimately
//! stay on screen after the viewer switches to era B.

#![allow(missing_docs)]

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::catalog::{DecorKind, EraCatalog};
use crate::core::errors::{Result, ShowcaseError};

/// Reference to the content of an open detail overlay, captured at the
/// moment of activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRef {
    /// The era that was current when the overlay opened.
    pub era_id: usize,
    /// Which decorative kind was activated.
    pub kind: DecorKind,
    /// For card activations, the index into that era's fact list.
    pub fact_index: Option<usize>,
}

/// Notification that the current era actually changed.
///
/// Reselecting the already-current era does not produce one of these;
/// background regeneration is keyed on genuine changes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraChanged {
    pub from: usize,
    pub to: usize,
}

/// Owner of the session's selection state.
///
/// State is mutated only through the transition methods; there is no
/// other writer. Lives for the whole session — no terminal state.
#[derive(Debug)]
pub struct SelectionController {
    catalog_len: usize,
    current_era_id: usize,
    open_detail: Option<DetailRef>,
    subscribers: Vec<Sender<EraChanged>>,
}

impl SelectionController {
    /// New controller over a catalog: era 0 current, no overlay.
    #[must_use]
    pub fn new(catalog: &EraCatalog) -> Self {
        Self {
            catalog_len: catalog.len(),
            current_era_id: 0,
            open_detail: None,
            subscribers: Vec::new(),
        }
    }

    /// Currently selected era id. Always a valid catalog index.
    #[must_use]
    pub fn current_era_id(&self) -> usize {
        self.current_era_id
    }

    /// The open detail overlay reference, if any.
    #[must_use]
    pub fn current_detail(&self) -> Option<DetailRef> {
        self.open_detail
    }

    /// Whether an overlay is open at all.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.open_detail.is_none()
    }

    /// Whether the open overlay references an era that is no longer
    /// current. Stale overlays stay up until explicitly closed; this
    /// lets a renderer badge them.
    #[must_use]
    pub fn is_detail_stale(&self) -> bool {
        self.open_detail
            .is_some_and(|d| d.era_id != self.current_era_id)
    }

    /// Subscribe to era-change notifications.
    ///
    /// Each subscriber gets every subsequent genuine change. Dropped
    /// receivers are pruned on the next broadcast.
    pub fn subscribe(&mut self) -> Receiver<EraChanged> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Select an era by id.
    ///
    /// Returns `true` when the selection actually changed (and an
    /// [`EraChanged`] was broadcast), `false` for a reselect of the
    /// current era. An out-of-range id fails without touching any
    /// state — the call must not partially apply.
    pub fn select_era(&mut self, id: usize) -> Result<bool> {
        if id >= self.catalog_len {
            return Err(ShowcaseError::OutOfRange {
                id,
                len: self.catalog_len,
            });
        }
        if id == self.current_era_id {
            return Ok(false);
        }
        let event = EraChanged {
            from: self.current_era_id,
            to: id,
        };
        self.current_era_id = id;
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        Ok(true)
    }

    /// Open (or replace) the detail overlay, capturing the current era.
    pub fn open_detail(&mut self, kind: DecorKind, fact_index: Option<usize>) -> DetailRef {
        let detail = DetailRef {
            era_id: self.current_era_id,
            kind,
            fact_index,
        };
        self.open_detail = Some(detail);
        detail
    }

    /// Close the detail overlay, discarding the captured reference.
    ///
    /// Returns whether an overlay was actually open; closing while
    /// browsing is a routine no-op (UI layers double-close freely).
    pub fn close_detail(&mut self) -> bool {
        self.open_detail.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn controller() -> SelectionController {
        SelectionController::new(&builtin())
    }

    #[test]
    fn initial_state_is_browsing_era_zero() {
        let ctl = controller();
        assert_eq!(ctl.current_era_id(), 0);
        assert!(ctl.is_browsing());
        assert!(ctl.current_detail().is_none());
        assert!(!ctl.is_detail_stale());
    }

    #[test]
    fn select_era_moves_the_index() {
        let mut ctl = controller();
        assert!(ctl.select_era(2).expect("valid id"));
        assert_eq!(ctl.current_era_id(), 2);
    }

    #[test]
    fn select_era_leaves_detail_untouched() {
        let mut ctl = controller();
        let detail = ctl.open_detail(DecorKind::Button, None);
        ctl.select_era(1).expect("valid id");
        assert_eq!(ctl.current_detail(), Some(detail));
    }

    #[test]
    fn reselect_emits_no_event() {
        let mut ctl = controller();
        let rx = ctl.subscribe();
        assert!(!ctl.select_era(0).expect("reselect is valid"));
        assert!(rx.try_recv().is_err(), "reselect must not broadcast");
    }

    #[test]
    fn genuine_change_emits_exactly_one_event() {
        let mut ctl = controller();
        let rx = ctl.subscribe();
        assert!(ctl.select_era(3).expect("valid id"));
        assert_eq!(rx.try_recv().expect("one event"), EraChanged { from: 0, to: 3 });
        assert!(rx.try_recv().is_err(), "no second event");
    }

    #[test]
    fn every_subscriber_sees_the_change() {
        let mut ctl = controller();
        let rx_a = ctl.subscribe();
        let rx_b = ctl.subscribe();
        ctl.select_era(1).expect("valid id");
        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_ok());
    }

    #[test]
    fn dropped_subscriber_is_pruned() {
        let mut ctl = controller();
        let rx_a = ctl.subscribe();
        let rx_b = ctl.subscribe();
        drop(rx_a);
        ctl.select_era(1).expect("valid id");
        assert_eq!(ctl.subscribers.len(), 1);
        assert!(rx_b.try_recv().is_ok());
    }

    #[test]
    fn out_of_range_select_leaves_state_unchanged() {
        let mut ctl = controller();
        let rx = ctl.subscribe();
        ctl.select_era(1).expect("valid id");
        rx.try_recv().expect("setup event");
        ctl.open_detail(DecorKind::Input, None);

        let err = ctl.select_era(99).expect_err("expected out of range");
        assert_eq!(err.code(), "ERA-2001");
        assert_eq!(ctl.current_era_id(), 1);
        assert!(ctl.current_detail().is_some());
        assert!(rx.try_recv().is_err(), "failed select must not broadcast");
    }

    #[test]
    fn open_then_close_returns_to_browsing() {
        let mut ctl = controller();
        ctl.open_detail(DecorKind::Card, Some(0));
        assert!(!ctl.is_browsing());
        assert!(ctl.close_detail());
        assert!(ctl.is_browsing());
        assert!(ctl.current_detail().is_none());
    }

    #[test]
    fn close_while_browsing_is_a_noop() {
        let mut ctl = controller();
        assert!(!ctl.close_detail());
        assert!(ctl.is_browsing());
    }

    #[test]
    fn detail_captures_the_activation_era() {
        let mut ctl = controller();
        ctl.select_era(2).expect("valid id");
        let detail = ctl.open_detail(DecorKind::Card, Some(0));
        assert_eq!(detail.era_id, 2);
        assert_eq!(detail.fact_index, Some(0));
    }

    #[test]
    fn detail_goes_stale_when_era_changes_under_it() {
        let mut ctl = controller();
        ctl.open_detail(DecorKind::Button, None);
        assert!(!ctl.is_detail_stale());
        ctl.select_era(3).expect("valid id");
        assert!(ctl.is_detail_stale());
        // Still open; staleness is a badge, not a close.
        assert_eq!(ctl.current_detail().map(|d| d.era_id), Some(0));
    }

    #[test]
    fn accessor_tracks_every_transition() {
        // Read accessor and open transition are distinct operations;
        // the accessor mirrors each state change without mutating.
        let mut ctl = controller();
        assert_eq!(ctl.current_detail(), None);
        let opened = ctl.open_detail(DecorKind::Input, None);
        assert_eq!(ctl.current_detail(), Some(opened));
        assert_eq!(ctl.current_detail(), Some(opened), "reads are idempotent");
        ctl.close_detail();
        assert_eq!(ctl.current_detail(), None);
    }

    #[test]
    fn reopening_replaces_the_reference() {
        let mut ctl = controller();
        ctl.open_detail(DecorKind::Button, None);
        let second = ctl.open_detail(DecorKind::Card, Some(1));
        assert_eq!(ctl.current_detail(), Some(second));
    }
}
