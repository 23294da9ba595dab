//! Selected ticker panel: a reader of the shared selection

use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ContextError;
use super::context::{Subscription, TickerContext};

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub symbol: String,
    pub changes: usize,
    pub last_changed: Option<DateTime<Utc>>,
}

/// Mirrors the selected ticker and flags a redraw whenever it changes.
pub struct TickerPanel {
    snapshot: Rc<RefCell<PanelSnapshot>>,
    _subscription: Subscription,
}

impl TickerPanel {
    pub fn attach(ctx: &TickerContext, redraw: Rc<Cell<bool>>) -> Result<Self, ContextError> {
        let snapshot = Rc::new(RefCell::new(PanelSnapshot {
            symbol: ctx.get()?,
            changes: 0,
            last_changed: None,
        }));

        let sink = Rc::clone(&snapshot);
        let subscription = ctx.subscribe(move |symbol| {
            let mut snap = sink.borrow_mut();
            snap.symbol = symbol.to_string();
            snap.changes += 1;
            snap.last_changed = Some(Utc::now());
            redraw.set(true);
        })?;

        Ok(Self {
            snapshot,
            _subscription: subscription,
        })
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn symbol(&self) -> String {
        self.snapshot.borrow().symbol.clone()
    }
}
