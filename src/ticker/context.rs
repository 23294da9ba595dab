//! Shared "currently selected ticker" store.
//!
//! A [`TickerProvider`] is created once at the application root and owns the
//! selection. Widgets receive [`TickerContext`] handles, which can read, write
//! and subscribe. A handle that is not attached to a live provider fails every
//! call with [`ContextError::NotInitialized`].
//!
//! Everything here runs on the UI thread, so the store is `Rc<RefCell<_>>`
//! and listeners are invoked synchronously from [`TickerContext::set`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use cli_log::*;

use crate::error::ContextError;

#[derive(Clone)]
struct Listener {
    id: u64,
    callback: Rc<RefCell<dyn FnMut(&str)>>,
    // Set when a nested `set` could not reach this listener because it was running
    missed: Rc<Cell<bool>>,
}

struct SelectionState {
    ticker_symbol: String,
    generation: u64,
    listeners: Vec<Listener>,
    next_listener_id: u64,
}

impl SelectionState {
    fn listener(&self, id: u64) -> Option<Listener> {
        self.listeners.iter().find(|l| l.id == id).cloned()
    }
}

/// Owner of the selection state. Dropping it tears the store down.
pub struct TickerProvider {
    state: Rc<RefCell<SelectionState>>,
}

impl TickerProvider {
    pub fn new(default_symbol: impl Into<String>) -> Result<Self, ContextError> {
        let ticker_symbol = default_symbol.into();
        if ticker_symbol.trim().is_empty() {
            return Err(ContextError::EmptySymbol);
        }

        info!("Ticker provider initialized with {ticker_symbol}");
        Ok(Self {
            state: Rc::new(RefCell::new(SelectionState {
                ticker_symbol,
                generation: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        })
    }

    /// A handle for injecting into widgets.
    pub fn context(&self) -> TickerContext {
        TickerContext {
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Drop for TickerProvider {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.listeners.clear();
        }
    }
}

/// Cloneable access to the selection owned by a [`TickerProvider`].
#[derive(Clone)]
pub struct TickerContext {
    state: Weak<RefCell<SelectionState>>,
}

impl Default for TickerContext {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for TickerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerContext")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl TickerContext {
    /// A handle bound to no provider.
    pub fn detached() -> Self {
        Self { state: Weak::new() }
    }

    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn state(&self) -> Result<Rc<RefCell<SelectionState>>, ContextError> {
        self.state.upgrade().ok_or(ContextError::NotInitialized)
    }

    pub fn get(&self) -> Result<String, ContextError> {
        Ok(self.state()?.borrow().ticker_symbol.clone())
    }

    /// Replace the selected ticker and notify subscribers if it changed.
    pub fn set(&self, symbol: impl Into<String>) -> Result<(), ContextError> {
        let state = self.state()?;
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(ContextError::EmptySymbol);
        }

        let (generation, ids): (u64, Vec<u64>) = {
            let mut state = state.borrow_mut();
            if state.ticker_symbol == symbol {
                return Ok(());
            }
            debug!("Selected ticker {} -> {}", state.ticker_symbol, symbol);
            state.ticker_symbol = symbol;
            state.generation += 1;
            (state.generation, state.listeners.iter().map(|l| l.id).collect())
        };

        for id in ids {
            let (current, listener) = {
                let state = state.borrow();
                // A nested set has already notified everyone with a newer value
                if state.generation != generation {
                    break;
                }
                // Unsubscribed by an earlier listener
                let Some(listener) = state.listener(id) else {
                    continue;
                };
                (state.ticker_symbol.clone(), listener)
            };
            notify(&state, &listener, current);
        }
        Ok(())
    }

    /// Register `listener`, called with the new symbol after every change.
    pub fn subscribe(
        &self,
        listener: impl FnMut(&str) + 'static,
    ) -> Result<Subscription, ContextError> {
        let state = self.state()?;
        let callback: Rc<RefCell<dyn FnMut(&str)>> = Rc::new(RefCell::new(listener));
        let mut guard = state.borrow_mut();
        let id = guard.next_listener_id;
        guard.next_listener_id += 1;
        guard.listeners.push(Listener {
            id,
            callback,
            missed: Rc::new(Cell::new(false)),
        });

        Ok(Subscription {
            id,
            state: self.state.clone(),
        })
    }

    pub fn subscriber_count(&self) -> Result<usize, ContextError> {
        Ok(self.state()?.borrow().listeners.len())
    }
}

/// Call `listener` with `symbol`, then again with the latest value for as long
/// as nested sets made while it ran had to skip it.
fn notify(state: &Rc<RefCell<SelectionState>>, listener: &Listener, symbol: String) {
    let Ok(mut callback) = listener.callback.try_borrow_mut() else {
        // Already running further up the stack; that frame re-delivers
        listener.missed.set(true);
        return;
    };

    let mut symbol = symbol;
    loop {
        listener.missed.set(false);
        callback(&symbol);
        if !listener.missed.get() {
            break;
        }

        let state = state.borrow();
        if state.listener(listener.id).is_none() {
            break;
        }
        symbol = state.ticker_symbol.clone();
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    state: Weak<RefCell<SelectionState>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                state.listeners.retain(|l| l.id != self.id);
            }
        }
    }
}
