//! Core application state and initialization

use anyhow::Result;
use std::{cell::Cell, rc::Rc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use cli_log::*;

use crate::config::Settings;
use crate::error::FeedbackError;
use crate::feedback::{FeedbackClient, FeedbackForm};
use crate::search::TickerSearch;
use crate::ticker::{TickerContext, TickerPanel, TickerProvider};
use crate::toast::Toaster;
use super::types::Focus;

pub struct App {
    // Widgets, declared before the provider so their handles are dropped first
    pub search: TickerSearch,
    pub panel: TickerPanel,
    pub feedback: FeedbackForm,
    pub toaster: Toaster,

    // Feedback transport; results come back from a spawned task
    pub client: FeedbackClient,
    feedback_tx: UnboundedSender<Result<(), FeedbackError>>,
    feedback_rx: UnboundedReceiver<Result<(), FeedbackError>>,

    // UI state
    pub focus: Focus,
    pub needs_redraw: Rc<Cell<bool>>,

    // Root owner of the shared ticker selection
    provider: TickerProvider,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let provider = TickerProvider::new(settings.default_ticker)?;
        let ctx = provider.context();
        let needs_redraw = Rc::new(Cell::new(true));

        let search = TickerSearch::new(settings.catalog, ctx.clone());
        let panel = TickerPanel::attach(&ctx, Rc::clone(&needs_redraw))?;
        let client = FeedbackClient::new(settings.api_url, settings.api_key);
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();

        info!("Feedback endpoint: {}", client.endpoint());

        Ok(Self {
            search,
            panel,
            feedback: FeedbackForm::new(),
            toaster: Toaster::new(),
            client,
            feedback_tx,
            feedback_rx,
            focus: Focus::None,
            needs_redraw,
            provider,
        })
    }

    pub fn ticker_context(&self) -> TickerContext {
        self.provider.context()
    }

    pub fn selected_ticker(&self) -> Result<String> {
        Ok(self.provider.context().get()?)
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Search {
            self.search.focus();
        } else {
            self.search.blur();
        }
        self.request_redraw();
    }

    /// Validate the form and send it on a background task.
    pub fn submit_feedback(&mut self) {
        let Some(submission) = self.feedback.begin_submit(&mut self.toaster) else {
            self.request_redraw();
            return;
        };

        let client = self.client.clone();
        let tx = self.feedback_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&submission).await;
            if tx.send(result).is_err() {
                warn!("Feedback result dropped: app is shutting down");
            }
        });
        self.request_redraw();
    }

    /// Apply finished requests and expire old toasts. Called every tick.
    pub fn update(&mut self) {
        while let Ok(result) = self.feedback_rx.try_recv() {
            self.feedback.finish(result, &mut self.toaster);
            self.request_redraw();
        }

        if self.toaster.prune_expired() {
            self.request_redraw();
        }
    }

    /// Wait for the in-flight feedback request, if any, and apply it.
    pub async fn settle_feedback(&mut self) {
        if !self.feedback.is_submitting() {
            return;
        }
        if let Some(result) = self.feedback_rx.recv().await {
            self.feedback.finish(result, &mut self.toaster);
            self.request_redraw();
        }
    }
}
