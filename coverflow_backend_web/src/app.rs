// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-call setup of a carousel page.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use coverflow_core::config::CoverflowConfig;
use coverflow_core::controller::CoverflowController;
use coverflow_core::input::SwipeConfig;
use coverflow_core::page::ScrollConfig;
use coverflow_core::slide::SlideDeck;
use coverflow_core::trace::TraceSink;

use crate::bindings::{SharedController, bind_carousel};
use crate::chrome::bind_chrome;
use crate::dom::window_and_document;
use crate::dom_view::DomView;
use crate::error::BindError;
use crate::images::bind_images;
use crate::listener::EventBindings;
use crate::raf::RafLoop;
use crate::selectors::DomSelectors;

/// Everything [`WebCoverflow::attach`] needs besides the deck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebOptions {
    /// Controller configuration.
    pub config: CoverflowConfig,
    /// Swipe thresholds.
    pub swipe: SwipeConfig,
    /// Scroll thresholds.
    pub scroll: ScrollConfig,
    /// Page structure.
    pub selectors: DomSelectors,
}

impl WebOptions {
    /// Stock configuration for the stock page.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            config: CoverflowConfig::standard(),
            swipe: SwipeConfig::standard(),
            scroll: ScrollConfig::standard(),
            selectors: DomSelectors::standard(),
        }
    }
}

impl Default for WebOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// A mounted carousel page.
///
/// Owns the controller, every DOM listener, and the frame loop. Dropping it
/// detaches all of them.
pub struct WebCoverflow {
    controller: SharedController,
    raf: RafLoop,
    bindings: EventBindings,
}

impl core::fmt::Debug for WebCoverflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebCoverflow")
            .field("controller", &self.controller)
            .field("raf", &self.raf)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl WebCoverflow {
    /// Binds to the current document, renders the first frame, starts
    /// autoplay if configured, and starts the frame loop.
    ///
    /// `sink` is installed before mounting so the first render is traced.
    ///
    /// # Errors
    ///
    /// Fails if a required element is missing, the deck and page disagree on
    /// the slide count, or a listener cannot be attached.
    pub fn attach(
        deck: SlideDeck,
        options: WebOptions,
        sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, BindError> {
        let (window, document) = window_and_document()?;
        let view = DomView::new(window.clone(), &document, &options.selectors)?;
        if view.items().len() != deck.len() {
            return Err(BindError::SlideCountMismatch {
                deck: deck.len(),
                elements: view.items().len(),
            });
        }
        let container = view.container().clone();
        let items = view.items().to_vec();

        let mut controller = CoverflowController::new(deck, options.config, view);
        if let Some(sink) = sink {
            controller.set_trace_sink(sink);
        }
        let controller = Rc::new(RefCell::new(controller));

        let mut bindings = bind_carousel(&controller, &document, &options.selectors, options.swipe)?;
        bindings.extend(bind_images(&items, &options.selectors)?);
        bindings.extend(bind_chrome(
            &window,
            &document,
            &options.selectors,
            options.scroll,
        )?);

        controller.borrow_mut().mount(crate::now());
        let _ = container.focus();

        let weak = Rc::downgrade(&controller);
        let raf = RafLoop::new(move |now| {
            if let Some(controller) = weak.upgrade()
                && let Ok(mut controller) = controller.try_borrow_mut()
            {
                controller.advance(now);
            }
        });
        raf.start();

        Ok(Self {
            controller,
            raf,
            bindings,
        })
    }

    /// The shared controller.
    #[must_use]
    pub fn controller(&self) -> &SharedController {
        &self.controller
    }

    /// The frame loop.
    #[must_use]
    pub fn frame_loop(&self) -> &RafLoop {
        &self.raf
    }
}
