#![forbid(unsafe_code)]

//! The panel object: mount sequencing and the event-loop surface.
//!
//! [`TocPanel`] is the explicit state object that owns the outline model, the
//! change detector, and the position controller. Everything the host event
//! loop delivers — mutation notifications, timer ticks, pointer events,
//! resizes, control clicks — enters through a method here, executes
//! synchronously within one turn, and returns what the shell should do next.
//! Multiple independent panel instances can coexist because nothing is
//! ambient.

use overtoc_core::document::{HostDocument, SelectorSet};
use overtoc_core::event::PointerEvent;
use overtoc_core::geometry::{PanelFrame, Viewport};
use web_time::{Duration, Instant};

use crate::detect::{ChangeDetector, ChangePolicy, Resync};
use crate::extract::{self, DEFAULT_ID_PREFIX};
use crate::model::OutlineModel;
use crate::position::{Placement, PositionController, RestoredGeometry};
use crate::render::{self, OutlineView};
use crate::store::StringStore;

/// Panel configuration. [`Default`] matches the reference deployment.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Heading selectors to query.
    pub selectors: SelectorSet,
    /// Prefix for synthesized heading ids.
    pub id_prefix: String,
    /// Quiet window required after the last mutation before re-sync.
    pub debounce_window: Duration,
    /// Delay of the one-shot initial extraction after mount.
    pub bootstrap_delay: Duration,
    /// Change comparison policy.
    pub policy: ChangePolicy,
    /// Maximum display width of a rendered row's text, in columns.
    pub max_text_width: usize,
    /// Message shown when the outline is empty.
    pub placeholder: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorSet::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            debounce_window: Duration::from_millis(1500),
            bootstrap_delay: Duration::from_millis(2000),
            policy: ChangePolicy::default(),
            max_text_width: 40,
            placeholder: "Waiting for content…".to_owned(),
        }
    }
}

/// A floating table-of-contents panel instance.
#[derive(Debug)]
pub struct TocPanel<S> {
    config: PanelConfig,
    model: OutlineModel,
    detector: ChangeDetector,
    position: PositionController<S>,
    mounted: bool,
}

impl<S: StringStore> TocPanel<S> {
    /// Create an unmounted panel over the given store backend.
    #[must_use]
    pub fn new(config: PanelConfig, backend: S) -> Self {
        let detector = ChangeDetector::new(
            config.debounce_window,
            config.bootstrap_delay,
            config.policy,
        );
        Self {
            config,
            model: OutlineModel::new(),
            detector,
            position: PositionController::new(backend),
            mounted: false,
        }
    }

    /// Mount the panel: restore persisted geometry and start the bootstrap
    /// countdown.
    ///
    /// Idempotent: if this instance is already mounted, or the shell reports
    /// that a panel root with the well-known identity already exists
    /// (`shell_mounted`), nothing happens and `None` is returned.
    pub fn mount(&mut self, now: Instant, shell_mounted: bool) -> Option<RestoredGeometry> {
        if self.mounted || shell_mounted {
            return None;
        }
        self.mounted = true;
        self.detector.start_bootstrap(now);
        let restored = self.position.restore();
        tracing::debug!("panel mounted");
        Some(restored)
    }

    /// True once [`mount`](Self::mount) has run on this instance.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Record a host-document mutation notification.
    pub fn on_mutation(&mut self, now: Instant) {
        self.detector.notify_mutation(now);
    }

    /// Drive the timers. Returns a fresh view when a re-synchronization ran
    /// and actually changed the outline (the bootstrap path replaces and
    /// re-projects unconditionally).
    pub fn tick(&mut self, now: Instant, doc: &mut dyn HostDocument) -> Option<OutlineView> {
        match self.detector.poll(now)? {
            Resync::Bootstrap => Some(self.resync_unconditional(doc)),
            Resync::Debounced => {
                let entries =
                    extract::extract(doc, &self.config.selectors, &self.config.id_prefix);
                if self.detector.changed(&entries) {
                    tracing::debug!(entries = entries.len(), "outline resynchronized");
                    self.model.replace(entries);
                    Some(self.view())
                } else {
                    None
                }
            }
        }
    }

    /// The manual refresh control: immediate extraction and re-projection,
    /// bypassing the debounce path entirely.
    pub fn refresh(&mut self, doc: &mut dyn HostDocument) -> OutlineView {
        self.resync_unconditional(doc)
    }

    /// Handle a click on outline row `index`. Returns the re-projected view,
    /// or `None` for an out-of-range index.
    pub fn click_entry(&mut self, doc: &mut dyn HostDocument, index: usize) -> Option<OutlineView> {
        if render::activate(&mut self.model, doc, index) {
            Some(self.view())
        } else {
            None
        }
    }

    /// Feed a pointer event from the shell's header region.
    pub fn pointer(
        &mut self,
        event: &PointerEvent,
        frame: &PanelFrame,
        viewport: &Viewport,
    ) -> Option<Placement> {
        self.position.pointer(event, frame, viewport)
    }

    /// Feed a viewport resize.
    pub fn resize(&self, viewport: &Viewport, frame: &PanelFrame) -> Option<Placement> {
        self.position.on_resize(viewport, frame)
    }

    /// Flip and persist the collapsed state; returns the new state.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.position.toggle_collapsed()
    }

    /// Project the current model.
    #[must_use]
    pub fn view(&self) -> OutlineView {
        render::project(
            &self.model,
            self.config.max_text_width,
            &self.config.placeholder,
        )
    }

    /// The outline model, read-only.
    #[must_use]
    pub fn model(&self) -> &OutlineModel {
        &self.model
    }

    /// The position controller, read-only.
    #[must_use]
    pub fn position(&self) -> &PositionController<S> {
        &self.position
    }

    fn resync_unconditional(&mut self, doc: &mut dyn HostDocument) -> OutlineView {
        let entries = extract::extract(doc, &self.config.selectors, &self.config.id_prefix);
        self.detector.record(&entries);
        self.model.replace(entries);
        self.view()
    }
}
