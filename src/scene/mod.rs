//! The showcase facade: catalog + selection + sampler wired the way a
//! rendering layer consumes them.
//!
//! Owns one subscription to the controller's era-change feed and drains
//! it after every transition, so the background batch is regenerated
//! exactly once per genuine era change and never for a reselect. All of
//! it is synchronous; by the time a transition method returns, the
//! batch the renderer reads is complete.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{DecorKind, EraCatalog, EraRecord, FactEntry};
use crate::core::config::ShowcaseConfig;
use crate::core::errors::Result;
use crate::journal::{Journal, JournalEntry, JournalEvent};
use crate::sampler::{BackgroundSampler, DecorativeItemDescriptor};
use crate::selection::{DetailRef, EraChanged, SelectionController};

/// A detail overlay resolved to displayable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDetail<'a> {
    /// The era the overlay was opened under (not necessarily current).
    pub era: &'a EraRecord,
    /// Overlay heading: the fact headline for cards, the era title
    /// otherwise.
    pub heading: &'a str,
    /// Overlay body text.
    pub body: &'a str,
    /// Whether the overlay references a since-changed era.
    pub stale: bool,
}

/// Session-lifetime owner of the whole view-model.
#[derive(Debug)]
pub struct Showcase {
    catalog: EraCatalog,
    controller: SelectionController,
    sampler: BackgroundSampler,
    era_events: crossbeam_channel::Receiver<EraChanged>,
    rng: StdRng,
    viewport_height: Option<f64>,
    background: Vec<DecorativeItemDescriptor>,
    journal: Option<Journal>,
}

impl Showcase {
    /// Showcase with an entropy-seeded random source.
    pub fn new(catalog: EraCatalog, config: &ShowcaseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(catalog, config, StdRng::from_os_rng()))
    }

    /// Showcase with a fixed seed; output is fully reproducible.
    pub fn with_seed(catalog: EraCatalog, config: &ShowcaseConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(catalog, config, StdRng::seed_from_u64(seed)))
    }

    fn assemble(catalog: EraCatalog, config: &ShowcaseConfig, rng: StdRng) -> Self {
        let mut controller = SelectionController::new(&catalog);
        let era_events = controller.subscribe();
        let mut showcase = Self {
            catalog,
            controller,
            sampler: BackgroundSampler::new(config),
            era_events,
            rng,
            viewport_height: None,
            background: Vec::new(),
            journal: None,
        };
        showcase.regenerate_background();
        showcase
    }

    /// Attach a session journal; transitions are logged from here on.
    pub fn attach_journal(&mut self, mut journal: Journal) {
        let mut entry = JournalEntry::new(JournalEvent::SessionStart);
        entry.era_id = Some(self.controller.current_era_id());
        entry.count = Some(self.background.len());
        journal.log(&entry);
        self.journal = Some(journal);
    }

    /// Report the embedder's viewport height. Takes effect on the next
    /// regeneration; bogus values fall back per the sampler's policy.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = Some(height);
    }

    /// The record of the currently selected era.
    #[must_use]
    pub fn current_era(&self) -> &EraRecord {
        // The controller only ever holds a valid index for this catalog.
        &self.catalog.all()[self.controller.current_era_id()]
    }

    /// The full catalog, for era pickers and overviews.
    #[must_use]
    pub fn catalog(&self) -> &EraCatalog {
        &self.catalog
    }

    /// The current decorative batch.
    #[must_use]
    pub fn background(&self) -> &[DecorativeItemDescriptor] {
        &self.background
    }

    /// The open detail overlay reference, if any.
    #[must_use]
    pub fn detail(&self) -> Option<DetailRef> {
        self.controller.current_detail()
    }

    /// Whether the open overlay references a since-changed era.
    #[must_use]
    pub fn is_detail_stale(&self) -> bool {
        self.controller.is_detail_stale()
    }

    /// Select an era; regenerates the background exactly once when the
    /// selection actually changed. Returns whether it did.
    pub fn select_era(&mut self, id: usize) -> Result<bool> {
        let changed = self.controller.select_era(id)?;
        if changed {
            let mut entry = JournalEntry::new(JournalEvent::EraSelected);
            entry.era_id = Some(id);
            self.journal_log(entry);
        }
        self.drain_era_events();
        Ok(changed)
    }

    /// Open a detail overlay for a decorative item or fact card.
    pub fn open_detail(&mut self, kind: DecorKind, fact_index: Option<usize>) -> DetailRef {
        let detail = self.controller.open_detail(kind, fact_index);
        let mut entry = JournalEntry::new(JournalEvent::DetailOpened);
        entry.era_id = Some(detail.era_id);
        entry.kind = Some(detail.kind);
        entry.fact_index = detail.fact_index;
        self.journal_log(entry);
        detail
    }

    /// Close the detail overlay. Returns whether one was open.
    pub fn close_detail(&mut self) -> bool {
        let closed = self.controller.close_detail();
        if closed {
            self.journal_log(JournalEntry::new(JournalEvent::DetailClosed));
        }
        closed
    }

    /// Resolve the open overlay into displayable text.
    ///
    /// Resolution honors the captured era, not the current one, so a
    /// stale overlay keeps showing the content it was opened for. A
    /// reference that no longer maps to authored content (out-of-range
    /// fact index, missing note) falls back to the era summary.
    #[must_use]
    pub fn resolve_detail(&self) -> Option<ResolvedDetail<'_>> {
        let detail = self.controller.current_detail()?;
        // Captured from current_era_id at activation, always in range.
        let era = &self.catalog.all()[detail.era_id];
        let fact = detail
            .fact_index
            .and_then(|i| era.facts.get(i))
            .filter(|_| detail.kind == DecorKind::Card);
        let (heading, body) = match fact {
            Some(FactEntry { headline, body }) => (headline.as_str(), body.as_str()),
            None => (
                era.title.as_str(),
                era.decor_note(detail.kind).unwrap_or(era.summary.as_str()),
            ),
        };
        Some(ResolvedDetail {
            era,
            heading,
            body,
            stale: self.controller.is_detail_stale(),
        })
    }

    fn drain_era_events(&mut self) {
        let mut changed = false;
        while self.era_events.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.regenerate_background();
        }
    }

    fn regenerate_background(&mut self) {
        let era = &self.catalog.all()[self.controller.current_era_id()];
        let height = self.viewport_height.unwrap_or(f64::NAN);
        self.background = self.sampler.regenerate(era, height, &mut self.rng);
        let mut entry = JournalEntry::new(JournalEvent::BatchRegenerated);
        entry.era_id = Some(era.id);
        entry.count = Some(self.background.len());
        self.journal_log(entry);
    }

    fn journal_log(&mut self, entry: JournalEntry) {
        if let Some(journal) = self.journal.as_mut() {
            journal.log(&entry);
        }
    }
}
