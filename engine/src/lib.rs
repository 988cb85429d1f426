//! Core engine for Vitrine - state machines and boot orchestration.
//!
//! This crate contains the page state without rendering dependencies:
//!
//! - **Access gate**: passphrase overlay, monotonic `Locked -> Unlocked`
//! - **Boot sequencer**: edge-triggered, one-shot startup ordering
//! - **Localization**: startup resolution, fallback policy, atomic apply
//! - **Typer**: the perpetual reveal/delete headline animation
//! - **Page model**: key-tagged text slots, nav overlay, scroll, sparks,
//!   cookie card
//! - **Preferences**: theme/language/cookie flags persisted across runs
//!
//! # Architecture
//!
//! All state lives in [`App`] and is mutated on the frame loop: the TUI
//! layer reads state from `App` and forwards input back to it; no
//! rendering logic lives in this crate. Async work (locale fetches) is
//! spawned onto the runtime and funnels results back through an mpsc
//! channel drained by [`App::process_locale_events`], so mutation stays
//! single-threaded and lock-free. The gate publishes its unlock on a
//! watch channel observed in [`App::tick`]; the boot sequencer turns that
//! observation stream into a single edge.

use std::time::Instant;

use tokio::sync::{mpsc, watch};

pub mod boot;
pub mod config;
pub mod cookies;
pub mod gate;
pub mod i18n;
pub mod page;
pub mod phrases;
pub mod prefs;
pub mod scroll;
pub mod sparks;
pub mod typer;

pub use boot::{BootPhase, BootSequencer};
pub use config::{ConfigError, Settings, VitrineConfig};
pub use cookies::CookieCard;
pub use gate::{AccessGate, GateState, SubmitOutcome};
pub use i18n::{LocaleEvent, LocalizationState, StartupOutcome};
pub use page::{PageModel, Section, TextSlot};
pub use prefs::{PrefStore, Preferences, Theme};
pub use scroll::ScrollState;
pub use sparks::SparkField;
pub use typer::Typer;

// Re-export from the loader crate for callers that only depend on the engine.
pub use vitrine_locales::{Direction, LanguageResource, LoadFailure, LocaleClient, LocaleConfig};

/// The page: every subsystem's state, mutated only on the frame loop.
pub struct App {
    settings: Settings,
    prefs: PrefStore,
    theme: Theme,
    gate: AccessGate,
    gate_rx: watch::Receiver<GateState>,
    boot: BootSequencer,
    page: PageModel,
    typer: Typer,
    scroll: ScrollState,
    sparks: Option<SparkField>,
    cookies: CookieCard,
    localization: LocalizationState,
    locale_client: Option<LocaleClient>,
    locale_tx: mpsc::UnboundedSender<LocaleEvent>,
    locale_rx: mpsc::UnboundedReceiver<LocaleEvent>,
    should_quit: bool,
}

impl App {
    /// Build the page in its pre-boot state: gate presented, everything
    /// else idle until the unlock edge.
    #[must_use]
    pub fn new(settings: Settings, prefs: PrefStore) -> Self {
        let locale_client = match LocaleClient::new(&settings.locales) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!("locale client unavailable: {err}");
                None
            }
        };

        let mut gate = AccessGate::new(settings.passphrase.clone());
        gate.present();
        let gate_rx = gate.subscribe();

        let selected_language = prefs
            .get()
            .language
            .clone()
            .unwrap_or_else(|| settings.default_language.clone());

        let (locale_tx, locale_rx) = mpsc::unbounded_channel();

        Self {
            theme: settings.default_theme,
            page: PageModel::baseline(&settings.default_language),
            localization: LocalizationState::new(selected_language),
            boot: BootSequencer::new(),
            typer: Typer::new(),
            scroll: ScrollState::new(),
            sparks: None,
            cookies: CookieCard::new(),
            gate,
            gate_rx,
            locale_client,
            locale_tx,
            locale_rx,
            settings,
            prefs,
            should_quit: false,
        }
    }

    /// Advance time-driven state: gate observation, typer, scroll
    /// animation, cookie reveal.
    pub fn tick(&mut self, now: Instant) {
        // The unlock is observed here, not delivered as a callback from
        // submit(). The channel can redeliver; the sequencer fires once.
        if self.gate_rx.has_changed().unwrap_or(false) {
            let observed = *self.gate_rx.borrow_and_update();
            if self.boot.observe_gate(observed) {
                self.start_subsystems(now);
            }
        }

        self.typer.tick(now);
        self.scroll.tick(now);
        self.cookies.tick(now);
    }

    /// Post-unlock initialization. Theme, scroll, nav, and sparks are
    /// mutually independent; localization is started last and awaited via
    /// its event before anything that needs translated text.
    fn start_subsystems(&mut self, now: Instant) {
        self.theme = self
            .prefs
            .get()
            .theme
            .unwrap_or(self.settings.default_theme);
        self.scroll = ScrollState::new();
        self.page.close_nav();
        self.sparks = Some(SparkField::generate(&mut rand::rng(), now));
        self.begin_localization();
    }

    /// Spawn the startup locale resolution (preferred, then default once).
    fn begin_localization(&mut self) {
        let preferred = self.localization.current().to_string();
        let default_code = self.settings.default_language.clone();
        let tx = self.locale_tx.clone();

        match self.locale_client.clone() {
            Some(client) => {
                tokio::spawn(async move {
                    let outcome = i18n::resolve_startup(&client, &preferred, &default_code).await;
                    let _ = tx.send(LocaleEvent::StartupResolved(outcome));
                });
            }
            None => {
                // No client means both attempts would fail; resolve to the
                // untranslated baseline immediately.
                let _ = tx.send(LocaleEvent::StartupResolved(StartupOutcome {
                    code: preferred,
                    resource: None,
                    fell_back: false,
                }));
            }
        }
    }

    /// Drain results from spawned locale work. Called once per frame.
    pub fn process_locale_events(&mut self, now: Instant) {
        while let Ok(event) = self.locale_rx.try_recv() {
            match event {
                LocaleEvent::StartupResolved(outcome) => {
                    match outcome.resource {
                        Some(resource) => {
                            // A runtime fallback is not a user choice; only
                            // a genuine preference is persisted.
                            self.apply_locale(&outcome.code, resource, !outcome.fell_back, now);
                        }
                        None => {
                            tracing::warn!("no locale resolved; keeping baseline copy");
                        }
                    }
                    if self.boot.localization_resolved() {
                        self.cookies.arm(self.prefs.get().cookies_accepted, now);
                    }
                }
                LocaleEvent::SwitchLoaded { code, resource } => {
                    self.apply_locale(&code, resource, true, now);
                }
                LocaleEvent::SwitchFailed { code } => {
                    tracing::debug!(code, "language switch failed; keeping current language");
                }
            }
        }
    }

    /// Apply a successfully loaded resource: direction, label, tagged
    /// slots, preference, then restart the typer. The resource was fully
    /// loaded before any of this runs, so the UI is never half-translated.
    fn apply_locale(&mut self, code: &str, resource: LanguageResource, persist: bool, now: Instant) {
        self.page.apply(&resource, code);
        self.localization.replace(code, resource);
        if persist {
            self.prefs.set_language(code);
        }
        self.typer.start(phrases::for_language_or_default(code), now);
    }

    /// User-initiated language switch. Same code is a no-op; a failed
    /// load silently retains the previous language.
    pub fn request_language(&mut self, code: &str) {
        if !self.gate.is_unlocked() {
            return;
        }
        if code == self.localization.current() {
            return;
        }
        let code = code.to_string();
        let tx = self.locale_tx.clone();
        match self.locale_client.clone() {
            Some(client) => {
                tokio::spawn(async move {
                    match client.load(&code).await {
                        Ok(resource) => {
                            let _ = tx.send(LocaleEvent::SwitchLoaded { code, resource });
                        }
                        Err(err) => {
                            tracing::warn!(code, "switch load failed: {err}");
                            let _ = tx.send(LocaleEvent::SwitchFailed { code });
                        }
                    }
                });
            }
            None => {
                let _ = tx.send(LocaleEvent::SwitchFailed { code });
            }
        }
    }

    /// Switch to the next registered language in picker order.
    pub fn cycle_language(&mut self) {
        let current = self.localization.current();
        let languages = phrases::REGISTERED_LANGUAGES;
        let position = languages.iter().position(|c| *c == current);
        let next = match position {
            Some(i) => languages[(i + 1) % languages.len()],
            None => languages[0],
        };
        self.request_language(next);
    }

    pub fn toggle_theme(&mut self) {
        if !self.gate.is_unlocked() {
            return;
        }
        self.theme = self.theme.toggle();
        self.prefs.set_theme(self.theme);
    }

    pub fn accept_cookies(&mut self) {
        if self.cookies.accept() {
            self.prefs.set_cookies_accepted();
        }
    }

    /// Animated jump to a section anchor; closes the nav overlay first.
    pub fn jump_to_section(&mut self, index: usize, now: Instant) {
        if !self.gate.is_unlocked() || index >= self.page.sections.len() {
            return;
        }
        self.page.close_nav();
        self.scroll.jump_to(page::section_row(index), now);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        if self.gate.is_unlocked() {
            self.scroll.scroll_by(delta);
        }
    }

    pub fn close_nav(&mut self) {
        self.page.close_nav();
    }

    pub fn toggle_nav(&mut self) {
        if !self.gate.is_unlocked() {
            return;
        }
        if self.page.nav_open() {
            self.page.close_nav();
        } else {
            self.page.open_nav();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AccessGate {
        &mut self.gate
    }

    #[must_use]
    pub fn boot_phase(&self) -> BootPhase {
        self.boot.phase()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    #[must_use]
    pub fn typer(&self) -> &Typer {
        &self.typer
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[must_use]
    pub fn sparks(&self) -> Option<&SparkField> {
        self.sparks.as_ref()
    }

    #[must_use]
    pub fn cookies(&self) -> &CookieCard {
        &self.cookies
    }

    #[must_use]
    pub fn localization(&self) -> &LocalizationState {
        &self.localization
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        self.prefs.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_app() -> App {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PrefStore::open(dir.path().join("prefs.toml"));
        // Leak the tempdir so the prefs path stays valid for the test.
        std::mem::forget(dir);
        App::new(Settings::default(), prefs)
    }

    #[tokio::test]
    async fn gate_is_presented_at_construction() {
        let app = offline_app();
        assert!(app.gate().is_visible());
        assert_eq!(app.boot_phase(), BootPhase::AwaitingUnlock);
    }

    #[tokio::test]
    async fn page_interactions_are_inert_while_locked() {
        let mut app = offline_app();
        let now = Instant::now();

        app.toggle_theme();
        app.toggle_nav();
        app.scroll_by(5.0);
        app.jump_to_section(1, now);

        assert_eq!(app.theme(), Theme::Dark);
        assert!(!app.page().nav_open());
        assert!(app.scroll().offset().abs() < f32::EPSILON);
        assert_eq!(app.preferences().theme, None);
    }

    #[tokio::test]
    async fn subsystems_start_on_the_unlock_edge() {
        let mut app = offline_app();
        let now = Instant::now();

        app.gate_mut().submit("letmein");
        assert!(app.sparks().is_none(), "nothing starts before observation");

        app.tick(now);
        assert_eq!(app.boot_phase(), BootPhase::Localizing);
        assert!(app.sparks().is_some());

        // Repeated ticks must not regenerate subsystems.
        let first_spawn = app.sparks().map(SparkField::spawned_at);
        app.tick(now + std::time::Duration::from_millis(8));
        assert_eq!(app.sparks().map(SparkField::spawned_at), first_spawn);
    }

    #[tokio::test]
    async fn offline_resolution_keeps_baseline_and_arms_cookies() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PrefStore::open(dir.path().join("prefs.toml"));
        let settings = Settings {
            locales: vitrine_locales::LocaleConfig {
                // Unparsable base URL: the client is unavailable and
                // resolution completes without touching the network.
                base_url: "not a url".to_string(),
                ..vitrine_locales::LocaleConfig::default()
            },
            ..Settings::default()
        };
        let mut app = App::new(settings, prefs);
        let now = Instant::now();

        app.gate_mut().submit("letmein");
        app.tick(now);
        app.process_locale_events(now);

        assert_eq!(app.boot_phase(), BootPhase::Ready);
        assert!(!app.localization().is_translated());
        assert_eq!(app.page().hero_lead.text(), "Launch your storefront");
        assert!(!app.typer().is_running(), "typer waits for a resolution");

        // The cookie card was armed by the resolution edge.
        app.tick(now + cookies::REVEAL_DELAY);
        assert!(app.cookies().is_visible());
    }

    #[tokio::test]
    async fn quit_flag_round_trips() {
        let mut app = offline_app();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
