use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use homeward_core::{
    BannerSurface, ConsentBanner, FocusTarget, HomeNav, HomewardConfig, KeyValueStore,
    ManualScheduler, MemoryStore, NavOutcome, OVERLAY_ID, OverlaySpec, OverlayState,
    OverlaySurface, PageEnterFlourish, Preferences, PromoCard, PromoCoordinator, PromoEvents,
    PromoOptions, PromoPhase, PromoSurface, Redirector, RuntimeHost, TransitionOverlay,
    TransitionSurface, UiError, UiRuntime,
};

/// One fake page implementing every host seam.
#[derive(Default)]
struct Page {
    overlays: RefCell<HashMap<String, OverlayState>>,
    redirects: RefCell<Vec<String>>,
    banner_visible: Cell<bool>,
    promo_phase: Cell<Option<PromoPhase>>,
    promo_titles: RefCell<Vec<String>>,
    promo_events: RefCell<Option<PromoEvents>>,
    transition_src: RefCell<Option<String>>,
    transition_visible: Cell<bool>,
}

impl OverlaySurface for Page {
    fn exists(&self, id: &str) -> bool {
        self.overlays.borrow().contains_key(id)
    }

    fn create(&self, spec: &OverlaySpec) -> Result<(), UiError> {
        self.overlays
            .borrow_mut()
            .insert(spec.id.clone(), OverlayState::Hidden);
        Ok(())
    }

    fn apply(&self, id: &str, state: OverlayState) -> Result<(), UiError> {
        self.overlays.borrow_mut().insert(id.to_string(), state);
        Ok(())
    }
}

impl Redirector for Page {
    fn redirect(&self, target: &str) {
        self.redirects.borrow_mut().push(target.to_string());
    }
}

impl BannerSurface for Page {
    fn set_visible(&self, visible: bool) -> Result<(), UiError> {
        self.banner_visible.set(visible);
        Ok(())
    }
}

impl PromoSurface for Page {
    fn render(&self, card: &PromoCard, events: PromoEvents) -> Result<(), UiError> {
        self.promo_titles.borrow_mut().push(card.title.clone());
        *self.promo_events.borrow_mut() = Some(events);
        Ok(())
    }

    fn set_phase(&self, phase: PromoPhase) -> Result<(), UiError> {
        self.promo_phase.set(Some(phase));
        Ok(())
    }

    fn clear(&self) -> Result<(), UiError> {
        self.promo_titles.borrow_mut().clear();
        Ok(())
    }
}

impl TransitionSurface for Page {
    fn reveal(&self, src: &str) -> Result<(), UiError> {
        *self.transition_src.borrow_mut() = Some(src.to_string());
        self.transition_visible.set(true);
        Ok(())
    }

    fn conceal(&self) -> Result<(), UiError> {
        self.transition_visible.set(false);
        Ok(())
    }
}

struct Harness {
    sched: Rc<ManualScheduler>,
    page: Rc<Page>,
    store: Rc<MemoryStore>,
    runtime: UiRuntime,
}

impl Harness {
    fn new(reduce_motion: bool) -> Self {
        Self::with_store(Rc::new(MemoryStore::default()), reduce_motion)
    }

    fn with_store(store: Rc<MemoryStore>, reduce_motion: bool) -> Self {
        let sched = Rc::new(ManualScheduler::new());
        let page = Rc::new(Page::default());
        let runtime = UiRuntime::new(
            RuntimeHost {
                scheduler: sched.clone(),
                redirector: page.clone(),
                store: store.clone(),
                overlay_surface: page.clone(),
            },
            Preferences { reduce_motion },
            HomewardConfig::load_from_static(),
        );
        Self {
            sched,
            page,
            store,
            runtime,
        }
    }

    fn transition(&self) -> TransitionOverlay {
        TransitionOverlay::new(&self.runtime, self.page.clone())
    }
}

#[test]
fn independent_installers_share_one_overlay() {
    let h = Harness::new(false);
    let nav_a = HomeNav::new(&h.runtime, h.runtime.config().nav.clone());
    let nav_b = HomeNav::new(&h.runtime, h.runtime.config().nav.clone());
    for _ in 0..4 {
        h.runtime.overlay().ensure().unwrap();
    }
    nav_a.go_home();
    nav_b.go_home();
    assert_eq!(h.page.overlays.borrow().len(), 1);
    assert_eq!(h.page.overlays.borrow()[OVERLAY_ID], OverlayState::Shown);
}

#[test]
fn rapid_double_trigger_redirects_once() {
    let h = Harness::new(false);
    let nav = HomeNav::new(&h.runtime, h.runtime.config().nav.clone());
    assert_eq!(nav.go_home(), NavOutcome::Scheduled);
    assert_eq!(
        nav.handle_key("h", &FocusTarget::element("body")),
        Some(NavOutcome::Ignored)
    );
    h.sched.run_until_idle();
    assert_eq!(*h.page.redirects.borrow(), vec!["home.html"]);
}

#[test]
fn typing_h_in_a_field_does_not_navigate() {
    let h = Harness::new(false);
    let nav = HomeNav::new(&h.runtime, h.runtime.config().nav.clone());
    nav.handle_key("h", &FocusTarget::element("textarea"));
    nav.handle_key("H", &FocusTarget::editable("section"));
    h.sched.run_until_idle();
    assert!(h.page.redirects.borrow().is_empty());
    nav.handle_key("H", &FocusTarget::element("main"));
    h.sched.run_until_idle();
    assert_eq!(h.page.redirects.borrow().len(), 1);
}

#[test]
fn consent_persists_across_reload() {
    let h = Harness::new(false);
    let banner = ConsentBanner::new(&h.runtime, h.page.clone());
    banner.schedule_auto_show();
    h.sched.advance(800);
    assert!(h.page.banner_visible.get());
    banner.accept();
    assert!(!h.page.banner_visible.get());
    assert_eq!(
        h.store.get("cc_cookie_accepted").unwrap().as_deref(),
        Some("1")
    );

    let reloaded = Harness::with_store(Rc::clone(&h.store), false);
    let banner = ConsentBanner::new(&reloaded.runtime, reloaded.page.clone());
    banner.schedule_auto_show();
    reloaded.sched.run_until_idle();
    assert!(!banner.show());
    assert!(!reloaded.page.banner_visible.get());
}

#[test]
fn latest_transition_wins() {
    let h = Harness::new(false);
    let overlay = h.transition();
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let (f, s) = (Rc::clone(&first), Rc::clone(&second));
    overlay.show(
        Some("a.gif"),
        Some(100),
        Some(Box::new(move || f.set(f.get() + 1))),
    );
    overlay.show(
        Some("b.gif"),
        Some(200),
        Some(Box::new(move || s.set(s.get() + 1))),
    );
    assert_eq!(h.page.transition_src.borrow().as_deref(), Some("b.gif"));

    h.sched.advance(200);
    assert!(h.page.transition_visible.get());
    assert_eq!(first.get(), 0);
    h.sched.advance(60);
    assert!(!h.page.transition_visible.get());
    h.sched.run_until_idle();
    assert_eq!((first.get(), second.get()), (0, 1));
}

#[test]
fn promo_auto_hides_without_interaction() {
    let h = Harness::new(false);
    let promo = PromoCoordinator::new(&h.runtime, h.page.clone(), h.transition());
    promo
        .show(PromoOptions {
            duration_ms: 500,
            ..PromoOptions::default()
        })
        .unwrap();
    h.sched.advance(500);
    assert_eq!(h.page.promo_phase.get(), Some(PromoPhase::Exiting));
    h.sched.advance(360);
    assert_eq!(h.page.promo_phase.get(), Some(PromoPhase::Hidden));
    assert!(h.page.promo_titles.borrow().is_empty());
}

#[test]
fn promo_gif_click_plays_bundled_transition() {
    let h = Harness::new(false);
    let promo = PromoCoordinator::new(&h.runtime, h.page.clone(), h.transition());
    promo
        .show(PromoOptions {
            use_transition_gif: true,
            duration_ms: 0,
            ..PromoOptions::default()
        })
        .unwrap();
    let events = h.page.promo_events.borrow().clone().unwrap();
    events.open_media();
    assert_eq!(
        h.page.transition_src.borrow().as_deref(),
        Some("transition.gif")
    );
    h.sched.advance(1860);
    assert!(!h.page.transition_visible.get());
    assert!(promo.is_shown());
}

#[test]
fn page_enter_respects_reduced_motion() {
    for reduce_motion in [false, true] {
        let h = Harness::new(reduce_motion);
        h.runtime.overlay().ensure().unwrap();
        let flourish = PageEnterFlourish::new(&h.runtime);
        flourish.on_page_show();
        h.sched.advance(21);
        let shown = h.page.overlays.borrow()[OVERLAY_ID] == OverlayState::Shown;
        assert_eq!(shown, !reduce_motion);
    }
}

#[test]
fn shutdown_drops_pending_redirect() {
    let h = Harness::new(false);
    let nav = HomeNav::new(&h.runtime, h.runtime.config().nav.clone());
    nav.go_home();
    h.runtime.shutdown();
    h.sched.run_until_idle();
    assert!(h.page.redirects.borrow().is_empty());
}
