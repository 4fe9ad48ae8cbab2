//! Page install and teardown.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use homeward_core::{
    ConsentBanner, HomeNav, HomewardConfig, PageEnterFlourish, Preferences, PromoCoordinator,
    RuntimeHost, SoundManager, TransitionOverlay, UiRuntime,
};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, Window};
use yew::AppHandle;

use crate::banner::BannerDom;
use crate::bridge::{self, BridgeBindings};
use crate::components::cookie_banner::CookieBannerView;
use crate::dom::{self, EventBinding};
use crate::home_button::HomeButton;
use crate::overlay::DomOverlay;
use crate::promo::PromoDom;
use crate::scheduler::WebScheduler;
use crate::sound::{self, WebAudioFactory, WebSounds};
use crate::storage::{LocalStore, LocationRedirector};
use crate::transition::TransitionDom;
use crate::{a11y, styles};

/// Set on `window` once installed; a second start in the same page is a no-op.
pub const LOADED_FLAG: &str = "__homeward_loaded";

thread_local! {
    static INSTALLED: RefCell<Option<Homeward>> = const { RefCell::new(None) };
}

/// The handles the page-level JavaScript API drives.
#[derive(Clone)]
pub struct Controls {
    pub nav: Rc<HomeNav>,
    pub sounds: Rc<WebSounds>,
    pub promo: PromoCoordinator,
    pub banner: ConsentBanner,
    pub transition: TransitionOverlay,
}

/// Everything one install put on the page.
pub struct Homeward {
    runtime: UiRuntime,
    button: HomeButton,
    promo_dom: Rc<PromoDom>,
    banner_dom: BannerDom,
    banner_app: AppHandle<CookieBannerView>,
    transition_dom: Rc<TransitionDom>,
    listeners: Rc<RefCell<Vec<EventBinding>>>,
    bridge: BridgeBindings,
}

impl Homeward {
    /// # Errors
    /// Returns the install step that failed.
    pub fn install(window: &Window) -> Result<Self> {
        let doc = window.document().context("window has no document")?;
        styles::inject(&doc).context("injecting stylesheet")?;

        let config = HomewardConfig::load_from_static();
        let preferences = Preferences {
            reduce_motion: a11y::prefers_reduced_motion(),
        };
        let runtime = UiRuntime::new(
            RuntimeHost {
                scheduler: Rc::new(WebScheduler::new()),
                redirector: Rc::new(LocationRedirector),
                store: Rc::new(LocalStore),
                overlay_surface: Rc::new(DomOverlay::new(doc.clone())),
            },
            preferences,
            config.clone(),
        );
        if let Err(err) = runtime.overlay().ensure() {
            log::warn!("navigation overlay unavailable: {err}");
        }

        let nav = Rc::new(HomeNav::new(&runtime, config.nav.clone()));
        let button = HomeButton::mount(&doc, Rc::clone(&nav)).context("mounting home button")?;

        let listeners = Rc::new(RefCell::new(Vec::new()));
        let sounds = Rc::new(SoundManager::new(
            WebAudioFactory,
            preferences,
            config.sound.clone(),
        ));
        sound::bind_when_ready(&doc, Rc::clone(&sounds), Rc::clone(&listeners))
            .context("binding ui sounds")?;

        let transition_dom =
            Rc::new(TransitionDom::create(&doc).context("creating transition overlay")?);
        let transition = TransitionOverlay::new(&runtime, transition_dom.clone());

        let promo_dom = Rc::new(PromoDom::create(&doc).context("creating promo container")?);
        let promo = PromoCoordinator::new(&runtime, promo_dom.clone(), transition.clone());

        let banner_dom = BannerDom::create(&doc).context("creating cookie banner")?;
        let banner = ConsentBanner::new(&runtime, Rc::new(banner_dom.clone()));
        let banner_app = banner_dom.mount(&banner);
        banner.schedule_auto_show();

        let flourish = Rc::new(PageEnterFlourish::new(&runtime));
        {
            let flourish = Rc::clone(&flourish);
            dom::when_ready(&doc, Rc::clone(&listeners), move |_| {
                flourish.on_page_show();
                Ok(Vec::new())
            })
            .context("scheduling page-enter flourish")?;
        }
        let pageshow = EventBinding::new(window, "pageshow", move |_: Event| {
            flourish.on_page_show();
        })
        .context("listening for pageshow")?;
        listeners.borrow_mut().push(pageshow);

        let controls = Controls {
            nav,
            sounds,
            promo,
            banner,
            transition,
        };
        let bridge = bridge::expose(window, &controls).context("publishing window API")?;
        log::info!("homeward installed");

        Ok(Self {
            runtime,
            button,
            promo_dom,
            banner_dom,
            banner_app,
            transition_dom,
            listeners,
            bridge,
        })
    }

    /// Cancel pending timers, drop listeners and globals, and remove the
    /// injected elements. The shared overlay stays for other installers.
    pub fn teardown(self) {
        self.runtime.shutdown();
        drop(self.bridge);
        self.listeners.borrow_mut().clear();
        self.button.unmount();
        self.banner_app.destroy();
        self.banner_dom.remove();
        self.promo_dom.remove();
        self.transition_dom.remove();
        log::info!("homeward removed");
    }
}

fn already_loaded(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str(LOADED_FLAG))
        .ok()
        .is_some_and(|flag| flag.is_truthy())
}

fn set_loaded(window: &Window, loaded: bool) {
    let _ = Reflect::set(
        window,
        &JsValue::from_str(LOADED_FLAG),
        &JsValue::from_bool(loaded),
    );
}

/// Install once per page.
///
/// # Errors
/// Returns the install step that failed; nothing is marked loaded then.
pub fn start() -> Result<()> {
    let window = dom::window().context("no browser window")?;
    if already_loaded(&window) {
        log::debug!("homeward already installed");
        return Ok(());
    }
    let homeward = Homeward::install(&window)?;
    set_loaded(&window, true);
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(homeward));
    Ok(())
}

/// Undo [`start`]. Safe to call when nothing is installed.
pub fn stop() {
    let installed = INSTALLED.with(|slot| slot.borrow_mut().take());
    if let Some(homeward) = installed {
        homeward.teardown();
    }
    if let Some(window) = dom::window() {
        set_loaded(&window, false);
    }
}
