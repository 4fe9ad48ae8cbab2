use futures::executor::block_on;
use homeward_core::PromoMedia;
use homeward_web::components::cookie_banner::{CookieBannerView, DEFAULT_MESSAGE};
use homeward_web::components::promo_card::PromoCardView;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn cookie_banner_renders_both_actions() {
    let props = homeward_web::components::cookie_banner::Props {
        message: AttrValue::Static(DEFAULT_MESSAGE),
        on_accept: Callback::noop(),
        on_manage: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CookieBannerView>::with_props(props).render());
    assert!(html.contains("cbAccept"));
    assert!(html.contains("cbManage"));
    assert!(html.contains("minimal cookies"));
}

#[test]
fn promo_image_is_clickable_and_text_is_escaped() {
    let props = homeward_web::components::promo_card::Props {
        title: AttrValue::from("<b>Sale</b>"),
        body: AttrValue::from("Half off"),
        cta: AttrValue::from("Go"),
        media: PromoMedia::Image("img/promo.png".into()),
        on_activate: Callback::noop(),
        on_media: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PromoCardView>::with_props(props).render());
    assert!(html.contains(r#"src="img/promo.png""#));
    assert!(html.contains("cursor:pointer"));
    assert!(!html.contains("<b>Sale</b>"));
    assert!(html.contains("Half off"));
}
