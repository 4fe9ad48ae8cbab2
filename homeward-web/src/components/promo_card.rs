use homeward_core::{PromoCard, PromoEvents, PromoMedia, TRANSITION_GIF};
use yew::prelude::*;

use crate::paths::{asset_path, image_src};

/// Offsets (left, top) of the decorative crumbs over the bundled image.
const CRUMBS: [(u32, u32); 2] = [(8, 8), (34, 22)];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub body: AttrValue,
    pub cta: AttrValue,
    pub media: PromoMedia,
    #[prop_or_default]
    pub on_activate: Callback<()>,
    #[prop_or_default]
    pub on_media: Callback<()>,
}

impl Props {
    #[must_use]
    pub fn from_card(card: &PromoCard, events: PromoEvents) -> Self {
        let media_events = events.clone();
        Self {
            title: AttrValue::from(card.title.clone()),
            body: AttrValue::from(card.body.clone()),
            cta: AttrValue::from(card.cta.clone()),
            media: card.media.clone(),
            on_activate: Callback::from(move |()| events.activate()),
            on_media: Callback::from(move |()| media_events.open_media()),
        }
    }
}

#[function_component(PromoCardView)]
pub fn promo_card_view(p: &Props) -> Html {
    let on_cta = {
        let on_activate = p.on_activate.clone();
        Callback::from(move |_: MouseEvent| on_activate.emit(()))
    };
    let on_image = {
        let on_media = p.on_media.clone();
        Callback::from(move |_: MouseEvent| on_media.emit(()))
    };

    let media = match &p.media {
        PromoMedia::Glyph(glyph) => html! { <div class="media">{ glyph.clone() }</div> },
        PromoMedia::Image(src) => html! {
            <div class="media">
                <img src={image_src(src)} alt="promo" style="cursor:pointer" onclick={on_image} />
            </div>
        },
        PromoMedia::TransitionGif => html! {
            <div class="media" style="position:relative">
                <img src={asset_path(TRANSITION_GIF)} alt="promo" style="cursor:pointer" onclick={on_image} />
                { for CRUMBS.iter().map(|(left, top)| html! {
                    <div class="crumb" style={format!("left:{left}px;top:{top}px")}></div>
                }) }
            </div>
        },
    };

    html! {
        <div class="promo-card">
            { media }
            <div class="content">
                <div class="title">{ p.title.clone() }</div>
                <div class="body">{ p.body.clone() }</div>
            </div>
            <button class="cta" onclick={on_cta}>{ p.cta.clone() }</button>
        </div>
    }
}
