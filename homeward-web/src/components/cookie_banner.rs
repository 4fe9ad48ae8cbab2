use yew::prelude::*;

pub const DEFAULT_MESSAGE: &str = "We use minimal cookies for essential functionality and analytics. By continuing you accept this usage.";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static(DEFAULT_MESSAGE))]
    pub message: AttrValue,
    pub on_accept: Callback<()>,
    pub on_manage: Callback<()>,
}

/// Content of the consent banner. The container (role, live region and
/// visibility class) belongs to the host element.
#[function_component(CookieBannerView)]
pub fn cookie_banner_view(p: &Props) -> Html {
    let on_accept = {
        let cb = p.on_accept.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_manage = {
        let cb = p.on_manage.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <>
            <div class="cb-text">{ p.message.clone() }</div>
            <div class="cb-actions">
                <button class="cb-btn" id="cbManage" onclick={on_manage}>{ "Manage" }</button>
                <button class="cb-btn primary" id="cbAccept" onclick={on_accept}>{ "Accept" }</button>
            </div>
        </>
    }
}
