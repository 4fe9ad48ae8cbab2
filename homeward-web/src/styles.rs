//! Page stylesheet for the promo card, cookie banner and transition overlay.

use homeward_core::UiError;
use web_sys::Document;

use crate::{a11y, dom};

pub const STYLE_ID: &str = "homeward-styles";

const COMPONENT_CSS: &str = "\
.promo-wrap{position:fixed;top:18px;left:50%;transform:translateX(-50%) translateY(-8px);z-index:99997;pointer-events:none}
.promo-card{pointer-events:auto;min-width:320px;max-width:760px;padding:14px 18px;border-radius:14px;background:linear-gradient(180deg, rgba(255,255,255,0.03), rgba(255,255,255,0.01));border:1px solid rgba(255,255,255,0.06);box-shadow:0 12px 40px rgba(0,0,0,0.6);backdrop-filter:blur(12px) saturate(1.05);display:flex;align-items:center;gap:12px;transform-origin:top center;}
.promo-card .media{width:64px;height:64px;border-radius:10px;display:grid;place-items:center;background:linear-gradient(135deg, rgba(255,23,68,0.16), rgba(41,121,255,0.06));font-size:28px}
.promo-card .media img{width:100%;height:100%;object-fit:cover;border-radius:8px;display:block}
.promo-card .media .crumb{position:absolute;width:6px;height:6px;border-radius:50%;background:rgba(255,215,140,0.9);box-shadow:0 2px 6px rgba(0,0,0,0.45);opacity:0;transform:translateY(0);animation:crumbPop .9s ease forwards}
@keyframes crumbPop{0%{opacity:0;transform:translateY(6px) scale(.6)}30%{opacity:1;transform:translateY(-6px) scale(1)}100%{opacity:0;transform:translateY(-18px) scale(.6)}}
.promo-card .content{flex:1}
.promo-card .title{font-weight:800;margin:0 0 4px 0}
.promo-card .body{color:rgba(255,255,255,0.82);font-size:0.95rem;margin:0}
.promo-card .cta{margin-left:12px;padding:8px 12px;border-radius:10px;border:none;background:linear-gradient(90deg,#ff6b9d,#ff1744);color:#fff;font-weight:800;cursor:pointer}
@keyframes promoIn{from{opacity:0;transform:translateX(-50%) translateY(-18px) scale(.98)}to{opacity:1;transform:translateX(-50%) translateY(0) scale(1)}}
@keyframes promoOut{from{opacity:1;transform:translateX(-50%) translateY(0) scale(1)}to{opacity:0;transform:translateX(-50%) translateY(-12px) scale(.98)}}
.promo-wrap.show{pointer-events:auto;animation:promoIn .36s cubic-bezier(.2,.9,.2,1) both}
.promo-wrap.hide{animation:promoOut .28s ease both}
.cookie-banner{position:fixed;left:16px;right:16px;bottom:16px;max-width:1100px;margin:0 auto;z-index:99999;display:flex;align-items:center;gap:12px;padding:12px 14px;border-radius:12px;background:linear-gradient(180deg, rgba(20,24,32,0.92), rgba(20,24,32,0.86));border:1px solid rgba(255,255,255,0.04);box-shadow:0 14px 48px rgba(0,0,0,0.6);backdrop-filter:blur(8px);opacity:0;transform:translateY(12px);transition:opacity .28s ease,transform .28s ease}
.cookie-banner.show{opacity:1;transform:translateY(0)}
.cookie-banner .cb-text{flex:1;color:var(--muted,#c4cbdc)}
.cookie-banner .cb-actions{display:flex;gap:8px}
.cb-btn{padding:8px 12px;border-radius:10px;border:1px solid rgba(255,255,255,0.04);background:transparent;color:var(--muted,#fff);cursor:pointer}
.cb-btn.primary{background:linear-gradient(90deg,#ffd27a,#ff6b9d);color:#000;border:none}
.transition-overlay{position:fixed;inset:0;display:grid;place-items:center;background:rgba(0,0,0,0.8);z-index:100000;opacity:0;pointer-events:none;transition:opacity .18s ease}
.transition-overlay.show{opacity:1;pointer-events:auto}
.transition-overlay img{max-width:46vw;max-height:60vh;border-radius:14px;box-shadow:0 28px 80px rgba(0,0,0,0.8);border:6px solid rgba(0,0,0,0.6)}
.transition-overlay .surround{position:absolute;inset:auto;width:260px;height:260px;border-radius:50%;box-shadow:0 0 120px rgba(255,200,120,0.06) inset, 0 0 36px rgba(255,23,68,0.06);mix-blend-mode:screen}
";

#[must_use]
pub fn stylesheet() -> String {
    format!("{COMPONENT_CSS}{}\n", a11y::visible_focus_css())
}

/// Append the stylesheet to `<head>` once. Returns `false` when it is already there.
///
/// # Errors
/// Returns [`UiError::Dom`] if the element cannot be created or attached.
pub fn inject(doc: &Document) -> Result<bool, UiError> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(false);
    }
    let style = dom::create_html(doc, "style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(&stylesheet()));
    let head = doc
        .head()
        .ok_or_else(|| UiError::Dom("document has no head".to_string()))?;
    head.append_child(&style).map_err(dom::dom_error)?;
    Ok(true)
}
