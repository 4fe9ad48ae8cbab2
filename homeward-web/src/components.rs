pub mod cookie_banner;
pub mod promo_card;
