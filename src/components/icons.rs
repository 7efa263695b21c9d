//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAward as Award, LuCircleAlert as Alert, LuCircleCheck as Connected, LuCoins as Coins,
        LuCopy as Copy, LuExternalLink as ExternalLink, LuGift as Gift, LuLogOut as LogOut,
        LuShoppingCart as Cart, LuTrendingUp as TrendingUp, LuUsers as Users, LuWallet as Wallet,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsAward as Award, BsBoxArrowRight as LogOut, BsBoxArrowUpRight as ExternalLink,
        BsCart as Cart, BsCheckCircleFill as Connected, BsClipboard as Copy, BsCoin as Coins,
        BsExclamationCircle as Alert, BsGift as Gift, BsGraphUpArrow as TrendingUp,
        BsPeople as Users, BsWallet2 as Wallet, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(WALLET, Wallet);
themed_icon!(CONNECTED, Connected);
themed_icon!(ALERT, Alert);
themed_icon!(COPY, Copy);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(LOG_OUT, LogOut);
themed_icon!(CLOSE, Close);
themed_icon!(COINS, Coins);
themed_icon!(AWARD, Award);
themed_icon!(CART, Cart);
themed_icon!(TRENDING_UP, TrendingUp);
themed_icon!(USERS, Users);
themed_icon!(GIFT, Gift);

/// Icon for a feature card, by feature id.
pub fn feature_icon(id: &str) -> Icon {
    match id {
        "purchase" => CART,
        "earn" => COINS,
        "nft" => AWARD,
        "stake" => TRENDING_UP,
        "referral" => USERS,
        "airdrop" => GIFT,
        _ => WALLET,
    }
}
