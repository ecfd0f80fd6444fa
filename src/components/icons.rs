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
        LuArrowLeft as Back, LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuSearch as Search, LuStar as Star,
        LuStar as StarFill, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsCheckLg as Check, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsSearch as Search, BsStar as Star,
        BsStarFill as StarFill, BsXLg as Close,
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

themed_icon!(SEARCH, Search);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(STAR, Star);
themed_icon!(STAR_FILL, StarFill);
themed_icon!(CLOSE, Close);
themed_icon!(BACK, Back);
themed_icon!(CHECK, Check);
