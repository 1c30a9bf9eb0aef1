// Linkdock services
// Services provide supporting functionality: search sources, site settings,
// AI configuration, icon cache, import/export, popup debouncing.

pub mod ai_config;
pub mod hover_popup;
pub mod icon_cache;
pub mod import_export;
pub mod search_engine;
pub mod site_settings;
