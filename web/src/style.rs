// Inline style fragments shared between views.

pub const PRIMARY: &str = "#0ea5e9";
pub const MUTED: &str = "#64748b";

pub const PAGE: &str = "min-height: 100vh; background-color: #ffffff; color: #0f172a; font-family: Arial, sans-serif;";
pub const CONTAINER: &str = "max-width: 1200px; margin: 0 auto; padding: 0px 16px;";

pub const CARD: &str = "border: 1px solid #e2e8f0; border-radius: 8px; padding: 24px; background-color: white; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);";
pub const CARD_GRID: &str = "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px;";
pub const ICON_TILE: &str = "width: 48px; height: 48px; border-radius: 8px; background-color: rgba(14, 165, 233, 0.1); display: flex; align-items: center; justify-content: center;";

pub const BUTTON_PRIMARY: &str = "padding: 8px 14px; background-color: #0ea5e9; color: white; border: none; border-radius: 6px; font-size: 14px; cursor: pointer; display: inline-flex; align-items: center; gap: 8px;";
pub const BUTTON_GHOST: &str = "padding: 8px 14px; background-color: transparent; color: #0f172a; border: none; border-radius: 6px; font-size: 14px; cursor: pointer; display: inline-flex; align-items: center; gap: 8px;";
pub const BUTTON_OUTLINE: &str = "padding: 12px 20px; background-color: white; color: #0f172a; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 16px; cursor: pointer;";
pub const BUTTON_LARGE: &str = "padding: 12px 20px; background-color: #0ea5e9; color: white; border: none; border-radius: 6px; font-size: 16px; cursor: pointer; display: inline-flex; align-items: center; gap: 8px;";

pub const LINK_RESET: &str = "text-decoration: none; color: inherit;";
