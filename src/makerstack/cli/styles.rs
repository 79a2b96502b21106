use console::Style;
use once_cell::sync::Lazy;

pub static BRAND: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MATCH: Lazy<Style> = Lazy::new(|| Style::new().black().on_yellow());
pub static KIND: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static META: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static BAR_FILLED: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static BAR_EMPTY: Lazy<Style> = Lazy::new(|| Style::new().color256(240));

/// Applies `style`, forcing color on or off when `use_color` is set and
/// leaving the decision to terminal detection otherwise.
pub fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(force) => style.clone().force_styling(force).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}
