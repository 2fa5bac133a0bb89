/// A pair of parallel style tables, one per theme.
///
/// Only colours, backgrounds and borders go in here. Anything that
/// affects layout belongs in the markup so both themes share it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Themed<T> {
    pub dark: T,
    pub light: T,
}

impl<T> Themed<T> {
    pub const fn new(dark: T, light: T) -> Self {
        Themed { dark, light }
    }

    pub fn pick(&self, dark_mode: bool) -> &T {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Class strings shared by every section heading and body copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTone {
    pub heading: &'static str,
    pub body: &'static str,
}

pub static TEXT: Themed<TextTone> = Themed::new(
    TextTone { heading: "text-white", body: "text-gray-300" },
    TextTone { heading: "text-gray-900", body: "text-gray-600" },
);

/// Gradient applied to the brand word in headings, same in both themes.
pub const BRAND_GRADIENT_TEXT: &str =
    "bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent";

/// Background of the heart badge next to the brand name.
pub const BRAND_BADGE: &str = "p-2 rounded-xl bg-gradient-to-r from-blue-500 to-purple-600";
