use log::Level;

pub const BRAND_NAME: &str = "Anjem MediCare Solutions";
pub const BRAND_SHORT: &str = "Anjem MediCare";

pub const PHONE_PRIMARY: &str = "+254703919412";
pub const PHONE_PRIMARY_DISPLAY: &str = "+254 703 919 412";
pub const PHONE_SECONDARY: &str = "+254724551516";
pub const PHONE_SECONDARY_DISPLAY: &str = "+254 724 551 516";
pub const EMAIL: &str = "anjemmedicaresolutions@gmail.com";
pub const LOCATION: &str = "Nairobi, Kenya";

/// Local storage key holding the visitor's theme choice as a JSON boolean.
pub const DARK_MODE_STORAGE_KEY: &str = "anjem-dark-mode";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn tel_href(number: &str) -> String {
    format!("tel:{}", number)
}

pub fn mailto_href(address: &str) -> String {
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_keep_literal_endpoints() {
        assert_eq!(tel_href(PHONE_PRIMARY), "tel:+254703919412");
        assert_eq!(tel_href(PHONE_SECONDARY), "tel:+254724551516");
        assert_eq!(mailto_href(EMAIL), "mailto:anjemmedicaresolutions@gmail.com");
    }

    #[test]
    fn display_numbers_match_dial_numbers() {
        let strip = |s: &str| s.replace(' ', "");
        assert_eq!(strip(PHONE_PRIMARY_DISPLAY), PHONE_PRIMARY);
        assert_eq!(strip(PHONE_SECONDARY_DISPLAY), PHONE_SECONDARY);
    }
}
