use log::{info, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::Callback;

/// Page sections reachable from the navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Services, Section::Contact];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Callback that asks `scroll_to_section` to scroll to this section,
    /// whatever event triggered it.
    pub fn link<E: 'static>(self, scroll_to_section: &Callback<String>) -> Callback<E> {
        scroll_to_section.reform(move |_: E| self.id().to_string())
    }
}

/// Smoothly scrolls the element with `id` into view.
pub fn scroll_to(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id {:?} to scroll to", id);
        return;
    };

    info!("Scrolling to section {}", id);
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn labels_are_capitalised_ids_in_order() {
        let labels: Vec<String> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Contact"]);
    }

    #[test]
    fn ids_are_lowercase() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "services", "contact"]);
    }

    #[test]
    fn link_emits_raw_id_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let scroll_to_section = {
            let calls = calls.clone();
            Callback::from(move |id: String| calls.borrow_mut().push(id))
        };

        Section::Services.link::<()>(&scroll_to_section).emit(());

        assert_eq!(*calls.borrow(), vec!["services".to_string()]);
    }
}
