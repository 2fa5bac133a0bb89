use yew::prelude::*;

use crate::sections::{about::About, contact::Contact, hero::Hero, services::Services};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub dark_mode: bool,
    pub scroll_to_section: Callback<String>,
}

/// Every section of the single-page site, top to bottom.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let dark_mode = props.dark_mode;

    html! {
        <main>
            <Hero {dark_mode} scroll_to_section={props.scroll_to_section.clone()} />
            <About {dark_mode} />
            <Services {dark_mode} />
            <Contact {dark_mode} />
        </main>
    }
}
