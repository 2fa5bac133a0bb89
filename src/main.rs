use log::info;
use yew::prelude::*;
use yew_hooks::use_local_storage;
use yew_router::prelude::*;

mod animation;
mod config;
mod navigation;
mod theme;
#[cfg(test)]
mod testing;
mod components {
    pub mod icon;
    pub mod motion;
}
mod common {
    pub mod footer;
    pub mod navbar;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod services;
}
mod pages {
    pub mod home;
}

use common::{footer::Footer, navbar::Navbar};
use pages::home::Home;
use theme::Themed;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

static PAGE: Themed<&str> = Themed::new("bg-gray-900", "bg-white");

fn switch(route: Route, dark_mode: bool, scroll_to_section: Callback<String>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {dark_mode} {scroll_to_section} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

/// Owns the theme and mobile menu flags and hands them down to the page.
#[function_component]
fn App() -> Html {
    let stored_dark_mode = use_local_storage::<bool>(config::DARK_MODE_STORAGE_KEY.to_string());
    let dark_mode = (*stored_dark_mode).unwrap_or(false);
    let is_menu_open = use_state(|| false);

    let toggle_dark_mode = {
        let stored_dark_mode = stored_dark_mode.clone();
        Callback::from(move |_: ()| {
            info!("Switching to {} mode", if dark_mode { "light" } else { "dark" });
            stored_dark_mode.set(!dark_mode);
        })
    };

    let set_is_menu_open = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |open: bool| is_menu_open.set(open))
    };

    let scroll_to_section = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |id: String| {
            navigation::scroll_to(&id);
            is_menu_open.set(false);
        })
    };

    let render = {
        let scroll_to_section = scroll_to_section.clone();
        Callback::from(move |route: Route| switch(route, dark_mode, scroll_to_section.clone()))
    };

    html! {
        <BrowserRouter>
            <div class={classes!("min-h-screen", "transition-colors", "duration-300", *PAGE.pick(dark_mode))}>
                <Navbar
                    {dark_mode}
                    {toggle_dark_mode}
                    is_menu_open={*is_menu_open}
                    {set_is_menu_open}
                    {scroll_to_section}
                />
                <Switch<Route> {render} />
                <Footer {dark_mode} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
