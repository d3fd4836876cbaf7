use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod auth;
mod config;
mod device;
mod preview {
    pub mod reorder;
    pub mod sequencer;
}
mod components {
    pub mod compare_preview;
    pub mod versioning_preview;
}
mod pages {
    pub mod compare;
    pub mod free_tools;
    pub mod home;
    pub mod versioning;
}

use auth::is_logged_in;
use pages::{
    compare::ComparePage,
    home::Home,
    versioning::VersioningPage,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/platform/compare")]
    Compare,
    #[at("/platform/versioning")]
    Versioning,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Compare => {
            info!("Rendering Compare page");
            html! { <ComparePage /> }
        },
        Route::Versioning => {
            info!("Rendering Versioning page");
            html! { <VersioningPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let logged_in = props.logged_in;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                if let Some(win) = web_sys::window() {
                    if let Ok(scroll_y) = win.scroll_y() {
                        is_scrolled.set(scroll_y > 80.0);
                    }
                }
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"frameproof"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Compare} classes="nav-link">
                            {"Compare"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Versioning} classes="nav-link">
                            {"Versioning"}
                        </Link<Route>>
                    </div>
                    {
                        if logged_in {
                            html! {
                                <a href={config::get_app_url()} class="nav-login-button">
                                    {"Open app"}
                                </a>
                            }
                        } else {
                            html! {
                                <a href={config::get_signup_url()} class="nav-login-button">
                                    {"Sign up free"}
                                </a>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let logged_in = use_state(|| is_logged_in());

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
