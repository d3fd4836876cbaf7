use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::pages::free_tools::RelatedTools;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Creative review without the email chains"}</h1>
                    <p class="hero-subtitle">
                        {"Share work, collect feedback on the exact pixel and keep every version in one place."}
                    </p>
                </div>
            </header>
            <div class="feature-block">
                <div class="feature-content">
                    <h2>{"Side-by-side review"}</h2>
                    <p>{"Watch a review play out between two rounds of a design, then try it yourself."}</p>
                    <Link<Route> to={Route::Compare} classes="forward-link">
                        <button class="hero-cta">{"See compare in action"}</button>
                    </Link<Route>>
                </div>
            </div>
            <div class="feature-block">
                <div class="feature-content">
                    <h2>{"Version stacks"}</h2>
                    <p>{"Drag versions into order and choose which one your reviewers see."}</p>
                    <Link<Route> to={Route::Versioning} classes="forward-link">
                        <button class="hero-cta">{"Try reordering versions"}</button>
                    </Link<Route>>
                </div>
            </div>
            <RelatedTools route={Route::Home} />
        </div>
    }
}
