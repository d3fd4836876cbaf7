use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::auth;
use crate::components::compare_preview::ComparePreview;
use crate::pages::free_tools::RelatedTools;

#[function_component(ComparePage)]
pub fn compare_page() -> Html {
    let on_sign_up = Callback::from(|_: ()| {
        auth::handle_account_required(&Route::Compare.to_path());
    });

    html! {
        <div class="feature-page">
            <section class="feature-hero">
                <h1>{"Compare versions side by side"}</h1>
                <p class="hero-subtitle">
                    {"Put two rounds of a design next to each other and leave feedback on exactly the one you mean."}
                </p>
            </section>
            <section class="feature-demo">
                <ComparePreview on_sign_up={on_sign_up} />
            </section>
            <div class="hero-cta-group">
                <Link<Route> to={Route::Versioning} classes="forward-link">
                    {"Next: keep every version in order →"}
                </Link<Route>>
            </div>
            <RelatedTools route={Route::Compare} />
        </div>
    }
}
