use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::versioning_preview::VersioningPreview;
use crate::pages::free_tools::RelatedTools;

#[function_component(VersioningPage)]
pub fn versioning_page() -> Html {
    html! {
        <div class="feature-page">
            <section class="feature-hero">
                <h1>{"Every version, in the order you want"}</h1>
                <p class="hero-subtitle">
                    {"Stack uploads into one file, drag them into order and mark the one that is live."}
                </p>
            </section>
            <section class="feature-demo">
                <VersioningPreview />
                <p class="feature-demo-hint">
                    {"Drag a row to reorder, or focus it and use space and the arrow keys. Click a row for options."}
                </p>
            </section>
            <div class="hero-cta-group">
                <Link<Route> to={Route::Compare} classes="forward-link">
                    {"← Compare two versions"}
                </Link<Route>>
            </div>
            <RelatedTools route={Route::Versioning} />
        </div>
    }
}
