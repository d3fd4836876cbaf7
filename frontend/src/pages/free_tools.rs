use yew::prelude::*;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolLink {
    pub title: &'static str,
    pub href: &'static str,
    pub blurb: &'static str,
}

const IMAGE_COMPARE: ToolLink = ToolLink {
    title: "Image Compare",
    href: "/tools/image-compare",
    blurb: "Drop two images in and flick between them side by side.",
};

const PDF_MARKUP: ToolLink = ToolLink {
    title: "PDF Markup",
    href: "/tools/pdf-markup",
    blurb: "Pin comments straight onto any page of a PDF.",
};

const VIDEO_FRAME_GRABBER: ToolLink = ToolLink {
    title: "Video Frame Grabber",
    href: "/tools/video-frame-grabber",
    blurb: "Export a still from any timecode to share with the team.",
};

const VERSION_NAMING: ToolLink = ToolLink {
    title: "File Version Namer",
    href: "/tools/version-namer",
    blurb: "Stop shipping final_final_v3. Generate consistent file names.",
};

const FEEDBACK_TEMPLATE: ToolLink = ToolLink {
    title: "Feedback Brief Template",
    href: "/tools/feedback-template",
    blurb: "A one-page template for clear, actionable creative feedback.",
};

pub fn related_tools(route: &Route) -> &'static [ToolLink] {
    match route {
        Route::Compare => &[IMAGE_COMPARE, FEEDBACK_TEMPLATE, PDF_MARKUP],
        Route::Versioning => &[VERSION_NAMING, VIDEO_FRAME_GRABBER, IMAGE_COMPARE],
        Route::Home => &[IMAGE_COMPARE, PDF_MARKUP, VIDEO_FRAME_GRABBER, VERSION_NAMING],
        Route::NotFound => &[],
    }
}

#[derive(Properties, PartialEq)]
pub struct RelatedToolsProps {
    pub route: Route,
}

#[function_component(RelatedTools)]
pub fn related_tools_section(props: &RelatedToolsProps) -> Html {
    let tools = related_tools(&props.route);
    if tools.is_empty() {
        return html! {};
    }

    html! {
        <section class="related-tools">
            <h2>{"Free tools for creative teams"}</h2>
            <div class="related-tools-grid">
                { for tools.iter().map(|tool| html! {
                    <a class="related-tool" href={tool.href}>
                        <h3>{tool.title}</h3>
                        <p>{tool.blurb}</p>
                    </a>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_pages_have_tools() {
        for route in [Route::Home, Route::Compare, Route::Versioning] {
            assert!(!related_tools(&route).is_empty(), "{:?}", route);
        }
        assert!(related_tools(&Route::NotFound).is_empty());
    }

    #[test]
    fn no_tool_repeats_within_a_page() {
        for route in [Route::Home, Route::Compare, Route::Versioning] {
            let tools = related_tools(&route);
            let hrefs: HashSet<_> = tools.iter().map(|t| t.href).collect();
            assert_eq!(hrefs.len(), tools.len(), "{:?}", route);
            assert!(tools.iter().all(|t| t.href.starts_with("/tools/")));
        }
    }
}
