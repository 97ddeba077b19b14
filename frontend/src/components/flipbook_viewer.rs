use yew::prelude::*;

/// Third-party PDF-to-flipbook renderer. We only build the URL; rendering
/// happens entirely inside the iframe.
const FLIPBOOK_BASE: &str = "https://heyzine.com/api1?pdf=";

#[derive(Properties, PartialEq)]
pub struct FlipbookViewerProps {
    pub pdf_url: String,
    pub title: String,
}

#[function_component(FlipbookViewer)]
pub fn flipbook_viewer(props: &FlipbookViewerProps) -> Html {
    let src = format!("{}{}", FLIPBOOK_BASE, urlencoding::encode(&props.pdf_url));

    html! {
        <div class="flipbook-viewer">
            <iframe
                src={src}
                title={format!("{} (flipbook)", props.title)}
                allowfullscreen={true}
                loading="lazy"
            />
        </div>
    }
}
