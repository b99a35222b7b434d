use wasm_bindgen::prelude::*;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub title: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |()| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            && html_element.set_attribute("data-theme", "dark").is_err()
        {
            log("Unable to set theme attribute");
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-base-100 text-base-content">
            <nav class="navbar bg-base-300 px-4">
                <span class="text-lg font-semibold">{"DocChat"}</span>
                {
                    props.title.clone().map_or_else(
                        || html! {},
                        |title| html! {
                            <span id="spaceTitle" class="ml-4 text-base-content/70 truncate">{ title }</span>
                        },
                    )
                }
            </nav>
            <main class="flex-1 flex min-h-0">
                { props.children.clone() }
            </main>
        </div>
    }
}
