use crate::actions;
use crate::components::{
    ChatComposer, ChatLog, PageTree, ReplyIndicator, SelectionToolbar, SpaceList,
};
use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yewdux::prelude::{use_dispatch, use_selector};

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let title = use_selector(|state: &AppState| state.space_title().map(str::to_string));
    let can_send = use_selector(|state: &AppState| state.workspace.controls().can_send);
    let composer_text = use_state(String::new);

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            actions::load_spaces(dispatch);
            || ()
        });
    }

    let on_text_change = {
        let composer_text = composer_text.clone();
        Callback::from(move |value: String| composer_text.set(value))
    };

    let on_submit = {
        let composer_text = composer_text.clone();
        Callback::from(move |()| {
            if actions::send_message(dispatch.clone(), &composer_text) {
                composer_text.set(String::new());
            }
        })
    };

    html! {
        <Layout title={(*title).clone()}>
            <aside class="w-64 border-r border-base-300 flex flex-col">
                <h2 class="p-3 font-semibold border-b border-base-300">{"Spaces"}</h2>
                <div class="flex-1 overflow-y-auto">
                    <SpaceList />
                </div>
            </aside>
            <section class="w-96 border-r border-base-300 flex flex-col">
                <SelectionToolbar />
                <div id="tree" class="flex-1 overflow-y-auto p-2">
                    <PageTree />
                </div>
            </section>
            <section class="flex-1 flex flex-col min-w-0">
                <ChatLog />
                <div class="px-4">
                    <ReplyIndicator />
                </div>
                <div class="border-t border-base-300 p-4 bg-base-200">
                    <ChatComposer
                        text={(*composer_text).clone()}
                        {on_text_change}
                        {on_submit}
                        disabled={!*can_send}
                        placeholder="Ask about the selected pages (Enter to send, Shift+Enter for newline)"
                    />
                </div>
            </section>
        </Layout>
    }
}
