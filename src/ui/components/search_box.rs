use dioxus::prelude::*;
use tracing::debug;

/// Text held by the search box between keystrokes and submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDraft {
    query: String,
}

impl SearchDraft {
    /// Replace the text with the input's current value
    pub fn edit(&mut self, value: String) {
        self.query = value;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query to hand to the search callback, passed through unchanged
    pub fn submit(&self) -> String {
        self.query.clone()
    }
}

/// Search field with a button. `on_search` runs only when the button is
/// pressed, never while typing.
#[component]
pub fn SearchBox(on_search: EventHandler<String>) -> Element {
    let mut draft = use_signal(SearchDraft::default);
    let query = draft.read().query().to_string();

    rsx! {
        div { class: "m-6",
            div { class: "relative",
                div { class: "absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none",
                    svg {
                        class: "w-4 h-4 text-gray-500",
                        fill: "none",
                        view_box: "0 0 20 20",
                        path {
                            stroke: "currentColor",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "m19 19-4-4m0-7A7 7 0 1 1 1 8a7 7 0 0 1 14 0Z",
                        }
                    }
                }
                input {
                    r#type: "text",
                    class: "block w-full p-4 pl-10 text-sm text-gray-900 border border-gray-300 rounded-lg bg-gray-50 focus:ring-blue-500 focus:border-blue-500",
                    placeholder: "Search for films...",
                    required: true,
                    value: "{query}",
                    oninput: move |event: FormEvent| {
                        draft.write().edit(event.value());
                    },
                }
                button {
                    class: "text-white absolute right-2.5 bottom-2.5 bg-purple-700 hover:bg-purple-800 font-medium rounded-lg text-sm px-4 py-2",
                    onclick: move |_| {
                        let query = draft.read().submit();
                        debug!("Search submitted: {:?}", query);
                        on_search.call(query);
                    },
                    "Search"
                }
            }
        }
    }
}
