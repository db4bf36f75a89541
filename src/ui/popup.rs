/// Popup UI for the video Q&A extension

use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlTextAreaElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::backend::{BackendClient, DEFAULT_ENDPOINT};
use crate::chat_data::{self, ChatMessage, Role};
use crate::tabs;
use crate::ui::components::Bubble;
use crate::video;

/// Popup lifecycle: the tab query on mount resolves Initializing into
/// either Active (video id captured, immutable) or Disabled (terminal).
#[derive(Clone, PartialEq)]
enum PopupState {
    Initializing,
    Disabled,
    Active { video_id: String },
}

/// Append-only chat log. A reducer rather than plain state so that an
/// append dispatched from an async response never clobbers a bubble
/// rendered after the request was issued.
#[derive(Default, PartialEq)]
struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Reducible for ChatLog {
    type Action = ChatMessage;

    fn reduce(self: Rc<Self>, message: ChatMessage) -> Rc<Self> {
        let mut messages = self.messages.clone();
        messages.push(message);
        Rc::new(ChatLog { messages })
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Backend chat endpoint; a prop so tests and local setups can point
    /// the popup elsewhere
    #[prop_or_else(default_endpoint)]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for AppProps {
    fn default() -> Self {
        AppProps {
            endpoint: default_endpoint(),
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(|| PopupState::Initializing);
    let chat_log = use_reducer(ChatLog::default);
    let draft = use_state(String::new);
    let awaiting = use_state(|| false);
    let chat_ref = use_node_ref();
    let client = use_memo(props.endpoint.clone(), |endpoint| {
        BackendClient::new(endpoint.clone())
    });

    // Resolve the video context once, on mount
    {
        let state = state.clone();
        let chat_log = chat_log.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let video_id = tabs::active_tab_url()
                    .await
                    .and_then(|url| video::extract_video_id(&url));

                match video_id {
                    Some(video_id) => state.set(PopupState::Active { video_id }),
                    None => {
                        chat_log.dispatch(ChatMessage::new(
                            Role::Bot,
                            chat_data::UNAVAILABLE_NOTICE.to_string(),
                            js_sys::Date::now(),
                        ));
                        state.set(PopupState::Disabled);
                    }
                }
            });
            || ()
        });
    }

    // Keep the newest bubble visible
    {
        let chat_ref = chat_ref.clone();
        use_effect_with(chat_log.messages.len(), move |_| {
            if let Some(chat) = chat_ref.cast::<Element>() {
                chat.set_scroll_top(chat.scroll_height());
            }
            || ()
        });
    }

    // Submit handler: user bubble renders and the field clears before the
    // request goes out; the answer (or the error string) arrives later
    let on_submit = {
        let state = state.clone();
        let chat_log = chat_log.clone();
        let draft = draft.clone();
        let awaiting = awaiting.clone();
        let client = client.clone();

        Callback::from(move |_: ()| {
            let PopupState::Active { video_id } = (*state).clone() else {
                return;
            };
            // One exchange outstanding at a time
            if *awaiting {
                return;
            }
            let Some(question) = chat_data::prepare_question(&draft) else {
                return;
            };

            chat_log.dispatch(ChatMessage::new(
                Role::User,
                question.clone(),
                js_sys::Date::now(),
            ));
            draft.set(String::new());
            awaiting.set(true);

            let chat_log = chat_log.clone();
            let awaiting = awaiting.clone();
            let client = client.clone();

            spawn_local(async move {
                let text = match client.ask(&video_id, &question).await {
                    Ok(answer) => answer,
                    Err(e) => {
                        log::error!("chat request failed: {e}");
                        chat_data::BACKEND_ERROR_MESSAGE.to_string()
                    }
                };

                chat_log.dispatch(ChatMessage::new(Role::Bot, text, js_sys::Date::now()));
                awaiting.set(false);
            });
        })
    };

    let on_ask = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    // Enter submits; Shift+Enter keeps its newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(input.value());
            }
        })
    };

    let input_disabled = !matches!(&*state, PopupState::Active { .. });
    let ask_disabled = input_disabled || *awaiting;
    let placeholder = match &*state {
        PopupState::Disabled => chat_data::UNAVAILABLE_PLACEHOLDER,
        _ => "Ask about this video...",
    };

    html! {
        <div class="popup">
            <h1 class="popup-title">{"Video Q&A"}</h1>

            <div class="chat" ref={chat_ref.clone()}>
                {for chat_log.messages.iter().map(|message| html! {
                    <Bubble key={message.id.to_string()} message={message.clone()} />
                })}
                if *awaiting {
                    <div class="bubble bot-message">
                        <Spinner />
                    </div>
                }
            </div>

            if matches!(&*state, PopupState::Initializing) {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }

            <div class="ask-row">
                <textarea
                    class="question-input"
                    value={(*draft).clone()}
                    placeholder={placeholder}
                    disabled={input_disabled}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <Button onclick={on_ask} disabled={ask_disabled} variant={ButtonVariant::Primary}>
                    {"Ask"}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_log_appends_in_order() {
        let log = Rc::new(ChatLog::default());

        let log = log.reduce(ChatMessage::new(Role::User, "first".to_string(), 1.0));
        let log = log.reduce(ChatMessage::new(Role::Bot, "second".to_string(), 2.0));

        assert_eq!(log.messages.len(), 2);
        assert_eq!(log.messages[0].text, "first");
        assert_eq!(log.messages[0].role, Role::User);
        assert_eq!(log.messages[1].text, "second");
        assert_eq!(log.messages[1].role, Role::Bot);
    }

    #[test]
    fn test_chat_log_never_mutates_earlier_entries() {
        let log = Rc::new(ChatLog::default());
        let log = log.reduce(ChatMessage::new(Role::User, "kept".to_string(), 1.0));
        let first_id = log.messages[0].id;

        let log = log.reduce(ChatMessage::new(Role::Bot, "new".to_string(), 2.0));

        assert_eq!(log.messages[0].id, first_id);
        assert_eq!(log.messages[0].text, "kept");
    }
}
