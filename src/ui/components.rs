/// Reusable UI components
use crate::chat_data::ChatMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BubbleProps {
    pub message: ChatMessage,
}

/// A single chat bubble, classed by the role it originates from so the
/// popup stylesheet can align and color it.
#[function_component(Bubble)]
pub fn bubble(props: &BubbleProps) -> Html {
    html! {
        <div class={classes!("bubble", props.message.role.css_class())}>
            {&props.message.text}
        </div>
    }
}
