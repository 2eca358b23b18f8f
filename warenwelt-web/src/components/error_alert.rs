use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    /// Nothing is rendered while the message is `None`.
    #[prop_or_default]
    pub message: Option<String>,
}

/// Red banner for failed loads and rejected saves.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    html! {
        <div class="alert alert-error my-2" role="alert">
            <span>{ message }</span>
        </div>
    }
}
