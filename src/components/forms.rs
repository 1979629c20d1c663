use leptos::*;

/// Labeled text input with an optional server-side validation message,
/// shown beneath the field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let id = name.clone();
    let error_for_class = error.clone();

    view! {
        <div class="mb-4">
            <label for=id.clone() class="block text-sm font-medium text-fg mb-1">
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class=move || {
                    let border = if error_for_class.get().is_some() {
                        "border-status-error-border"
                    } else {
                        "border-border"
                    };
                    format!(
                        "block w-full rounded-md border px-3 py-2 text-sm bg-surface-elevated text-fg shadow-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus {}",
                        border
                    )
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="mt-1 text-sm text-status-error-text">{msg}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_error() {
        let html = render_to_string(move || {
            let (value, _set_value) = create_signal(String::from("Nocturnes"));
            view! {
                <TextField
                    label="Album title"
                    name="title"
                    value=value
                    on_input=Callback::new(|_value: String| {})
                    error=Some("The title field is required.".to_string())
                />
            }
        });
        assert!(html.contains("Album title"));
        assert!(html.contains("The title field is required."));
        assert!(html.contains("border-status-error-border"));
    }

    #[test]
    fn text_field_defaults_to_text_type() {
        let html = render_to_string(move || {
            let (value, _set_value) = create_signal(String::new());
            view! {
                <TextField
                    label="Email"
                    name="email"
                    value=value
                    on_input=Callback::new(|_value: String| {})
                />
            }
        });
        assert!(html.contains("type=\"text\""));
        assert!(!html.contains("border-status-error-border"));
    }
}
