use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-sky-500 to-indigo-500 text-white hover:from-sky-600 hover:to-indigo-600 focus:ring-sky-500",
        ButtonVariant::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    let label = children();

    view! {
        <button type=button_type class=classes disabled=move || loading.get()>
            <span
                class="flex items-center justify-center gap-2"
                class:hidden=move || !loading.get()
            >
                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
            <span class:hidden=move || loading.get()>{label}</span>
        </button>
    }
}
