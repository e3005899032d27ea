use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            name="q"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                   text-white placeholder-slate-500
                   focus:outline-none focus:ring-2 focus:ring-sky-500 focus:border-transparent
                   transition-all"
        />
    }
}

/// Select whose first option is always "all"
#[component]
pub fn SelectFilter(
    #[prop(into)] name: String,
    #[prop(into)] all_label: String,
    options: Vec<(String, String)>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <select
            name=name
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
            class="px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white
                   focus:outline-none focus:ring-2 focus:ring-sky-500"
        >
            <option value="all">{all_label}</option>
            {options
                .into_iter()
                .map(|(v, label)| view! { <option value=v>{label}</option> })
                .collect_view()}
        </select>
    }
}
