use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Appearance"</h2>
            <p>
                "Pick a theme from the menu in the top corner. "
                "Dark and Light are remembered in this browser; "
                "System follows your operating system's setting at the time you choose it."
            </p>
        </div>
    }
}
