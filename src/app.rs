use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::navigation::Navigation;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Navigation />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
