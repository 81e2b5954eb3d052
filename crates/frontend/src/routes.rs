use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::admin::AdminPage;
use crate::pages::landing::LandingPage;

/// Two routes: the public landing page and the admin panel. Anything else
/// goes back to the landing page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/admin") view=AdminPage />
            </Routes>
        </Router>
    }
}
