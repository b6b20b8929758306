use leptos::*;
use leptos_router::*;

use mellmap_frontend_api as api;

mod components;
mod dialog;
mod pages;
mod photo;

use components::*;
use pages::*;

const DEFAULT_API_URL: &str = match option_env!("MELLMAP_API_URL") {
    Some(url) => url,
    None => "/api",
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- init API -- //

    let places_api = api::PlacesApi::new(DEFAULT_API_URL);
    log::debug!("Using API at {DEFAULT_API_URL}");

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Catalog.path()
              view=move || view! { <Catalog places_api /> }
            />
            <Route
              path=Page::Admin.path()
              view=move || view! { <Admin places_api /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
