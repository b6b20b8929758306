use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">
          <div class="pt-2 font-bold">
            <A href=Page::Catalog.path()>"Завтраки на карте"</A>
          </div>
          <div class="flex space-x-6">
            <A href=Page::Catalog.path() class="hover:text-gray-500">"Карта"</A>
            <A href=Page::Admin.path() class="hover:text-gray-500">"Админка"</A>
          </div>
        </div>
      </nav>
    }
}
