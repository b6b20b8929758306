use leptos::*;

use mellmap_boundary::Place;
use mellmap_core::breakfast;

use super::PhotoCarousel;

#[component]
pub fn DetailPanel(
    place: Place,
    on_close: Callback<()>,
    on_zoom: Callback<String>,
) -> impl IntoView {
    let breakfast_time = breakfast::describe_place(&place);
    let Place {
        name,
        district,
        address,
        price,
        rating,
        photos,
        ..
    } = place;

    view! {
      <aside class="place-details active">
        <button class="close-details" on:click=move |_| on_close.call(())>"×"</button>
        <h2 class="text-2xl font-bold">{ name }</h2>
        <p class="text-gray-700">{ format!("⭐️ {rating}") }</p>
        <PhotoCarousel photos on_zoom />
        <dl class="mt-4 grid grid-cols-1 gap-y-2">
          <div>
            <dt class="font-medium text-gray-900">"Адрес"</dt>
            <dd class="text-sm text-gray-500">{ address }</dd>
          </div>
          <div>
            <dt class="font-medium text-gray-900">"Цена"</dt>
            <dd class="text-sm text-gray-500">{ price }</dd>
          </div>
          <div>
            <dt class="font-medium text-gray-900">"Округ"</dt>
            <dd class="text-sm text-gray-500">{ district }</dd>
          </div>
          <div>
            <dt class="font-medium text-gray-900">"Завтрак"</dt>
            <dd class="text-sm text-gray-500">{ breakfast_time }</dd>
          </div>
        </dl>
        <section class="mt-4">
          <h3 class="font-semibold">"Отзывы"</h3>
          <p class="text-gray-500">"Пока нет отзывов."</p>
        </section>
      </aside>
    }
}

#[component]
pub fn ZoomOverlay(photo: String, on_close: Callback<()>) -> impl IntoView {
    // Clicks on the backdrop and on the photo itself both close the overlay.
    view! {
      <div class="zoom-modal active" on:click=move |_| on_close.call(())>
        <img class="zoomed-photo" src=photo />
      </div>
    }
}
