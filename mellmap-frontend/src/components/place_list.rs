use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};
use leptos::*;

use mellmap_boundary::{Place, PlaceId};
use mellmap_core::sort::sort_by_name;

fn locale_compare(a: &str, b: &str) -> Ordering {
    JsString::from(a)
        .locale_compare(b, &Array::new(), &Object::new())
        .cmp(&0)
}

#[component]
pub fn PlaceList(
    places: Signal<Vec<Place>>,
    on_edit: Callback<PlaceId>,
    on_delete: Callback<PlaceId>,
) -> impl IntoView {
    let sorted_places = create_memo(move |_| {
        let mut places = places.get();
        sort_by_name(&mut places, &locale_compare);
        places
    });

    view! {
      <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
        { move || sorted_places.with(|places| {
            if places.is_empty() {
                return view! { <p class="text-gray-500">"Нет заведений."</p> }.into_view();
            }
            places
              .iter()
              .map(|place| view! { <PlaceCard place=place.clone() on_edit on_delete /> })
              .collect_view()
          })
        }
      </div>
    }
}

#[component]
fn PlaceCard(place: Place, on_edit: Callback<PlaceId>, on_delete: Callback<PlaceId>) -> impl IntoView {
    let Place {
        id,
        name,
        district,
        category,
        address,
        ..
    } = place;
    view! {
      <div class="place-card p-4 rounded shadow-md">
        <h3 class="text-lg font-bold">{ name }</h3>
        <p><strong>"Округ: "</strong>{ district }</p>
        <p><strong>"Категория: "</strong>{ category }</p>
        <p><strong>"Адрес: "</strong>{ address }</p>
        <div class="mt-2 flex space-x-2">
          <button
            class="px-3 py-1 rounded bg-gray-100 hover:bg-gray-200"
            on:click=move |_| on_edit.call(id)
          >
            "Редактировать"
          </button>
          <button
            class="px-3 py-1 rounded bg-red-100 hover:bg-red-200"
            on:click=move |_| on_delete.call(id)
          >
            "Удалить"
          </button>
        </div>
      </div>
    }
}
