use leptos::*;

use mellmap_boundary::{BreakfastTime, PlaceId, PlaceSummary};
use mellmap_core::{breakfast, filter::PlaceFilter};

#[component]
pub fn FilterBar(
    filter: RwSignal<PlaceFilter>,
    districts: Signal<Vec<String>>,
    on_lucky: Callback<()>,
    lucky_pending: Signal<bool>,
) -> impl IntoView {
    let district = create_rw_signal(String::new());
    let breakfast_time = create_rw_signal(String::new());

    let apply = move || {
        let next = PlaceFilter::from_selection(&district.get_untracked(), &breakfast_time.get_untracked());
        log::debug!("Apply filter {next:?}");
        filter.set(next);
    };

    view! {
      <div class="flex flex-wrap items-center gap-4 p-4">
        <select
          class="py-2 px-3 bg-gray-50 rounded"
          on:change=move |ev| {
            district.set(event_target_value(&ev));
            apply();
          }
        >
          <option value="">"Все округа"</option>
          { move || districts
              .get()
              .into_iter()
              .map(|d| {
                let selected = d.clone();
                view! {
                  <option value=d.clone() prop:selected=move || district.with(|v| *v == selected)>{ d }</option>
                }
              })
              .collect_view()
          }
        </select>
        <select
          class="py-2 px-3 bg-gray-50 rounded"
          on:change=move |ev| {
            breakfast_time.set(event_target_value(&ev));
            apply();
          }
        >
          <option value="">"Любое время"</option>
          { BreakfastTime::KNOWN
              .iter()
              .map(|t| view! { <option value=t.as_str().to_owned()>{ breakfast::option_label(t).to_owned() }</option> })
              .collect_view()
          }
        </select>
        <button
          class="px-4 py-2 rounded shadow-md bg-blue-200 hover:bg-blue-600 hover:text-white"
          prop:disabled=move || lucky_pending.get()
          on:click=move |_| on_lucky.call(())
        >
          "Мне повезёт"
        </button>
      </div>
    }
}

#[component]
pub fn RandomPicks(picks: Signal<Vec<PlaceSummary>>, on_select: Callback<PlaceId>) -> impl IntoView {
    view! {
      <Show when=move || picks.with(|p| !p.is_empty())>
        <div class="flex flex-wrap items-center gap-2 px-4 pb-4">
          <span class="text-sm text-gray-500">"Случайные места:"</span>
          <For
            each=move || picks.get()
            key=|pick| pick.id
            let:pick
          >
            <button
              class="text-xs bg-gray-100 text-gray-600 rounded mr-1 p-1 hover:bg-gray-200"
              on:click=move |_| on_select.call(pick.id)
            >
              { pick.name.clone() }
              " · "
              { breakfast::describe(&pick.breakfast_time, pick.breakfast_hours.as_deref()) }
            </button>
          </For>
        </div>
      </Show>
    }
}
