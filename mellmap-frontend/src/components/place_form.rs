use leptos::{html::Input, *};

use mellmap_boundary::BreakfastTime;
use mellmap_core::{
    breakfast,
    district,
    form::{FormSession, PlaceField},
    photo::ACCEPTED_MIME_TYPES,
};

use crate::photo;

#[component]
fn TextField(
    session: RwSignal<FormSession>,
    field: PlaceField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
      <label class="block mb-3">
        <span class="block text-sm font-medium text-gray-700">{ label }</span>
        <input
          class="w-full py-2 px-3 bg-gray-50 rounded border"
          type=input_type
          step=step
          required=required
          prop:value=move || session.with(|s| s.form.field(field).to_owned())
          on:input=move |ev| session.update(|s| s.form.set_field(field, event_target_value(&ev)))
        />
      </label>
    }
}

#[component]
pub fn PlaceEditor(
    session: RwSignal<FormSession>,
    file_input: NodeRef<Input>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    saving: Signal<bool>,
) -> impl IntoView {
    let mode = create_memo(move |_| session.with(FormSession::mode));
    let shows_hours = create_memo(move |_| session.with(|s| s.form.shows_breakfast_hours()));
    let existing_photos =
        create_memo(move |_| session.with(|s| s.existing_photos_preview().map(<[String]>::to_vec)));
    let district_choices =
        create_memo(move |_| session.with(|s| district::choices([s.form.district.as_str()])));
    let unknown_breakfast_time = create_memo(move |_| {
        session.with(|s| match &s.form.breakfast_time {
            BreakfastTime::Other(value) => Some(value.clone()),
            _ => None,
        })
    });

    let remove_existing_photos = move |_: ev::MouseEvent| {
        if let Some(input) = file_input.get_untracked() {
            photo::clear_selection(&input);
        }
        session.update(FormSession::remove_existing_photos);
        log::debug!("Existing photos will be removed on save");
    };

    view! {
      <form
        class="p-4 rounded shadow-md"
        on:submit=move |ev| {
          ev.prevent_default();
          on_submit.call(());
        }
      >
        <h2 class="text-xl font-bold mb-4">{ move || mode.get().title() }</h2>
        <input
          type="hidden"
          prop:value=move || session.with(|s| s.form.edit_id.map(|id| id.to_string()).unwrap_or_default())
        />
        <TextField session field=PlaceField::Name label="Название" required=true />
        <label class="block mb-3">
          <span class="block text-sm font-medium text-gray-700">"Округ"</span>
          <select
            class="w-full py-2 px-3 bg-gray-50 rounded border"
            on:change=move |ev| session.update(|s| s.form.set_field(PlaceField::District, event_target_value(&ev)))
          >
            { move || district_choices
                .get()
                .into_iter()
                .map(|district| {
                  let selected = district.clone();
                  view! {
                    <option
                      value=district.clone()
                      prop:selected=move || session.with(|s| s.form.district == selected)
                    >
                      { district }
                    </option>
                  }
                })
                .collect_view()
            }
          </select>
        </label>
        <TextField session field=PlaceField::Category label="Категория" required=true />
        <TextField session field=PlaceField::Lat label="Широта" input_type="number" step="any" required=true />
        <TextField session field=PlaceField::Lng label="Долгота" input_type="number" step="any" required=true />
        <TextField session field=PlaceField::Address label="Адрес" required=true />
        <TextField session field=PlaceField::Website label="Сайт" input_type="url" />
        <TextField session field=PlaceField::Price label="Цена, ₽" input_type="number" step="any" />
        <TextField session field=PlaceField::Rating label="Рейтинг" input_type="number" step="0.1" />
        <label class="block mb-3">
          <span class="block text-sm font-medium text-gray-700">"Описание"</span>
          <textarea
            class="w-full py-2 px-3 bg-gray-50 rounded border"
            prop:value=move || session.with(|s| s.form.description.clone())
            on:input=move |ev| session.update(|s| s.form.set_field(PlaceField::Description, event_target_value(&ev)))
          ></textarea>
        </label>
        <label class="block mb-3">
          <span class="block text-sm font-medium text-gray-700">"Время завтрака"</span>
          <select
            class="w-full py-2 px-3 bg-gray-50 rounded border"
            on:change=move |ev| session.update(|s| s.form.set_field(PlaceField::BreakfastTime, event_target_value(&ev)))
          >
            { BreakfastTime::KNOWN
                .iter()
                .map(|time| {
                  let value = time.as_str().to_owned();
                  let selected = time.clone();
                  view! {
                    <option
                      value=value
                      prop:selected=move || session.with(|s| s.form.breakfast_time == selected)
                    >
                      { breakfast::option_label(time).to_owned() }
                    </option>
                  }
                })
                .collect_view()
            }
            { move || unknown_breakfast_time.get().map(|value| view! {
                <option value=value.clone() selected=true>{ value }</option>
              })
            }
          </select>
        </label>
        <Show when=move || shows_hours.get()>
          <TextField session field=PlaceField::BreakfastHours label="Часы завтрака" />
        </Show>
        <label class="block mb-3">
          <span class="block text-sm font-medium text-gray-700">"Фото (JPG или PNG, до 1 МБ)"</span>
          <input
            type="file"
            accept=ACCEPTED_MIME_TYPES.join(",")
            multiple=true
            node_ref=file_input
          />
        </label>
        { move || existing_photos.get().map(|photos| view! {
            <div class="existing-photos mb-3">
              <p class="text-sm font-medium text-gray-700">"Текущие фото:"</p>
              { if photos.is_empty() {
                  view! { <p class="text-gray-500">"Нет фото"</p> }.into_view()
                } else {
                  photos
                    .into_iter()
                    .map(|src| view! { <img class="inline-block w-20 h-20 object-cover mr-1" src=src /> })
                    .collect_view()
                }
              }
              <button
                type="button"
                class="mt-2 px-3 py-1 rounded bg-red-100 hover:bg-red-200"
                on:click=remove_existing_photos
              >
                "Удалить все фото"
              </button>
            </div>
          })
        }
        <div class="flex space-x-2">
          <button
            type="submit"
            class="px-4 py-2 rounded shadow-md bg-blue-200 hover:bg-blue-600 hover:text-white"
            prop:disabled=move || saving.get()
          >
            { move || mode.get().submit_label() }
          </button>
          <button
            type="button"
            class="px-4 py-2 rounded bg-gray-100 hover:bg-gray-200"
            on:click=move |_| on_cancel.call(())
          >
            "Отмена"
          </button>
        </div>
      </form>
    }
}
