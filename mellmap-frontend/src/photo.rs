//! Browser side of the photo upload pipeline.

use anyhow::{anyhow, Context as _};
use gloo_file::{futures::read_as_data_url, File, FileList};
use leptos::document;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, HtmlInputElement};

use mellmap_core::photo::{
    process_in_order, PhotoFailure, PhotoFile, JPEG_QUALITY, REENCODED_MIME_TYPE,
};

use crate::dialog;

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

/// The files currently selected in `input`, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<(PhotoFile, File)> {
    let Some(files) = input.files() else {
        return vec![];
    };
    FileList::from(files)
        .iter()
        .map(|file| {
            let meta = PhotoFile {
                name: file.name(),
                mime_type: file.raw_mime_type(),
                size: file.size(),
            };
            (meta, file.clone())
        })
        .collect()
}

pub fn clear_selection(input: &HtmlInputElement) {
    input.set_value("");
}

async fn decode(data_url: &str) -> anyhow::Result<HtmlImageElement> {
    let img = HtmlImageElement::new().map_err(js_error)?;
    img.set_src(data_url);
    JsFuture::from(img.decode())
        .await
        .map_err(js_error)
        .context("image decoding failed")?;
    Ok(img)
}

fn encode_jpeg(img: &HtmlImageElement) -> anyhow::Result<String> {
    let canvas = document()
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("not a canvas element"))?;
    canvas.set_width(img.natural_width());
    canvas.set_height(img.natural_height());
    let ctx = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected rendering context"))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(js_error)?;
    canvas
        .to_data_url_with_type_and_encoder_options(
            REENCODED_MIME_TYPE,
            &JsValue::from_f64(JPEG_QUALITY),
        )
        .map_err(js_error)
}

async fn reencode(meta: &PhotoFile, file: &File) -> Result<String, (PhotoFailure, anyhow::Error)> {
    let name = meta.name.clone();
    let data_url = read_as_data_url(file)
        .await
        .map_err(|err| (PhotoFailure::Read { name: name.clone() }, anyhow!(err)))?;
    let img = decode(&data_url)
        .await
        .map_err(|err| (PhotoFailure::Decode { name: name.clone() }, err))?;
    encode_jpeg(&img).map_err(|err| (PhotoFailure::Decode { name }, err))
}

/// Re-encodes every file as JPEG at its original pixel size.
///
/// Failed files are reported to the user and left out;
/// the others keep their selection order.
pub async fn reencode_photos(files: Vec<(PhotoFile, File)>) -> Vec<String> {
    process_in_order(files, |(meta, file)| async move {
        match reencode(&meta, &file).await {
            Ok(photo) => {
                log::debug!("Re-encoded photo \"{}\"", meta.name);
                Some(photo)
            }
            Err((failure, err)) => {
                log::error!("{failure}: {err:#}");
                dialog::alert(&failure.to_string());
                None
            }
        }
    })
    .await
    .into_iter()
    .flatten()
    .collect()
}
