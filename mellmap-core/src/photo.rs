//! Screening and joining of photo uploads.
//!
//! Every accepted file runs through its own read, decode and
//! re-encode pipeline. The pipelines run concurrently but the
//! results are collected in selection order.

use std::future::Future;

use futures::future::join_all;
use thiserror::Error;

/// Largest accepted file (1 MiB).
pub const MAX_PHOTO_SIZE: u64 = 1024 * 1024;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Output format of the re-encoding step.
pub const REENCODED_MIME_TYPE: &str = "image/jpeg";

pub const JPEG_QUALITY: f64 = 0.8;

/// Metadata of a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhotoRejection {
    #[error("Фото \"{name}\" должно быть в формате JPG или PNG.")]
    UnsupportedType { name: String },
    #[error("Фото \"{name}\" слишком большое. Максимум 1 МБ.")]
    TooLarge { name: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhotoFailure {
    #[error("Ошибка при чтении фото \"{name}\"")]
    Read { name: String },
    #[error("Ошибка при загрузке фото \"{name}\"")]
    Decode { name: String },
}

pub fn check_photo(file: &PhotoFile) -> Result<(), PhotoRejection> {
    let PhotoFile {
        name,
        mime_type,
        size,
    } = file;
    if !ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| mime_type.starts_with(accepted))
    {
        return Err(PhotoRejection::UnsupportedType { name: name.clone() });
    }
    if *size > MAX_PHOTO_SIZE {
        return Err(PhotoRejection::TooLarge { name: name.clone() });
    }
    Ok(())
}

#[derive(Debug)]
pub struct Screening<T> {
    /// In selection order.
    pub accepted: Vec<(PhotoFile, T)>,
    pub rejected: Vec<PhotoRejection>,
}

/// Splits the selected files into accepted and rejected ones.
///
/// A rejected file never affects its siblings.
pub fn screen_photos<T>(files: impl IntoIterator<Item = (PhotoFile, T)>) -> Screening<T> {
    let mut accepted = vec![];
    let mut rejected = vec![];
    for (meta, file) in files {
        match check_photo(&meta) {
            Ok(()) => accepted.push((meta, file)),
            Err(rejection) => {
                log::info!("{rejection}");
                rejected.push(rejection);
            }
        }
    }
    Screening { accepted, rejected }
}

/// Runs one pipeline per input concurrently and returns
/// the outputs in input order, regardless of completion order.
pub async fn process_in_order<T, F, Fut>(inputs: Vec<T>, process: F) -> Vec<Fut::Output>
where
    F: FnMut(T) -> Fut,
    Fut: Future,
{
    join_all(inputs.into_iter().map(process)).await
}
