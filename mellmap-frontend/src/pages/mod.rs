mod admin;
mod catalog;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Catalog,
    Admin,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Catalog => "/",
            Self::Admin => "/admin",
        }
    }
}

pub use self::{admin::*, catalog::*};
