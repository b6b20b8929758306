mod carousel;
mod detail;
mod filters;
mod map;
mod navbar;
mod place_form;
mod place_list;

pub use self::{carousel::*, detail::*, filters::*, map::*, navbar::*, place_form::*, place_list::*};
