mod model;
mod home;
mod load;
mod validate;
pub mod meta;
pub mod structured_data;

pub use model::*;
pub use home::HOME_PAGE;
pub use load::ContentError;
pub use validate::{ContentIssue, is_site_path};
pub use meta::{MetaTag, meta_tags};
pub use structured_data::{absolute_url, script_body, structured_data};
