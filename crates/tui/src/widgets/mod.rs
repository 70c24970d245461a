mod form;
mod notice;

pub use form::{Field, Form, FormEvent};
pub use notice::draw_notice;
