mod fields;
mod footer;
mod header;
mod notice;
mod result;
mod submit;

pub use fields::render_fields;
pub use footer::render_footer;
pub use header::render_header;
pub use notice::render_notice;
pub use result::{render_result, result_height};
pub use submit::{render_submit, submit_label};
