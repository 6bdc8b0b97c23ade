pub mod api;
pub mod categories;
pub mod pages;
pub mod posts;

use crate::web::flash::Notice;
use crate::web::state::AppState;
use tera::Context;

fn make_context(state: &AppState, notice: Option<Notice>) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("notice", &notice.map(Notice::message));
    ctx
}
