//! Home routes, mounted at "/"

use rocket::get;
use rocket::State;
use rocket_dyn_templates::Template;

use crate::config::AppConfig;
use crate::response::render_context;

#[get("/")]
pub async fn home(
    // flash: Option<FlashMessage<'_>>,
    app: &State<AppConfig>,
) -> Template {
    let context = render_context(app);
    Template::render("index", &context.into_json())
}
