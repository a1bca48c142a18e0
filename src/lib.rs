use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::Template;

pub mod config;
pub mod response;
pub mod routes;

pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .attach(Template::fairing())
        .attach(config::fairing())
        .mount("/", routes![routes::home::home])
}
