use serde_json::{Map, Value};
use tera::Context;

use crate::config::AppConfig;

/// Builds the context every dashboard page template receives.
///
/// `renderErrors` is the container for flashed error messages, keyed by
/// message kind. Flash retrieval is currently disabled, so the mapping
/// is always present and always empty.
pub fn render_context(app: &AppConfig) -> Context {
    let mut context = Context::new();
    let render_errors: Map<String, Value> = Map::new();
    context.insert("renderErrors", &render_errors);
    context.insert("app", app);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config() -> AppConfig {
        AppConfig {
            name: "Test Dashboard".to_string(),
            version: "0.0.0".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn context_forwards_app_config() {
        let json = render_context(&app_config()).into_json();
        assert_eq!(json["app"]["name"], "Test Dashboard");
        assert_eq!(json["app"]["version"], "0.0.0");
    }

    #[test]
    fn render_errors_is_present_and_empty() {
        let json = render_context(&app_config()).into_json();
        let errors = json
            .get("renderErrors")
            .and_then(Value::as_object)
            .expect("renderErrors mapping");
        assert!(errors.is_empty());
    }
}
