use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;
use crate::ports::FragmentSource;

/// Build an environment with every fragment registered under its catalog name.
///
/// Auto-escaping is off for every template: interpolated values are embedded
/// verbatim (see `lint_literals` for the values that would not survive that).
pub fn build_template_environment<'a>(
    sources: &[FragmentSource<'a>],
) -> Result<Environment<'a>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for source in sources {
        env.add_template(source.name, source.content).map_err(|e| {
            AppError::Template(format!("fragment '{}' failed to parse: {}", source.name, e))
        })?;
    }

    Ok(env)
}

/// Render the fragment registered as `name`.
///
/// Lookup and render failures share one message so a broken catalog entry and a
/// missing context value both point at the fragment.
pub fn render_fragment(env: &Environment<'_>, name: &str, ctx: &Value) -> Result<String, AppError> {
    env.get_template(name)
        .and_then(|fragment| fragment.render(ctx))
        .map_err(|e| AppError::Template(format!("fragment '{}' did not render: {}", name, e)))
}
