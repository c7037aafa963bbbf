//! Embedded shell assets and profile-block rendering.
//!
//! The block body is a template so the frozen-export section and the
//! re-evaluating path/helper section stay visibly separate. Exports are
//! captured verbatim at render time; the path extension, the project
//! helpers, and the aliases are emitted as live shell logic.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, ResolvedEnvironment};

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

const BLOCK_TEMPLATE: &str = "profile_block.sh.j2";
const ALIASES: &str = "aliases.sh";

#[derive(Serialize)]
struct Export {
    name: &'static str,
    value: String,
}

fn template_env() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

fn asset_str(name: &str) -> Result<&'static str, AppError> {
    ASSETS
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Render(format!("embedded asset '{name}' missing")))
}

/// Render the profile block body (everything between the markers). The
/// same body backs `--persist` and `shellenv`.
pub fn render_profile_body(
    resolved: &ResolvedEnvironment,
    include_aliases: bool,
) -> Result<String, AppError> {
    let template = asset_str(BLOCK_TEMPLATE)?;
    let aliases = if include_aliases {
        asset_str(ALIASES)?.trim_end().to_string()
    } else {
        String::new()
    };

    let exports: Vec<Export> = resolved
        .exports()
        .into_iter()
        .map(|(name, value)| Export { name, value })
        .collect();
    let path_dirs: Vec<String> = resolved
        .path_candidates()
        .iter()
        .map(|dir| dir.display().to_string())
        .collect();
    let module_dir = resolved.module_dir().display().to_string();

    template_env()
        .render_str(template, context! { exports, path_dirs, module_dir, aliases })
        .map_err(|err| AppError::Render(err.to_string()))
}
