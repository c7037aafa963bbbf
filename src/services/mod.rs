pub mod profile_assets;

pub use profile_assets::render_profile_body;
