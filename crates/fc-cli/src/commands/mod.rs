pub mod count;
pub mod list;
pub mod tell;

use fc_core::{FortuneBook, FortuneConfig};

/// Load the configured fortunes, turning failures into a printable message.
fn load_book(config: &FortuneConfig) -> Result<FortuneBook, String> {
    config.load_book().map_err(|e| e.to_string())
}
