use fc_core::FortuneConfig;
use fc_render::{Face, RenderConfig, Speech, render};

pub fn run(
    config: &FortuneConfig,
    category: Option<&str>,
    face: Face,
    render_config: &RenderConfig,
) -> Result<(), String> {
    let book = super::load_book(config)?;
    let pool = book.pool(category).map_err(|e| e.to_string())?;

    let mut rng = config.rng();
    let reading = fc_core::tell(&pool, config.hour(), &mut rng).map_err(|e| e.to_string())?;

    let speech = Speech::new(&reading.message, face, reading.eyes);
    println!("{}", render(&speech, render_config));

    Ok(())
}
