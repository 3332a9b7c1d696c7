//! Asynchronous image resolution: load the embedded binary, probe its
//! natural dimensions, scale to the configured display width.

use galley_model::{Block, BlockContent};
use galley_style::StyleId;
use galley_traits::ResourceProvider;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub(crate) fn spawn_resolve(
    provider: Arc<dyn ResourceProvider>,
    target: String,
    display_width: u32,
) -> JoinHandle<Block> {
    tokio::task::spawn_blocking(move || resolve(provider.as_ref(), &target, display_width))
}

/// A short inline notice standing in for an image that could not be loaded.
pub(crate) fn unavailable(target: &str) -> Block {
    Block::new(BlockContent::Paragraph {
        style: StyleId::Standard,
        text: format!("(image unavailable: {})", target),
    })
}

fn resolve(provider: &dyn ResourceProvider, target: &str, display_width: u32) -> Block {
    let data = match provider.load(target) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("image '{}' could not be loaded: {}", target, e);
            return unavailable(target);
        }
    };

    let (natural_width, natural_height) = match image::load_from_memory(&data) {
        Ok(decoded) => (decoded.width(), decoded.height()),
        Err(e) => {
            log::warn!("image '{}' could not be decoded: {}", target, e);
            return unavailable(target);
        }
    };
    if natural_width == 0 || natural_height == 0 {
        log::warn!("image '{}' has degenerate dimensions", target);
        return unavailable(target);
    }

    let scale = display_width as f32 / natural_width as f32;
    let height_px = ((natural_height as f32) * scale).round().max(1.0) as u32;
    log::debug!(
        "image '{}': {}x{} scaled to {}x{}",
        target,
        natural_width,
        natural_height,
        display_width,
        height_px
    );

    Block::new(BlockContent::Image {
        data,
        width_px: display_width,
        height_px,
    })
}
