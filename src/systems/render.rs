//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Draw pipeline and label glyphs
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use hyperview_core::DrawCommand;
use hyperview_render::{
    context::{ContextError, RenderContext},
    tessellate, DrawPipeline, LabelFont, LabelText, Viewport,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Render context error: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: DrawPipeline,
    labels: LabelText,
    render_config: RenderingConfig,
    half_extent: f64,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        half_extent: f64,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = DrawPipeline::new(&context.device, context.config.format);

        log::info!(
            "Render surface {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        let font = match LabelFont::load(render_config.font_path()) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("{}. Vertex labels are disabled.", e);
                None
            }
        };

        Ok(Self {
            context,
            pipeline,
            labels: LabelText::new(font),
            render_config,
            half_extent,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Mapping of the projection plane onto the current surface
    pub fn viewport(&self) -> Viewport {
        Viewport::with_half_extent(
            self.context.config.width,
            self.context.config.height,
            self.half_extent,
        )
    }

    /// Render a single frame
    pub fn render_frame(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError> {
        let viewport = self.viewport();
        // minimized: nothing to map onto
        if !viewport.is_valid() {
            return Ok(());
        }

        let vertices = tessellate(commands, &viewport, &mut self.labels);
        let uploads = self.labels.atlas_mut().take_uploads();
        self.pipeline.upload_glyphs(&self.context.queue, &uploads);
        self.pipeline
            .upload(&self.context.device, &self.context.queue, &vertices);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, clear_color(&self.render_config));

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn clear_color(config: &RenderingConfig) -> wgpu::Color {
    let bg = &config.background_color;
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}
