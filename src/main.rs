//! Hyperview - interactive tesseract viewer
//!
//! Rotates a 4D hypercube in its six planes and draws its two-stage
//! perspective projection.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::input::{InputAction, InputMapper};
use hyperview::systems::{FramePacer, FrameTick, RenderError, RenderSystem, WindowSystem};
use hyperview_core::{DisplayFlags, FrameOrchestrator, MatrixError, SceneState};
use hyperview_input::RotationController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Rotation and overlay state mutated by input
    scene: SceneState,
    orchestrator: FrameOrchestrator,
    controller: RotationController,
    pacer: FramePacer,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, MatrixError> {
        let orchestrator = FrameOrchestrator::new(config.view.perspective())?
            .with_style(config.rendering.draw_style());
        let scene = SceneState::new(config.rotation_state(), config.display_flags());
        let pacer = FramePacer::new(config.animation.target_fps);

        Ok(Self {
            config,
            scene,
            orchestrator,
            controller: RotationController::new(),
            pacer,
            window: None,
            render: None,
        })
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetRotation => {
                self.scene.rotation.reset();
                log::info!("Rotation reset");
            }
            InputAction::ToggleLabels => {
                let on = self.scene.display.flip(DisplayFlags::LABELS);
                log::info!("Labels: {}", if on { "ON" } else { "OFF" });
            }
            InputAction::ToggleAxes => {
                let on = self.scene.display.flip(DisplayFlags::AXES);
                log::info!("Axes: {}", if on { "ON" } else { "OFF" });
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState, event_loop: &ActiveEventLoop) {
        if let Some(action) = InputMapper::map_keyboard(key, state, self.controller.modifiers()) {
            self.handle_action(action, event_loop);
            return;
        }
        self.controller.process_keyboard(key, state, &mut self.scene.rotation);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = match self.pacer.tick(Instant::now()) {
            FrameTick::Step { fps } => {
                if let Some(fps) = fps {
                    log::debug!("frame {}: {:.1} fps", self.pacer.frame_index(), fps);
                    if let Some(window) = &self.window {
                        window.update_title(fps, self.scene.rotation.is_rotating());
                    }
                }
                self.orchestrator.render_frame(&mut self.scene)
            }
            // resize or expose between paced frames
            FrameTick::Repaint => self
                .orchestrator
                .project_static(&self.scene.rotation, self.scene.display),
        };

        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Frame failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        let Some(render) = &mut self.render else { return };
        match render.render_frame(&frame.commands) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => log::warn!("Surface lost, reconfigured"),
            Err(e @ RenderError::OutOfMemory) => {
                log::error!("{}", e);
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.view.half_extent,
            self.config.window.vsync,
        );
        match render {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.pacer = FramePacer::new(self.config.animation.target_fps);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.controller.process_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(key, event.state, event_loop);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        if self.pacer.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hyperview");

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Invalid projection: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
