use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing::{error, info, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use warpcore::WarpEngine;

use crate::gpu::GpuState;
use crate::runtime::FrameScheduler;
use crate::types::RendererConfig;

pub(crate) fn run(config: RendererConfig) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|err| anyhow!("failed to create event loop: {err}"))?;

    let window_size = PhysicalSize::new(config.surface_size.0.max(1), config.surface_size.1.max(1));
    let window = WindowBuilder::new()
        .with_title("warpview")
        .with_inner_size(window_size)
        .build(&event_loop)
        .map_err(|err| anyhow!("failed to create window: {err}"))?;
    let window = Arc::new(window);

    let mut gpu = GpuState::new(window.clone(), config.vsync)?;
    let size = gpu.size();
    let mut engine = WarpEngine::new(config.tuning, size.width, size.height);
    let mut scheduler = FrameScheduler::new(config.fps_cap);

    // MouseInput carries no coordinates, so presses anchor at the last
    // cursor position seen.
    let mut cursor = PhysicalPosition::new(0.0_f64, 0.0_f64);

    if let Some(path) = config.image.clone() {
        gpu.load_image(path);
    }
    info!(
        width = size.width,
        height = size.height,
        vsync = config.vsync,
        fps_cap = ?config.fps_cap,
        "warpview window ready; drop an image to load it"
    );

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed
                        && event.logical_key == Key::Named(NamedKey::Escape)
                    {
                        elwt.exit();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = position;
                    engine.update(position.x as f32, position.y as f32);
                }
                WindowEvent::CursorLeft { .. } => {
                    engine.end();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        match state {
                            ElementState::Pressed => {
                                engine.begin(cursor.x as f32, cursor.y as f32);
                            }
                            ElementState::Released => {
                                engine.end();
                            }
                        }
                    }
                }
                WindowEvent::Touch(touch) => {
                    let x = touch.location.x as f32;
                    let y = touch.location.y as f32;
                    match touch.phase {
                        TouchPhase::Started => engine.begin(x, y),
                        TouchPhase::Moved => engine.update(x, y),
                        TouchPhase::Ended | TouchPhase::Cancelled => engine.end(),
                    }
                }
                WindowEvent::DroppedFile(path) => {
                    info!(path = %path.display(), "image dropped");
                    gpu.load_image(path);
                }
                WindowEvent::Resized(new_size) => {
                    gpu.resize(new_size);
                    engine.set_surface_size(new_size.width, new_size.height);
                }
                WindowEvent::ScaleFactorChanged {
                    mut inner_size_writer,
                    ..
                } => {
                    let _ = inner_size_writer.request_inner_size(gpu.size());
                }
                WindowEvent::RedrawRequested => {
                    let size = gpu.size();
                    if size.width == 0 || size.height == 0 {
                        return;
                    }
                    let params =
                        engine.tick(Instant::now(), (size.width, size.height), gpu.has_texture());
                    match gpu.render(&params) {
                        Ok(()) => scheduler.mark_rendered(Instant::now()),
                        Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                            gpu.reconfigure_surface();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("surface out of memory; exiting");
                            elwt.exit();
                        }
                        Err(wgpu::SurfaceError::Timeout) => {
                            warn!("surface timeout; retrying next frame");
                        }
                        Err(other) => {
                            warn!("surface error: {other:?}; retrying next frame");
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                gpu.poll_uploads();
                let now = Instant::now();
                if scheduler.ready_for_frame(now) {
                    window.request_redraw();
                    elwt.set_control_flow(ControlFlow::Wait);
                } else if let Some(deadline) = scheduler.next_deadline() {
                    elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                } else {
                    elwt.set_control_flow(ControlFlow::Wait);
                }
            }
            _ => {}
        })
        .map_err(|err| anyhow!("window event loop error: {err}"))
}
