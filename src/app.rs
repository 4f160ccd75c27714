use std::time::Instant;

use failure::{format_err, Error};
use log::{error, info, warn};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::config::DemoConfig;
use crate::input::InputState;
use crate::line_renderer::LineRenderer;
use crate::render_state::RenderState;
use crate::scene::Scene;
use crate::util::screen_projection;

/// Opens the window for `config` and runs the frame loop until quit.
pub fn launch(config: DemoConfig) -> Result<(), Error> {
    config.validate()?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|e| format_err!("Failed to create window: {}", e))?;

    let render_state = pollster::block_on(RenderState::new(&window))?;
    info!(
        "Starting {:?} variant at {}x{}",
        config.variant, config.width, config.height
    );
    run(event_loop, window, render_state, config)
}

fn run(
    event_loop: EventLoop<()>,
    window: Window,
    mut render_state: RenderState,
    config: DemoConfig,
) -> ! {
    let background = config.background;
    let mut scene = Scene::new(config, &mut rand::thread_rng());
    let mut input = InputState::new();
    let mut line_renderer = LineRenderer::new(
        &render_state.device,
        &render_state.general_bind_group_layout,
        render_state.swapchain_format,
    );
    let mut last_draw = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                render_state.reconfigure(size.width, size.height);
                window.request_redraw();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(keycode),
                                state,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                if keycode == VirtualKeyCode::Escape {
                    info!("Escape pressed, exiting");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                input.key(keycode, state);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => input.cursor_moved(position.x, position.y),
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => {
                if let Some(cursor) = input.cursor {
                    scene.relocate_center(cursor);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.release_all(),
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let elapsed = now - last_draw;
                last_draw = now;

                scene.update(elapsed.as_secs_f64(), &input);

                let frame = match render_state.surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        warn!("Surface lost, reconfiguring");
                        render_state.restore();
                        window.request_redraw();
                        return;
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        warn!("Timed out acquiring frame, skipping");
                        window.request_redraw();
                        return;
                    }
                    Err(e) => {
                        error!("Failed to acquire next swap chain texture: {}", e);
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                };

                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                render_state.set_projection(screen_projection(
                    render_state.config.width,
                    render_state.config.height,
                ));
                line_renderer.prepare(&render_state.device, &scene.frame());

                let mut encoder = render_state
                    .device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
                {
                    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: None,
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: background[0] as f64,
                                    g: background[1] as f64,
                                    b: background[2] as f64,
                                    a: background[3] as f64,
                                }),
                                store: true,
                            },
                        })],
                        depth_stencil_attachment: None,
                    });

                    rpass.set_bind_group(0, &render_state.general_bind_group, &[]);
                    line_renderer.draw(&mut rpass);
                }

                render_state.queue.submit(Some(encoder.finish()));
                frame.present();

                window.request_redraw();
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Window closed, exiting");
                *control_flow = ControlFlow::Exit;
            }
            _ => {}
        }
    });
}
