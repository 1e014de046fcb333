//! Window shell
//!
//! Runs a [`Sandbox`] inside a winit window. The shell only translates events
//! into [`InputState`], applies cursor capture and fullscreen to the window,
//! and mirrors the HUD line into the window title. Drawing the world is left
//! to a renderer layered on top of [`Sandbox`].

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowAttributes, WindowId};

use crate::config::SandboxConfig;
use crate::input::{InputState, KeyCode, MouseButton};
use crate::sandbox::Sandbox;

/// Failure of the window shell.
#[derive(Debug)]
pub enum AppError {
    /// The event loop could not be created or exited with an error.
    EventLoop(EventLoopError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "event loop error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
        }
    }
}

impl From<EventLoopError> for AppError {
    fn from(e: EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

/// Translate a winit key to the sandbox key set.
pub fn map_key(key: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as Winit;
    match key {
        Winit::KeyW => KeyCode::W,
        Winit::KeyA => KeyCode::A,
        Winit::KeyS => KeyCode::S,
        Winit::KeyD => KeyCode::D,
        Winit::Space => KeyCode::Space,
        Winit::Digit1 => KeyCode::Digit1,
        Winit::Digit2 => KeyCode::Digit2,
        Winit::Digit3 => KeyCode::Digit3,
        Winit::Digit4 => KeyCode::Digit4,
        Winit::Backspace => KeyCode::Backspace,
        Winit::F11 => KeyCode::F11,
        Winit::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// Translate a winit mouse button.
pub fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

struct SandboxApp {
    sandbox: Sandbox,
    input: InputState,
    window: Option<Window>,
    last_frame: Instant,
    title: String,
}

impl SandboxApp {
    fn new(config: SandboxConfig) -> Self {
        let title = config.window.title.clone();
        Self {
            sandbox: Sandbox::new(config),
            input: InputState::new(),
            window: None,
            last_frame: Instant::now(),
            title,
        }
    }

    fn apply_cursor_state(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let cursor = self.sandbox.cursor();
        if !cursor.is_dirty() {
            return;
        }

        if cursor.should_cursor_be_grabbed() {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
        }
        window.set_cursor_visible(cursor.should_cursor_be_visible());
        self.sandbox.cursor_mut().clear_dirty();
    }

    fn toggle_fullscreen(&self) {
        if let Some(window) = &self.window {
            let current = window.fullscreen();
            window.set_fullscreen(if current.is_some() {
                None
            } else {
                Some(Fullscreen::Borderless(None))
            });
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = self.input.frame_input();
        let report = self.sandbox.tick(&input, frame_time);
        if report.step.respawned {
            log::info!("respawned at {:?}", self.sandbox.player().position);
        }

        self.apply_cursor_state();

        let status = self.sandbox.status_line();
        if status != self.title {
            if let Some(window) = &self.window {
                window.set_title(&status);
            }
            self.title = status;
        }
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let settings = &self.sandbox.config().window;
        let attrs = WindowAttributes::default()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_resizable(true);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::info!(
                    "window created ({}x{}, fov {})",
                    settings.width,
                    settings.height,
                    settings.fov_degrees
                );
                self.window = Some(window);
                self.last_frame = Instant::now();
                self.apply_cursor_state();
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = map_key(code);
                let pressed = event.state == ElementState::Pressed;
                match key {
                    KeyCode::Escape if pressed => event_loop.exit(),
                    KeyCode::F11 if pressed && !event.repeat => self.toggle_fullscreen(),
                    _ => {
                        self.input.keyboard.handle_key(key, pressed);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if state == ElementState::Pressed {
                    self.input.mouse.press_button(map_button(button));
                }
            }
            WindowEvent::CursorEntered { .. } => self.input.mouse.set_cursor_inside(true),
            WindowEvent::CursorLeft { .. } => self.input.mouse.set_cursor_inside(false),
            WindowEvent::Focused(focused) => {
                if focused {
                    self.sandbox.cursor_mut().handle_focus_gained();
                } else {
                    self.sandbox.cursor_mut().handle_focus_lost();
                    self.input.keyboard.reset();
                }
                self.apply_cursor_state();
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.sandbox.cursor().mouse_look_enabled() {
                self.input.mouse.accumulate_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }
}

/// Open the window and run until it is closed or Escape is pressed.
pub fn run(config: SandboxConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SandboxApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(winit::keyboard::KeyCode::KeyW), KeyCode::W);
        assert_eq!(map_key(winit::keyboard::KeyCode::Digit4), KeyCode::Digit4);
        assert_eq!(map_key(winit::keyboard::KeyCode::Backspace), KeyCode::Backspace);
        assert_eq!(map_key(winit::keyboard::KeyCode::KeyQ), KeyCode::Unknown);
    }

    #[test]
    fn test_map_button() {
        assert_eq!(map_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(map_button(winit::event::MouseButton::Middle), MouseButton::Other);
    }
}
