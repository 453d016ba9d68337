//! Window event handling for GameState.

use winit::event::WindowEvent;

impl crate::GameState {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.camera.set_aspect(size.width, size.height);
                false
            }
            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us.
                self.input.release_all();
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                }
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.present();
                self.window.request_redraw();
                !self.running
            }
            _ => false,
        }
    }
}
