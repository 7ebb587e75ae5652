//! # app
//!
//! Desktop host for the text box demo: a winit window, the egui/wgpu
//! frame pipeline and a ~60 Hz ticker thread that wakes the event loop.
//!
//! All widget state lives on the event loop thread; the ticker only sends
//! wake-ups, it never touches the widget.

mod demo;
mod input;
mod measure;
mod renderer;
mod surface;

pub use demo::DemoApp;
pub use input::{ModifierState, decode_press};
pub use measure::EguiTextMeasurer;
pub use renderer::Renderer;
pub use surface::EguiSurface;

use std::{thread, time::Duration};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

enum UserEvent {
    Tick,
}

/// Build the window, spawn the ticker and run the event loop to completion.
pub fn run() {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .expect("failed to create event loop");
    let proxy = event_loop.create_proxy();

    let mut app = App {
        renderer: None,
        window: None,
        demo: DemoApp::new(),
        proxy: Some(proxy),
        ticker_started: false,
    };
    event_loop.run_app(&mut app).expect("event loop crashed");
}

struct App {
    // The renderer holds a surface created from the window; field order
    // keeps it dropping first.
    renderer: Option<Renderer>,
    window: Option<Window>,
    demo: DemoApp,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
}

impl ApplicationHandler<UserEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(Window::default_attributes().with_title("Scrawlbox"))
                .expect("failed to create window");
            self.renderer = Some(Renderer::new(&window));
            self.window = Some(window);
        }

        if !self.ticker_started {
            self.ticker_started = true;
            if let Some(proxy) = self.proxy.clone() {
                thread::spawn(move || {
                    let frame = Duration::from_millis(16); // ~60Hz
                    loop {
                        if proxy.send_event(UserEvent::Tick).is_err() {
                            break; // event loop is gone
                        }
                        thread::sleep(frame);
                    }
                });
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) {
            renderer.on_window_event(window, &event);
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::ModifiersChanged(state) => self.demo.on_modifiers_changed(&state),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                    return;
                }
                self.demo.on_key_event(&event);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(window), Some(renderer)) =
                    (self.window.as_ref(), self.renderer.as_mut())
                else {
                    return;
                };
                self.demo.tick();
                renderer.render(window, |ctx| self.demo.frame(ctx));
            }
            _ => {}
        }
    }
}
