use std::marker::PhantomData;

use anyhow::anyhow;
use log::error;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use crate::controllers::viewer::ViewerController;
use crate::core::document::ports::document_factory::DocumentFactoryPort;
use crate::input::cli::options::ViewerOptions;
use crate::input::gui::app::gui_app::{GuiApp, window_title};
use crate::input::gui::app::key_bindings::ViewerAction;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<D, F, P>
where
    D: DocumentFactoryPort,
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    document_factory: D,
    presenter_factory: F,
    options: ViewerOptions,
    _phantom: PhantomData<fn() -> P>,
}

impl<D, F, P> RunGuiCommand<D, F, P>
where
    D: DocumentFactoryPort,
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(document_factory: D, presenter_factory: F, options: ViewerOptions) -> Self {
        Self {
            document_factory,
            presenter_factory,
            options,
            _phantom: PhantomData,
        }
    }

    /// Runs the window until it is closed or the user quits.
    pub fn execute(self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().map_err(|err| anyhow!("cannot create event loop: {err}"))?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(window_title(self.options.file.as_deref()))
                .with_inner_size(LogicalSize::new(800.0, 1000.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .map_err(|err| anyhow!("cannot create window: {err}"))?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window)
            .map_err(|err| anyhow!("cannot create pixels surface: {err}"))?;
        let controller = ViewerController::new(self.document_factory);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        app.start(&self.options);

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // egui sees every event first
                    let (egui_consumed, egui_repaint) = app.handle_window_event(event);

                    if egui_repaint {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let egui_output = app.update_ui();

                            app.egui_state
                                .handle_platform_output(window, egui_output.platform_output.clone());

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            if let Err(err) = app.render(egui_output) {
                                error!("Render error: {err}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ModifiersChanged(modifiers) => {
                            app.set_shift(modifiers.state().shift_key());
                        }
                        WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                            if let PhysicalKey::Code(key) = event.physical_key {
                                if app.handle_key(key, event.state) {
                                    redraw_pending = true;
                                }
                            }
                        }
                        WindowEvent::DroppedFile(path) => {
                            app.apply(ViewerAction::Open(path.clone()));
                            redraw_pending = true;
                        }
                        _ => {}
                    }

                    if app.quit_requested() {
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .map_err(|err| anyhow!("event loop stopped: {err}"))
    }
}
