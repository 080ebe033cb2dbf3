use std::fmt::Display;
use std::path::Path;

use egui::{Align2, Context, Key, TextEdit, Ui};
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::controllers::viewer::{ViewerController, ViewerError};
use crate::core::document::ports::document_factory::DocumentFactoryPort;
use crate::input::cli::options::ViewerOptions;
use crate::input::gui::app::key_bindings::{ViewerAction, action_for_key};
use crate::input::gui::app::page_number_input::PageNumberInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub const DEFAULT_TITLE: &str = "PDF Viewer";

/// Window title for a document: its file name.
#[must_use]
pub fn window_title(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn record_error(slot: &mut Option<String>, err: &dyn Display) {
    error!("{err}");
    // The dialog shows the first failure until dismissed
    if slot.is_none() {
        *slot = Some(err.to_string());
    }
}

pub struct GuiApp<F: DocumentFactoryPort, P: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: P,
    controller: ViewerController<F>,
    page_input: PageNumberInput,
    search_text: String,
    error_message: Option<String>,
    /// Physical pixels covered by the toolbar, measured on the last egui pass.
    toolbar_height: u32,
    shift_held: bool,
    quit_requested: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<F: DocumentFactoryPort, P: GuiPresenterPort> GuiApp<F, P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: ViewerController<F>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            window,
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            page_input: PageNumberInput::default(),
            search_text: String::new(),
            error_message: None,
            toolbar_height: 0,
            shift_held: false,
            quit_requested: false,
            egui_ctx,
            egui_state,
        }
    }

    /// Applies the command line: view preferences first, so they hold for
    /// the document, then the document, its start page and a search.
    pub fn start(&mut self, options: &ViewerOptions) {
        self.controller.set_rotation(options.rotate);
        self.controller.set_inverted(options.invert);

        let Some(path) = &options.file else {
            return;
        };

        self.apply(ViewerAction::Open(path.clone()));
        if !self.controller.has_document() {
            return;
        }

        if options.page_index() > 0 {
            self.apply(ViewerAction::GotoPage(options.page_index()));
        }

        if let Some(needle) = &options.search {
            self.search_text = needle.clone();
            self.apply(ViewerAction::Search(needle.clone()));
        }
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn set_shift(&mut self, held: bool) {
        self.shift_held = held;
    }

    pub fn apply(&mut self, action: ViewerAction) {
        let result: Result<(), ViewerError> = match action {
            ViewerAction::NextPage => self.controller.next_page().map(drop),
            ViewerAction::PreviousPage => self.controller.previous_page().map(drop),
            ViewerAction::FirstPage => self.controller.first_page().map(drop),
            ViewerAction::LastPage => self.controller.last_page().map(drop),
            ViewerAction::GotoPage(page) => self.controller.goto_page(page).map(drop),
            ViewerAction::RotateClockwise => {
                self.controller.rotate_clockwise();
                Ok(())
            }
            ViewerAction::RotateCounterClockwise => {
                self.controller.rotate_counter_clockwise();
                Ok(())
            }
            ViewerAction::ToggleInvert => {
                self.controller.toggle_invert();
                Ok(())
            }
            ViewerAction::Search(needle) => self.controller.search(&needle).map(drop),
            ViewerAction::ClearSearch => {
                self.controller.clear_search();
                self.search_text.clear();
                Ok(())
            }
            ViewerAction::Open(path) => self.open(&path),
            ViewerAction::Quit => {
                self.quit_requested = true;
                Ok(())
            }
        };

        if let Err(err) = result {
            record_error(&mut self.error_message, &err);
        }
    }

    fn open(&mut self, path: &Path) -> Result<(), ViewerError> {
        self.controller.open(path)?;

        info!("Viewing {}", path.display());
        self.search_text.clear();
        self.window.set_title(&window_title(Some(path)));

        Ok(())
    }

    /// Turns a key press into an action unless a widget or the error dialog
    /// owns the keyboard. Returns whether anything was applied.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed
            || self.error_message.is_some()
            || self.egui_ctx.wants_keyboard_input()
        {
            return false;
        }

        match action_for_key(key, self.shift_held) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let page_height = self.height.saturating_sub(self.toolbar_height);

        // A view that failed to draw is not retried until it changes
        let frame = if self.width > 0
            && page_height > 0
            && !self.controller.render_failed(self.width, page_height)
        {
            match self.controller.render_frame(self.width, page_height) {
                Ok(frame) => Some(&frame.pixel_buffer),
                Err(err) => {
                    record_error(&mut self.error_message, &err);
                    None
                }
            }
        } else {
            None
        };

        self.presenter
            .present(frame, self.toolbar_height, egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            record_error(&mut self.error_message, &err);
        }
    }

    pub fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let ctx = self.egui_ctx.clone();
        let mut actions = Vec::new();

        let output = ctx.run(raw_input, |ctx| {
            let modal = self.error_message.is_some();

            let toolbar = egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                ui.add_enabled_ui(!modal, |ui| {
                    ui.horizontal(|ui| self.toolbar(ui, &mut actions));
                });
            });

            self.toolbar_height =
                (toolbar.response.rect.height() * ctx.pixels_per_point()).ceil() as u32;

            self.error_dialog(ctx);
        });

        for action in actions {
            self.apply(action);
        }

        output
    }

    fn toolbar(&mut self, ui: &mut Ui, actions: &mut Vec<ViewerAction>) {
        let has_document = self.controller.has_document();
        let page_count = self.controller.page_count();
        let current_page = self.controller.current_page();

        ui.add_enabled_ui(has_document, |ui| {
            if ui.button("First").clicked() {
                actions.push(ViewerAction::FirstPage);
            }
            if ui.button("Prev").clicked() {
                actions.push(ViewerAction::PreviousPage);
            }

            let mut candidate = self.page_input.text().to_string();
            let response = ui.add(TextEdit::singleline(&mut candidate).desired_width(40.0));
            if response.changed() {
                self.page_input.edit(candidate, page_count);
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                if let Some(page) = self.page_input.target() {
                    actions.push(ViewerAction::GotoPage(page));
                }
            }
            if !response.has_focus() {
                self.page_input.sync(current_page);
            }
            ui.label(format!("of {page_count}"));

            if ui.button("Next").clicked() {
                actions.push(ViewerAction::NextPage);
            }
            if ui.button("Last").clicked() {
                actions.push(ViewerAction::LastPage);
            }
        });

        ui.separator();

        if ui.button("Rotate left").clicked() {
            actions.push(ViewerAction::RotateCounterClockwise);
        }
        if ui.button("Rotate right").clicked() {
            actions.push(ViewerAction::RotateClockwise);
        }
        ui.label(self.controller.rotation().display_name());

        let mut inverted = self.controller.is_inverted();
        if ui.toggle_value(&mut inverted, "Invert").changed() {
            actions.push(ViewerAction::ToggleInvert);
        }

        ui.separator();

        ui.add_enabled_ui(has_document, |ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.search_text)
                    .hint_text("Search")
                    .desired_width(160.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                actions.push(ViewerAction::Search(self.search_text.clone()));
            }

            if !self.controller.last_search().is_empty() {
                ui.label(format!("{} hits", self.controller.search_hits().len()));
                if ui.button("Clear").clicked() {
                    actions.push(ViewerAction::ClearSearch);
                }
            }
        });
    }

    fn error_dialog(&mut self, ctx: &Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        let mut dismissed = false;

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.error_message = None;
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(self.window, event);
        (response.consumed, response.repaint)
    }
}
