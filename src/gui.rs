use eframe::egui;
use std::path::PathBuf;
use tracing::error;

use crate::EditorConfig;
use crate::editor::{EditorEvent, EditorPhase, EditorSession, ImageSize};

const WINDOW_WIDTH: f32 = 1024.0;
const WINDOW_HEIGHT: f32 = 768.0;

/// The window shell around an [`EditorSession`]. All it does is turn
/// widget interactions into session events and keep a texture of the
/// session's composite for the canvas.
pub struct WatermarkApp {
    session: EditorSession,
    /// Widget buffer for the color button. Confirmed values reach the
    /// session as ChooseColor events.
    panel_color: [u8; 3],
    texture: Option<egui::TextureHandle>,
    /// A picked file waits here for one frame so the editing panel is
    /// laid out first and the remaining canvas area can be measured.
    pending_image: Option<PathBuf>,
}

impl WatermarkApp {
    pub fn new(config: EditorConfig) -> Self {
        let panel_color = config.default_color;
        Self {
            session: EditorSession::new(config),
            panel_color,
            texture: None,
            pending_image: None,
        }
    }

    /// Feed one event to the session. Failures are logged and the old
    /// composite stays on screen.
    fn dispatch(&mut self, event: EditorEvent) {
        // Color changes do not touch the composite, so the texture
        // stays valid
        let keeps_texture = matches!(event, EditorEvent::ChooseColor(_));

        match self.session.dispatch(event) {
            Ok(()) => {
                if !keeps_texture {
                    self.texture = None;
                }
            }
            Err(e) => error!("Editor operation failed: {}", e),
        }
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        if let Some(composite) = self.session.composite() {
            let size = [composite.width() as usize, composite.height() as usize];
            let pixels = composite.as_flat_samples();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
            self.texture =
                Some(ctx.load_texture("composite", color_image, egui::TextureOptions::LINEAR));
        }
    }

    fn show_editing_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Watermark:");
            let text_edit = egui::TextEdit::singleline(&mut self.session.inputs_mut().watermark_text)
                .desired_width(180.0);
            if ui.add(text_edit).changed() {
                self.dispatch(EditorEvent::KeyPress);
            }

            ui.label("Font size:");
            let size_edit = egui::TextEdit::singleline(&mut self.session.inputs_mut().font_size_entry)
                .desired_width(40.0);
            if ui.add(size_edit).changed() {
                self.dispatch(EditorEvent::KeyPress);
            }

            if ui.color_edit_button_srgb(&mut self.panel_color).changed() {
                self.dispatch(EditorEvent::ChooseColor(self.panel_color));
            }

            if ui.button("Save").clicked() {
                self.dispatch(EditorEvent::Save);
            }
        });
    }

    fn show_open_button(&mut self, ui: &mut egui::Ui) {
        let rect = egui::Rect::from_center_size(ui.max_rect().center(), egui::vec2(180.0, 40.0));
        if ui.put(rect, egui::Button::new("Choose an image")).clicked()
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("image files", &["jpg"])
                .pick_file()
        {
            // Loaded on the next frame, once the panel height is known
            self.pending_image = Some(path);
        }
    }

    fn show_canvas(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        self.ensure_texture(ctx);

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        if let Some(ref texture) = self.texture {
            let image_rect = egui::Rect::from_min_size(canvas_rect.min, texture.size_vec2());
            painter.image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let canvas_pos = |pos: egui::Pos2| {
            (
                (pos.x - canvas_rect.min.x) as i32,
                (pos.y - canvas_rect.min.y) as i32,
            )
        };

        if (response.drag_started_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Primary))
            && let Some(pos) = response.interact_pointer_pos()
        {
            let (x, y) = canvas_pos(pos);
            self.dispatch(EditorEvent::PointerDrag { x, y });
        }

        if (response.drag_stopped_by(egui::PointerButton::Primary) || response.clicked())
            && let Some(pos) = response
                .interact_pointer_pos()
                .or_else(|| ctx.input(|i| i.pointer.latest_pos()))
        {
            let (x, y) = canvas_pos(pos);
            self.dispatch(EditorEvent::PointerRelease { x, y });
        }
    }
}

impl eframe::App for WatermarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The panel is laid out before the central canvas so the canvas
        // automatically gets the remaining window height
        if self.session.phase() == EditorPhase::Editing || self.pending_image.is_some() {
            egui::TopBottomPanel::bottom("editing_panel").show(ctx, |ui| {
                self.show_editing_panel(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(path) = self.pending_image.take() {
                let available = ui.available_size();
                self.session
                    .set_viewport(ImageSize::new(available.x as u32, available.y as u32));
                self.dispatch(EditorEvent::OpenImage { path });
            }

            match self.session.phase() {
                EditorPhase::Unloaded => self.show_open_button(ui),
                EditorPhase::Editing => self.show_canvas(ctx, ui),
            }
        });
    }
}

/// Open the editor window and run it to completion.
pub fn run(config: EditorConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sukashi")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Sukashi",
        options,
        Box::new(move |_cc| Ok(Box::new(WatermarkApp::new(config)))),
    )
}
