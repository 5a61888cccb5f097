use eframe::egui;

use crate::app::controller::ReviewController;
use crate::app::events::AppEvent;
use crate::infra::config::AppConfig;
use crate::ui::thumbs;

const BORDER_WIDTH: f32 = 5.0;
const UNSELECTED_BORDER: egui::Color32 = egui::Color32::GRAY;
// limegreen, like the original border style.
const SELECTED_BORDER: egui::Color32 = egui::Color32::from_rgb(50, 205, 50);

struct ThumbTile {
    path: String,
    texture: egui::TextureHandle,
    selected: bool,
}

pub struct AppShell {
    controller: ReviewController,
    tiles: Vec<ThumbTile>,
    thumb_scale: f32,
}

impl AppShell {
    fn new(ctx: &egui::Context, controller: ReviewController, thumb_scale: f32) -> Self {
        let mut shell = Self {
            controller,
            tiles: Vec::new(),
            thumb_scale,
        };
        shell.reload_tiles(ctx);
        shell
    }

    fn reload_tiles(&mut self, ctx: &egui::Context) {
        self.tiles = self
            .controller
            .current_page()
            .iter()
            .map(|path| {
                let thumb = thumbs::load_thumbnail(path, self.thumb_scale);
                let texture = ctx.load_texture(path.clone(), thumb, egui::TextureOptions::LINEAR);
                ThumbTile {
                    path: path.clone(),
                    texture,
                    selected: false,
                }
            })
            .collect();
    }

    fn submit_page(&mut self, ctx: &egui::Context) {
        let selected: Vec<String> = self
            .tiles
            .iter()
            .filter(|tile| tile.selected)
            .map(|tile| tile.path.clone())
            .collect();
        self.controller.dispatch(AppEvent::SubmitPage(selected));
        self.reload_tiles(ctx);
    }

    fn selected_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.selected).count()
    }
}

impl eframe::App for AppShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.submit_page(ctx);
        }

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("img-sift: {}", self.controller.dataset_name()));
                ui.separator();
                ui.label(format!(
                    "page {}/{} ({} images)",
                    self.controller.page_number(),
                    self.controller.total_pages(),
                    self.controller.total_images()
                ));
                ui.separator();
                ui.label(format!("{} selected", self.selected_count()));
            });
        });

        egui::TopBottomPanel::bottom("submit_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            let button = egui::Button::new(
                egui::RichText::new("Submit [Space]").size(28.0).strong(),
            )
            .min_size(egui::vec2(ui.available_width(), 48.0));
            if ui
                .add(button)
                .on_hover_text("Append selected images, then show the next page")
                .clicked()
            {
                self.submit_page(ctx);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.tiles.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(if self.controller.is_exhausted() {
                        "no more images"
                    } else {
                        "no images on this page"
                    });
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(14.0, 14.0);
                    for tile in &mut self.tiles {
                        let response = ui
                            .add(egui::Image::new(&tile.texture).sense(egui::Sense::click()))
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            tile.selected = !tile.selected;
                        }

                        let border = if tile.selected {
                            SELECTED_BORDER
                        } else {
                            UNSELECTED_BORDER
                        };
                        ui.painter().rect_stroke(
                            response.rect,
                            egui::CornerRadius::same(2),
                            egui::Stroke::new(BORDER_WIDTH, border),
                            egui::StrokeKind::Outside,
                        );
                    }
                });
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.dispatch(AppEvent::Quit);
    }
}

pub fn launch(controller: ReviewController, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    let thumb_scale = config.thumb_scale;
    let title = format!("img-sift: {}", controller.dataset_name());
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(AppShell::new(&cc.egui_ctx, controller, thumb_scale)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
