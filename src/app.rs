use egui::Sense;

use crate::clock::FrameClock;
use crate::sketch::{Sketch, SketchVariant, CANVAS_SIZE};
use crate::surface::PainterSurface;

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct NoiseWeaveApp {
    seed: u32,
    variant: SketchVariant,
    paused: bool,
    show_points: bool,
    clock: FrameClock,

    #[serde(skip)]
    sketch: Option<Sketch>,
}

impl Default for NoiseWeaveApp {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            variant: SketchVariant::Woven,
            paused: false,
            show_points: false,
            clock: FrameClock::default(),
            sketch: None,
        }
    }
}

impl NoiseWeaveApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<NoiseWeaveApp>(storage, eframe::APP_KEY) {
                log::info!("Restored settings, seed {}", app.seed);
                return app;
            }
        }
        Default::default()
    }

    fn regenerate(&mut self) {
        self.sketch = None;
        self.clock.reset();
    }

    fn ensure_sketch(&mut self) -> &mut Sketch {
        let (variant, seed) = (self.variant, self.seed);
        self.sketch
            .get_or_insert_with(|| Sketch::for_variant(variant, seed))
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sketch");
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Seed");
            changed |= ui
                .add(egui::DragValue::new(&mut self.seed).speed(1))
                .changed();
            if ui.button("Randomize").clicked() {
                self.seed = rand::random();
                changed = true;
            }
        });
        for variant in SketchVariant::ALL {
            if ui
                .selectable_label(self.variant == variant, variant.label())
                .clicked()
                && self.variant != variant
            {
                self.variant = variant;
                changed = true;
            }
        }
        if changed {
            self.regenerate();
        }

        ui.separator();
        ui.heading("Playback");
        ui.checkbox(&mut self.paused, "Paused");
        ui.checkbox(&mut self.show_points, "Show points");
        if ui.button("Restart").clicked() {
            self.clock.reset();
        }
        ui.label(format!("Frame {} @ {} fps", self.clock.frame(), self.clock.fps()));
    }
}

impl eframe::App for NoiseWeaveApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Noise weave");
            ui.label("Noise-perturbed grid strokes in plasma.");
        });

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui));

        let now = ctx.input(|i| i.time);
        let frame = self.clock.tick(now, self.paused);
        let show_points = self.show_points;

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                if response.rect.width() <= 0.0 || response.rect.height() <= 0.0 {
                    return;
                }
                let mut surface = PainterSurface::fit(&painter, response.rect, CANVAS_SIZE);
                self.ensure_sketch().render(&mut surface, frame, show_points);
            });

        if ctx.input(|i| {
            i.key_pressed(egui::Key::R) && i.modifiers.matches_logically(egui::Modifiers::CTRL)
        }) {
            self.seed = rand::random();
            self.regenerate();
        }

        if !self.paused {
            ctx.request_repaint();
        }
    }
}
