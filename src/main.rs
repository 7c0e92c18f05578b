use eframe::egui::{self, Key};
use eframe::epaint::Vec2;

use log::{info, warn};

use particle_backdrop::{FrameStats, PainterCanvas, ParticleField, SCHEMES, SimulationParams};

// ===================================================================================
// Host Constants
// ===================================================================================

const INITIAL_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
const SEED_ENV: &str = "BACKDROP_SEED";
const SECTION_KEYS: [Key; 4] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4];

// ===================================================================================
// Main Application
// ===================================================================================

/// Stands in for the page around the backdrop: a section bar that retargets
/// the colours, pointer and size forwarding, and an optional stats overlay.
struct BackdropApp {
    field: ParticleField,
    show_stats: bool, // toggled with F3
    last_stats: FrameStats,
    focused: bool,
}

impl BackdropApp {
    fn new(params: SimulationParams) -> Self {
        Self {
            field: ParticleField::new(Vec2::from(INITIAL_WINDOW_SIZE), params),
            show_stats: false,
            last_stats: FrameStats::default(),
            focused: true,
        }
    }

    /// Section shortcuts, the stats toggle and focus changes.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let (pressed, toggle_stats, focused) = ctx.input(|i| {
            let pressed = SECTION_KEYS.iter().position(|key| i.key_pressed(*key));
            (pressed, i.key_pressed(Key::F3), i.focused)
        });

        if let Some(index) = pressed {
            self.field.retarget(SCHEMES[index].name);
        }
        if toggle_stats {
            self.show_stats = !self.show_stats;
        }
        if focused != self.focused {
            self.focused = focused;
            if focused {
                info!("window focused");
            } else {
                info!("window lost focus");
            }
        }
    }
}

impl eframe::App for BackdropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::TopBottomPanel::top("section_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for scheme in SCHEMES.iter() {
                    let selected = self.field.section() == scheme.name;
                    if ui.selectable_label(selected, scheme.name).clicked() {
                        self.field.retarget(scheme.name);
                    }
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                if rect.size() != self.field.bounds() {
                    self.field.resize(rect.size());
                }

                match ctx.input(|i| i.pointer.hover_pos()) {
                    Some(pos) if rect.contains(pos) => {
                        self.field.pointer_moved(pos - rect.min.to_vec2());
                    }
                    _ => {
                        if self.field.pointer().position.is_some() {
                            self.field.pointer_left();
                        }
                    }
                }

                let painter = ui.painter_at(rect);
                let mut canvas = PainterCanvas::new(&painter, rect);
                self.last_stats = self.field.tick(&mut canvas);
                self.field.paint_cursor_glow(&mut canvas);
            });

        if self.show_stats {
            let stats = self.last_stats;
            egui::Area::new(egui::Id::new("frame_stats"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-8.0, -8.0])
                .show(ctx, |ui| {
                    ui.label(format!("Section: {}", self.field.section()));
                    ui.label(format!("Particles: {}", stats.particles));
                    ui.label(format!("Links: {}", stats.links));
                    ui.label(format!(
                        "Drifting / repelled / returning: {} / {} / {}",
                        stats.drifting, stats.repelled, stats.returning
                    ));
                    ui.label(format!("Frame: {}", self.field.frame()));
                });
        }

        // The backdrop animates continuously.
        ctx.request_repaint();
    }
}

// ===================================================================================
// main
// ===================================================================================

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!("ignoring {SEED_ENV}={raw:?}: {err}");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let params = SimulationParams {
        seed: seed_from_env(),
        ..SimulationParams::default()
    };

    // Only the link scan runs on the pool; one thread per physical core is plenty.
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get_physical())
        .build_global()
    {
        warn!("could not configure rayon pool, using defaults: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_WINDOW_SIZE)
            .with_title("Particle Backdrop"),
        ..Default::default()
    };

    eframe::run_native(
        "Particle Backdrop",
        native_options,
        Box::new(move |_cc| Ok(Box::new(BackdropApp::new(params)))),
    )
}
