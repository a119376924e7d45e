use cgmath::Vector3;
use eframe::egui;
use log::{info, warn};
use particle_burst::{Engine, FanVertex, InputEvent, PointerButton, config::WINDOW_TITLE};

const FALLBACK_SURFACE_SIZE: (f64, f64) = (800.0, 600.0);

fn color32(color: Vector3<f32>) -> egui::Color32 {
    egui::Color32::from_rgb(
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    )
}

fn pointer_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Triangle fan around the first vertex, closed back onto the first outline
/// vertex. `origin` is the top-left of the drawing surface.
fn fan_mesh(fan: &[FanVertex], origin: egui::Pos2) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    for vertex in fan {
        let offset = egui::vec2(vertex.position.x as f32, vertex.position.y as f32);
        mesh.colored_vertex(origin + offset, color32(vertex.color));
    }

    let last = fan.len() as u32 - 1;
    for i in 1..last {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh.add_triangle(0, last, 1);
    mesh
}

struct ParticleApp {
    engine: Engine,
}

impl ParticleApp {
    fn new(cc: &eframe::CreationContext) -> Self {
        let size = cc.egui_ctx.screen_rect().size();
        let (width, height) = if size.x > 0.0 && size.y > 0.0 {
            (size.x as f64, size.y as f64)
        } else {
            FALLBACK_SURFACE_SIZE
        };

        let mut engine = Engine::from_entropy(width, height);
        let report = engine.run_self_test();
        if !report.all_passed() {
            for failure in &report.failures {
                warn!("Self-test failure: {failure}");
            }
        }

        Self { engine }
    }

    /// Pointer presses inside `rect`, relative to its top-left corner, plus
    /// whether the cancel key is held.
    fn collect_input(ctx: &egui::Context, rect: egui::Rect) -> (Vec<InputEvent>, bool) {
        ctx.input(|i| {
            let events = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } if rect.contains(*pos) => Some(InputEvent::PointerPressed {
                        button: pointer_button(*button),
                        position: cgmath::vec2(
                            (pos.x - rect.min.x) as f64,
                            (pos.y - rect.min.y) as f64,
                        ),
                    }),
                    _ => None,
                })
                .collect();
            (events, i.key_down(egui::Key::Escape))
        })
    }
}

impl eframe::App for ParticleApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    self.engine.resize(rect.width() as f64, rect.height() as f64);
                }

                let (events, cancel_key_down) = Self::collect_input(ctx, rect);
                self.engine.tick(events, cancel_key_down);

                let painter = ui.painter_at(rect);
                for particle in self.engine.particles() {
                    let fan = particle.fan(self.engine.plane());
                    painter.add(egui::Shape::mesh(fan_mesh(&fan, rect.min)));
                }
            });

        if self.engine.is_running() {
            ctx.request_repaint();
        } else {
            frame.close();
        }
    }

    fn on_close_event(&mut self) -> bool {
        self.engine.input([InputEvent::CloseRequested], false);
        true
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Opening {WINDOW_TITLE} window");

    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            maximized: true,
            ..Default::default()
        },
        Box::new(|cc| Box::new(ParticleApp::new(cc))),
    )
}
