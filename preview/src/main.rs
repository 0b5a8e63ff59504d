//! Desktop preview for strip-animator
//!
//! Simulates the LED strip in a window. The buttons post control intents
//! to the same queue an embedded input handler would use.

use std::time::Instant as StdInstant;

use clap::Parser;
use eframe::egui;
use strip_animator::{
    AnimationConfig, AnimationLoop, ControlIntent, ControlProcessor, ControlQueue, FrameBuffer,
    Instant, StripGeometry,
    color::SILVER,
    scene::{self, DEMO_EFFECTS},
};

/// Maximum number of LEDs the preview can simulate
const MAX_LEDS: usize = 512;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Queue between the UI buttons and the animation loop
static CONTROLS: ControlQueue = ControlQueue::new();

#[derive(Parser)]
#[command(about = "Preview the LED strip animation in a window")]
struct Cli {
    /// Number of LEDs on the strip
    #[arg(long, default_value_t = 144, value_parser = clap::value_parser!(u16).range(1..=MAX_LEDS as i64))]
    leds: u16,

    /// Physical strip length in millimetres
    #[arg(long, value_name = "MM", default_value_t = 1000.0)]
    length_mm: f32,

    /// Size of each simulated LED in pixels
    #[arg(long, default_value_t = 6.0)]
    led_size: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let geometry = StripGeometry::new(usize::from(args.leds), args.length_mm)?;
    let config = AnimationConfig {
        geometry,
        clear_color: SILVER,
    };
    let animation = scene::demo::<DEMO_EFFECTS>(config)
        .map_err(|rejected| format!("{} does not fit the scene", rejected.kind().as_str()))?;
    log::info!(
        "simulating {} LEDs over {} mm ({:.2} mm per LED)",
        geometry.nof_leds(),
        geometry.strip_length_mm(),
        geometry.mm_per_led()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 260.0])
            .with_title("Strip Animator Preview"),
        ..Default::default()
    };

    let app = PreviewApp::new(animation, args.led_size);
    eframe::run_native(
        "strip-animator-preview",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

struct PreviewApp {
    animation: AnimationLoop<DEMO_EFFECTS>,
    controls: ControlProcessor<'static>,
    frame: FrameBuffer<MAX_LEDS>,
    /// Wall-clock reference, stands in for the display refresh timestamp
    started: StdInstant,
    led_size: f32,
}

impl PreviewApp {
    fn new(animation: AnimationLoop<DEMO_EFFECTS>, led_size: f32) -> Self {
        let leds = animation.geometry().nof_leds();
        Self {
            animation,
            controls: ControlProcessor::new(CONTROLS.receiver()),
            frame: FrameBuffer::new(leds),
            started: StdInstant::now(),
            led_size,
        }
    }

    fn send(intent: ControlIntent) {
        log::debug!("button: {intent:?}");
        CONTROLS.sender().post(intent);
    }

    fn now(&self) -> Instant {
        let micros = u64::try_from(self.started.elapsed().as_micros()).unwrap_or(u64::MAX);
        Instant::from_micros(micros)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controls.process_pending(&mut self.animation);
        let now = self.now();
        self.animation.tick(now, &mut self.frame);

        // The next repaint is the next animation tick
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Toggle wave").clicked() {
                    Self::send(ControlIntent::ToggleWaves);
                }
                let pause_label = if self.animation.is_paused() {
                    "▶ Play"
                } else {
                    "⏸ Pause"
                };
                if ui.button(pause_label).clicked() {
                    Self::send(ControlIntent::TogglePause);
                }

                ui.add_space(16.0);
                let secs = now.as_millis() / 1000;
                let ms = now.as_millis() % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
            });

            ui.add_space(16.0);

            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let pixels = self.frame.as_slice();
            let rows = pixels.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in pixels.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 1.0, color);
            }
        });
    }
}
