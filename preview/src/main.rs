//! Desktop preview app for myrtio-light-animator modes
//!
//! Drives a [`Controller`] over an in-memory strip and paints the result.
//! Mode changes rebuild the function list; color and speed changes go
//! through the control channel like they would on a device.

use std::time::{Duration as StdDuration, Instant as StdInstant};

use eframe::egui::{self};
use myrtio_light_animator::{
    ColorMode, ControlChannel, ControlIntent, ControlSender, Controller, ControllerConfig,
    Duration, FunctionMode, MemoryDriver, Rgb,
};

/// Largest strip the preview simulates
const MAX_LEDS: usize = 300;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Default time between ticks in milliseconds
const DEFAULT_TICK_MS: u64 = 20;

/// Control channel shared between the UI and the controller
static CONTROL_CHANNEL: ControlChannel = ControlChannel::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Light Animator Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    controller: Controller<'static, MemoryDriver>,
    sender: ControlSender<'static>,

    color_mode: ColorMode,
    function_mode: FunctionMode,
    /// Color sent with the "Apply color" button
    color: [u8; 3],
    background: [u8; 3],
    led_count: usize,
    led_size: f32,
    tick_ms: u64,
    playing: bool,
    /// Wall-clock time of the last controller tick
    last_tick: StdInstant,
    /// Last error reported by the controller, shown in the UI
    error: Option<String>,
}

impl PreviewApp {
    fn new() -> Self {
        let mut app = Self {
            controller: build_controller(DEFAULT_LED_COUNT),
            sender: CONTROL_CHANNEL.sender(),
            color_mode: ColorMode::Rainbow,
            function_mode: FunctionMode::Marquee,
            color: [255, 180, 100],
            background: [0, 0, 0],
            led_count: DEFAULT_LED_COUNT,
            led_size: LED_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            playing: true,
            last_tick: StdInstant::now(),
            error: None,
        };
        app.apply_modes();
        app
    }

    /// Reset the controller and configure the selected modes
    fn apply_modes(&mut self) {
        self.controller.reset();
        if let Err(e) = self.controller.apply_color_mode(self.color_mode) {
            self.error = Some(e.to_string());
            return;
        }
        self.controller.apply_function_mode(self.function_mode);
        self.error = None;
    }

    fn rebuild(&mut self) {
        self.controller = build_controller(self.led_count);
        self.send(ControlIntent::SetRefreshDelay(Duration::from_millis(self.tick_ms)));
        self.send(ControlIntent::SetBackground(to_rgb(self.background)));
        self.apply_modes();
    }

    fn send(&self, intent: ControlIntent) {
        // A full queue only drops a UI change; the next one will get through.
        let _ = self.sender.try_send(intent);
    }

    fn advance(&mut self) {
        if !self.playing {
            return;
        }
        let period = StdDuration::from_millis(self.tick_ms.max(1));
        if self.last_tick.elapsed() < period {
            return;
        }
        self.last_tick = StdInstant::now();
        if let Err(e) = self.controller.tick() {
            self.error = Some(e.to_string());
            self.playing = false;
        }
    }
}

fn build_controller(led_count: usize) -> Controller<'static, MemoryDriver> {
    let config = ControllerConfig {
        loop_forever: true,
        simulate: true,
        seed: fastrand::u64(..),
        ..ControllerConfig::default()
    };
    Controller::new(MemoryDriver::new(led_count), config).with_control(CONTROL_CHANNEL.receiver())
}

const fn to_rgb(color: [u8; 3]) -> Rgb {
    Rgb {
        r: color[0],
        g: color[1],
        b: color[2],
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui.button("⏭ Step").clicked() {
                            let playing = self.playing;
                            self.playing = true;
                            self.last_tick = StdInstant::now() - StdDuration::from_secs(1);
                            self.advance();
                            self.playing = playing;
                        }
                        if ui.button("🔀 Reroll").clicked() {
                            self.apply_modes();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Tick (ms):");
                        let old_tick_ms = self.tick_ms;
                        ui.add(egui::Slider::new(&mut self.tick_ms, 5..=500).logarithmic(true));
                        if self.tick_ms != old_tick_ms {
                            self.send(ControlIntent::SetRefreshDelay(Duration::from_millis(
                                self.tick_ms,
                            )));
                        }
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            self.rebuild();
                        }
                    });
                });
                // </LayoutControls>
            });

            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Colors:");
                    let mut selected = self.color_mode;
                    egui::ComboBox::from_id_salt("color_mode_selector")
                        .selected_text(self.color_mode.as_str())
                        .show_ui(ui, |ui| {
                            for mode in ColorMode::ALL {
                                ui.selectable_value(&mut selected, mode, mode.as_str());
                            }
                        });

                    ui.add_space(8.0);

                    ui.label("Function:");
                    let mut selected_function = self.function_mode;
                    egui::ComboBox::from_id_salt("function_mode_selector")
                        .selected_text(self.function_mode.as_str())
                        .show_ui(ui, |ui| {
                            for mode in FunctionMode::ALL {
                                ui.selectable_value(&mut selected_function, mode, mode.as_str());
                            }
                        });

                    if selected != self.color_mode || selected_function != self.function_mode {
                        self.color_mode = selected;
                        self.function_mode = selected_function;
                        self.apply_modes();
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    ui.color_edit_button_srgb(&mut self.color);
                    if ui.button("Apply color").clicked() {
                        self.send(ControlIntent::SetColor(to_rgb(self.color)));
                    }

                    ui.add_space(8.0);

                    ui.label("Background:");
                    let old_background = self.background;
                    if ui.color_edit_button_srgb(&mut self.background).changed()
                        && old_background != self.background
                    {
                        self.send(ControlIntent::SetBackground(to_rgb(self.background)));
                    }
                });

                ui.add_space(4.0);

                let names: Vec<&str> = self
                    .controller
                    .functions()
                    .iter()
                    .map(|function| function.name())
                    .collect();
                ui.label(format!("Running: {}", names.join(" + ")));
                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = self.controller.light_string().pixels();
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
