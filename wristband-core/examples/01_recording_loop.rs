//! Recording Loop Example
//!
//! Simulates the wristband's 64 ms recording timer driving a vibration
//! motor from a skin temperature channel.
//!
//! ## What You'll Learn
//!
//! - Building a filter from a validated configuration
//! - Plugging a sensor and a motor into a `FeedbackLoop`
//! - Printing the diagnostic report the firmware writes to serial
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_recording_loop
//! ```

use std::convert::Infallible;

use wristband_core::{
    constants::RECORDING_DELAY_MS, Actuator, FeedbackLoop, FilterConfig, FilterReport,
    ReportSink, SampleSource, SensorFilter, TickOutcome,
};

/// Skin temperature that warms up by one degree after 40 s
struct SimulatedSkin {
    tick: u32,
}

impl SampleSource for SimulatedSkin {
    type Error = Infallible;

    fn poll_sample(&mut self) -> nb::Result<f32, Self::Error> {
        self.tick += 1;
        let elapsed_ms = self.tick * RECORDING_DELAY_MS;
        // Small ripple so the reading is never perfectly flat
        let ripple = if self.tick % 2 == 0 { 0.02 } else { -0.02 };
        let warm = if elapsed_ms > 40_000 { 1.0 } else { 0.0 };
        Ok(33.0 + ripple + warm)
    }
}

/// Motor that just remembers its duty cycle
struct ConsoleMotor {
    duty: f32,
}

impl Actuator for ConsoleMotor {
    type Error = Infallible;

    fn drive(&mut self, activation: f32) -> Result<(), Self::Error> {
        self.duty = activation;
        Ok(())
    }
}

struct Serial;

impl ReportSink for Serial {
    fn emit(&mut self, report: &FilterReport) {
        println!("{}", report);
    }
}

fn main() {
    println!("Wristband Recording Loop Example");
    println!("================================\n");

    let config = FilterConfig::skin_temperature();
    println!("Sample rate: {} Hz", config.sample_rate_hz);
    println!("Smoothing constant: {:.5}\n", config.smoothing_constant());

    let filter = match SensorFilter::from_config(config, "skin_temp") {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return;
        }
    };

    let mut feedback = FeedbackLoop::new(filter, SimulatedSkin { tick: 0 }, ConsoleMotor { duty: 0.0 });
    let mut serial = Serial;

    // 60 s of recording
    for second in 0..60u32 {
        for _ in 0..(1000 / RECORDING_DELAY_MS) {
            match feedback.tick() {
                Ok(TickOutcome::Driven(_)) | Ok(TickOutcome::Idle) => {}
                Ok(TickOutcome::Rejected(e)) => println!("dropped sample: {}", e),
                Err(e) => {
                    eprintln!("loop failed: {:?}", e);
                    return;
                }
            }
        }

        if second % 10 == 9 {
            println!("t = {} s", second + 1);
            feedback.report_to(&mut serial);
            println!();
        }
    }

    let (_, _, motor) = feedback.into_parts();
    println!("Final motor duty: {:.3}", motor.duty);
}
