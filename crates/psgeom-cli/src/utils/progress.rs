//! Terminal progress for long sweeps, driven by the library's progress events.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use psgeom::engine::progress::{Progress, ProgressCallback};
use std::fmt::Write as _;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const BAR_TEMPLATE: &str = "{msg:<8} [{bar:40.cyan/blue}] {pos}/{len} {prefix} ({eta})";

/// Owns the bar a sweep reports into. `ProgressBar` is itself a shared handle,
/// so the callback holds a clone of it.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    /// Draws on stderr, or nowhere when `quiet` is set.
    pub fn new(quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self { bar }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event| apply(&bar, event))
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(spinner_style());
            bar.set_message(name);
            bar.enable_steady_tick(TICK);
        }
        // The phase name stays as the bar's message; the unit labels the counter.
        Progress::TaskStart { total_steps, unit } => {
            bar.disable_steady_tick();
            bar.set_style(bar_style());
            bar.set_length(total_steps);
            bar.set_position(0);
            bar.set_prefix(unit);
            bar.reset_eta();
        }
        Progress::TaskIncrement => bar.inc(1),
        Progress::TaskFinish => {
            if let Some(len) = bar.length() {
                bar.set_position(len);
            }
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message("✓ Done");
        }
        Progress::Message(text) if bar.is_finished() => bar.set_message(text),
        Progress::Message(text) => bar.println(format!("  {}", text)),
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("##-")
}
