//! Predict Command Implementation
//!
//! Runs the interactive prediction session: the operator enters the three
//! usage metrics, triggers a prediction, and sees the rendered dollar amount
//! or a retryable error. With all three metric flags set, runs one
//! prediction and exits instead.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use radar_core::{FeatureVector, FEATURE_COUNT};
use radar_serving::{Prediction, Predictor, ServingError};

/// Prompt labels for the three metrics, in pipeline order.
const FIELD_LABELS: [&str; FEATURE_COUNT] = [
    "Average session length (minutes)",
    "Time on app (minutes)",
    "Length of membership (years)",
];

/// Predict yearly customer spend
///
/// Without metric flags this starts a long-running interactive session:
/// enter the three metrics, press Enter on the trigger prompt to predict,
/// adjust and repeat. Artifacts are loaded once at startup; if either file
/// is missing or invalid the command refuses to start.
///
/// # Example
///
/// ```bash
/// radar predict --models-dir ./models
/// radar predict --avg-session-length 34.5 --time-on-app 12.8 --length-of-membership 4.2
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Directory containing scaler.json and model.json
    #[arg(long, short = 'd', default_value = "models", env = "REVENUE_RADAR_MODELS_DIR")]
    pub models_dir: PathBuf,

    /// Average session length in minutes (enables one-shot mode)
    #[arg(long)]
    pub avg_session_length: Option<f64>,

    /// Time on app in minutes (enables one-shot mode)
    #[arg(long)]
    pub time_on_app: Option<f64>,

    /// Length of membership in years (enables one-shot mode)
    #[arg(long)]
    pub length_of_membership: Option<f64>,
}

impl PredictCommand {
    /// Execute the predict command.
    pub fn run(&self) -> Result<()> {
        let predictor = Predictor::load(&self.models_dir).with_context(|| {
            format!(
                "Cannot start: failed to load artifacts from {:?}",
                self.models_dir
            )
        })?;
        info!(models_dir = %self.models_dir.display(), "Artifacts loaded");

        let flags = [
            self.avg_session_length,
            self.time_on_app,
            self.length_of_membership,
        ];
        let given = flags.iter().filter(|f| f.is_some()).count();
        match given {
            0 => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                run_session(&predictor, stdin.lock(), stdout.lock())
            }
            FEATURE_COUNT => self.run_one_shot(&predictor),
            _ => bail!(
                "One-shot mode needs all three metrics; got {given} of {FEATURE_COUNT} \
                 (--avg-session-length, --time-on-app, --length-of-membership)"
            ),
        }
    }

    fn run_one_shot(&self, predictor: &Predictor) -> Result<()> {
        let input = FeatureVector::new(
            self.avg_session_length.unwrap_or_default(),
            self.time_on_app.unwrap_or_default(),
            self.length_of_membership.unwrap_or_default(),
        )
        .map_err(|e| anyhow::anyhow!("{e}"))?;
        let prediction = predictor.predict(&input)?;
        println!("{prediction}");
        Ok(())
    }
}

/// One operator entry at a field prompt.
enum Entry {
    /// A validated value.
    Value(f64),
    /// The operator ended the session (quit keyword or end of input).
    Quit,
}

/// Drive the interactive session over arbitrary reader/writer pairs.
///
/// The session has exactly two states: collecting inputs ahead of the
/// trigger, and showing the last result or error. Every trigger runs a
/// fresh computation; nothing is memoized between cycles.
fn run_session<R: BufRead, W: Write>(
    predictor: &Predictor,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Revenue Radar - predict yearly customer spend")?;
    writeln!(
        out,
        "Enter customer data below. Blank entry re-uses the previous value; type q to quit."
    )?;

    let mut previous: Option<[f64; FEATURE_COUNT]> = None;
    loop {
        let mut values = [0.0_f64; FEATURE_COUNT];
        for (i, label) in FIELD_LABELS.iter().enumerate() {
            match read_field(&mut input, &mut out, label, previous.map(|p| p[i]))? {
                Entry::Value(v) => values[i] = v,
                Entry::Quit => return Ok(()),
            }
        }

        write!(out, "Press Enter to predict (q to quit): ")?;
        out.flush()?;
        match read_line(&mut input)? {
            None => return Ok(()),
            Some(line) if is_quit(&line) => return Ok(()),
            Some(_) => {}
        }

        let vector = FeatureVector {
            avg_session_length: values[0],
            time_on_app: values[1],
            length_of_membership: values[2],
        };
        render_outcome(&mut out, predictor.predict(&vector))?;
        previous = Some(values);
    }
}

/// Prompt for one metric until the operator enters a usable value.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: Option<f64>,
) -> Result<Entry> {
    loop {
        match default {
            Some(d) => write!(out, "{label} [{d}]: ")?,
            None => write!(out, "{label}: ")?,
        }
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(Entry::Quit);
        };
        if is_quit(&line) {
            return Ok(Entry::Quit);
        }
        if line.is_empty() {
            if let Some(d) = default {
                return Ok(Entry::Value(d));
            }
            writeln!(out, "  A value is required.")?;
            continue;
        }
        match line.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => return Ok(Entry::Value(v)),
            _ => writeln!(out, "  Please enter a non-negative number (e.g. 12.5).")?,
        }
    }
}

/// Show the outcome of one prediction cycle.
///
/// Retryable errors are rendered and the session continues; a fatal error
/// (artifact state went bad mid-session) propagates and ends it.
fn render_outcome<W: Write>(
    out: &mut W,
    result: Result<Prediction, ServingError>,
) -> Result<()> {
    match result {
        Ok(prediction) => {
            writeln!(out, "Predicted yearly amount spent: {prediction}")?;
        }
        Err(err) if err.retryable() => {
            writeln!(out, "Prediction failed: {err}")?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Read one trimmed line; `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}
