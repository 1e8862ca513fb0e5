use super::solvers::traits::OptimizationCallback;
use serde::Serialize;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Swarm best observed at the end of one epoch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochRecord {
    pub epoch: usize,
    pub best_position: Vec<f64>,
    pub best_error: f64,
}

/// Callback for tracking and displaying swarm progress
///
/// Progress lines go to stdout unless another writer is supplied.
pub struct ProgressCallback<W: Write = Stdout> {
    writer: Option<W>,
    history: Vec<EpochRecord>,
}

impl ProgressCallback<Stdout> {
    pub fn new(verbose: bool) -> Self {
        Self {
            writer: verbose.then(io::stdout),
            history: Vec::new(),
        }
    }
}

impl<W: Write> ProgressCallback<W> {
    /// Verbose callback printing to `writer`
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            history: Vec::new(),
        }
    }

    /// Get epoch history
    pub fn history(&self) -> &[EpochRecord] {
        &self.history
    }

    pub fn into_writer(self) -> Option<W> {
        self.writer
    }
}

/// One progress line showing at most the first two coordinates
pub fn format_progress(epoch: usize, best_position: &[f64], best_error: f64) -> String {
    let shown: Vec<String> = best_position.iter().take(2).map(|x| x.to_string()).collect();
    format!(
        "Epoch: {} | Best position: [{}] | Best known error: {}",
        epoch,
        shown.join(","),
        best_error
    )
}

impl<W: Write> OptimizationCallback for ProgressCallback<W> {
    fn on_epoch(&mut self, epoch: usize, best_position: &[f64], best_error: f64) {
        self.history.push(EpochRecord {
            epoch,
            best_position: best_position.to_vec(),
            best_error,
        });

        if let Some(writer) = self.writer.as_mut() {
            let line = format_progress(epoch, best_position, best_error);
            if let Err(e) = writeln!(writer, "{}", line) {
                warn!(epoch, error = %e, "Failed to write progress line");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_shows_first_two_coordinates() {
        let line = format_progress(3, &[1.5, -2.0, 9.0], 0.25);
        assert_eq!(line, "Epoch: 3 | Best position: [1.5,-2] | Best known error: 0.25");
    }

    #[test]
    fn progress_line_for_one_dimension() {
        assert_eq!(
            format_progress(0, &[4.0], 16.0),
            "Epoch: 0 | Best position: [4] | Best known error: 16"
        );
    }

    #[test]
    fn history_records_every_epoch() {
        let mut callback = ProgressCallback::new(false);
        callback.on_epoch(0, &[1.0, 1.0], 2.0);
        callback.on_epoch(1, &[0.5, 0.5], 0.5);

        let history = callback.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].epoch, 1);
        assert_eq!(history[1].best_position, vec![0.5, 0.5]);
        assert_eq!(history[1].best_error, 0.5);
    }

    #[test]
    fn verbose_callback_writes_one_line_per_epoch() {
        let mut callback = ProgressCallback::with_writer(Vec::new());
        callback.on_epoch(0, &[3.0, 4.0], 25.0);
        callback.on_epoch(1, &[1.0, 0.5], 1.25);

        assert_eq!(callback.history().len(), 2);
        let output = String::from_utf8(callback.into_writer().unwrap()).unwrap();
        assert_eq!(
            output,
            "Epoch: 0 | Best position: [3,4] | Best known error: 25\n\
             Epoch: 1 | Best position: [1,0.5] | Best known error: 1.25\n"
        );
    }

    #[test]
    fn quiet_callback_has_no_writer() {
        let mut callback = ProgressCallback::new(false);
        callback.on_epoch(0, &[1.0], 1.0);

        assert!(callback.into_writer().is_none());
    }
}
