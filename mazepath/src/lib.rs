pub mod logging;
pub mod render;
pub mod settings;

use std::{
    fmt,
    time::{Duration, Instant},
};

use mazepath_core::{
    generate_maze, shortest_path, GenError, Grid, MazeSize, Path, Random, SolveError,
};
use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use settings::{Charset, Settings, SettingsError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidSize(#[from] GenError),
    #[error("{0}")]
    Solve(#[from] SolveError),
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Runs `f` and measures how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Outcome of one generate and solve run.
#[derive(Debug, Clone)]
pub struct Run {
    pub seed: u64,
    pub grid: Grid,
    pub path: Path,
    pub gen_time: Duration,
    pub solve_time: Duration,
}

impl Run {
    /// Generates a maze of `size` and solves it from the top-left to the bottom-right corner.
    pub fn execute(size: MazeSize, seed: u64) -> Result<Self, AppError> {
        let mut rng = Random::seed_from_u64(seed);

        let (grid, gen_time) = timed(|| generate_maze(size, &mut rng));
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Maze is perfect: {}", grid.is_perfect_from(size.start()));
        }

        let (path, solve_time) = timed(|| shortest_path(&grid, size.start(), size.end(), &mut rng));
        let path = path?;

        Ok(Self {
            seed,
            grid,
            path,
            gen_time,
            solve_time,
        })
    }

    pub fn report<'a>(&'a self, charset: &'a Charset, color: bool) -> Report<'a> {
        Report {
            run: self,
            charset,
            color,
        }
    }
}

/// Printable summary of a [`Run`], including the seed that reproduces it.
pub struct Report<'a> {
    run: &'a Run,
    charset: &'a Charset,
    color: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.run;
        writeln!(f, "Seed: {}", run.seed)?;
        writeln!(f, "Maze Generation Time: {:.3} ms", millis(run.gen_time))?;
        writeln!(f, "Maze Solving Time: {:.3} ms", millis(run.solve_time))?;

        if run.path.is_empty() {
            return writeln!(f, "No path found.");
        }

        writeln!(f, "Shortest path length: {}", run.path.len())?;
        writeln!(f, "\nMaze with path:")?;
        write!(f, "{}", render::render(&run.grid, &run.path, self.charset, self.color))
    }
}

/// Picks the seed to use, drawing a fresh one when none is configured.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| thread_rng().gen())
}

pub fn run(settings: &Settings) -> Result<String, AppError> {
    let size = MazeSize::new(settings.rows, settings.cols)?;
    let seed = resolve_seed(settings.seed);

    let run = Run::execute(size, seed)?;
    Ok(run.report(&settings.charset, settings.color).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_mazes() {
        let settings = Settings {
            rows: 1,
            ..Settings::default()
        };
        assert!(matches!(
            run(&settings),
            Err(AppError::InvalidSize(GenError::InvalidSize(1, 11)))
        ));
    }

    #[test]
    fn report_with_path() {
        let run = Run::execute(MazeSize::new(11, 11).unwrap(), 1).unwrap();
        let report = run.report(&Charset::default(), false).to_string();

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "Seed: 1");
        assert!(lines[1].starts_with("Maze Generation Time: "));
        assert!(lines[1].ends_with(" ms"));
        assert!(lines[2].starts_with("Maze Solving Time: "));
        assert_eq!(lines[3], format!("Shortest path length: {}", run.path.len()));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Maze with path:");
        assert_eq!(lines.len(), 6 + 11);
        assert!(lines[6].starts_with("* "));
        assert_eq!(lines[6].len(), 22);
    }

    #[test]
    fn report_without_path() {
        let run = Run {
            seed: 42,
            grid: Grid::from_ascii(&[".#", "#."]).unwrap(),
            path: Path::empty(),
            gen_time: Duration::from_micros(1500),
            solve_time: Duration::from_micros(250),
        };
        assert_eq!(
            run.report(&Charset::default(), false).to_string(),
            "Seed: 42\nMaze Generation Time: 1.500 ms\nMaze Solving Time: 0.250 ms\nNo path found.\n"
        );
    }

    #[test]
    fn same_seed_same_run() {
        let size = MazeSize::new(9, 13).unwrap();
        let a = Run::execute(size, 77).unwrap();
        let b = Run::execute(size, 77).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn run_report_starts_with_the_seed() {
        let settings = Settings {
            seed: Some(5),
            ..Settings::default()
        };
        assert!(run(&settings).unwrap().starts_with("Seed: 5\n"));
    }

    #[test]
    fn second_logger_install_is_reported() {
        // the first install may already have happened in another test
        let _ = logging::init(log::LevelFilter::Warn);
        let err: AppError = logging::init(log::LevelFilter::Warn).unwrap_err().into();
        assert!(err.to_string().starts_with("Cannot install logger"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn configured_seed_is_kept() {
        assert_eq!(resolve_seed(Some(12)), 12);
    }
}
