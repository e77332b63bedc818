use crate::{
    harness::{ReportFormat, ReportLine, RunConfig, TimingMode},
    search::{Board, PuzzleState, SearchEngine, SearchEngineName},
};
use rand::{rngs::StdRng, SeedableRng};
use std::{io::Write, time::Instant};
use tracing::{debug, info, warn};

/// Runs every configured engine once per iteration and writes one report
/// line per run.
#[derive(Debug)]
pub struct Harness {
    config: RunConfig,
    engines: Vec<(SearchEngineName, Box<dyn SearchEngine>)>,
    rng: StdRng,
}

impl Harness {
    pub fn new(config: RunConfig) -> Self {
        let engines = config
            .engines
            .iter()
            .map(|&name| (name, name.create(config.heuristic)))
            .collect();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            engines,
            rng,
        }
    }

    fn start_board(&mut self) -> Board {
        if self.config.randomise {
            Board::random_solvable(&mut self.rng)
        } else {
            self.config.start
        }
    }

    /// Run all iterations, writing the report to `out`. The report lines are
    /// also returned.
    pub fn run(&mut self, out: &mut impl Write) -> std::io::Result<Vec<ReportLine>> {
        info!(
            iterations = self.config.iterations,
            engines = self.engines.len(),
            timing = ?self.config.timing,
            randomise = self.config.randomise,
        );
        let mut lines = Vec::with_capacity(self.config.iterations * self.engines.len());

        for iteration in 1..=self.config.iterations {
            let board = self.start_board();
            if !board.is_solvable() {
                warn!(%board, "start board cannot reach the goal");
            }
            debug!(iteration, start = ?board.cells());
            let start = PuzzleState::new(board);

            let iteration_started_at = Instant::now();
            for (name, engine) in self.engines.iter_mut() {
                let started_at = match self.config.timing {
                    TimingMode::Shared => iteration_started_at,
                    TimingMode::PerEngine => Instant::now(),
                };
                let statistics = engine.search(start, started_at);
                if !statistics.succeeded {
                    warn!(engine = %name, iteration, "search exhausted without reaching the goal");
                }

                let line = ReportLine::new(*name, iteration, &statistics);
                match self.config.format {
                    ReportFormat::Text => writeln!(out, "{}", line)?,
                    ReportFormat::Json => {
                        serde_json::to_writer(&mut *out, &line)?;
                        writeln!(out)?;
                    }
                }
                lines.push(line);
            }

            if self.config.format == ReportFormat::Text {
                writeln!(out)?;
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn run(config: RunConfig) -> (String, Vec<ReportLine>) {
        let mut out = Vec::new();
        let lines = Harness::new(config).run(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), lines)
    }

    fn fast_engines() -> Vec<SearchEngineName> {
        vec![
            SearchEngineName::Ucs,
            SearchEngineName::Bfs,
            SearchEngineName::AStar,
        ]
    }

    #[test]
    fn reference_run_single_iteration() {
        let (text, lines) = run(RunConfig {
            iterations: 1,
            ..RunConfig::default()
        });

        let printed: Vec<&str> = text.split('\n').collect();
        // Four report lines, the blank separator and the trailing newline.
        assert_eq!(printed.len(), 6);
        assert!(printed[0].starts_with("DFS - Iteration 1: Nodes visited=181435, Best Time="));
        assert!(printed[1].starts_with("UCS - Iteration 1: Nodes visited=60, Best Time="));
        assert!(printed[2].starts_with("BFS - Iteration 1: Nodes visited=60, Best Time="));
        assert!(printed[3].starts_with("A* - Iteration 1: Nodes visited=7, Best Time="));
        assert!(printed[3].ends_with(" nanoseconds"));
        assert_eq!(printed[4], "");
        assert!(lines.iter().all(|line| line.succeeded));
    }

    #[test]
    fn fixed_start_repeats_identically() {
        let (text, lines) = run(RunConfig {
            iterations: 3,
            engines: fast_engines(),
            ..RunConfig::default()
        });
        assert_eq!(lines.len(), 9);
        for (i, chunk) in lines.chunks(3).enumerate() {
            assert!(chunk.iter().all(|line| line.iteration == i + 1));
            let counts: Vec<u64> = chunk.iter().map(|line| line.nodes_visited).collect();
            assert_eq!(counts, vec![60, 60, 7]);
        }
        assert_eq!(text.matches("\n\n").count(), 3);
    }

    #[test]
    fn shared_timing_accumulates_within_an_iteration() {
        let (_, lines) = run(RunConfig {
            iterations: 2,
            engines: fast_engines(),
            timing: TimingMode::Shared,
            ..RunConfig::default()
        });
        for chunk in lines.chunks(3) {
            assert!(chunk
                .windows(2)
                .all(|pair| pair[0].average_time_ns <= pair[1].average_time_ns));
        }
    }

    #[test]
    fn timings_collapse_to_one_value() {
        let (_, lines) = run(RunConfig {
            iterations: 1,
            engines: fast_engines(),
            ..RunConfig::default()
        });
        for line in lines {
            assert_eq!(line.best_time_ns, line.worst_time_ns);
            assert_eq!(line.worst_time_ns, line.average_time_ns);
        }
    }

    #[test]
    fn seeded_random_starts_are_reproducible() {
        let config = RunConfig {
            iterations: 4,
            engines: vec![SearchEngineName::Bfs, SearchEngineName::AStar],
            randomise: true,
            seed: Some(2024),
            ..RunConfig::default()
        };
        let (_, first) = run(config.clone());
        let (_, second) = run(config);
        let counts = |lines: &[ReportLine]| -> Vec<u64> {
            lines.iter().map(|line| line.nodes_visited).collect()
        };
        assert_eq!(counts(&first), counts(&second));
        assert!(first.iter().all(|line| line.succeeded));
    }

    #[test]
    fn unsolvable_start_prints_failure() {
        let (text, lines) = run(RunConfig {
            iterations: 1,
            start: UNSOLVABLE_BOARD,
            engines: vec![SearchEngineName::Bfs],
            ..RunConfig::default()
        });
        assert!(!lines[0].succeeded);
        assert_eq!(
            text,
            "BFS - Iteration 1: Nodes visited=181440, Best Time=0 nanoseconds, \
             Worst Time=0 nanoseconds, Average Time=0 nanoseconds\n\n"
        );
    }

    #[test]
    fn json_lines() {
        let (text, _) = run(RunConfig {
            iterations: 2,
            engines: vec![SearchEngineName::AStar],
            format: ReportFormat::Json,
            ..RunConfig::default()
        });
        let parsed: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["algorithm"], "A*");
        assert_eq!(parsed[1]["iteration"], 2);
        assert_eq!(parsed[1]["nodes_visited"], 7);
    }
}
