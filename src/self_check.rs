//! Randomised cross-check of the incremental win detection
//!
//! Plays random legal games and, after every placement, compares
//! [`WinDetector::evaluate`] against a full-board [`WinDetector::scan`] and
//! verifies the grid's gravity invariant.

use anyhow::{bail, Result};
use indicatif::*;
use log::info;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rayon::prelude::*;

use std::time::Instant;

use crate::grid::{Grid, Mark, Placement};
use crate::win_detector::WinDetector;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameSummary {
    /// Number of pieces placed, each one a checked position
    pub moves: usize,
    /// `None` for a draw
    pub winner: Option<Mark>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Report {
    pub games: usize,
    pub positions: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
}

impl Report {
    fn record(mut self, summary: &GameSummary) -> Self {
        self.games += 1;
        self.positions += summary.moves;
        match summary.winner {
            Some(Mark::PlayerOne) => self.player_one_wins += 1,
            Some(Mark::PlayerTwo) => self.player_two_wins += 1,
            None => self.draws += 1,
        }
        self
    }
}

/// Plays uniformly random legal moves on a fresh grid until someone wins or
/// the grid fills up, checking every position along the way
pub fn play_random_game<R: Rng>(rng: &mut R, detector: &WinDetector) -> Result<GameSummary> {
    let mut grid = Grid::new();
    let mut mark = Mark::PlayerOne;
    let mut history = Vec::new();

    loop {
        let playable: Vec<usize> = (0..grid.width()).filter(|&c| grid.playable(c)).collect();
        if playable.is_empty() {
            return Ok(GameSummary {
                moves: grid.num_moves(),
                winner: None,
            });
        }
        let column = playable[rng.random_range(0..playable.len())];
        history.push(column + 1);

        let row = match grid.place_piece(column, mark) {
            Placement::Placed { row, .. } => row,
            Placement::Full => bail!(
                "column {} reported full but was playable, moves {:?}",
                column + 1,
                history
            ),
        };
        if !grid.gravity_holds() {
            bail!("gravity invariant broken after moves {:?}\n{}", history, grid.render());
        }

        let incremental = detector.evaluate(&grid, row, column);
        let oracle = detector.scan(&grid);
        if incremental.is_win() != oracle.is_win() {
            bail!(
                "detector disagreement after moves {:?}: incremental {:?}, full scan {:?}\n{}",
                history,
                incremental,
                oracle,
                grid.render()
            );
        }

        if incremental.is_win() {
            return Ok(GameSummary {
                moves: grid.num_moves(),
                winner: Some(mark),
            });
        }
        mark = mark.other();
    }
}

/// Plays `games` random games in parallel, game `i` seeded with `seed + i`
pub fn run(games: usize, seed: u64) -> Result<Report> {
    let start = Instant::now();
    let detector = WinDetector::new();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Cross-checking games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let summaries = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let summary = play_random_game(&mut rng, &detector);
            progress.inc(1);
            summary
        })
        .collect::<Result<Vec<_>>>();
    progress.finish_and_clear();

    let report = summaries?
        .iter()
        .fold(Report::default(), |report, summary| report.record(summary));

    info!(
        "cross-checked {} positions over {} games in {}",
        report.positions,
        report.games,
        HumanDuration(Instant::now() - start)
    );
    Ok(report)
}
