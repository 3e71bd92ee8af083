use crate::error::ClusteringError;
use crate::report::{ClusterResult, ClusterSummary, OpponentPoint};
use configuration::ClusteringParams;
use core_types::{Archetype, OpponentRecord};
use nalgebra::{DMatrix, SymmetricEigen};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

/// Number of stat dimensions the engine operates on: VPIP, PFR, AF, WTSD.
const DIMS: usize = 4;

/// Population-level opponent clustering: standardize, project, k-means, label.
#[derive(Debug, Clone, Default)]
pub struct ClusteringEngine {
    params: ClusteringParams,
}

impl ClusteringEngine {
    pub fn new(params: ClusteringParams) -> Self {
        Self { params }
    }

    /// Groups the opponent population into `k` behavioral clusters.
    ///
    /// Opponents below the per-opponent hand floor are excluded up front.
    /// The run is deterministic for a given population and seed: k-means++
    /// initialization draws from a `Pcg64` seeded from configuration.
    pub fn cluster(&self, opponents: &[OpponentRecord]) -> Result<ClusterResult, ClusteringError> {
        let k = self.params.k;
        if k == 0 {
            return Err(ClusteringError::InvalidParameter {
                name: "k",
                reason: "at least one cluster is required".to_string(),
            });
        }

        let qualified: Vec<&OpponentRecord> = opponents
            .iter()
            .filter(|o| o.stats.hands_sampled >= self.params.min_hands_per_opponent)
            .collect();
        let excluded = opponents.len() - qualified.len();

        if qualified.len() < k {
            return Err(ClusteringError::InsufficientData {
                required: k,
                actual: qualified.len(),
            });
        }

        let n = qualified.len();
        let raw: Vec<[f64; DIMS]> = qualified.iter().map(|o| o.stats.feature_vector()).collect();

        let (standardized, spreads) = standardize(&raw)?;

        let (coords, explained_variance) = project_2d(&standardized, n);

        let mut rng = Pcg64::seed_from_u64(self.params.seed);
        let assignments = kmeans(&standardized, k, self.params.max_iterations, &mut rng);

        debug!(population = n, excluded, k, "clustered opponent population");

        let mut clusters = Vec::with_capacity(k);
        for id in 0..k {
            let members: Vec<usize> = (0..n).filter(|i| assignments[*i] == id).collect();
            let centroid = mean_of(&raw, &members);
            clusters.push(ClusterSummary {
                id,
                size: members.len(),
                mean_vpip_pct: centroid[0],
                mean_pfr_pct: centroid[1],
                mean_aggression_factor: centroid[2],
                mean_wtsd_pct: centroid[3],
                archetype: self.nearest_archetype(&centroid, &spreads),
            });
        }

        let points = qualified
            .iter()
            .enumerate()
            .map(|(i, o)| OpponentPoint {
                opponent_id: o.id,
                name: o.name.clone(),
                x: coords[i][0],
                y: coords[i][1],
                cluster: assignments[i],
            })
            .collect();

        Ok(ClusterResult {
            points,
            clusters,
            k,
            excluded,
            explained_variance,
            low_confidence: n < self.params.min_population,
        })
    }

    /// Maps a cluster centroid (original stat space) to the closest
    /// archetype reference point. Distances are measured per-dimension in
    /// units of the population spread so AF (an absolute ratio) is not
    /// drowned out by the percentage stats. Exact ties fall back to the
    /// fixed archetype priority order.
    fn nearest_archetype(&self, centroid: &[f64; DIMS], spreads: &[f64; DIMS]) -> Archetype {
        let mut best = Archetype::Unknown;
        let mut best_key = (f64::INFINITY, u8::MAX);

        for reference in &self.params.archetypes {
            let target = [
                reference.vpip_pct,
                reference.pfr_pct,
                reference.aggression_factor,
                reference.wtsd_pct,
            ];
            let dist: f64 = centroid
                .iter()
                .zip(&target)
                .zip(spreads)
                .map(|((c, t), s)| {
                    let d = (c - t) / s;
                    d * d
                })
                .sum();
            let key = (dist, reference.archetype.priority());
            if key.0 < best_key.0 || (key.0 == best_key.0 && key.1 < best_key.1) {
                best_key = key;
                best = reference.archetype;
            }
        }

        best
    }
}

/// Zero-mean unit-variance scaling per dimension. Returns the scaled rows
/// and the per-dimension standard deviations actually applied.
fn standardize(rows: &[[f64; DIMS]]) -> Result<(Vec<[f64; DIMS]>, [f64; DIMS]), ClusteringError> {
    let n = rows.len() as f64;
    let mut means = [0.0; DIMS];
    let mut stds = [0.0; DIMS];

    for d in 0..DIMS {
        means[d] = rows.iter().map(|r| r[d]).sum::<f64>() / n;
        let var = rows.iter().map(|r| (r[d] - means[d]).powi(2)).sum::<f64>() / n;
        stds[d] = var.sqrt();
    }

    if stds.iter().all(|s| *s <= f64::EPSILON) {
        return Err(ClusteringError::DegenerateInput(
            "every opponent has an identical stat vector".to_string(),
        ));
    }

    // A single flat dimension carries no information; neutralize it instead
    // of dividing by zero.
    let spreads = stds.map(|s| if s <= f64::EPSILON { 1.0 } else { s });

    let scaled = rows
        .iter()
        .map(|r| {
            let mut z = [0.0; DIMS];
            for d in 0..DIMS {
                z[d] = (r[d] - means[d]) / spreads[d];
            }
            z
        })
        .collect();

    Ok((scaled, spreads))
}

/// Projects the standardized rows onto the top-2 eigenvectors of their
/// covariance matrix. Returns the 2-D coordinates and the fraction of
/// variance those two components explain.
fn project_2d(rows: &[[f64; DIMS]], n: usize) -> (Vec<[f64; 2]>, f64) {
    let denom = (n.max(2) - 1) as f64;
    let cov = DMatrix::from_fn(DIMS, DIMS, |i, j| {
        rows.iter().map(|r| r[i] * r[j]).sum::<f64>() / denom
    });

    let eigen = SymmetricEigen::new(cov);
    let mut order: Vec<usize> = (0..DIMS).collect();
    order.sort_by(|a, b| eigen.eigenvalues[*b].total_cmp(&eigen.eigenvalues[*a]));

    let total: f64 = eigen.eigenvalues.iter().map(|v| v.max(0.0)).sum();
    let top: f64 = eigen.eigenvalues[order[0]].max(0.0) + eigen.eigenvalues[order[1]].max(0.0);
    let explained = if total > 0.0 { top / total } else { 0.0 };

    let coords = rows
        .iter()
        .map(|r| {
            let mut point = [0.0; 2];
            for (slot, &col) in point.iter_mut().zip(order.iter().take(2)) {
                *slot = (0..DIMS).map(|d| r[d] * eigen.eigenvectors[(d, col)]).sum();
            }
            point
        })
        .collect();

    (coords, explained)
}

/// Lloyd's algorithm with k-means++ seeding. Deterministic for a given RNG
/// state; an emptied cluster is re-seeded to the point farthest from its
/// assigned centroid.
fn kmeans(rows: &[[f64; DIMS]], k: usize, max_iterations: usize, rng: &mut Pcg64) -> Vec<usize> {
    let n = rows.len();
    let mut centroids = plus_plus_init(rows, k, rng);
    let mut assignments = vec![0usize; n];

    for _ in 0..max_iterations {
        let mut changed = false;
        for (i, row) in rows.iter().enumerate() {
            let nearest = nearest_centroid(row, &centroids);
            if assignments[i] != nearest {
                assignments[i] = nearest;
                changed = true;
            }
        }

        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<usize> = (0..n).filter(|i| assignments[*i] == c).collect();
            if members.is_empty() {
                // Re-seed a starved cluster with the worst-fitting point.
                if let Some(far) = (0..n).max_by(|a, b| {
                    sq_dist(&rows[*a], centroid).total_cmp(&sq_dist(&rows[*b], centroid))
                }) {
                    *centroid = rows[far];
                    changed = true;
                }
            } else {
                *centroid = mean_of(rows, &members);
            }
        }

        if !changed {
            break;
        }
    }

    assignments
}

fn plus_plus_init(rows: &[[f64; DIMS]], k: usize, rng: &mut Pcg64) -> Vec<[f64; DIMS]> {
    let n = rows.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(rows[rng.gen_range(0..n)]);

    while centroids.len() < k {
        let weights: Vec<f64> = rows
            .iter()
            .map(|r| {
                centroids
                    .iter()
                    .map(|c| sq_dist(r, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = weights.iter().sum();

        let next = if total <= 0.0 {
            // Fewer distinct points than clusters; duplicate one.
            rng.gen_range(0..n)
        } else {
            let mut draw = rng.gen_range(0.0..total);
            let mut chosen = n - 1;
            for (i, w) in weights.iter().enumerate() {
                if draw < *w {
                    chosen = i;
                    break;
                }
                draw -= w;
            }
            chosen
        };
        centroids.push(rows[next]);
    }

    centroids
}

fn nearest_centroid(row: &[f64; DIMS], centroids: &[[f64; DIMS]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = sq_dist(row, c);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

fn sq_dist(a: &[f64; DIMS], b: &[f64; DIMS]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn mean_of(rows: &[[f64; DIMS]], members: &[usize]) -> [f64; DIMS] {
    let mut out = [0.0; DIMS];
    if members.is_empty() {
        return out;
    }
    for &i in members {
        for d in 0..DIMS {
            out[d] += rows[i][d];
        }
    }
    for v in &mut out {
        *v /= members.len() as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sq_dist_is_euclidean_squared() {
        let a = [0.0, 0.0, 0.0, 0.0];
        let b = [1.0, 2.0, 2.0, 0.0];
        assert_eq!(sq_dist(&a, &b), 9.0);
    }

    #[test]
    fn standardize_rejects_identical_rows() {
        let rows = vec![[25.0, 18.0, 2.0, 27.0]; 5];
        assert!(standardize(&rows).is_err());
    }

    #[test]
    fn standardize_neutralizes_a_single_flat_dimension() {
        let rows = vec![
            [10.0, 5.0, 1.0, 30.0],
            [20.0, 15.0, 1.0, 20.0],
            [30.0, 25.0, 1.0, 10.0],
        ];
        let (scaled, _) = standardize(&rows).unwrap();
        for row in scaled {
            assert_eq!(row[2], 0.0);
        }
    }
}
