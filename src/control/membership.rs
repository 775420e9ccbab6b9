/*
    Fuzzy Membership
        Universe of discourse = 11 ordered reference points.
        Each point is the peak of a triangular set reaching 0 at its neighbours,
        so at most two adjacent sets are active and their degrees sum to 1.
        Values outside the universe saturate to the nearest end set.
*/

pub const UNIVERSE_SIZE: usize = 11;

pub type Universe = [f64; UNIVERSE_SIZE];
pub type Memberships = [f64; UNIVERSE_SIZE];

pub fn linspace(lo: f64, hi: f64) -> Universe {
    let mut points = [0.0; UNIVERSE_SIZE];
    let step = (hi - lo) / (UNIVERSE_SIZE - 1) as f64;

    for (k, point) in points.iter_mut().enumerate() {
        *point = k as f64 * step + lo;
    }
    // keep the end points exact
    points[0] = lo;
    points[UNIVERSE_SIZE - 1] = hi;

    points
}

pub fn compute_memberships(x: f64, universe: &Universe) -> Memberships {
    let mut mu = [0.0; UNIVERSE_SIZE];

    if let Some(exact) = universe.iter().position(|point| x == *point) {
        mu[exact] = 1.0;
        return mu;
    }

    match universe.iter().position(|point| x < *point) {
        Some(0) => {
            mu[0] = 1.0;
        },
        Some(upper) => {
            let lower = upper - 1;
            let u = (x - universe[lower]) / (universe[upper] - universe[lower]);
            mu[lower] = 1.0 - u;
            mu[upper] = u;
        },
        // Above the universe (or NaN)
        None => {
            mu[UNIVERSE_SIZE - 1] = 1.0;
        },
    }

    for degree in mu.iter_mut() {
        *degree = degree.clamp(0.0, 1.0);
    }

    mu
}
