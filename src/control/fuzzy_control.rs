/*
    Fuzzy PID Control
        Fuzzy PD part : fuzzify Kp*e and Kd*de over 11-point universes,
                        min inference over an 11x11 rule table,
                        max aggregation per output set,
                        centroid defuzzification over triangular output sets
        Integral part : Ki * sum(integrator_gain * e)
        Output saturated to the output universe
*/

use super::*;

/* --------------------------- Rule Table -------------------------- */
// FUZZY_RULES[error_idx][derivative_idx] = output set (1..=11)
// Larger combined error + derivative index selects a lower output set
pub const FUZZY_RULES: [[u8; UNIVERSE_SIZE]; UNIVERSE_SIZE] = build_rule_table();

const RULE_OFFSET: i32 = 16;

const fn build_rule_table() -> [[u8; UNIVERSE_SIZE]; UNIVERSE_SIZE] {
    let mut table = [[0u8; UNIVERSE_SIZE]; UNIVERSE_SIZE];
    let mut i = 0;
    while i < UNIVERSE_SIZE {
        let mut j = 0;
        while j < UNIVERSE_SIZE {
            let mut set = RULE_OFFSET - (i + j) as i32;
            if set > UNIVERSE_SIZE as i32 { set = UNIVERSE_SIZE as i32; }
            if set < 1 { set = 1; }
            table[i][j] = set as u8;
            j += 1;
        }
        i += 1;
    }
    table
}

pub fn rule_consequent(error_idx: usize, derivative_idx: usize) -> usize {
    FUZZY_RULES[error_idx][derivative_idx] as usize
}

/* --------------------------- State -------------------------- */
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FuzzyState {
    pub previous_error: f64,
    pub integrator: f64,
}

/* --------------------------- Code -------------------------- */
pub struct FuzzyController {
    config: FuzzyPidConfig,
    state: FuzzyState,
    error_universe: Universe,
    derivative_universe: Universe,
    output_universe: Universe,
}

impl FuzzyController {
    pub fn new(config: FuzzyPidConfig) -> Self {
        Self {
            config,
            state: FuzzyState::default(),
            error_universe: linspace(config.error_universe.0, config.error_universe.1),
            derivative_universe: linspace(config.derivative_universe.0, config.derivative_universe.1),
            output_universe: linspace(config.output_universe.0, config.output_universe.1),
        }
    }

    pub fn reset(&mut self) {
        self.state = FuzzyState::default();
    }

    pub fn state(&self) -> FuzzyState {
        self.state
    }

    pub fn output_range(&self) -> (f64, f64) {
        (self.output_universe[0], self.output_universe[UNIVERSE_SIZE - 1])
    }

    pub fn compute(&mut self, error: f64) -> f64 {
        let cfg = &self.config;

        let mu_derivative = compute_memberships(
            (error - self.state.previous_error) * cfg.kd,
            &self.derivative_universe,
        );
        let mu_error = compute_memberships(cfg.kp * error, &self.error_universe);

        let strength = Self::aggregate(&mu_error, &mu_derivative);
        let fuzzy_pd = self.defuzzify(&strength);

        let (lo, hi) = self.output_range();
        let sig = (cfg.ki * self.state.integrator + fuzzy_pd).clamp(lo, hi);

        self.state.previous_error = error;
        self.state.integrator += cfg.integrator_gain * error;

        return sig;
    }

    // Rule height = min(mu_e, mu_de), set strength = max over its rules
    pub fn aggregate(mu_error: &Memberships, mu_derivative: &Memberships) -> [f64; UNIVERSE_SIZE] {
        let mut strength = [0.0; UNIVERSE_SIZE];

        for (i, mu_e) in mu_error.iter().enumerate() {
            for (j, mu_de) in mu_derivative.iter().enumerate() {
                let height = fmin(*mu_e, *mu_de);
                let set = rule_consequent(i, j) - 1;
                strength[set] = fmax(strength[set], height);
            }
        }

        strength
    }

    pub fn defuzzify(&self, strength: &[f64; UNIVERSE_SIZE]) -> f64 {
        let out = &self.output_universe;
        let base = (out[1] - out[0]) * 2.0;

        let mut num = 0.0;
        let mut den = 0.0;
        for (set, activation) in strength.iter().enumerate() {
            if *activation > 0.0 {
                // clipped triangle area
                let area = ((1.0 - activation) * base + base) * activation / 2.0;
                num += area * out[set];
                den += area;
            }
        }

        if den > f64::EPSILON {
            return num / den;
        }
        return out[UNIVERSE_SIZE / 2];
    }
}

impl Default for FuzzyController {
    fn default() -> Self {
        Self::new(crate::resources::DEFAULT_FUZZY_PID_CONFIG)
    }
}
