/*
    Exponential Moving Average Filter
        y(k) = alpha * x(k) + (1 - alpha) * y(k-1)
*/

pub struct ExponentialMovingAverage {
    alpha: f32,
    value: f32,
}

impl ExponentialMovingAverage {
    // alpha is clamped into (0, 1], alpha = 1 disables filtering
    pub fn new(alpha: f32) -> Self {
        let alpha = if alpha.is_finite() && alpha > 0.0 { alpha.min(1.0) } else { 1.0 };

        Self {
            alpha,
            value: 0.0,
        }
    }

    pub fn update(&mut self, sample: f32) -> f32 {
        if sample.is_finite() {
            self.value = (self.alpha * sample) + ((1.0 - self.alpha) * self.value);
        }
        return self.value;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
