use std::f32::consts::TAU;

/*
One-pole low-pass:

    state += alpha * (input - state)
    alpha  = 1 - exp(-2π * cutoff / sample_rate)

Gentle 6 dB/octave slope. Used to darken the pluck noise burst.
*/

#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    state: f32,
    alpha: f32,
}

impl OnePole {
    pub fn lowpass(cutoff_hz: f32, sample_rate: f32) -> Self {
        Self::with_alpha(Self::alpha_for(cutoff_hz, sample_rate))
    }

    pub fn with_alpha(alpha: f32) -> Self {
        Self { state: 0.0, alpha }
    }

    pub fn alpha_for(cutoff_hz: f32, sample_rate: f32) -> f32 {
        1.0 - (-TAU * cutoff_hz / sample_rate).exp()
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state += self.alpha * (input - self.state);
        self.state
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    pub fn state(&self) -> f32 {
        self.state
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_for_pluck_cutoff() {
        let alpha = OnePole::alpha_for(1200.0, 44_100.0);
        // 1 - exp(-2π·1200/44100) ≈ 0.1571
        assert!((alpha - 0.1571).abs() < 1e-3, "alpha = {alpha}");
        assert_eq!(OnePole::lowpass(1200.0, 44_100.0).alpha(), alpha);
        assert_eq!(OnePole::with_alpha(0.25).alpha(), 0.25);
    }

    #[test]
    fn settles_on_dc_input() {
        let mut lp = OnePole::lowpass(1200.0, 44_100.0);
        for _ in 0..1_000 {
            lp.process(0.5);
        }
        assert!((lp.state() - 0.5).abs() < 1e-4);

        lp.reset();
        assert_eq!(lp.state(), 0.0);
    }

    #[test]
    fn attenuates_alternating_input() {
        let mut lp = OnePole::lowpass(1200.0, 44_100.0);
        let mut peak = 0.0f32;
        for n in 0..1_000 {
            let x = if n % 2 == 0 { 1.0 } else { -1.0 };
            let y = lp.process(x);
            if n > 100 {
                peak = peak.max(y.abs());
            }
        }
        // Nyquist-rate input comes out well below unity
        assert!(peak < 0.1, "peak = {peak}");
    }
}
