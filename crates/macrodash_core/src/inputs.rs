//! Policy input ranges.
//!
//! Each slider in the dashboards is backed by one of these ranges. Bounds are
//! inclusive. The resolvers do not check them; keeping values in range is the
//! caller's job, and these helpers are how the dashboards do it.

/// An inclusive numeric range with a fixed step and a starting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub symbol: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    /// Government spending (G), shared by both dashboards
    pub const GOVERNMENT_SPENDING: ParamRange = ParamRange {
        name: "Government spending",
        symbol: "G",
        min: 50.0,
        max: 300.0,
        step: 10.0,
        default: 100.0,
    };

    /// Money supply (M) on the AD-AS dashboard
    pub const AD_AS_MONEY_SUPPLY: ParamRange = ParamRange {
        name: "Money supply",
        symbol: "M",
        min: 50.0,
        max: 300.0,
        step: 10.0,
        default: 100.0,
    };

    /// Money supply (M) on the IS-LM dashboard
    pub const IS_LM_MONEY_SUPPLY: ParamRange = ParamRange {
        name: "Money supply",
        symbol: "M",
        min: 100.0,
        max: 500.0,
        step: 10.0,
        default: 200.0,
    };

    /// Taxes (T)
    pub const TAXES: ParamRange = ParamRange {
        name: "Taxes",
        symbol: "T",
        min: 50.0,
        max: 300.0,
        step: 10.0,
        default: 100.0,
    };

    /// Price level (P), integer valued
    pub const PRICE_LEVEL: ParamRange = ParamRange {
        name: "Price level",
        symbol: "P",
        min: 1.0,
        max: 5.0,
        step: 1.0,
        default: 2.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into `[min, max]`. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest step counted from `min`, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        let steps = ((clamped - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn step_up(&self, value: f64) -> f64 {
        self.snap(self.snap(value) + self.step)
    }

    pub fn step_down(&self, value: f64) -> f64 {
        self.snap(self.snap(value) - self.step)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lie_in_range() {
        for range in [
            ParamRange::GOVERNMENT_SPENDING,
            ParamRange::AD_AS_MONEY_SUPPLY,
            ParamRange::IS_LM_MONEY_SUPPLY,
            ParamRange::TAXES,
            ParamRange::PRICE_LEVEL,
        ] {
            assert!(range.contains(range.default), "{} default", range.name);
            assert_eq!(range.snap(range.default), range.default);
        }
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let g = ParamRange::GOVERNMENT_SPENDING;
        assert_eq!(g.step_up(290.0), 300.0);
        assert_eq!(g.step_up(300.0), 300.0);
        assert_eq!(g.step_down(60.0), 50.0);
        assert_eq!(g.step_down(50.0), 50.0);

        let p = ParamRange::PRICE_LEVEL;
        assert_eq!(p.step_up(4.0), 5.0);
        assert_eq!(p.step_up(5.0), 5.0);
        assert_eq!(p.step_down(1.0), 1.0);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        let m = ParamRange::IS_LM_MONEY_SUPPLY;
        assert_eq!(m.snap(204.0), 200.0);
        assert_eq!(m.snap(206.0), 210.0);
        assert_eq!(m.snap(10.0), 100.0);
        assert_eq!(m.snap(9_999.0), 500.0);
        assert_eq!(m.snap(f64::NAN), 200.0);
    }

    #[test]
    fn test_ratio() {
        let t = ParamRange::TAXES;
        assert_eq!(t.ratio(50.0), 0.0);
        assert_eq!(t.ratio(300.0), 1.0);
        assert_eq!(t.ratio(175.0), 0.5);
    }
}
