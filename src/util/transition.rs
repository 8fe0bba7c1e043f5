#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Interpolation curve for a declared transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    Linear,
}

impl Curve {
    /// CSS timing-function name.
    pub const fn css(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
        }
    }
}

/// Declarative enter/exit timing handed to the rendering layer.
///
/// Components only declare timing; the browser's transition engine owns the
/// timers. Nothing here is started, cancelled, or awaited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub curve: Curve,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Transition {
    pub const fn new(duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            curve: Curve::Linear,
            duration_secs,
            delay_secs,
        }
    }

    /// CSS `transition` shorthand for a single property.
    pub fn css(&self, property: &str) -> String {
        format!(
            "{property} {}s {} {}s",
            self.duration_secs,
            self.curve.css(),
            self.delay_secs
        )
    }
}
