//! Count-up animation for the stat numbers.
//!
//! A stat element's own text is the source of truth: "120+" animates
//! from 0 to 120 keeping the "+" suffix, while ratio strings like
//! "4.5/5" (and anything without digits) render verbatim and never
//! animate. The final frame always restores the original text exactly,
//! so formatting the parse lost (leading zeros, separators) survives.

/// Interval between animation frames.
pub const TICK_MS: u32 = 30;
/// The run covers the whole distance in this many equal steps.
const STEPS: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub enum CountTarget {
    /// Rendered as-is, never animated.
    Literal(String),
    Animated(CountUp),
}

pub fn parse_target(text: &str) -> CountTarget {
    if text.contains('/') {
        return CountTarget::Literal(text.to_string());
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let Ok(value) = digits.parse::<u32>() else {
        // No digits (or an absurdly long run of them): display-only.
        return CountTarget::Literal(text.to_string());
    };

    let suffix: String = text.chars().filter(|ch| !ch.is_ascii_digit()).collect();
    CountTarget::Animated(CountUp::new(text.to_string(), value, suffix))
}

/// One in-flight count-up. The caller owns the timer; `tick` tells it
/// when to stop.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    original: String,
    suffix: String,
    value: u32,
    increment: f64,
    current: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CountFrame {
    Running(String),
    /// Carries the original text verbatim; the caller must cancel its
    /// timer on receiving this.
    Done(String),
}

impl CountUp {
    fn new(original: String, value: u32, suffix: String) -> Self {
        Self {
            original,
            suffix,
            value,
            increment: f64::from(value) / STEPS,
            current: 0.0,
        }
    }

    /// Text to show when skipping the animation entirely.
    pub fn final_text(&self) -> &str {
        &self.original
    }

    pub fn tick(&mut self) -> CountFrame {
        self.current += self.increment;
        if self.current >= f64::from(self.value) {
            CountFrame::Done(self.original.clone())
        } else {
            CountFrame::Running(format!("{}{}", self.current.floor() as u64, self.suffix))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(mut count: CountUp) -> Vec<CountFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = count.tick();
            let done = matches!(frame, CountFrame::Done(_));
            frames.push(frame);
            if done {
                return frames;
            }
            assert!(frames.len() < 200, "count-up failed to terminate");
        }
    }

    fn animated(text: &str) -> CountUp {
        match parse_target(text) {
            CountTarget::Animated(count) => count,
            CountTarget::Literal(_) => panic!("expected {text:?} to animate"),
        }
    }

    #[test]
    fn ratio_strings_render_verbatim_without_animation() {
        assert_eq!(parse_target("4.5/5"), CountTarget::Literal("4.5/5".to_string()));
        assert_eq!(parse_target("24/7"), CountTarget::Literal("24/7".to_string()));
    }

    #[test]
    fn digitless_text_is_display_only() {
        assert_eq!(parse_target("soon"), CountTarget::Literal("soon".to_string()));
        assert_eq!(parse_target("—"), CountTarget::Literal("—".to_string()));
    }

    #[test]
    fn plus_suffix_run_ends_on_the_original_text() {
        let frames = run_to_completion(animated("120+"));

        assert_eq!(frames.last(), Some(&CountFrame::Done("120+".to_string())));
        assert_eq!(frames.first(), Some(&CountFrame::Running("2+".to_string())));
        for frame in &frames[..frames.len() - 1] {
            match frame {
                CountFrame::Running(text) => assert!(text.ends_with('+'), "frame {text:?} lost its suffix"),
                CountFrame::Done(_) => unreachable!(),
            }
        }
        // 50 equal steps, give or take one tick of float accumulation.
        assert!((50..=51).contains(&frames.len()), "ran {} frames", frames.len());
    }

    #[test]
    fn percent_suffix_survives_every_frame() {
        let frames = run_to_completion(animated("98%"));

        assert_eq!(frames.last(), Some(&CountFrame::Done("98%".to_string())));
        assert_eq!(frames.first(), Some(&CountFrame::Running("1%".to_string())));
    }

    #[test]
    fn intermediate_frames_floor_the_running_value() {
        let mut count = animated("10");
        // increment = 0.2; five ticks reach exactly 1.0
        for _ in 0..4 {
            assert_eq!(count.tick(), CountFrame::Running("0".to_string()));
        }
        assert_eq!(count.tick(), CountFrame::Running("1".to_string()));
    }

    #[test]
    fn zero_target_terminates_on_the_first_tick() {
        let frames = run_to_completion(animated("0"));
        assert_eq!(frames, vec![CountFrame::Done("0".to_string())]);
    }

    #[test]
    fn formatting_lost_in_parsing_returns_on_the_final_frame() {
        let frames = run_to_completion(animated("1,200+"));
        assert_eq!(frames.last(), Some(&CountFrame::Done("1,200+".to_string())));

        let frames = run_to_completion(animated("007"));
        assert_eq!(frames.last(), Some(&CountFrame::Done("007".to_string())));
    }
}
