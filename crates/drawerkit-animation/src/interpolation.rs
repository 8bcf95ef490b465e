//! Piecewise-linear mapping of an animated input onto an output range.

use smallvec::SmallVec;

/// What happens to inputs outside the first or last input breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Keep following the slope of the outermost segment.
    #[default]
    Extend,
    /// Pin to the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    TooFewPoints(usize),
    LengthMismatch { input: usize, output: usize },
    NotMonotonic { index: usize },
    NonFinite { index: usize },
}

impl std::fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationError::TooFewPoints(count) => {
                write!(f, "interpolation needs at least 2 breakpoints, got {count}")
            }
            InterpolationError::LengthMismatch { input, output } => {
                write!(f, "input range has {input} points but output range has {output}")
            }
            InterpolationError::NotMonotonic { index } => {
                write!(f, "input range decreases at index {index}")
            }
            InterpolationError::NonFinite { index } => {
                write!(f, "range value at index {index} is not finite")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

/// Maps values through `input → output` breakpoints.
///
/// Input breakpoints must be non-decreasing. A zero-length segment is allowed
/// and acts as a step: inputs at or below it map to the segment's first
/// output, inputs above it to the second.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl Interpolation {
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self, InterpolationError> {
        if input.len() != output.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(InterpolationError::TooFewPoints(input.len()));
        }
        if let Some(index) = input
            .iter()
            .chain(output.iter())
            .position(|value| !value.is_finite())
        {
            return Err(InterpolationError::NonFinite {
                index: index % input.len(),
            });
        }
        if let Some(index) = input.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(InterpolationError::NotMonotonic { index: index + 1 });
        }

        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
        })
    }

    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left = extrapolate;
        self.extrapolate_right = extrapolate;
        self
    }

    pub fn with_extrapolate_left(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left = extrapolate;
        self
    }

    pub fn with_extrapolate_right(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_right = extrapolate;
        self
    }

    pub fn clamped(self) -> Self {
        self.with_extrapolate(Extrapolate::Clamp)
    }

    pub fn interpolate(&self, value: f32) -> f32 {
        let segment = self.find_segment(value);
        self.interpolate_segment(value, segment)
    }

    fn find_segment(&self, value: f32) -> usize {
        let last = self.input.len() - 1;
        let mut index = 1;
        while index < last && self.input[index] < value {
            index += 1;
        }
        index - 1
    }

    fn interpolate_segment(&self, value: f32, segment: usize) -> f32 {
        let (in_min, in_max) = (self.input[segment], self.input[segment + 1]);
        let (out_min, out_max) = (self.output[segment], self.output[segment + 1]);

        let mut result = value;
        if result < in_min {
            match self.extrapolate_left {
                Extrapolate::Identity => return result,
                Extrapolate::Clamp => result = in_min,
                Extrapolate::Extend => {}
            }
        }
        if result > in_max {
            match self.extrapolate_right {
                Extrapolate::Identity => return result,
                Extrapolate::Clamp => result = in_max,
                Extrapolate::Extend => {}
            }
        }

        if out_min == out_max {
            return out_min;
        }
        if in_min == in_max {
            return if value <= in_min { out_min } else { out_max };
        }

        let fraction = (result - in_min) / (in_max - in_min);
        out_min + fraction * (out_max - out_min)
    }
}
