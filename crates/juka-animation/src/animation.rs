//! Time-based animations with easing curves and spring physics.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Trait for values that can participate in spring animations.
///
/// Spring physics run in `f32` value space; implementors convert in and out.
pub trait SpringScalar: Lerp + Clone {
    fn to_f32(&self) -> f32;

    fn from_f32(value: f32) -> Self;

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinear,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinear => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t at this x, clamped to [0, 1].
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
///
/// Thresholds are in the animated value's own units (px and px/sec for a
/// drawer offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Higher values = faster animation.
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Spring described by its undamped period (`response`, seconds) and
    /// damping ratio, the parameterisation mobile toolkits expose.
    ///
    /// `stiffness = (2π / response)²` for a unit mass.
    pub fn from_response(response_secs: f32, damping_ratio: f32) -> Self {
        let omega = std::f32::consts::TAU / response_secs.max(f32::EPSILON);
        Self {
            damping_ratio,
            stiffness: omega * omega,
            velocity_threshold: 1.0,
            position_threshold: 0.1,
        }
    }

    pub fn with_thresholds(mut self, velocity_threshold: f32, position_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self.position_threshold = position_threshold;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Integration step for spring physics; frames are subdivided into steps of
/// at most this length so stiff springs stay stable at low frame rates.
const SPRING_TIMESTEP_SECS: f32 = 0.004;

/// A value animated towards a target, advanced by the caller's frame clock.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: T,
    /// Value-space velocity in units/sec, only tracked for springs.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
}

impl<T: SpringScalar> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
        }
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        self.animate_to_with_velocity(target, animation, 0.0);
    }

    /// Animate to `target`, carrying `initial_velocity` (units/sec) into a
    /// spring. Tweens ignore the velocity.
    pub fn animate_to_with_velocity(
        &mut self,
        target: T,
        animation: AnimationType,
        initial_velocity: f32,
    ) {
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.velocity = match animation {
            AnimationType::Spring(_) => initial_velocity,
            AnimationType::Tween(_) => 0.0,
        };
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = true;
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.finish();
    }

    /// Freeze at the current value.
    pub fn stop(&mut self) {
        self.target = self.current.clone();
        self.start = self.current.clone();
        self.finish();
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    /// Velocity in units/sec; zero for tweens and settled values.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance to `frame_time_nanos` and return the value to draw.
    ///
    /// The first frame after `animate_to` anchors the animation's start time.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> T {
        if !self.running {
            return self.current.clone();
        }

        match self.animation_type {
            AnimationType::Tween(spec) => self.step_tween(spec, frame_time_nanos),
            AnimationType::Spring(spec) => self.step_spring(spec, frame_time_nanos),
        }

        self.current.clone()
    }

    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);

        if linear_progress >= 1.0 {
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.finish();
        }
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) {
        let Some(last_frame) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return;
        };
        let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0;
        if dt <= 0.0 {
            return;
        }

        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let target = self.target.to_f32();
        let mut position = self.current.to_f32();
        let mut velocity = self.velocity;

        // Semi-implicit Euler: F = -k * displacement - damping * velocity
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let force = -stiffness * (position - target) - damping * velocity;
            velocity += force * step;
            position += velocity * step;
            simulated += step;
        }

        self.velocity = velocity;
        self.current = T::from_f32(position);

        let at_rest = velocity.abs() < spec.velocity_threshold;
        if at_rest && T::is_near_target(&self.current, &self.target, spec.position_threshold) {
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
