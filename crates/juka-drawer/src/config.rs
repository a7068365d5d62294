//! Drawer geometry and thresholds.

use std::fmt;

use juka_animation::{AnimationType, SpringSpec};

use crate::state::DrawerState;

/// Space kept above the content for the drag handle when sizing the
/// half-expanded drawer to short content.
pub const DEFAULT_HANDLE_ALLOWANCE: f32 = 60.0;

/// Minimum release displacement, in px, for a drag to change state.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 50.0;

/// Release velocity, in px/sec, above which a flick changes state.
pub const DEFAULT_SNAP_VELOCITY_THRESHOLD: f32 = 100.0;

/// The settle spring: 0.3 s response, 0.7 damping.
pub fn default_settle_animation() -> AnimationType {
    AnimationType::Spring(SpringSpec::from_response(0.3, 0.7))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str, value: f32 },
    NonPositive { field: &'static str, value: f32 },
    /// `min_height < half_height < max_height` does not hold.
    Ordering { min: f32, half: f32, max: f32 },
    NegativeAllowance { value: f32 },
    /// A settle spring parameter is zero, negative or not finite; such a
    /// spring never comes to rest.
    InvalidSettleSpring { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "drawer {field} must be finite, got {value}")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "drawer {field} must be positive, got {value}")
            }
            ConfigError::Ordering { min, half, max } => write!(
                f,
                "drawer heights must satisfy min < half < max, got {min} / {half} / {max}"
            ),
            ConfigError::NegativeAllowance { value } => {
                write!(f, "drawer handle allowance must not be negative, got {value}")
            }
            ConfigError::InvalidSettleSpring { field, value } => write!(
                f,
                "drawer settle spring {field} must be positive and finite, got {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated, immutable drawer configuration.
///
/// Heights are visible panel heights measured from the bottom edge. Offsets
/// returned by [`DrawerConfig::target_offset`] are measured downward from the
/// fully expanded position and always lie in `[0, max_height - min_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerConfig {
    min_height: f32,
    half_height: f32,
    max_height: f32,
    drag_threshold: f32,
    snap_velocity_threshold: f32,
    handle_allowance: f32,
    settle_animation: AnimationType,
}

impl DrawerConfig {
    pub fn new(
        min_height: f32,
        half_height: f32,
        max_height: f32,
        drag_threshold: f32,
        snap_velocity_threshold: f32,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .heights(min_height, half_height, max_height)
            .drag_threshold(drag_threshold)
            .snap_velocity_threshold(snap_velocity_threshold)
            .build()
    }

    pub fn builder() -> DrawerConfigBuilder {
        DrawerConfigBuilder::default()
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }

    pub fn snap_velocity_threshold(&self) -> f32 {
        self.snap_velocity_threshold
    }

    pub fn handle_allowance(&self) -> f32 {
        self.handle_allowance
    }

    pub fn settle_animation(&self) -> AnimationType {
        self.settle_animation
    }

    /// Offset of the collapsed drawer, the largest legal offset.
    pub fn collapsed_offset(&self) -> f32 {
        self.max_height - self.min_height
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return self.collapsed_offset();
        }
        offset.clamp(0.0, self.collapsed_offset())
    }

    /// Resting offset for `state` given the natural height of the content.
    ///
    /// Half expanded shrinks below `half_height` when the content plus the
    /// handle allowance is shorter, but never below the collapsed height. A
    /// non-finite content height means the content is not measured yet.
    pub fn target_offset(&self, state: DrawerState, measured_content_height: f32) -> f32 {
        let offset = match state {
            DrawerState::Collapsed => self.collapsed_offset(),
            DrawerState::HalfExpanded if measured_content_height.is_finite() => {
                let content = measured_content_height.max(0.0) + self.handle_allowance;
                self.max_height - self.half_height.min(content)
            }
            // Unmeasured content.
            DrawerState::HalfExpanded => self.max_height - self.half_height,
            DrawerState::FullyExpanded => 0.0,
        };
        self.clamp_offset(offset)
    }
}

impl Default for DrawerConfig {
    /// The map screen drawer: 150 / 300 / 600 px.
    fn default() -> Self {
        Self {
            min_height: 150.0,
            half_height: 300.0,
            max_height: 600.0,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            snap_velocity_threshold: DEFAULT_SNAP_VELOCITY_THRESHOLD,
            handle_allowance: DEFAULT_HANDLE_ALLOWANCE,
            settle_animation: default_settle_animation(),
        }
    }
}

/// Builder for [`DrawerConfig`]; unset fields take the defaults.
#[derive(Debug, Clone, Copy)]
pub struct DrawerConfigBuilder {
    config: DrawerConfig,
}

impl Default for DrawerConfigBuilder {
    fn default() -> Self {
        Self {
            config: DrawerConfig::default(),
        }
    }
}

impl DrawerConfigBuilder {
    pub fn heights(mut self, min_height: f32, half_height: f32, max_height: f32) -> Self {
        self.config.min_height = min_height;
        self.config.half_height = half_height;
        self.config.max_height = max_height;
        self
    }

    pub fn drag_threshold(mut self, px: f32) -> Self {
        self.config.drag_threshold = px;
        self
    }

    pub fn snap_velocity_threshold(mut self, px_per_sec: f32) -> Self {
        self.config.snap_velocity_threshold = px_per_sec;
        self
    }

    pub fn handle_allowance(mut self, px: f32) -> Self {
        self.config.handle_allowance = px;
        self
    }

    pub fn settle_animation(mut self, animation: AnimationType) -> Self {
        self.config.settle_animation = animation;
        self
    }

    pub fn build(self) -> Result<DrawerConfig, ConfigError> {
        let config = self.config;
        let positive = [
            ("min_height", config.min_height),
            ("half_height", config.half_height),
            ("max_height", config.max_height),
            ("drag_threshold", config.drag_threshold),
            ("snap_velocity_threshold", config.snap_velocity_threshold),
        ];
        for (field, value) in positive.iter().copied().chain([(
            "handle_allowance",
            config.handle_allowance,
        )]) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(config.min_height < config.half_height && config.half_height < config.max_height) {
            return Err(ConfigError::Ordering {
                min: config.min_height,
                half: config.half_height,
                max: config.max_height,
            });
        }
        if config.handle_allowance < 0.0 {
            return Err(ConfigError::NegativeAllowance {
                value: config.handle_allowance,
            });
        }
        if let AnimationType::Spring(spring) = config.settle_animation {
            validate_spring(&spring)?;
        }
        Ok(config)
    }
}

fn validate_spring(spring: &SpringSpec) -> Result<(), ConfigError> {
    let fields = [
        ("damping_ratio", spring.damping_ratio),
        ("stiffness", spring.stiffness),
        ("velocity_threshold", spring.velocity_threshold),
        ("position_threshold", spring.position_threshold),
    ];
    match fields
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0))
    {
        Some((field, value)) => Err(ConfigError::InvalidSettleSpring { field, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
