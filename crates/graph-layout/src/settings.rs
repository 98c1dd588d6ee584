use crate::{TreeLayout, DEFAULT_FRAMES};
use serde::{Deserialize, Serialize};

/// User-tunable layout settings
///
/// Missing fields take their default value when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Animate nodes towards their new position instead of moving them at once
    pub animation_enabled: bool,

    /// Number of frames of the animation
    pub num_frames_in_anim: u32,

    pub horizontal_gap: i32,
    pub vertical_gap: i32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let tree = TreeLayout::default();
        Self {
            animation_enabled: true,
            num_frames_in_anim: DEFAULT_FRAMES,
            horizontal_gap: tree.horizontal_gap,
            vertical_gap: tree.vertical_gap,
        }
    }
}

impl LayoutSettings {
    pub fn tree_layout(&self) -> TreeLayout {
        TreeLayout::new(self.horizontal_gap, self.vertical_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn partial_settings_use_defaults() {
        let settings: LayoutSettings = ron::from_str("(num_frames_in_anim: 12)").unwrap();

        assert_eq!(
            settings,
            LayoutSettings {
                num_frames_in_anim: 12,
                ..Default::default()
            }
        );
        assert_eq!(settings.tree_layout(), TreeLayout::new(60, 10));
    }
}
