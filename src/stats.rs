use serde::Serialize;

use crate::grid::Grid;

/// Range and mean of one channel across a grid
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChannelStats {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
}

/// Summary of a generated grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub filled: usize,
    pub alpha: ChannelStats,
    pub red: ChannelStats,
    pub green: ChannelStats,
    pub blue: ChannelStats,
}

impl GridStats {
    pub fn collect(grid: &Grid) -> Self {
        let pixels = grid.pixels();
        let channel = |pick: fn(&glam::IVec4) -> i32| {
            let mut min = i32::MAX;
            let mut max = i32::MIN;
            let mut sum = 0i64;
            for p in pixels {
                let v = pick(&p.argb);
                min = min.min(v);
                max = max.max(v);
                sum += v as i64;
            }
            ChannelStats {
                min,
                max,
                mean: sum as f64 / pixels.len() as f64,
            }
        };

        Self {
            width: grid.width(),
            height: grid.height(),
            filled: grid.filled_count(),
            alpha: channel(|c| c.x),
            red: channel(|c| c.y),
            green: channel(|c| c.z),
            blue: channel(|c| c.w),
        }
    }
}
