use super::scene::ClickableSurface;
use crate::input::ray_rect;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub surface: usize,
    pub distance: f32,
}

/// Test the ray against every surface; hits are sorted nearest first.
pub fn pick_surfaces(
    ray_origin: Vec3,
    ray_dir: Vec3,
    surfaces: &[ClickableSurface],
) -> SmallVec<[SurfaceHit; 3]> {
    let mut hits: SmallVec<[SurfaceHit; 3]> = surfaces
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            ray_rect(ray_origin, ray_dir, s.model_matrix(), s.size).map(|t| SurfaceHit {
                surface: i,
                distance: t,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Pointer,
    Default,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Pointer => "pointer",
            CursorStyle::Default => "default",
        }
    }
}

/// Remembers the hit that started the current run of hover frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    current: Option<SurfaceHit>,
}

impl HoverTracker {
    #[inline]
    pub fn current(&self) -> Option<SurfaceHit> {
        self.current
    }

    /// Feed this frame's nearest hit. Returns a cursor change only on the
    /// first frame of a run of hits or of a run of misses.
    pub fn update(&mut self, nearest: Option<SurfaceHit>) -> Option<CursorStyle> {
        match (self.current, nearest) {
            (None, Some(hit)) => {
                self.current = Some(hit);
                Some(CursorStyle::Pointer)
            }
            (Some(_), None) => {
                self.current = None;
                Some(CursorStyle::Default)
            }
            _ => None,
        }
    }
}
