//! Lines between nearby particles.
//!
//! Every unordered pair is tested each frame, so the cost is quadratic in the
//! particle count. The count is capped by surface area, which keeps this to a
//! few tens of thousands of pair tests on a typical window.

use eframe::egui::Pos2;
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::particle::Particle;

const MAX_LINK_OPACITY: f32 = 0.5;
const LINK_WIDTH: f32 = 1.0;

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Pos2,
    pub to: Pos2,
    pub opacity: f32,
}

/// Opacity of a link at `distance`, or `None` if the pair is too far apart.
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * MAX_LINK_OPACITY)
    } else {
        None
    }
}

/// All links for the current positions, in `(i, j)` order with `i < j`.
pub fn find_links(particles: &[Particle], threshold: f32) -> Vec<Link> {
    // Rows are scanned in parallel; `collect` keeps them in index order.
    (0..particles.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let a = &particles[i];
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.pos.distance(b.pos);
                link_opacity(distance, threshold).map(|opacity| Link {
                    from: a.pos,
                    to: b.pos,
                    opacity,
                })
            })
        })
        .collect()
}

pub fn draw_links(canvas: &mut dyn Canvas, links: &[Link], tint: Rgb) {
    for link in links {
        canvas.line(link.from, link.to, LINK_WIDTH, tint.with_opacity(link.opacity));
    }
}
