//! Wheel rendering: off-screen buffers composited per frame.
//!
//! The wedge ring and the decorative overlay (rim sheen, center hub,
//! pointer) are rasterized once per size change into RGBA buffers and
//! uploaded as textures. Each frame then only draws the cached ring texture
//! rotated to the current angle, re-lays-out the wedge labels (text must
//! stay readable, so it cannot live in the rotated buffer), and stamps the
//! unrotated overlay on top. Dropping the view drops the texture handles,
//! which releases the GPU allocations.

use eframe::egui::{self, Color32, ColorImage, FontId, Mesh, Pos2, Rect, Shape, TextureHandle,
    TextureOptions, Vec2, pos2};
use eframe::egui::emath::Rot2;
use eframe::egui::epaint::TextShape;
use std::f32::consts::PI;
use tracing::debug;

use crate::domain::menu::Choice;
use crate::domain::wheel::{WedgeRing, normalize_angle};

use super::design_system::DesignSystem;

/// Hub radius as a fraction of the outer radius. The ring buffer leaves
/// this much open in the middle; the overlay's hub disc is drawn slightly
/// larger so no gap shows at the seam.
const HUB_FRACTION: f32 = 0.16;
const HUB_COVER: f32 = 1.15;

/// Radial band of the rim sheen, as fractions of the outer radius.
const SHEEN_INNER: f32 = 0.80;
const SHEEN_OUTER: f32 = 0.97;
const SHEEN_MAX_ALPHA: f32 = 26.0;

/// Pointer triangle size, as fractions of the outer radius.
const POINTER_LENGTH: f32 = 0.14;
const POINTER_HALF_WIDTH: f32 = 0.05;

/// Where labels sit along the wedge center line.
const LABEL_RADIUS: f32 = 0.62;

/// Half-thickness in pixels of the hairline between wedges.
const DIVIDER_HALF_PX: f32 = 0.75;

const MAX_LABEL_CHARS: usize = 18;

/// Rasterizes the static wedge ring into a square RGBA buffer of side
/// `px`.
///
/// Wedge `i` is filled with palette color `i`; a hairline divider separates
/// adjacent wedges and the rim fades over its last pixel. The center is
/// left open below the hub radius.
pub fn rasterize_wheel(ring: &WedgeRing, px: usize) -> ColorImage {
    let mut image = ColorImage::filled([px, px], Color32::TRANSPARENT);
    let center = px as f32 / 2.0;
    let outer = center - 1.0;
    let hub = outer * HUB_FRACTION;
    let wedge_angle = ring.wedge_angle();

    for y in 0..px {
        for x in 0..px {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let radius = (dx * dx + dy * dy).sqrt();
            if radius >= outer + 0.5 || radius < hub {
                continue;
            }

            let angle = normalize_angle(dy.atan2(dx));
            let within = angle.rem_euclid(wedge_angle);
            let to_boundary = within.min(wedge_angle - within) * radius;

            let mut color = if to_boundary < DIVIDER_HALF_PX {
                DesignSystem::WEDGE_DIVIDER
            } else {
                DesignSystem::wedge_color(ring.wedge_at(angle))
            };

            let rim = (outer + 0.5 - radius).clamp(0.0, 1.0);
            if rim < 1.0 {
                color = color.gamma_multiply(rim);
            }
            image[(x, y)] = color;
        }
    }
    image
}

/// Rasterizes the static decoration overlay: rim sheen, hub disc with its
/// accent ring, and the pointer triangle at the top. Composited unrotated,
/// after the ring and the labels.
pub fn rasterize_overlay(px: usize) -> ColorImage {
    let mut image = ColorImage::filled([px, px], Color32::TRANSPARENT);
    let center = px as f32 / 2.0;
    let outer = center - 1.0;
    let hub = outer * HUB_FRACTION * HUB_COVER;

    let pointer_base_y = 1.0;
    let pointer_tip_y = pointer_base_y + outer * POINTER_LENGTH;
    let pointer_half = outer * POINTER_HALF_WIDTH;

    for y in 0..px {
        for x in 0..px {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let radius = (dx * dx + dy * dy).sqrt();

            // Rim sheen: a soft white band that makes the ring read as
            // glossy while the colors underneath spin.
            let band = radius / outer;
            if (SHEEN_INNER..=SHEEN_OUTER).contains(&band) {
                let t = (band - SHEEN_INNER) / (SHEEN_OUTER - SHEEN_INNER);
                let bell = 1.0 - (2.0 * t - 1.0) * (2.0 * t - 1.0);
                let alpha = (SHEEN_MAX_ALPHA * bell) as u8;
                if alpha > 0 {
                    image[(x, y)] = Color32::from_white_alpha(alpha);
                }
            }

            // Hub disc and accent ring over the ring's open center.
            if radius < hub {
                image[(x, y)] = DesignSystem::HUB_FILL;
            } else if radius < hub + 2.0 {
                image[(x, y)] = DesignSystem::HUB_RING;
            }

            // Pointer triangle, apex down into the wheel at the pointer
            // angle (screen top).
            let fy = y as f32 + 0.5;
            if (pointer_base_y..pointer_tip_y).contains(&fy) {
                let taper = (pointer_tip_y - fy) / (pointer_tip_y - pointer_base_y);
                let half = pointer_half * taper;
                let cover = (half - dx.abs() + 0.5).clamp(0.0, 1.0);
                if cover >= 1.0 {
                    image[(x, y)] = DesignSystem::POINTER_FILL;
                } else if cover > 0.0 {
                    image[(x, y)] = DesignSystem::POINTER_FILL.gamma_multiply(cover);
                }
            }
        }
    }
    image
}

fn trim_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let mut trimmed: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        trimmed.push('…');
        trimmed
    }
}

/// Owns the cached textures and composites the wheel each frame.
pub struct WheelView {
    ring: WedgeRing,
    radius_px: f32,
    margin_px: f32,
    wheel_tex: Option<TextureHandle>,
    overlay_tex: Option<TextureHandle>,
    cached_px: usize,
}

impl WheelView {
    pub fn new(ring: WedgeRing, radius_px: f32, margin_px: f32) -> Self {
        Self {
            ring,
            radius_px,
            margin_px,
            wheel_tex: None,
            overlay_tex: None,
            cached_px: 0,
        }
    }

    /// Side length of the square area the wheel wants.
    pub fn desired_size(&self) -> f32 {
        2.0 * (self.radius_px + self.margin_px)
    }

    fn ensure_textures(&mut self, ctx: &egui::Context, px: usize) {
        if self.cached_px == px && self.wheel_tex.is_some() {
            return;
        }
        self.wheel_tex = Some(ctx.load_texture(
            "wheel_ring",
            rasterize_wheel(&self.ring, px),
            TextureOptions::LINEAR,
        ));
        self.overlay_tex = Some(ctx.load_texture(
            "wheel_overlay",
            rasterize_overlay(px),
            TextureOptions::LINEAR,
        ));
        self.cached_px = px;
        debug!("Rebuilt wheel buffers at {}px", px);
    }

    /// Composites one frame into `rect`: rotated ring texture, per-wedge
    /// labels at the current rotation, then the unrotated overlay.
    ///
    /// Pure repaint: spin state is not touched, so this also serves the
    /// static frame before any spin. The label for `highlight` (the
    /// pointer-aligned wedge) is emphasized.
    pub fn paint(
        &mut self,
        ui: &egui::Ui,
        rect: Rect,
        rotation: f32,
        highlight: Option<usize>,
        working: &[Choice],
    ) {
        let side = rect.width().min(rect.height());
        let px = (side * ui.ctx().pixels_per_point()).round().max(64.0) as usize;
        self.ensure_textures(ui.ctx(), px);

        let center = rect.center();
        let draw_rect = Rect::from_center_size(center, Vec2::splat(side));
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        let painter = ui.painter();

        if let Some(texture) = &self.wheel_tex {
            let mut mesh = Mesh::with_texture(texture.id());
            mesh.add_rect_with_uv(draw_rect, uv, Color32::WHITE);
            mesh.rotate(Rot2::from_angle(rotation), center);
            painter.add(Shape::Mesh(mesh.into()));
        }

        self.paint_labels(painter, center, side / 2.0 - 1.0, rotation, highlight, working);

        if let Some(texture) = &self.overlay_tex {
            let mut mesh = Mesh::with_texture(texture.id());
            mesh.add_rect_with_uv(draw_rect, uv, Color32::WHITE);
            painter.add(Shape::Mesh(mesh.into()));
        }
    }

    /// Lays the working labels out along each wedge's center line at the
    /// current rotation. Labels on the left half are flipped half a turn so
    /// they never render upside down.
    fn paint_labels(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        outer: f32,
        rotation: f32,
        highlight: Option<usize>,
        working: &[Choice],
    ) {
        let label_radius = outer * LABEL_RADIUS;

        for (index, choice) in working.iter().enumerate() {
            let screen_angle = normalize_angle(rotation + self.ring.wedge_center(index));
            let target =
                center + label_radius * Vec2::new(screen_angle.cos(), screen_angle.sin());

            let flipped = screen_angle > PI / 2.0 && screen_angle < 1.5 * PI;
            let text_angle = if flipped {
                normalize_angle(screen_angle + PI)
            } else {
                screen_angle
            };

            let (size, color) = if highlight == Some(index) {
                (
                    DesignSystem::LABEL_HIGHLIGHT_SIZE,
                    DesignSystem::LABEL_HIGHLIGHT_COLOR,
                )
            } else {
                (DesignSystem::LABEL_SIZE, DesignSystem::LABEL_COLOR)
            };

            let galley = painter.layout_no_wrap(
                trim_label(&choice.label),
                FontId::proportional(size),
                color,
            );
            let anchor = target - Rot2::from_angle(text_angle) * (galley.size() / 2.0);
            painter.add(TextShape::new(anchor, galley, color).with_angle(text_angle));
        }
    }
}
