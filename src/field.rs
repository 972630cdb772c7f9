//! CPU evaluation of the LaserFlow fragment program.
//!
//! Each pixel is a pure function of its coordinate and the uniform set, so
//! the field can be checked in unit tests and rendered to an image without a
//! GPU. Results match the GLSL only up to float precision: `sin` and the
//! hash differ between drivers anyway.

use glam::{Mat2, Vec2, Vec3};

use crate::config::LaserFlowConfig;

const FBM_OCTAVES: usize = 6;
const FBM_ROTATION: f32 = 0.5;
const FBM_SHIFT: f32 = 100.0;

const BASE_TINT: f32 = 0.1;
const HIGHLIGHT_GAIN: f32 = 1.8;
const HIGHLIGHT_OFFSET: Vec3 = Vec3::new(0.15, 0.2, 0.4);
const CORE_TINT: Vec3 = Vec3::new(0.6, 0.7, 1.0);
const CORE_BLEND: f32 = 0.35;

/// GLSL `fract`: always in `[0, 1)`, unlike `f32::fract` for negatives.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Trigonometric lattice hash in `[0, 1)`.
pub fn hash(p: Vec2) -> f32 {
    let h = p.dot(Vec2::new(127.1, 311.7));
    fract(h.sin() * 43758.545)
}

/// Smoothstep-interpolated value noise.
pub fn noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let a = hash(i);
    let b = hash(i + Vec2::X);
    let c = hash(i + Vec2::Y);
    let d = hash(i + Vec2::ONE);
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);
    mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}

/// Six octaves of [`noise`], rotating and shifting the domain between
/// octaves.
pub fn fbm(mut p: Vec2) -> f32 {
    let (s, c) = FBM_ROTATION.sin_cos();
    let rot = Mat2::from_cols(Vec2::new(c, s), Vec2::new(-s, c));
    let mut v = 0.0;
    let mut a = 0.5;
    for _ in 0..FBM_OCTAVES {
        v += a * noise(p);
        p = rot * p * 2.0 + Vec2::splat(FBM_SHIFT);
        a *= 0.5;
    }
    v
}

/// Raw beam energy before shimmer: five horizontal wisps plus three
/// vertical ones at 60% weight.
fn beams(p: Vec2, t: f32, cfg: &LaserFlowConfig) -> f32 {
    let mut horizontal = 0.0;
    for i in 1..=5 {
        let i = i as f32;
        let freq = i * cfg.wisp_density;
        let phase = t * (0.3 + i * 0.12) + i * 1.618;
        let wave = (p.x * freq * cfg.horizontal_sizing + phase).sin() * 0.5 + 0.5;
        let d = (p.y - wave * 0.4 + 0.2).abs() * cfg.vertical_sizing;
        horizontal += (-(d * d) * (3.0 + i)).exp() * (cfg.wisp_intensity / (5.0 * i * 0.8));
    }

    let mut vertical = 0.0;
    for i in 1..=3 {
        let i = i as f32;
        let freq = i * cfg.wisp_density * 0.7;
        let phase = t * (0.2 + i * 0.1) + i * 2.318;
        let wave = (p.y * freq * cfg.vertical_sizing + phase).sin() * 0.5 + 0.5;
        let d = (p.x - wave * 0.3).abs() * cfg.horizontal_sizing;
        vertical += (-(d * d) * (4.0 + i)).exp() * (cfg.wisp_intensity / (8.0 * i));
    }

    horizontal + vertical * 0.6
}

/// Color of the pixel whose center is at `frag_coord` (origin bottom-left,
/// as `gl_FragCoord`).
pub fn shade(frag_coord: Vec2, resolution: Vec2, time: f32, cfg: &LaserFlowConfig) -> Vec3 {
    let uv = frag_coord / resolution;
    let mut p = (uv - 0.5) * 2.0;
    p.x *= resolution.x / resolution.y;
    p += Vec2::new(cfg.horizontal_beam_offset, cfg.vertical_beam_offset);

    let t = time * cfg.flow_speed;

    let mut beam = beams(p, t, cfg);
    beam += fbm(p * 1.5 + Vec2::splat(t * 0.15)) * cfg.flow_strength * 0.15;

    let fog = fbm(p * cfg.fog_scale + Vec2::new(t * 0.08, t * 0.05)) * cfg.fog_intensity * 0.35;

    let shimmer = fbm(p * 3.0 + Vec2::splat(t * cfg.wisp_speed * 0.01));
    beam *= 0.8 + shimmer * 0.4;

    let falloff = (uv - 0.5).length() * cfg.decay;
    let vignette = (1.0 - falloff * falloff).max(0.0);
    let intensity = (beam + fog) * vignette;

    let color = Vec3::from_array(cfg.color.to_array());
    let base = color * BASE_TINT;
    let highlight = color * HIGHLIGHT_GAIN + HIGHLIGHT_OFFSET;
    let col = base.lerp(highlight, intensity);
    let col = col.lerp(CORE_TINT, smoothstep(0.6, 1.2, beam) * CORE_BLEND);
    col.max(Vec3::ZERO)
}

/// Evaluate a whole frame into top-down RGB8 rows.
pub fn render_rgb8(width: u32, height: u32, time: f32, cfg: &LaserFlowConfig) -> Vec<u8> {
    let resolution = Vec2::new(width as f32, height as f32);
    let mut out = Vec::with_capacity(width as usize * height as usize * 3);
    for row in 0..height {
        let y = (height - 1 - row) as f32 + 0.5;
        for x in 0..width {
            let c = shade(Vec2::new(x as f32 + 0.5, y), resolution, time, cfg);
            for ch in c.to_array() {
                out.push((ch.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
    }
    out
}
