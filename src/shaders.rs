//! GLSL sources for the LaserFlow program and the names they declare.
//!
//! The sources are GLSL ES 1.00 so they compile unchanged on WebGL2.
//! `field.rs` mirrors the fragment stage on the CPU; keep the two in step.

pub const POSITION_ATTRIBUTE: &str = "a_position";

pub const U_TIME: &str = "u_time";
pub const U_RESOLUTION: &str = "u_resolution";
pub const U_COLOR: &str = "u_color";

pub const U_WISP_DENSITY: &str = "u_wispDensity";
pub const U_FLOW_SPEED: &str = "u_flowSpeed";
pub const U_VERTICAL_SIZING: &str = "u_verticalSizing";
pub const U_HORIZONTAL_SIZING: &str = "u_horizontalSizing";
pub const U_FOG_INTENSITY: &str = "u_fogIntensity";
pub const U_FOG_SCALE: &str = "u_fogScale";
pub const U_WISP_SPEED: &str = "u_wispSpeed";
pub const U_WISP_INTENSITY: &str = "u_wispIntensity";
pub const U_FLOW_STRENGTH: &str = "u_flowStrength";
pub const U_DECAY: &str = "u_decay";
pub const U_H_BEAM_OFFSET: &str = "u_hBeamOffset";
pub const U_V_BEAM_OFFSET: &str = "u_vBeamOffset";

/// Full-surface quad, two triangles in clip space.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
];
pub const QUAD_VERTEX_COUNT: i32 = 6;

pub const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
precision highp float;

uniform float u_time;
uniform vec2  u_resolution;
uniform vec3  u_color;
uniform float u_wispDensity;
uniform float u_flowSpeed;
uniform float u_verticalSizing;
uniform float u_horizontalSizing;
uniform float u_fogIntensity;
uniform float u_fogScale;
uniform float u_wispSpeed;
uniform float u_wispIntensity;
uniform float u_flowStrength;
uniform float u_decay;
uniform float u_hBeamOffset;
uniform float u_vBeamOffset;

float hash(vec2 p) {
    float h = dot(p, vec2(127.1, 311.7));
    return fract(sin(h) * 43758.5453123);
}

float noise(vec2 p) {
    vec2 i = floor(p);
    vec2 f = fract(p);
    float a = hash(i);
    float b = hash(i + vec2(1.0, 0.0));
    float c = hash(i + vec2(0.0, 1.0));
    float d = hash(i + vec2(1.0, 1.0));
    vec2 u = f * f * (3.0 - 2.0 * f);
    return mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y;
}

float fbm(vec2 p) {
    float v = 0.0;
    float a = 0.5;
    mat2 rot = mat2(cos(0.5), sin(0.5), -sin(0.5), cos(0.5));
    for (int i = 0; i < 6; i++) {
        v += a * noise(p);
        p = rot * p * 2.0 + vec2(100.0);
        a *= 0.5;
    }
    return v;
}

void main() {
    vec2 uv = gl_FragCoord.xy / u_resolution;
    vec2 p = (uv - 0.5) * 2.0;
    p.x *= u_resolution.x / u_resolution.y;
    p.x += u_hBeamOffset;
    p.y += u_vBeamOffset;

    float t = u_time * u_flowSpeed;

    float beamH = 0.0;
    for (float i = 1.0; i <= 5.0; i++) {
        float freq = i * u_wispDensity;
        float phase = t * (0.3 + i * 0.12) + i * 1.618;
        float wave = sin(p.x * freq * u_horizontalSizing + phase) * 0.5 + 0.5;
        float beam = exp(-pow(abs(p.y - wave * 0.4 + 0.2) * u_verticalSizing, 2.0) * (3.0 + i));
        beamH += beam * (u_wispIntensity / (5.0 * i * 0.8));
    }

    float beamV = 0.0;
    for (float i = 1.0; i <= 3.0; i++) {
        float freq = i * u_wispDensity * 0.7;
        float phase = t * (0.2 + i * 0.1) + i * 2.318;
        float wave = sin(p.y * freq * u_verticalSizing + phase) * 0.5 + 0.5;
        float beam = exp(-pow(abs(p.x - wave * 0.3) * u_horizontalSizing, 2.0) * (4.0 + i));
        beamV += beam * (u_wispIntensity / (8.0 * i));
    }

    float beams = beamH + beamV * 0.6;

    float flow = fbm(p * 1.5 + t * 0.15) * u_flowStrength;
    beams += flow * 0.15;

    float fog = fbm(p * u_fogScale + vec2(t * 0.08, t * 0.05));
    fog = fog * u_fogIntensity * 0.35;

    float shimmer = fbm(p * 3.0 + vec2(t * u_wispSpeed * 0.01));
    beams *= 0.8 + shimmer * 0.4;

    float intensity = beams + fog;

    float vignette = 1.0 - pow(length(uv - 0.5) * u_decay, 2.0);
    intensity *= max(vignette, 0.0);

    vec3 baseColor = u_color * 0.1;
    vec3 highlight = u_color * 1.8 + vec3(0.15, 0.2, 0.4);
    vec3 col = mix(baseColor, highlight, intensity);

    vec3 core = vec3(0.6, 0.7, 1.0);
    col = mix(col, core, smoothstep(0.6, 1.2, beams) * 0.35);

    col = max(col, vec3(0.0));

    gl_FragColor = vec4(col, 1.0);
}
"#;
