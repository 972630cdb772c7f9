//! Host-side helper.
//!
//! `cargo run` builds the WASM bundle into `static/pkg` and serves `static/`
//! on http://127.0.0.1:8000. `cargo run -- preview out.ppm` renders a still
//! frame of the field on the CPU instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = host::run(std::env::args().skip(1).collect()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::process::{Command, Stdio};

    use anyhow::{anyhow, bail, Context, Result};
    use laserflow::{field, LaserFlowConfig};

    const SERVE_ADDR: &str = "127.0.0.1";
    const SERVE_PORT: &str = "8000";

    pub fn run(args: Vec<String>) -> Result<()> {
        match args.first().map(String::as_str) {
            None | Some("serve") => serve(),
            Some("preview") => preview(&args[1..]),
            Some(other) => bail!("unknown command {other:?}; expected `serve` or `preview`"),
        }
    }

    fn serve() -> Result<()> {
        log::info!("Building WASM pkg …");
        match Command::new("wasm-pack")
            .args([
                "build",
                "--release",
                "--target",
                "web",
                "--out-dir",
                "static/pkg",
            ])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(_) => bail!("wasm-pack finished with errors"),
            Err(_) => log::warn!(
                "wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts."
            ),
        }

        log::info!("Launching local server at http://{SERVE_ADDR}:{SERVE_PORT} …");
        let status = Command::new("python3")
            .args([
                "-m",
                "http.server",
                SERVE_PORT,
                "--bind",
                SERVE_ADDR,
                "--directory",
                "static",
            ])
            .stdout(Stdio::null())
            .status()
            .context("failed to start http server (is python3 installed?)")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }

    struct PreviewArgs {
        out: String,
        width: u32,
        height: u32,
        time: f32,
        config: Option<String>,
    }

    fn parse_preview(args: &[String]) -> Result<PreviewArgs> {
        let mut parsed = PreviewArgs {
            out: String::new(),
            width: 960,
            height: 540,
            time: 0.0,
            config: None,
        };
        let mut it = args.iter();
        while let Some(arg) = it.next() {
            let mut value = |flag: &str| {
                it.next()
                    .cloned()
                    .ok_or_else(|| anyhow!("{flag} needs a value"))
            };
            match arg.as_str() {
                "--width" => parsed.width = value("--width")?.parse::<u32>().context("--width")?,
                "--height" => parsed.height = value("--height")?.parse::<u32>().context("--height")?,
                "--time" => parsed.time = value("--time")?.parse::<f32>().context("--time")?,
                "--config" => parsed.config = Some(value("--config")?),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                path => parsed.out = path.to_string(),
            }
        }
        if parsed.out.is_empty() {
            bail!("usage: preview <out.ppm> [--width N] [--height N] [--time S] [--config FILE]");
        }
        if parsed.width == 0 || parsed.height == 0 {
            bail!("preview size must be non-zero");
        }
        Ok(parsed)
    }

    fn preview(args: &[String]) -> Result<()> {
        let args = parse_preview(args)?;
        let config = match &args.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {path}"))?;
                LaserFlowConfig::from_json(&json).with_context(|| format!("parsing {path}"))?
            }
            None => LaserFlowConfig::default(),
        };

        log::info!(
            "rendering {}x{} at t={:.2}s to {}",
            args.width,
            args.height,
            args.time,
            args.out
        );
        let pixels = field::render_rgb8(args.width, args.height, args.time, &config);

        let file = File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
        let mut w = BufWriter::new(file);
        write!(w, "P6\n{} {}\n255\n", args.width, args.height)?;
        w.write_all(&pixels)?;
        w.flush()?;
        Ok(())
    }
}
