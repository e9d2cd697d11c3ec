use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "warpview",
    author,
    version,
    about = "Interactive image warp viewer",
    arg_required_else_help = false
)]
pub struct Cli {
    /// Image to load at startup; more can be dropped onto the window later.
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// TOML file overriding the spring and wave tuning constants.
    #[arg(long, value_name = "FILE")]
    pub tuning: Option<PathBuf>,

    /// Cap redraws at this frame rate instead of rendering every vsync.
    #[arg(long, value_name = "FPS", value_parser = parse_fps_cap)]
    pub fps_cap: Option<f32>,

    /// Present without waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,

    /// Initial window size (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_window_size)]
    pub window_size: Option<(u32, u32)>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_fps_cap(value: &str) -> Result<f32, String> {
    let trimmed = value.trim();
    let fps: f32 = trimmed
        .parse()
        .map_err(|_| format!("invalid frame rate '{trimmed}'"))?;
    if !fps.is_finite() || fps <= 0.0 {
        return Err(format!("frame rate must be positive, got '{trimmed}'"));
    }
    Ok(fps)
}

pub fn parse_window_size(value: &str) -> Result<(u32, u32), String> {
    let trimmed = value.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{trimmed}'"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("window size must be non-zero, got '{trimmed}'"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_window_size_variants() {
        assert_eq!(parse_window_size("1280x720"), Ok((1280, 720)));
        assert_eq!(parse_window_size(" 640 X 480 "), Ok((640, 480)));
        assert!(parse_window_size("1280").is_err());
        assert!(parse_window_size("0x720").is_err());
        assert!(parse_window_size("1280xbroad").is_err());
    }

    #[test]
    fn parses_fps_cap() {
        assert_eq!(parse_fps_cap("30"), Ok(30.0));
        assert_eq!(parse_fps_cap("59.94"), Ok(59.94));
        assert!(parse_fps_cap("0").is_err());
        assert!(parse_fps_cap("-5").is_err());
        assert!(parse_fps_cap("fast").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::parse_from([
            "warpview",
            "photo.png",
            "--tuning",
            "tuning.toml",
            "--fps-cap",
            "30",
            "--no-vsync",
            "--window-size",
            "800x600",
        ]);
        assert_eq!(cli.image.as_deref(), Some(std::path::Path::new("photo.png")));
        assert_eq!(
            cli.tuning.as_deref(),
            Some(std::path::Path::new("tuning.toml"))
        );
        assert_eq!(cli.fps_cap, Some(30.0));
        assert!(cli.no_vsync);
        assert_eq!(cli.window_size, Some((800, 600)));
    }

    #[test]
    fn defaults_when_no_arguments() {
        let cli = Cli::parse_from(["warpview"]);
        assert!(cli.image.is_none());
        assert!(cli.tuning.is_none());
        assert!(cli.fps_cap.is_none());
        assert!(!cli.no_vsync);
        assert!(cli.window_size.is_none());
    }
}
